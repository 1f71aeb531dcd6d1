use crate::error::{Error, Result};
use crate::schema::Tag;

/// Given the index just past a `ListStart`, returns the tags nested in that
/// list (excluding the matching `ListEnd`) and the index just past the
/// matching `ListEnd`, where traversal of the enclosing schema resumes.
///
/// ```text
/// tags:         f [ i [ s ] ] b
/// index:        0 1 2 3 4 5 6 7
/// after_start:      ^ 2
/// returns:      ([i [ s ]], 7)
/// ```
pub fn extract_sub_schema(tags: &[Tag], after_start: usize) -> Result<(&[Tag], usize)> {
    let mut nested = 0usize;
    for (idx, tag) in tags.iter().enumerate().skip(after_start) {
        match tag {
            Tag::ListStart => nested += 1,
            Tag::ListEnd if nested == 0 => return Ok((&tags[after_start..idx], idx + 1)),
            Tag::ListEnd => nested -= 1,
            _ => {}
        }
    }
    Err(Error::SchemaMalformed {
        index: after_start.saturating_sub(1),
        reason: "ListStart without matching ListEnd",
    })
}

/// Validates bracket balance, nesting depth, and non-empty list shapes in one pass.
///
/// Returns, for each tag index, the index of the matching `ListEnd` if the
/// tag is a `ListStart`, and `None` otherwise.
pub(crate) fn match_brackets(tags: &[Tag], max_depth: usize) -> Result<Vec<Option<usize>>> {
    let mut list_ends = vec![None; tags.len()];
    let mut open_starts: Vec<usize> = vec![];

    for (idx, tag) in tags.iter().enumerate() {
        match tag {
            Tag::ListStart => {
                open_starts.push(idx);
                if open_starts.len() > max_depth {
                    return Err(Error::SchemaTooDeep {
                        depth: open_starts.len(),
                        max: max_depth,
                    });
                }
            }
            Tag::ListEnd => match open_starts.pop() {
                /* Every list element occupies at least one byte on the wire. */
                Some(start) if start + 1 == idx => {
                    return Err(Error::SchemaMalformed {
                        index: start,
                        reason: "List has no element fields",
                    })
                }
                Some(start) => list_ends[start] = Some(idx),
                None => {
                    return Err(Error::SchemaMalformed {
                        index: idx,
                        reason: "ListEnd without matching ListStart",
                    })
                }
            },
            _ => {}
        }
    }

    if let Some(&start) = open_starts.first() {
        return Err(Error::SchemaMalformed {
            index: start,
            reason: "ListStart without matching ListEnd",
        });
    }

    Ok(list_ends)
}
