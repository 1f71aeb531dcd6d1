use crate::error::{Error, Result};
use crate::schema::{brackets, Tag};
use tracing::debug;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SchemaLimits {
    /// Deepest allowed list nesting. Bounds recursion in the walkers.
    pub max_depth: usize,
    /// Largest element count a decoded list may declare.
    pub max_list_len: usize,
}
impl Default for SchemaLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_list_len: 1 << 24,
        }
    }
}

/// A validated, immutable tag sequence.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Schema {
    tags: Vec<Tag>,
    list_ends: Vec<Option<usize>>,
    limits: SchemaLimits,
}

impl Schema {
    pub fn new(tags: Vec<Tag>) -> Result<Self> {
        Self::with_limits(tags, SchemaLimits::default())
    }

    pub fn with_limits(tags: Vec<Tag>, limits: SchemaLimits) -> Result<Self> {
        let list_ends = match brackets::match_brackets(&tags, limits.max_depth) {
            Ok(list_ends) => list_ends,
            Err(e) => {
                debug!(tags_len = tags.len(), error = %e, "Rejected schema.");
                return Err(e);
            }
        };
        Ok(Self {
            tags,
            list_ends,
            limits,
        })
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn limits(&self) -> &SchemaLimits {
        &self.limits
    }

    /// The whole schema, as the shape of a top-level record.
    pub fn root(&self) -> SubSchema<'_> {
        SubSchema {
            schema: self,
            lo: 0,
            hi: self.tags.len(),
        }
    }

    /// Cached counterpart of [`brackets::extract_sub_schema`].
    ///
    /// `after_start` is the index just past a `ListStart`. Returns the list's
    /// element shape and the index just past the matching `ListEnd`.
    pub fn sub_schema(&self, after_start: usize) -> Result<(SubSchema<'_>, usize)> {
        let start = after_start.wrapping_sub(1);
        match self.list_ends.get(start).copied().flatten() {
            Some(end) => {
                let sub = SubSchema {
                    schema: self,
                    lo: after_start,
                    hi: end,
                };
                Ok((sub, end + 1))
            }
            None => Err(Error::SchemaMalformed {
                index: start,
                reason: "Not a ListStart",
            }),
        }
    }
}

/// A contiguous, balanced window `[lo, hi)` of a [`Schema`].
#[derive(Clone, Copy, Debug)]
pub struct SubSchema<'s> {
    schema: &'s Schema,
    lo: usize,
    hi: usize,
}

impl<'s> SubSchema<'s> {
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn tags(&self) -> &'s [Tag] {
        &self.schema.tags[self.lo..self.hi]
    }

    /// Index, within the whole schema, of the first tag of this window.
    pub fn start(&self) -> usize {
        self.lo
    }

    /// Index, within the whole schema, just past this window.
    pub fn end(&self) -> usize {
        self.hi
    }

    /// Top-level fields of this window, with nested lists folded into
    /// single [`Entry::List`] items.
    pub fn entries(&self) -> Entries<'s> {
        Entries {
            schema: self.schema,
            idx: self.lo,
            hi: self.hi,
        }
    }

    pub fn field_count(&self) -> usize {
        self.entries().count()
    }

    /// The fewest bytes one record of this shape occupies on the wire.
    pub fn min_encoded_len(&self) -> usize {
        self.entries().map(|(_, entry)| entry.tag().min_wire_len()).sum()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Entry<'s> {
    Scalar(Tag),
    List(SubSchema<'s>),
}
impl<'s> Entry<'s> {
    pub fn tag(&self) -> Tag {
        match self {
            Entry::Scalar(tag) => *tag,
            Entry::List(_) => Tag::ListStart,
        }
    }
}

/// Yields `(tag index, entry)` pairs.
pub struct Entries<'s> {
    schema: &'s Schema,
    idx: usize,
    hi: usize,
}
impl<'s> Iterator for Entries<'s> {
    type Item = (usize, Entry<'s>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.hi {
            return None;
        }
        let idx = self.idx;
        match self.schema.tags[idx] {
            Tag::ListStart => {
                let (sub, resume) = self.schema.sub_schema(idx + 1).ok()?;
                self.idx = resume;
                Some((idx, Entry::List(sub)))
            }
            tag => {
                self.idx += 1;
                Some((idx, Entry::Scalar(tag)))
            }
        }
    }
}
