use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    #[error("Malformed schema at tag {index}: {reason}")]
    SchemaMalformed { index: usize, reason: &'static str },

    #[error("Schema nests lists {depth} deep; at most {max} allowed")]
    SchemaTooDeep { depth: usize, max: usize },

    #[error("Unknown tag {0:?}")]
    UnknownTag(String),

    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("Out of space: needed {needed} bytes, {remaining} remaining")]
    OutOfSpace { needed: usize, remaining: usize },

    #[error("Could not allocate {requested} list elements")]
    AllocationFailure { requested: usize },

    #[error("List of {len} elements exceeds the limit of {max}")]
    ListTooLong { len: usize, max: usize },

    #[error("Invalid length prefix {0}")]
    InvalidLength(i32),

    #[error("Invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("Length {0} does not fit an Int prefix")]
    LengthOverflow(usize),

    #[error("Record does not match schema at tag {index}: expected {expected}, found {found}")]
    ShapeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0} bytes left over after decoding")]
    TrailingBytes(usize),
}
