use thiserror::Error;

/// Reasons a bencode decode can fail.
///
/// Every variant is terminal for the decode call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    #[error("unexpected end of data at position {0}")]
    UnexpectedEof(usize),

    #[error("invalid bencode token 0x{byte:02x} at position {pos}")]
    UnexpectedByte { byte: u8, pos: usize },

    #[error("unterminated integer starting at {0}")]
    UnterminatedInteger(usize),

    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    #[error("missing ':' in byte string at {0}")]
    MissingColon(usize),

    #[error("invalid string length: {0}")]
    InvalidStringLength(String),

    #[error("string length out of bounds: {0}")]
    StringLengthOutOfBounds(i64),

    #[error("string data truncated at position {pos} (need {len} bytes)")]
    TruncatedString { pos: usize, len: usize },

    #[error("unterminated list")]
    UnterminatedList,

    #[error("unterminated dictionary")]
    UnterminatedDict,

    #[error("max nesting depth {0} exceeded")]
    NestingTooDeep(usize),

    #[error("max entry count {0} exceeded")]
    TooManyEntries(usize),
}
