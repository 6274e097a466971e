use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when extracting torrent metadata.
///
/// Only structural problems fail extraction. Missing or mistyped optional
/// fields fall back to defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetainfoError {
    /// The input is not valid bencode.
    #[error(transparent)]
    Bencode(#[from] BencodeError),

    /// The top-level value is not a dictionary.
    #[error("root element is not a dictionary")]
    RootNotDictionary,

    /// The root dictionary has no `info` key, or its value is not a dictionary.
    #[error("missing or invalid info dictionary")]
    InvalidInfo,
}
