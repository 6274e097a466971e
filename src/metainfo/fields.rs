//! Lenient typed lookups into decoded dictionaries.
//!
//! A key that is absent or holds the wrong type reads as "not there". Callers
//! pick the default.

use bytes::Bytes;

use crate::bencode::{Dict, Value};

/// Interprets a byte string as human-readable text.
///
/// Valid UTF-8 is taken as is. Anything else is read as Latin-1, one character
/// per byte, so this never fails.
///
/// # Examples
///
/// ```
/// use torrent_peek::metainfo::decode_text;
///
/// assert_eq!(decode_text("héllo".as_bytes()), "héllo");
/// assert_eq!(decode_text(&[0xFF]), "ÿ");
/// ```
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().copied().map(char::from).collect(),
    }
}

/// Decodes a byte-string list element as text, skipping other types.
pub(super) fn as_text(value: &Value) -> Option<String> {
    value.as_bytes().map(|b| decode_text(b))
}

pub(super) fn text(dict: &Dict, key: &str) -> Option<String> {
    dict.get(key).and_then(as_text)
}

pub(super) fn integer(dict: &Dict, key: &str) -> Option<i64> {
    dict.get(key).and_then(Value::as_integer)
}

/// Reads a size-like integer. Missing, mistyped, or negative values read as 0.
pub(super) fn unsigned(dict: &Dict, key: &str) -> u64 {
    integer(dict, key)
        .and_then(|v| u64::try_from(v).ok())
        .unwrap_or(0)
}

pub(super) fn bytes<'a>(dict: &'a Dict, key: &str) -> Option<&'a Bytes> {
    dict.get(key).and_then(Value::as_bytes)
}

pub(super) fn list<'a>(dict: &'a Dict, key: &str) -> Option<&'a [Value]> {
    dict.get(key).and_then(Value::as_list)
}

pub(super) fn dict<'a>(dict: &'a Dict, key: &str) -> Option<&'a Dict> {
    dict.get(key).and_then(Value::as_dict)
}
