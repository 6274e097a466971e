use super::error::BencodeError;
use super::value::{Dict, Value};
use crate::constants::{MAX_DEPTH, MAX_ENTRIES, MAX_STRING_LEN};
use bytes::Bytes;
use std::ops::Range;

/// Bounds enforced while decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Deepest allowed value nesting; the root value sits at depth 1.
    pub max_depth: usize,
    /// Total list elements plus dictionary pairs allowed across one decode.
    pub max_entries: usize,
    /// Longest allowed byte string.
    pub max_string_len: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_entries: MAX_ENTRIES,
            max_string_len: MAX_STRING_LEN,
        }
    }
}

/// The result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The top-level value.
    pub value: Value,
    /// Byte range of the root dictionary's `info` value within the input, if any.
    pub info_range: Option<Range<usize>>,
}

impl Decoded {
    /// Returns the raw bytes of the root `info` value from the decoded input.
    ///
    /// `input` must be the buffer this value was decoded from.
    pub fn info_bytes<'a>(&self, input: &'a [u8]) -> Option<&'a [u8]> {
        let range = self.info_range.clone()?;
        if range.start < range.end {
            input.get(range)
        } else {
            None
        }
    }
}

/// Decodes one bencode value from the front of `data` using default limits.
///
/// Bytes after the first complete value are ignored.
///
/// # Errors
///
/// Fails on malformed or truncated input, and when any [`DecodeLimits`] bound
/// is exceeded.
///
/// # Examples
///
/// ```
/// use torrent_peek::bencode::decode;
///
/// let data = b"d8:announce3:url4:infod4:name1:xee";
/// let decoded = decode(data).unwrap();
/// assert_eq!(decoded.info_bytes(data), Some(b"d4:name1:xe".as_slice()));
/// ```
pub fn decode(data: &[u8]) -> Result<Decoded, BencodeError> {
    decode_with_limits(data, DecodeLimits::default())
}

/// Decodes one bencode value from the front of `data` under explicit limits.
pub fn decode_with_limits(data: &[u8], limits: DecodeLimits) -> Result<Decoded, BencodeError> {
    let mut decoder = Decoder {
        data,
        pos: 0,
        depth: 0,
        entries: 0,
        limits,
        info_range: None,
    };
    let value = decoder.decode_value()?;

    Ok(Decoded {
        value,
        info_range: decoder.info_range,
    })
}

/// Cursor and counters for a single decode call.
struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
    entries: usize,
    limits: DecodeLimits,
    info_range: Option<Range<usize>>,
}

impl Decoder<'_> {
    fn decode_value(&mut self) -> Result<Value, BencodeError> {
        let byte = self.peek().ok_or(BencodeError::UnexpectedEof(self.pos))?;

        self.depth += 1;
        if self.depth > self.limits.max_depth {
            tracing::trace!(pos = self.pos, "bencode nesting limit hit");
            return Err(BencodeError::NestingTooDeep(self.limits.max_depth));
        }

        let value = match byte {
            b'i' => self.decode_integer(),
            b'l' => self.decode_list(),
            b'd' => {
                let is_root = self.depth == 1;
                self.decode_dict(is_root)
            }
            b'0'..=b'9' => self.decode_bytes().map(Value::Bytes),
            byte => Err(BencodeError::UnexpectedByte {
                byte,
                pos: self.pos,
            }),
        };

        self.depth -= 1;
        value
    }

    fn decode_integer(&mut self) -> Result<Value, BencodeError> {
        self.pos += 1;
        let start = self.pos;
        let end = self
            .find(b'e')
            .ok_or(BencodeError::UnterminatedInteger(start))?;

        let data = self.data;
        let digits = &data[start..end];
        self.pos = end + 1;

        std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Value::Integer)
            .ok_or_else(|| BencodeError::InvalidInteger(String::from_utf8_lossy(digits).into()))
    }

    fn decode_bytes(&mut self) -> Result<Bytes, BencodeError> {
        let data = self.data;
        let start = self.pos;
        let colon = self.find(b':').ok_or(BencodeError::MissingColon(start))?;

        let len_text = String::from_utf8_lossy(&data[start..colon]);
        let len: i64 = len_text
            .parse()
            .map_err(|_| BencodeError::InvalidStringLength(len_text.to_string()))?;

        let len = usize::try_from(len)
            .ok()
            .filter(|&len| len <= self.limits.max_string_len)
            .ok_or_else(|| {
                tracing::trace!(len, "bencode string length rejected");
                BencodeError::StringLengthOutOfBounds(len)
            })?;

        self.pos = colon + 1;
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= data.len())
            .ok_or(BencodeError::TruncatedString { pos: self.pos, len })?;

        let bytes = Bytes::copy_from_slice(&data[self.pos..end]);
        self.pos = end;
        Ok(bytes)
    }

    fn decode_list(&mut self) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut list = Vec::new();

        while self.peek().is_some_and(|b| b != b'e') {
            self.count_entry()?;
            list.push(self.decode_value()?);
        }

        if self.peek().is_none() {
            return Err(BencodeError::UnterminatedList);
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn decode_dict(&mut self, is_root: bool) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut dict = Dict::new();

        while self.peek().is_some_and(|b| b != b'e') {
            self.count_entry()?;

            let key = self.decode_bytes()?;
            let key = String::from_utf8_lossy(&key).into_owned();

            let value_start = self.pos;
            let value = self.decode_value()?;
            if is_root && key == "info" {
                self.info_range = Some(value_start..self.pos);
            }

            dict.insert(key, value);
        }

        if self.peek().is_none() {
            return Err(BencodeError::UnterminatedDict);
        }

        self.pos += 1;
        Ok(Value::Dict(dict))
    }

    fn count_entry(&mut self) -> Result<(), BencodeError> {
        self.entries += 1;
        if self.entries > self.limits.max_entries {
            tracing::trace!(pos = self.pos, "bencode entry limit hit");
            return Err(BencodeError::TooManyEntries(self.limits.max_entries));
        }
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn find(&self, needle: u8) -> Option<usize> {
        self.data[self.pos..]
            .iter()
            .position(|&b| b == needle)
            .map(|offset| self.pos + offset)
    }
}
