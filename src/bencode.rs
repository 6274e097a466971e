//! Bencode decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! The decoder is a permissive reader: dictionary keys need not be sorted,
//! duplicate keys overwrite earlier values, and bytes after the first complete
//! value are left unread. It is also hardened against hostile input through
//! [`DecodeLimits`]: nesting depth, total entry count, and byte-string length
//! are all bounded.
//!
//! # Examples
//!
//! ```
//! use torrent_peek::bencode::{decode, Value};
//!
//! let decoded = decode(b"l4:spami42ee").unwrap();
//! let list = decoded.value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list[1], Value::Integer(42));
//!
//! let decoded = decode(b"d3:foo3:bare").unwrap();
//! let foo = decoded.value.get("foo").unwrap();
//! assert_eq!(foo.as_bytes().map(|b| b.as_ref()), Some(b"bar".as_slice()));
//! ```
//!
//! ## Locating the info dictionary
//!
//! When the root value is a dictionary, the decoder records where the value of
//! its `info` key sits in the input. Hashing that exact slice yields the info
//! hash, whatever encoding quirks the file carries.
//!
//! ```
//! use torrent_peek::bencode::decode;
//!
//! let data = b"d4:infod6:lengthi1eee";
//! let decoded = decode(data).unwrap();
//! assert_eq!(decoded.info_range, Some(7..20));
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
#[cfg(test)]
pub(crate) mod encode;
mod error;
mod value;

pub use decode::{decode, decode_with_limits, DecodeLimits, Decoded};
pub use error::BencodeError;
pub use value::{Dict, Value};
