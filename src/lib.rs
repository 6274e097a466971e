//! torrent-peek - read `.torrent` files safely
//!
//! A bencode decoder hardened for untrusted input, and a lenient extractor
//! that turns a `.torrent` file into display-ready metadata: name, files,
//! trackers, piece layout, info hash and magnet link.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding with depth, entry and size limits
//! - [`metainfo`] - Torrent metadata extraction, info hash, magnet links
//! - [`constants`] - Default decoder limits
//!
//! # Examples
//!
//! ```
//! use torrent_peek::Metainfo;
//!
//! let data = b"d4:infod6:lengthi1024e4:name8:file.bin12:piece lengthi16384eee";
//! let torrent = Metainfo::from_bytes(data).unwrap();
//!
//! assert_eq!(torrent.info.name, "file.bin");
//! assert_eq!(torrent.info.total_length, 1024);
//! assert_eq!(torrent.info_hash_hex().map(|h| h.len()), Some(40));
//! ```

pub mod bencode;
pub mod constants;
pub mod metainfo;

pub use bencode::{decode, decode_with_limits, BencodeError, DecodeLimits, Decoded, Dict, Value};
pub use metainfo::{decode_text, File, Info, InfoHash, MagnetLink, Metainfo, MetainfoError};
