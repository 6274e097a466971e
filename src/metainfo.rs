//! Torrent metainfo extraction ([BEP-3]).
//!
//! This module turns the raw bytes of a `.torrent` file into a [`Metainfo`]
//! record: name, files, trackers, piece layout, info hash and magnet link.
//!
//! # Overview
//!
//! Extraction runs in one pass over the decoded tree:
//! - The root must be a dictionary, and its `info` entry must be one too.
//!   Anything else is a [`MetainfoError`].
//! - All other fields are read leniently. Absent or mistyped values fall back
//!   to defaults, because real-world torrents often bend the format.
//! - The info hash is the SHA-1 of the `info` value's bytes exactly as they
//!   appear in the file, never of a re-encoding.
//!
//! Text fields (names, paths, trackers, comments) are decoded as UTF-8 when
//! valid and as Latin-1 otherwise; see [`decode_text`].
//!
//! # Examples
//!
//! ```no_run
//! use torrent_peek::metainfo::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Metainfo::from_bytes(&data)?;
//!
//! println!("Name: {}", torrent.info.name);
//! println!("Total size: {} bytes", torrent.info.total_length);
//! println!("Pieces: {} x {} bytes", torrent.info.piece_count, torrent.info.piece_length);
//!
//! for file in &torrent.info.files {
//!     println!("  {} ({} bytes)", file.path, file.length);
//! }
//!
//! if let Some(magnet) = &torrent.magnet_link {
//!     println!("Magnet: {}", magnet);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Torrent Structure
//!
//! - **info** - Core torrent metadata (hashed to create the info hash)
//!   - `name` - Suggested file/directory name
//!   - `piece length` - Size of each piece in bytes
//!   - `pieces` - Concatenated SHA1 hashes of each piece
//!   - `length` - Total size (single-file) OR `files` list (multi-file)
//!   - `private` - 1 if peers should only come from the trackers
//! - **announce** - Primary tracker URL
//! - **announce-list** - Additional tracker tiers (BEP-12)
//! - **creation date** - Unix timestamp when created
//! - **comment** - Optional comment
//! - **created by** - Client that created the torrent
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod fields;
mod info_hash;
mod magnet;
mod torrent;

pub use error::MetainfoError;
pub use fields::decode_text;
pub use info_hash::InfoHash;
pub use magnet::MagnetLink;
pub use torrent::{File, Info, Metainfo};
