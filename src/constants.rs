//! Decoder safety limits.
//!
//! A `.torrent` file is untrusted input. These bounds cap the work and memory a
//! single decode may spend, so that every input (including adversarial ones)
//! either decodes or fails in bounded time.

// ============================================================================
// Decoder limits
// ============================================================================

/// Maximum nesting depth of bencode values. The root value is at depth 1.
pub const MAX_DEPTH: usize = 64;

/// Maximum number of list elements plus dictionary pairs in one decode.
pub const MAX_ENTRIES: usize = 100_000;

/// Maximum length of a single byte string (50 MiB).
pub const MAX_STRING_LEN: usize = 50 * 1024 * 1024;

// ============================================================================
// Metainfo
// ============================================================================

/// Size of one SHA-1 piece hash inside the `pieces` string.
pub const PIECE_HASH_LEN: usize = 20;

/// Name reported when the info dictionary has no usable `name`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Path reported for a file entry with no usable `path` list.
pub const UNKNOWN_PATH: &str = "unknown";
