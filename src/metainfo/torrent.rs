use super::error::MetainfoError;
use super::fields::{self, as_text};
use super::info_hash::InfoHash;
use super::magnet::MagnetLink;
use crate::bencode::{decode_with_limits, DecodeLimits, Dict, Value};
use crate::constants::{PIECE_HASH_LEN, UNKNOWN_NAME, UNKNOWN_PATH};
use bytes::Bytes;
use std::collections::HashSet;

/// Metadata extracted from a `.torrent` file.
///
/// Extraction is lenient: only a non-dictionary root or a missing/invalid
/// `info` dictionary is an error. Every other field falls back to a default
/// when it is absent or has the wrong type.
///
/// # Examples
///
/// ```
/// use torrent_peek::metainfo::Metainfo;
///
/// let data = b"d8:announce27:http://tracker.example.com/4:infod\
///              6:lengthi12345e4:name9:hello.txt12:piece lengthi16384e\
///              6:pieces20:aaaaaaaaaaaaaaaaaaaaee";
/// let torrent = Metainfo::from_bytes(data).unwrap();
///
/// assert_eq!(torrent.info.name, "hello.txt");
/// assert_eq!(torrent.info.total_length, 12345);
/// assert_eq!(torrent.info.piece_count, 1);
/// assert!(!torrent.info.multi_file);
/// assert!(torrent.magnet_link.unwrap().starts_with("magnet:?xt=urn:btih:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metainfo {
    /// The info dictionary containing file and piece information.
    pub info: Info,
    /// SHA-1 of the raw info dictionary bytes.
    pub info_hash: Option<InfoHash>,
    /// Primary tracker URL.
    pub announce: Option<String>,
    /// Tracker tiers ([BEP-12](http://bittorrent.org/beps/bep_0012.html)).
    /// Empty tiers are dropped.
    pub announce_list: Vec<Vec<String>>,
    /// Unix timestamp when the torrent was created.
    pub creation_date: Option<i64>,
    pub comment: Option<String>,
    /// Name/version of the program that created the torrent.
    pub created_by: Option<String>,
    /// Magnet URI, present exactly when `info_hash` is.
    pub magnet_link: Option<String>,
    raw_info: Option<Bytes>,
}

/// The info dictionary from a torrent file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    /// Suggested name for the file or directory.
    pub name: String,
    /// True when the info dictionary carries a `files` list.
    pub multi_file: bool,
    /// Number of bytes per piece.
    pub piece_length: u64,
    /// Number of 20-byte hashes in `pieces`.
    pub piece_count: usize,
    /// Files in the torrent. Single-file torrents have exactly one entry.
    pub files: Vec<File>,
    /// Total size of all files combined.
    pub total_length: u64,
    /// If true, clients should only use trackers in the metainfo (no DHT/PEX).
    pub private: bool,
}

/// A file within a torrent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// `/`-joined path relative to the torrent root; the torrent name for
    /// single-file torrents.
    pub path: String,
    /// Size of the file in bytes.
    pub length: u64,
    /// Byte offset within the torrent's piece data.
    pub offset: u64,
}

impl Metainfo {
    /// Parses a torrent file from raw bytes using default decode limits.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not valid bencode, or trips a decode limit
    /// - The root value is not a dictionary
    /// - The `info` key is missing or is not a dictionary
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        Self::from_bytes_with_limits(data, DecodeLimits::default())
    }

    /// Parses a torrent file from raw bytes under explicit decode limits.
    pub fn from_bytes_with_limits(
        data: &[u8],
        limits: DecodeLimits,
    ) -> Result<Self, MetainfoError> {
        let decoded = decode_with_limits(data, limits)?;
        let dict = decoded
            .value
            .as_dict()
            .ok_or(MetainfoError::RootNotDictionary)?;

        let announce = fields::text(dict, "announce");
        let created_by = fields::text(dict, "created by");
        let comment = fields::text(dict, "comment");
        let creation_date = fields::integer(dict, "creation date");
        let announce_list = parse_tiers(dict);

        let info_dict = fields::dict(dict, "info").ok_or(MetainfoError::InvalidInfo)?;
        let info = parse_info(info_dict);

        let raw_info = decoded.info_bytes(data).map(Bytes::copy_from_slice);
        let info_hash = raw_info.as_deref().map(InfoHash::from_info_bytes);
        if info_hash.is_none() {
            tracing::debug!("info dictionary byte range unavailable, skipping info hash");
        }

        let mut metainfo = Self {
            info,
            info_hash,
            announce,
            announce_list,
            creation_date,
            comment,
            created_by,
            magnet_link: None,
            raw_info,
        };
        metainfo.magnet_link = metainfo.magnet().map(|m| m.to_uri());

        tracing::debug!(
            name = %metainfo.info.name,
            files = metainfo.info.files.len(),
            total_length = metainfo.info.total_length,
            info_hash = ?metainfo.info_hash,
            "parsed torrent metainfo"
        );

        Ok(metainfo)
    }

    /// Returns the raw bencoded info dictionary, exactly as it appeared in the input.
    pub fn raw_info(&self) -> Option<&Bytes> {
        self.raw_info.as_ref()
    }

    /// Info hash as 40 lowercase hex characters.
    pub fn info_hash_hex(&self) -> Option<String> {
        self.info_hash.map(|h| h.to_hex())
    }

    /// Returns all tracker URLs from both `announce` and `announce-list`.
    ///
    /// The primary tracker (from `announce`) comes first, followed by
    /// trackers from `announce-list` tier by tier. Duplicates are removed,
    /// keeping the first occurrence.
    pub fn trackers(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut trackers = Vec::new();

        let all = self
            .announce
            .iter()
            .chain(self.announce_list.iter().flatten());
        for tracker in all {
            if seen.insert(tracker.as_str()) {
                trackers.push(tracker.clone());
            }
        }

        trackers
    }

    /// Builds the magnet link for this torrent, if the info hash is known.
    pub fn magnet(&self) -> Option<MagnetLink> {
        Some(MagnetLink {
            info_hash: self.info_hash?,
            display_name: Some(self.info.name.clone()),
            trackers: self.trackers(),
        })
    }
}

fn parse_tiers(dict: &Dict) -> Vec<Vec<String>> {
    let Some(tiers) = fields::list(dict, "announce-list") else {
        return Vec::new();
    };

    tiers
        .iter()
        .filter_map(Value::as_list)
        .map(|urls| urls.iter().filter_map(as_text).collect::<Vec<_>>())
        .filter(|tier| !tier.is_empty())
        .collect()
}

fn parse_info(dict: &Dict) -> Info {
    let name = fields::text(dict, "name").unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let piece_length = fields::unsigned(dict, "piece length");
    let piece_count = fields::bytes(dict, "pieces").map_or(0, |p| p.len() / PIECE_HASH_LEN);
    let private = fields::integer(dict, "private") == Some(1);

    let (multi_file, files) = match fields::list(dict, "files") {
        Some(entries) => (true, parse_files(entries)),
        None => {
            let file = File {
                path: name.clone(),
                length: fields::unsigned(dict, "length"),
                offset: 0,
            };
            (false, vec![file])
        }
    };

    let total_length = files
        .iter()
        .fold(0u64, |total, file| total.saturating_add(file.length));

    Info {
        name,
        multi_file,
        piece_length,
        piece_count,
        files,
        total_length,
        private,
    }
}

fn parse_files(entries: &[Value]) -> Vec<File> {
    let mut files = Vec::new();
    let mut offset = 0u64;

    for file_dict in entries.iter().filter_map(Value::as_dict) {
        let length = fields::unsigned(file_dict, "length");

        let path = match fields::list(file_dict, "path") {
            Some(segments) => segments
                .iter()
                .filter_map(as_text)
                .collect::<Vec<_>>()
                .join("/"),
            None => UNKNOWN_PATH.to_string(),
        };

        files.push(File {
            path,
            length,
            offset,
        });

        offset = offset.saturating_add(length);
    }

    files
}
