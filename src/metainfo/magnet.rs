use super::info_hash::InfoHash;
use std::fmt;

/// A magnet URI for a v1 torrent.
///
/// # Examples
///
/// ```
/// use torrent_peek::metainfo::{InfoHash, MagnetLink};
///
/// let magnet = MagnetLink {
///     info_hash: InfoHash::from_bytes([0xab; 20]),
///     display_name: Some("My File".into()),
///     trackers: vec!["http://tracker.example.com/announce".into()],
/// };
///
/// assert_eq!(
///     magnet.to_uri(),
///     "magnet:?xt=urn:btih:abababababababababababababababababababab\
///      &dn=My%20File&tr=http%3A%2F%2Ftracker.example.com%2Fannounce"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnetLink {
    pub info_hash: InfoHash,
    pub display_name: Option<String>,
    /// Tracker URLs, one `tr` parameter each, in this order.
    pub trackers: Vec<String>,
}

impl MagnetLink {
    /// Renders the URI. Name and trackers are percent-encoded; only RFC 3986
    /// unreserved characters pass through.
    pub fn to_uri(&self) -> String {
        let mut uri = format!("magnet:?xt=urn:btih:{}", self.info_hash.to_hex());

        if let Some(ref name) = self.display_name {
            uri.push_str("&dn=");
            uri.push_str(&urlencoding::encode(name));
        }

        for tracker in &self.trackers {
            uri.push_str("&tr=");
            uri.push_str(&urlencoding::encode(tracker));
        }

        uri
    }
}

impl fmt::Display for MagnetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}
