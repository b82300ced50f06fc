//! Spotify URI handling.
//!
//! Resources are addressed by colon-separated URIs (`spotify:track:<id>`,
//! `spotify:user:<userid>:playlist:<playlistid>`, ...). Extraction is keyed
//! by the expected resource kind and fails closed: if the segment markers for
//! that kind are not present, there is no id, never a wrong one.

/// Kind of asset a Spotify URI addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriType {
    Track,
    Artist,
    Album,
    Playlist,
    User,
}

/// Classifies a URI into its asset kind, or `None` for anything that is not
/// a recognized Spotify address form.
pub fn uri_type(uri: &str) -> Option<UriType> {
    let segments: Vec<&str> = uri.split(':').collect();
    match segments.as_slice() {
        ["spotify", "track", _] => Some(UriType::Track),
        ["spotify", "artist", _] => Some(UriType::Artist),
        ["spotify", "album", _] => Some(UriType::Album),
        ["spotify", "user", _, "playlist", _] => Some(UriType::Playlist),
        ["spotify", "user", _] => Some(UriType::User),
        _ => None,
    }
}

/// Extracts the id carried by `uri` for the declared resource kind.
///
/// The namespace segment is not interpreted; only the segment markers for
/// the requested kind are. A mismatched kind yields `None`.
pub fn resource_id(kind: UriType, uri: &str) -> Option<&str> {
    let segments: Vec<&str> = uri.split(':').collect();
    match (kind, segments.as_slice()) {
        (UriType::Track, [_, "track", id]) => Some(*id),
        (UriType::Artist, [_, "artist", id]) => Some(*id),
        (UriType::Album, [_, "album", id]) => Some(*id),
        (UriType::Playlist, [_, _, _, "playlist", id]) => Some(*id),
        (UriType::User, [_, "user", id, ..]) => Some(*id),
        _ => None,
    }
}
