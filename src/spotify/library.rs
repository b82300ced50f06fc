//! Me-scoped fetches: the current user's profile and saved library.

use serde_json::Value;

use super::SpotifyClient;
use crate::{Res, events::ResourceSlot};

impl SpotifyClient {
    /// Retrieves the current user's profile.
    pub async fn get_me(&self) -> Res<Value> {
        self.passthrough(ResourceSlot::Me, "me").await
    }

    /// Retrieves the playlists saved in the user's library.
    pub async fn get_library_playlists(&self) -> Res<Value> {
        self.passthrough(ResourceSlot::LibraryPlaylists, "me/playlists")
            .await
    }

    /// Retrieves the artists the user follows.
    pub async fn get_library_artists(&self) -> Res<Value> {
        self.passthrough(ResourceSlot::LibraryArtists, "me/following?type=artist")
            .await
    }

    /// Retrieves the albums saved in the user's library.
    pub async fn get_library_albums(&self) -> Res<Value> {
        self.passthrough(ResourceSlot::LibraryAlbums, "me/albums")
            .await
    }

    /// Retrieves the tracks saved in the user's library.
    pub async fn get_library_tracks(&self) -> Res<Value> {
        self.passthrough(ResourceSlot::LibraryTracks, "me/tracks?limit=50")
            .await
    }
}
