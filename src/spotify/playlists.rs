use serde_json::Value;

use super::SpotifyClient;
use crate::{
    Res,
    error::Error,
    events::ResourceSlot,
    uri::{self, UriType},
};

impl SpotifyClient {
    /// Retrieves a single playlist by its nested Spotify URI.
    ///
    /// Playlist addresses carry both an owner and a playlist id
    /// (`spotify:user:<userid>:playlist:<playlistid>`); both must parse or
    /// the request is never sent. The configured country is passed as the
    /// `market` parameter so track availability matches the user's region.
    pub async fn get_playlist(&self, uri: &str) -> Res<Value> {
        self.clear(ResourceSlot::Playlist);

        let user_id = uri::resource_id(UriType::User, uri).ok_or_else(|| Error::invalid_uri(uri))?;
        let playlist_id =
            uri::resource_id(UriType::Playlist, uri).ok_or_else(|| Error::invalid_uri(uri))?;

        let endpoint = format!(
            "users/{}/playlists/{}?market={}",
            user_id,
            playlist_id,
            self.country()
        );
        let data = self.get(&endpoint).await?;
        self.loaded(ResourceSlot::Playlist, &data);
        Ok(data)
    }
}
