use serde_json::{Value, json};

use super::SpotifyClient;
use crate::{
    Res,
    error::Error,
    events::ResourceSlot,
    uri::{self, UriType},
};

impl SpotifyClient {
    /// Retrieves a single album by its Spotify URI.
    ///
    /// After the album has loaded, a lightweight `{name, uri}` reference to
    /// the parent album is injected into every item of `tracks.items`, so
    /// each track carries its album context without a separate fetch and
    /// track objects stay consistent across endpoints.
    ///
    /// # Arguments
    ///
    /// * `uri` - Album address of the form `spotify:album:<id>`
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Value)` - The album payload with back-referenced tracks
    /// - `Err(Error::InvalidUri)` - The address carries no album id
    /// - `Err(Error::AuthFailure)` - No valid token could be obtained
    /// - `Err(Error::RequestFailure)` - The API or the transport failed
    pub async fn get_album(&self, uri: &str) -> Res<Value> {
        self.clear(ResourceSlot::Album);

        let id = uri::resource_id(UriType::Album, uri).ok_or_else(|| Error::invalid_uri(uri))?;

        let mut data = self.get(&format!("albums/{}", id)).await?;

        // inject the parent album reference into each track
        let parent = match (data.get("name"), data.get("uri")) {
            (Some(name), Some(album_uri)) => Some(json!({ "name": name, "uri": album_uri })),
            _ => None,
        };
        if let Some(parent) = parent {
            if let Some(items) = data
                .pointer_mut("/tracks/items")
                .and_then(Value::as_array_mut)
            {
                for track in items.iter_mut() {
                    if let Some(fields) = track.as_object_mut() {
                        fields.insert("album".to_string(), parent.clone());
                    }
                }
            }
        }

        self.loaded(ResourceSlot::Album, &data);
        Ok(data)
    }
}
