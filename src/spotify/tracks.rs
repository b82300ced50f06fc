use serde_json::Value;

use super::SpotifyClient;
use crate::{
    Res,
    error::Error,
    events::ResourceSlot,
    uri::{self, UriType},
};

impl SpotifyClient {
    /// Retrieves a single track by its Spotify URI.
    ///
    /// Clears the track slot before the request goes out and fills it with
    /// the payload once the track has loaded, so observers of the event
    /// stream never render a stale track while a new one is in flight.
    ///
    /// # Arguments
    ///
    /// * `uri` - Track address of the form `spotify:track:<id>`
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Value)` - The track payload as returned by the API
    /// - `Err(Error::InvalidUri)` - The address carries no track id; nothing
    ///   was sent
    /// - `Err(Error::AuthFailure)` - No valid token could be obtained
    /// - `Err(Error::RequestFailure)` - The API or the transport failed
    ///
    /// # Example
    ///
    /// ```
    /// let track = client.get_track("spotify:track:1301WleyT98MSxVHPZCA6M").await?;
    /// println!("{}", track["name"]);
    /// ```
    pub async fn get_track(&self, uri: &str) -> Res<Value> {
        self.clear(ResourceSlot::Track);

        let id = uri::resource_id(UriType::Track, uri).ok_or_else(|| Error::invalid_uri(uri))?;

        let data = self.get(&format!("tracks/{}", id)).await?;
        self.loaded(ResourceSlot::Track, &data);
        Ok(data)
    }
}
