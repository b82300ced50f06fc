use serde_json::{Map, Value};

use super::SpotifyClient;
use crate::{
    Res,
    error::Error,
    events::ResourceSlot,
    uri::{self, UriType},
    utils,
};

impl SpotifyClient {
    /// Retrieves a full artist record assembled from three concurrent
    /// sub-requests.
    ///
    /// The core artist info, the top tracks for the configured country, and
    /// the related artists are fetched concurrently and merged into one
    /// record by shallow field overwrite; the related-artists body lands
    /// under its own `related_artists` key rather than at the top level, so
    /// the merged field sets stay disjoint. The loaded event fires only once
    /// all three sub-requests have settled.
    ///
    /// The artist's discography is kicked off alongside as an independent
    /// fetch with its own slot and events; its outcome does not influence
    /// the aggregate.
    ///
    /// # Arguments
    ///
    /// * `uri` - Artist address of the form `spotify:artist:<id>`
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Value)` - The merged artist record
    /// - `Err(Error::InvalidUri)` - The address carries no artist id
    /// - `Err(Error::AuthFailure)` - No valid token could be obtained
    /// - `Err(Error::RequestFailure)` - A sub-request failed; the aggregate
    ///   reports it instead of leaving the slot cleared forever
    ///
    /// # Example
    ///
    /// ```
    /// let artist = client.get_artist("spotify:artist:4Z8W4fKeB5YxbusRsdQVPb").await?;
    /// println!("{} related artists", artist["related_artists"].as_array().unwrap().len());
    /// ```
    pub async fn get_artist(&self, uri: &str) -> Res<Value> {
        self.clear(ResourceSlot::Artist);

        let id = uri::resource_id(UriType::Artist, uri)
            .ok_or_else(|| Error::invalid_uri(uri))?
            .to_string();

        // the discography loads independently of the aggregate
        let albums_client = self.clone();
        let albums_uri = uri.to_string();
        tokio::spawn(async move {
            let _ = albums_client.get_artist_albums(&albums_uri).await;
        });

        let core_url = format!("artists/{}", id);
        let top_url = format!("artists/{}/top-tracks?country={}", id, self.country());
        let related_url = format!("artists/{}/related-artists", id);
        let (core, top, related) = tokio::join!(
            self.get(&core_url),
            self.get(&top_url),
            self.get(&related_url),
        );

        // every branch has settled at this point; a failed one surfaces
        let core = core?;
        let top = top?;
        let related = related?;

        let mut artist = Map::new();
        utils::merge_fields(&mut artist, core);
        utils::merge_fields(&mut artist, top);
        artist.insert(
            "related_artists".to_string(),
            related
                .get("artists")
                .cloned()
                .unwrap_or(Value::Array(Vec::new())),
        );

        let data = Value::Object(artist);
        self.loaded(ResourceSlot::Artist, &data);
        Ok(data)
    }

    /// Retrieves an artist's albums.
    ///
    /// Runs as its own fetch with its own slot; [`Self::get_artist`] starts
    /// it alongside the aggregate so the discography arrives without the
    /// consumer asking twice.
    pub async fn get_artist_albums(&self, uri: &str) -> Res<Value> {
        self.clear(ResourceSlot::ArtistAlbums);

        let id = uri::resource_id(UriType::Artist, uri).ok_or_else(|| Error::invalid_uri(uri))?;

        let data = self.get(&format!("artists/{}/albums", id)).await?;
        self.loaded(ResourceSlot::ArtistAlbums, &data);
        Ok(data)
    }
}
