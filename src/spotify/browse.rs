//! Discovery fetches: featured playlists, categories and new releases.

use serde_json::Value;

use super::SpotifyClient;
use crate::{Res, events::ResourceSlot, utils};

impl SpotifyClient {
    /// Retrieves the playlists featured for the current moment.
    ///
    /// The endpoint tailors its answer to a point in time, passed as the
    /// client's local wall clock rendered in the fixed-width
    /// `YYYY-MM-DDTHH:MM:SS` shape the API expects, together with the
    /// configured country.
    pub async fn get_featured_playlists(&self) -> Res<Value> {
        self.clear(ResourceSlot::FeaturedPlaylists);

        let endpoint = format!(
            "browse/featured-playlists?timestamp={}&country={}&limit=50",
            utils::browse_timestamp_now(),
            self.country()
        );
        let data = self.get(&endpoint).await?;
        self.loaded(ResourceSlot::FeaturedPlaylists, &data);
        Ok(data)
    }

    /// Retrieves the browse categories, unwrapped from their envelope.
    pub async fn get_categories(&self) -> Res<Value> {
        self.clear(ResourceSlot::Categories);

        let response = self.get("browse/categories?limit=50").await?;
        let data = response.get("categories").cloned().unwrap_or_default();
        self.loaded(ResourceSlot::Categories, &data);
        Ok(data)
    }

    /// Retrieves a single browse category.
    pub async fn get_category(&self, id: &str) -> Res<Value> {
        self.passthrough(ResourceSlot::Category, &format!("browse/categories/{}", id))
            .await
    }

    /// Retrieves the playlists of a browse category.
    pub async fn get_category_playlists(&self, id: &str) -> Res<Value> {
        self.clear(ResourceSlot::CategoryPlaylists);

        let response = self
            .get(&format!("browse/categories/{}/playlists?limit=50", id))
            .await?;
        let data = response.get("playlists").cloned().unwrap_or_default();
        self.loaded(ResourceSlot::CategoryPlaylists, &data);
        Ok(data)
    }

    /// Retrieves the new album releases for the configured country.
    pub async fn get_new_releases(&self) -> Res<Value> {
        self.clear(ResourceSlot::NewReleases);

        let response = self
            .get(&format!(
                "browse/new-releases?country={}&limit=50",
                self.country()
            ))
            .await?;
        let data = response.get("albums").cloned().unwrap_or_default();
        self.loaded(ResourceSlot::NewReleases, &data);
        Ok(data)
    }
}
