//! # Spotify Integration Module
//!
//! This module implements the request pipeline against the Spotify Web API.
//! It is the layer between application logic and the remote catalog: it
//! resolves resource addresses, obtains a valid bearer token from the
//! credential manager, issues the HTTP round-trips, post-processes payloads,
//! and emits store lifecycle events for every fetch.
//!
//! ## Architecture
//!
//! ```text
//! Consumer (CLI, state store)
//!          ↓
//! SpotifyClient (this module)
//!     ├── Tracks (single track lookups)
//!     ├── Artists (aggregate profile, discography)
//!     ├── Albums (album with track back-references)
//!     ├── Playlists (user playlists)
//!     ├── Library (me-scoped collections)
//!     └── Browse (featured, categories, new releases)
//!          ↓
//! TokenManager (bearer token, single-flight refresh)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Fetch Lifecycle
//!
//! Every fetch operation follows the same contract:
//!
//! 1. Emit the clearing event for the resource's slot, so observers never
//!    show stale data while the fetch is in flight.
//! 2. Resolve the resource id from its URI; an unparseable address fails the
//!    call without sending anything.
//! 3. Obtain a valid access token from the credential manager (which may
//!    suspend on a refresh round-trip).
//! 4. Issue the request with an `Authorization: Bearer` header.
//! 5. Post-process the payload where the resource calls for it.
//! 6. Emit the loaded event carrying the final payload.
//!
//! Failures are propagated to the caller and never retried here; the
//! consumer decides what a failed fetch means for the user.
//!
//! ## Aggregate Fetches
//!
//! An artist profile is assembled from three concurrent sub-requests (core
//! info, top tracks, related artists). The loaded event only fires once all
//! three have settled, and a failed branch surfaces as an error instead of
//! leaving the slot cleared forever.
//!
//! ## Error Types
//!
//! All operations return [`crate::Res`] with the crate-wide error taxonomy:
//! invalid addresses never hit the network, authorization failures come from
//! the credential manager, and request failures carry endpoint and method
//! context.

pub mod albums;
pub mod artists;
pub mod browse;
pub mod library;
pub mod playlists;
pub mod tracks;

use std::sync::Arc;

use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    Res, config,
    error::Error,
    events::{EventSink, ResourceSlot},
    management::TokenManager,
    warning,
};

/// Authenticated request pipeline against the Spotify Web API.
///
/// Cheap to clone: clones share the credential manager and the event
/// channel, so concurrent fetches cooperate on one token lifecycle.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    tokens: Arc<TokenManager>,
    events: EventSink,
    api_url: String,
    country: String,
}

impl SpotifyClient {
    pub fn new(tokens: Arc<TokenManager>, events: EventSink) -> Self {
        SpotifyClient {
            http: Client::new(),
            tokens,
            events,
            api_url: config::spotify_apiurl(),
            country: config::spotify_country(),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub(crate) fn country(&self) -> &str {
        &self.country
    }

    pub(crate) fn clear(&self, slot: ResourceSlot) {
        self.events.clear(slot);
    }

    pub(crate) fn loaded(&self, slot: ResourceSlot, data: &Value) {
        self.events.loaded(slot, data.clone());
    }

    /// Issues a GET against the catalog API.
    pub(crate) async fn get(&self, endpoint: &str) -> Res<Value> {
        self.send_request(endpoint, Method::GET, None).await
    }

    // clear, fetch, load: the shared shape of every unprocessed fetch
    pub(crate) async fn passthrough(&self, slot: ResourceSlot, endpoint: &str) -> Res<Value> {
        self.clear(slot);
        let data = self.get(endpoint).await?;
        self.loaded(slot, &data);
        Ok(data)
    }

    /// Sends an authenticated request to the Spotify Web API.
    ///
    /// Obtains a currently-valid access token first, so the call suspends
    /// while an expired token is being refreshed. Resource fetches carry no
    /// client-side timeout of their own and are never retried; failures are
    /// logged with endpoint, method, and payload context and propagated.
    pub(crate) async fn send_request(
        &self,
        endpoint: &str,
        method: Method,
        data: Option<Value>,
    ) -> Res<Value> {
        let token = self.tokens.valid_token().await?;
        let url = format!("{}/{}", self.api_url, endpoint);

        let mut request = self.http.request(method.clone(), &url).bearer_auth(token);
        if let Some(body) = &data {
            request = request.json(body);
        }

        let sent = request
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        let response = match sent {
            Ok(resp) => resp,
            Err(e) => {
                warning!(
                    "Could not send request to {} [{}] payload={}: {}",
                    endpoint,
                    method,
                    serde_json::to_string(&data).unwrap_or_default(),
                    e
                );
                return Err(Error::RequestFailure {
                    endpoint: endpoint.to_string(),
                    method,
                    source: e,
                });
            }
        };

        match response.json::<Value>().await {
            Ok(body) => Ok(body),
            Err(e) => {
                warning!("Could not decode response from {}: {}", endpoint, e);
                Err(Error::RequestFailure {
                    endpoint: endpoint.to_string(),
                    method,
                    source: e,
                })
            }
        }
    }
}
