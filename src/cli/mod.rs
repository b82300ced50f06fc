//! Command-line front-end over the client layer.
//!
//! Each command builds the event channel and the shared credential manager,
//! runs one pipeline operation, and renders the result. The event stream the
//! library emits for its store consumer is drained and echoed so the fetch
//! lifecycle stays visible from the terminal.

mod auth;
mod browse;
mod get;
mod library;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    error,
    events::{Event, EventSink},
    info,
    management::TokenManager,
    spotify::SpotifyClient,
};

pub use auth::{grant, refresh, revoke, show};
pub use browse::{category, category_playlists, featured, new_releases};
pub use get::{album, artist, playlist, track};
pub use library::{library_albums, library_artists, library_playlists, library_tracks, me};

pub(crate) async fn client() -> (SpotifyClient, UnboundedReceiver<Event>) {
    let (events, store) = EventSink::channel();

    let tokens = match TokenManager::load(events.clone()).await {
        Ok(mgr) => mgr,
        Err(e) => {
            error!(
                "Failed to load credentials. Please run spotfetch auth grant\n Error: {}",
                e
            );
        }
    };

    let client = SpotifyClient::new(Arc::new(tokens), events);
    (client, store)
}

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Echoes the events a fetch produced, without their payloads.
pub(crate) fn drain_events(store: &mut UnboundedReceiver<Event>) {
    while let Ok(event) = store.try_recv() {
        match event {
            Event::Resource { slot, data: None } => info!("{:?} cleared", slot),
            Event::Resource { slot, data: Some(_) } => info!("{:?} loaded", slot),
            Event::AuthorizationGranted(_) => info!("Authorization granted"),
            Event::RemoveAuthorization => info!("Authorization removed"),
            Event::TokenRefreshing => info!("Token refreshing"),
            Event::TokenRefreshed(_) => info!("Token refreshed"),
        }
    }
}
