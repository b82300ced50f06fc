use serde_json::Value;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::types::Token;

/// Store slot a resource fetch writes into.
///
/// Each fetch operation owns exactly one slot. A slot is cleared while the
/// fetch is in flight and filled once the payload has arrived, so observers
/// never show stale data for a resource being reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceSlot {
    Me,
    Track,
    Artist,
    ArtistAlbums,
    Album,
    Playlist,
    LibraryPlaylists,
    LibraryArtists,
    LibraryAlbums,
    LibraryTracks,
    FeaturedPlaylists,
    Categories,
    Category,
    CategoryPlaylists,
    NewReleases,
}

/// Lifecycle events emitted towards the state store.
///
/// The consumer (UI layer, state store) receives these over the channel
/// created by [`EventSink::channel`] and reduces them into whatever state
/// shape it maintains. `Resource { data: None }` clears a slot;
/// `Resource { data: Some(..) }` fills it with the loaded payload.
#[derive(Debug, Clone)]
pub enum Event {
    AuthorizationGranted(Token),
    RemoveAuthorization,
    TokenRefreshing,
    TokenRefreshed(Token),
    Resource {
        slot: ResourceSlot,
        data: Option<Value>,
    },
}

/// Sending half of the event channel, shared by the credential manager and
/// the request pipeline.
///
/// Cloning is cheap; all clones feed the same receiver. Dispatching never
/// fails: if the observer has gone away the event is dropped, since the
/// client layer has no business outliving decisions of its consumer.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: UnboundedSender<Event>,
}

impl EventSink {
    /// Creates the event channel and returns the sink together with the
    /// receiving half handed to the consumer.
    pub fn channel() -> (Self, UnboundedReceiver<Event>) {
        let (tx, rx) = unbounded_channel();
        (EventSink { tx }, rx)
    }

    pub fn dispatch(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    /// Emits the clearing event for a slot (`data: None`).
    pub fn clear(&self, slot: ResourceSlot) {
        self.dispatch(Event::Resource { slot, data: None });
    }

    /// Emits the loaded event for a slot carrying the final payload.
    pub fn loaded(&self, slot: ResourceSlot, data: Value) {
        self.dispatch(Event::Resource {
            slot,
            data: Some(data),
        });
    }
}
