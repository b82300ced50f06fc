use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::{Value, json};
use spotfetch::{
    error::Error,
    events::{Event, EventSink, ResourceSlot},
    management::TokenManager,
    spotify::SpotifyClient,
    types::Token,
};
use tokio::sync::mpsc::UnboundedReceiver;

// Helper function to build a client with fresh credentials against a mock API
fn client(server: &MockServer) -> (SpotifyClient, UnboundedReceiver<Event>) {
    let (events, store) = EventSink::channel();

    let token = Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: String::new(),
        expires_in: 3600,
        obtained_at: chrono::Utc::now().timestamp() as u64,
    };
    let tokens = Arc::new(TokenManager::new(events.clone()).with_token(token));

    let client = SpotifyClient::new(tokens, events)
        .with_api_url(server.base_url())
        .with_country("NZ");
    (client, store)
}

// Helper function to collect the resource events emitted for one slot
fn resource_events(store: &mut UnboundedReceiver<Event>, slot: ResourceSlot) -> Vec<Option<Value>> {
    let mut seen = Vec::new();
    while let Ok(event) = store.try_recv() {
        if let Event::Resource { slot: s, data } = event {
            if s == slot {
                seen.push(data);
            }
        }
    }
    seen
}

#[tokio::test]
async fn track_fetch_clears_then_loads() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/tracks/123")
                .header("authorization", "Bearer access");
            then.status(200).json_body(json!({
                "name": "Aenema",
                "uri": "spotify:track:123"
            }));
        })
        .await;

    let (client, mut store) = client(&server);
    let track = client.get_track("spotify:track:123").await.unwrap();

    mock.assert_async().await;
    assert_eq!(track["name"], json!("Aenema"));

    // the slot is cleared strictly before the loaded payload arrives
    let events = resource_events(&mut store, ResourceSlot::Track);
    assert_eq!(events.len(), 2);
    assert!(events[0].is_none());
    assert_eq!(events[1].as_ref().unwrap()["name"], json!("Aenema"));
}

#[tokio::test]
async fn invalid_uri_never_sends_a_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({}));
        })
        .await;

    let (client, mut store) = client(&server);
    let result = client.get_track("spotify:artist:123").await;

    assert!(matches!(result, Err(Error::InvalidUri { .. })));
    mock.assert_calls_async(0).await;

    // the slot was still flushed, but nothing ever loads
    let events = resource_events(&mut store, ResourceSlot::Track);
    assert_eq!(events.len(), 1);
    assert!(events[0].is_none());
}

#[tokio::test]
async fn album_tracks_carry_their_parent_reference() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/albums/42");
            then.status(200).json_body(json!({
                "name": "Lateralus",
                "uri": "spotify:album:42",
                "tracks": {
                    "items": [
                        { "name": "The Grudge" },
                        { "name": "Schism" }
                    ]
                }
            }));
        })
        .await;

    let (client, _store) = client(&server);
    let album = client.get_album("spotify:album:42").await.unwrap();

    let items = album["tracks"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["album"]["name"], json!("Lateralus"));
        assert_eq!(item["album"]["uri"], json!("spotify:album:42"));
    }
}

#[tokio::test]
async fn artist_aggregate_merges_all_three_sub_fetches() {
    let server = MockServer::start_async().await;
    let core = server
        .mock_async(|when, then| {
            when.method(GET).path("/artists/7");
            then.status(200).json_body(json!({
                "name": "Tool",
                "genres": ["progressive metal"],
                "popularity": 77
            }));
        })
        .await;
    let top = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/artists/7/top-tracks")
                .query_param("country", "NZ");
            then.status(200).json_body(json!({
                "tracks": [{ "name": "Schism" }, { "name": "Sober" }]
            }));
        })
        .await;
    let related = server
        .mock_async(|when, then| {
            when.method(GET).path("/artists/7/related-artists");
            then.status(200).json_body(json!({
                "artists": [{ "name": "A Perfect Circle" }, { "name": "Puscifer" }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/artists/7/albums");
            then.status(200).json_body(json!({ "items": [] }));
        })
        .await;

    let (client, mut store) = client(&server);
    let artist = client.get_artist("spotify:artist:7").await.unwrap();

    core.assert_async().await;
    top.assert_async().await;
    related.assert_async().await;

    // the final record carries keys from all three sub-fetches
    assert_eq!(artist["name"], json!("Tool"));
    assert_eq!(artist["popularity"], json!(77));
    assert_eq!(artist["tracks"].as_array().unwrap().len(), 2);

    // related artists land verbatim under their own key, not at top level
    assert_eq!(
        artist["related_artists"],
        json!([{ "name": "A Perfect Circle" }, { "name": "Puscifer" }])
    );
    assert!(artist.get("artists").is_none());

    // one clear, one load, nothing in between
    let events = resource_events(&mut store, ResourceSlot::Artist);
    assert_eq!(events.len(), 2);
    assert!(events[0].is_none());
    assert!(events[1].is_some());
}

#[tokio::test]
async fn artist_aggregate_surfaces_a_failed_sub_fetch() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/artists/7");
            then.status(200).json_body(json!({ "name": "Tool" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/artists/7/top-tracks");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/artists/7/related-artists");
            then.status(200).json_body(json!({ "artists": [] }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/artists/7/albums");
            then.status(200).json_body(json!({ "items": [] }));
        })
        .await;

    let (client, mut store) = client(&server);
    let result = client.get_artist("spotify:artist:7").await;

    // the aggregate settles with an error instead of hanging forever
    assert!(matches!(result, Err(Error::RequestFailure { .. })));

    // the slot stays cleared; no loaded event for a partial aggregate
    let events = resource_events(&mut store, ResourceSlot::Artist);
    assert_eq!(events.len(), 1);
    assert!(events[0].is_none());
}

#[tokio::test]
async fn featured_playlists_carry_timestamp_and_country() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/browse/featured-playlists")
                .query_param("country", "NZ")
                .query_param("limit", "50")
                .query_param_exists("timestamp");
            then.status(200).json_body(json!({
                "message": "Morning commute",
                "playlists": { "items": [] }
            }));
        })
        .await;

    let (client, _store) = client(&server);
    let featured = client.get_featured_playlists().await.unwrap();

    mock.assert_async().await;
    assert_eq!(featured["message"], json!("Morning commute"));
}

#[tokio::test]
async fn categories_are_unwrapped_from_their_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/browse/categories")
                .query_param("limit", "50");
            then.status(200).json_body(json!({
                "categories": {
                    "items": [{ "id": "rock", "name": "Rock" }]
                }
            }));
        })
        .await;

    let (client, mut store) = client(&server);
    let categories = client.get_categories().await.unwrap();

    assert_eq!(categories["items"][0]["id"], json!("rock"));

    // the loaded event carries the unwrapped object as well
    let events = resource_events(&mut store, ResourceSlot::Categories);
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1].as_ref().unwrap()["items"][0]["name"],
        json!("Rock")
    );
}

#[tokio::test]
async fn playlist_fetch_addresses_owner_and_market() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/u1/playlists/p1")
                .query_param("market", "NZ");
            then.status(200).json_body(json!({ "name": "Mix" }));
        })
        .await;

    let (client, _store) = client(&server);
    let playlist = client
        .get_playlist("spotify:user:u1:playlist:p1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(playlist["name"], json!("Mix"));
}

#[tokio::test]
async fn library_tracks_request_a_full_page() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/me/tracks").query_param("limit", "50");
            then.status(200).json_body(json!({ "items": [] }));
        })
        .await;

    let (client, _store) = client(&server);
    client.get_library_tracks().await.unwrap();

    mock.assert_async().await;
}
