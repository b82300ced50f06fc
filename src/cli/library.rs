use serde_json::Value;
use tabled::Table;

use crate::{
    error,
    types::{AlbumTableRow, PlaylistTableRow},
    warning,
};

pub async fn me() {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching profile...");
    let result = client.get_me().await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => print_json(&data),
        Err(e) => error!("Could not fetch profile. Err: {}", e),
    }
}

pub async fn library_playlists() {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching library playlists...");
    let result = client.get_library_playlists().await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => print_playlist_table(&data),
        Err(e) => error!("Could not fetch library playlists. Err: {}", e),
    }
}

pub async fn library_artists() {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching followed artists...");
    let result = client.get_library_artists().await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => print_json(&data),
        Err(e) => error!("Could not fetch followed artists. Err: {}", e),
    }
}

pub async fn library_albums() {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching library albums...");
    let result = client.get_library_albums().await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => {
            // saved albums arrive wrapped, the album object one level down
            let rows: Vec<AlbumTableRow> = items(&data)
                .iter()
                .filter_map(|item| item.get("album"))
                .map(album_row)
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Could not fetch library albums. Err: {}", e),
    }
}

pub async fn library_tracks() {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching library tracks...");
    let result = client.get_library_tracks().await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => print_json(&data),
        Err(e) => error!("Could not fetch library tracks. Err: {}", e),
    }
}

pub(crate) fn items(data: &Value) -> Vec<Value> {
    data.get("items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

pub(crate) fn print_json(data: &Value) {
    match serde_json::to_string_pretty(data) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => warning!("Could not render payload: {}", e),
    }
}

pub(crate) fn print_playlist_table(data: &Value) {
    let rows: Vec<PlaylistTableRow> = items(data)
        .iter()
        .map(|item| PlaylistTableRow {
            name: text(item, "name"),
            owner: item
                .pointer("/owner/display_name")
                .or_else(|| item.pointer("/owner/id"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            tracks: item
                .pointer("/tracks/total")
                .and_then(Value::as_u64)
                .unwrap_or(0),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub(crate) fn album_row(album: &Value) -> AlbumTableRow {
    AlbumTableRow {
        name: text(album, "name"),
        artists: album
            .get("artists")
            .and_then(Value::as_array)
            .map(|artists| {
                artists
                    .iter()
                    .map(|a| text(a, "name"))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default(),
        release_date: text(album, "release_date"),
    }
}

pub(crate) fn text(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
