use tabled::Table;

use super::library::{album_row, items, print_json, print_playlist_table, text};
use crate::{error, types::CategoryTableRow};

pub async fn featured() {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching featured playlists...");
    let result = client.get_featured_playlists().await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => match data.get("playlists") {
            Some(playlists) => print_playlist_table(playlists),
            None => print_json(&data),
        },
        Err(e) => error!("Could not fetch featured playlists. Err: {}", e),
    }
}

pub async fn category(id: Option<String>) {
    let (client, mut store) = super::client().await;

    let result = match id {
        Some(id) => {
            let pb = super::spinner("Fetching category...");
            let result = client.get_category(&id).await;
            pb.finish_and_clear();
            result
        }
        None => {
            let pb = super::spinner("Fetching categories...");
            let result = client.get_categories().await;
            pb.finish_and_clear();
            result
        }
    };
    super::drain_events(&mut store);

    match result {
        Ok(data) => {
            let rows: Vec<CategoryTableRow> = items(&data)
                .iter()
                .map(|item| CategoryTableRow {
                    id: text(item, "id"),
                    name: text(item, "name"),
                })
                .collect();
            if rows.is_empty() {
                print_json(&data);
            } else {
                println!("{}", Table::new(rows));
            }
        }
        Err(e) => error!("Could not fetch categories. Err: {}", e),
    }
}

pub async fn category_playlists(id: String) {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching category playlists...");
    let result = client.get_category_playlists(&id).await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => print_playlist_table(&data),
        Err(e) => error!("Could not fetch category playlists. Err: {}", e),
    }
}

pub async fn new_releases() {
    let (client, mut store) = super::client().await;

    let pb = super::spinner("Fetching new releases...");
    let result = client.get_new_releases().await;
    pb.finish_and_clear();
    super::drain_events(&mut store);

    match result {
        Ok(data) => {
            let rows = items(&data).iter().map(album_row).collect::<Vec<_>>();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Could not fetch new releases. Err: {}", e),
    }
}
