use serde_json::Value;

use crate::{Res, error, spotify::SpotifyClient, warning};

pub async fn track(uri: String) {
    fetch("Fetching track...", |client| async move {
        client.get_track(&uri).await
    })
    .await;
}

pub async fn album(uri: String) {
    fetch("Fetching album...", |client| async move {
        client.get_album(&uri).await
    })
    .await;
}

pub async fn artist(uri: String) {
    fetch("Fetching artist...", |client| async move {
        client.get_artist(&uri).await
    })
    .await;
}

pub async fn playlist(uri: String) {
    fetch("Fetching playlist...", |client| async move {
        client.get_playlist(&uri).await
    })
    .await;
}

async fn fetch<F, Fut>(message: &'static str, op: F)
where
    F: FnOnce(SpotifyClient) -> Fut,
    Fut: Future<Output = Res<Value>>,
{
    let (client, mut store) = super::client().await;

    let pb = super::spinner(message);
    let result = op(client).await;
    pb.finish_and_clear();

    super::drain_events(&mut store);

    match result {
        Ok(data) => match serde_json::to_string_pretty(&data) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => warning!("Could not render payload: {}", e),
        },
        Err(e) => error!("Fetch failed. Err: {}", e),
    }
}
