use chrono::{DateTime, Utc};

use crate::{
    error,
    events::EventSink,
    info,
    management::TokenManager,
    success,
    types::{AuthorizationGrant, Token},
    warning,
};

pub async fn grant(access_token: String, refresh_token: String, expires_in: u64, scope: String) {
    let (events, _store) = EventSink::channel();
    let manager = TokenManager::new(events).with_cache_path(TokenManager::default_cache_path());

    let token = manager
        .grant_authorization(AuthorizationGrant {
            access_token,
            refresh_token,
            expires_in,
            scope,
        })
        .await;

    if let Err(e) = manager.persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!("Authorization stored");
    print_expiry(&token);
}

pub async fn refresh() {
    let (manager, mut store) = load_manager().await;

    match manager.refresh().await {
        Ok(token) => {
            super::drain_events(&mut store);
            success!("Token refreshed");
            print_expiry(&token);
        }
        Err(e) => {
            error!("Could not refresh token. Err: {}", e);
        }
    }
}

pub async fn revoke() {
    let (manager, mut store) = load_manager().await;
    manager.revoke().await;
    super::drain_events(&mut store);
    success!("Authorization removed");
}

pub async fn show() {
    let (manager, _store) = load_manager().await;

    match manager.current_token().await {
        Some(token) => {
            info!("Scope: {}", token.scope);
            print_expiry(&token);
        }
        None => warning!("No credentials stored"),
    }
}

async fn load_manager() -> (
    TokenManager,
    tokio::sync::mpsc::UnboundedReceiver<crate::events::Event>,
) {
    let (events, store) = EventSink::channel();
    match TokenManager::load(events).await {
        Ok(manager) => (manager, store),
        Err(e) => {
            error!(
                "Failed to load credentials. Please run spotfetch auth grant\n Error: {}",
                e
            );
        }
    }
}

fn print_expiry(token: &Token) {
    let expires_at = (token.obtained_at + token.expires_in) as i64;
    match DateTime::<Utc>::from_timestamp(expires_at, 0) {
        Some(at) if !token.is_expired() => info!("Access token valid until {}", at),
        _ => warning!("Access token is expired"),
    }
}
