//! Environment-backed configuration.
//!
//! Settings are read from environment variables, optionally seeded from a
//! `.env` file in the platform-local data directory (or the working
//! directory as a fallback for development checkouts).

use std::{env, path::PathBuf};

use crate::Res;

/// Loads environment variables from the application's `.env` file.
///
/// Looks for `<data-local-dir>/spotfetch/.env` first and falls back to a
/// `.env` in the working directory. A missing file is not an error: every
/// setting with a sensible default keeps working, and the accessors for
/// required settings report what is missing.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotfetch/.env");

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| crate::error::Error::Cache(e.to_string()))?;
    } else {
        dotenv::dotenv().ok();
    }

    Ok(())
}

/// Base URL of the catalog API, without a trailing slash.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Proxy endpoint that exchanges a refresh token for a fresh access token.
pub fn token_refresh_url() -> String {
    env::var("SPOTIFY_TOKEN_REFRESH_URL").expect("SPOTIFY_TOKEN_REFRESH_URL must be set")
}

/// Market/country code appended to region-scoped requests.
pub fn spotify_country() -> String {
    env::var("SPOTIFY_COUNTRY").unwrap_or_else(|_| "US".to_string())
}
