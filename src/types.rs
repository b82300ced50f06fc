use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// A token is usable strictly before `obtained_at + expires_in`.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in
    }
}

/// Credential set handed over by the consumer once the user has authorized
/// the application. Expiry is derived from the moment the grant is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationGrant {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
}

/// Body returned by the token refresh endpoint. A missing `refresh_token`
/// means the previous one stays valid.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub owner: String,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub name: String,
    pub artists: String,
    pub release_date: String,
}

#[derive(Tabled)]
pub struct CategoryTableRow {
    pub id: String,
    pub name: String,
}
