use std::{path::PathBuf, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    Res, config,
    error::Error,
    events::{Event, EventSink},
    types::{AuthorizationGrant, RefreshResponse, Token},
    warning,
};

const REFRESH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TokenManager {
    token: Mutex<Option<Token>>,
    // serializes refresh round-trips; expired-token observers queue here and
    // re-check before issuing their own request
    refresh_gate: Mutex<()>,
    events: EventSink,
    http: Client,
    refresh_url: Option<String>,
    cache_path: Option<PathBuf>,
}

impl TokenManager {
    pub fn new(events: EventSink) -> Self {
        TokenManager {
            token: Mutex::new(None),
            refresh_gate: Mutex::new(()),
            events,
            http: Client::new(),
            refresh_url: None,
            cache_path: None,
        }
    }

    pub fn with_token(self, token: Token) -> Self {
        TokenManager {
            token: Mutex::new(Some(token)),
            ..self
        }
    }

    pub fn with_refresh_url(mut self, url: impl Into<String>) -> Self {
        self.refresh_url = Some(url.into());
        self
    }

    pub fn with_cache_path(mut self, path: PathBuf) -> Self {
        self.cache_path = Some(path);
        self
    }

    pub async fn load(events: EventSink) -> Res<Self> {
        let path = Self::default_cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Cache(e.to_string()))?;
        let token: Token =
            serde_json::from_str(&content).map_err(|e| Error::Cache(e.to_string()))?;
        Ok(Self::new(events).with_token(token).with_cache_path(path))
    }

    pub fn default_cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotfetch/cache/token.json");
        path
    }

    pub async fn persist(&self) -> Res<()> {
        let Some(path) = &self.cache_path else {
            return Ok(());
        };
        let Some(token) = self.token.lock().await.clone() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::Cache(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&token).map_err(|e| Error::Cache(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| Error::Cache(e.to_string()))
    }

    /// Stores an initial credential set. Expiry runs from now.
    pub async fn grant_authorization(&self, grant: AuthorizationGrant) -> Token {
        let token = Token {
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
            scope: grant.scope,
            expires_in: grant.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        };

        *self.token.lock().await = Some(token.clone());
        self.events.dispatch(Event::AuthorizationGranted(token.clone()));
        let _ = self.persist().await;
        token
    }

    /// Clears stored credentials and the on-disk cache. Until a new grant
    /// arrives, every `valid_token` call fails.
    pub async fn revoke(&self) {
        *self.token.lock().await = None;
        if let Some(path) = &self.cache_path {
            let _ = async_fs::remove_file(path).await;
        }
        self.events.dispatch(Event::RemoveAuthorization);
    }

    /// Returns a currently-valid access token, refreshing first when the
    /// stored one has expired. At most one refresh round-trip is in flight;
    /// concurrent callers join it and pick up its result.
    pub async fn valid_token(&self) -> Res<String> {
        if let Some(token) = self.current_unexpired().await {
            return Ok(token);
        }

        let _gate = self.refresh_gate.lock().await;

        // a fellow caller may have refreshed while we waited at the gate
        if let Some(token) = self.current_unexpired().await {
            return Ok(token);
        }

        let token = self.refresh_locked().await?;
        Ok(token.access_token)
    }

    /// Forces a refresh round-trip regardless of the current expiry.
    pub async fn refresh(&self) -> Res<Token> {
        let _gate = self.refresh_gate.lock().await;
        self.refresh_locked().await
    }

    pub async fn current_token(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }

    async fn current_unexpired(&self) -> Option<String> {
        self.token
            .lock()
            .await
            .as_ref()
            .filter(|t| !t.is_expired())
            .map(|t| t.access_token.clone())
    }

    // Callers must hold `refresh_gate`.
    async fn refresh_locked(&self) -> Res<Token> {
        let (refresh_token, scope) = {
            let guard = self.token.lock().await;
            match guard.as_ref() {
                Some(t) => (t.refresh_token.clone(), t.scope.clone()),
                None => return Err(Error::auth("no credentials present; authorize first")),
            }
        };

        self.events.dispatch(Event::TokenRefreshing);

        let url = self
            .refresh_url
            .clone()
            .unwrap_or_else(config::token_refresh_url);

        let sent = self
            .http
            .get(&url)
            .query(&[("action", "refresh"), ("refresh_token", refresh_token.as_str())])
            .timeout(REFRESH_TIMEOUT)
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        let response = match sent {
            Ok(resp) => resp,
            Err(e) => {
                warning!("Could not refresh token: {}", e);
                return Err(Error::auth(format!("refresh failed: {e}")));
            }
        };

        let body: RefreshResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warning!("Could not refresh token: {}", e);
                return Err(Error::auth(format!("refresh failed: {e}")));
            }
        };

        let token = Token {
            access_token: body.access_token,
            refresh_token: body.refresh_token.unwrap_or(refresh_token),
            scope: body.scope.unwrap_or(scope),
            expires_in: body.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        };

        *self.token.lock().await = Some(token.clone());
        self.events.dispatch(Event::TokenRefreshed(token.clone()));
        let _ = self.persist().await;

        Ok(token)
    }
}
