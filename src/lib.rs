//! Spotify Client Layer Library
//!
//! This library implements the service layer of a music-player client for the
//! Spotify Web API. It owns the access/refresh token pair and its expiry,
//! builds authenticated catalog requests, fans out into concurrent
//! sub-requests for aggregate resources, and emits store-style lifecycle
//! events (clear, then loaded) to an external observer.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy for the client layer
//! - `events` - Lifecycle events emitted towards the state store
//! - `management` - Credential management with single-flight refresh
//! - `spotify` - Spotify Web API request pipeline
//! - `types` - Data structures and type definitions
//! - `uri` - Spotify URI classification and id extraction
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use spotfetch::{events::EventSink, management::TokenManager, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotfetch::Res<()> {
//!     let (events, mut store) = EventSink::channel();
//!     let tokens = Arc::new(TokenManager::load(events.clone()).await?);
//!     let client = SpotifyClient::new(tokens, events);
//!     client.get_track("spotify:track:1301WleyT98MSxVHPZCA6M").await?;
//!     while let Ok(event) = store.try_recv() {
//!         println!("{:?}", event);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod management;
pub mod spotify;
pub mod types;
pub mod uri;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the client layer resolves to one of the
/// [`error::Error`] variants, so callers can match on the failure class
/// (invalid address, authorization, remote request) without downcasting.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use spotfetch::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Refreshing access token...");
/// info!("Loaded {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Authorization stored");
/// success!("Fetched {} releases", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination. Used for recoverable issues or important information that
/// users should notice.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Token cache not found, starting unauthorized");
/// warning!("Could not refresh token: {}", reason);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
