use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotfetch::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Manage the stored Spotify authorization
    Auth(AuthOptions),

    /// Fetch a single resource by its Spotify URI
    Get(GetOptions),

    /// Browse the user's library
    Library(LibraryOptions),

    /// Discover featured and new content
    Browse(BrowseOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Manage the stored Spotify authorization")]
pub struct AuthOptions {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AuthSubcommand {
    /// Store an authorization grant obtained out-of-band
    Grant(GrantOpts),

    /// Force a token refresh round-trip
    Refresh,

    /// Remove the stored authorization
    Revoke,

    /// Show the stored token state
    Show,
}

#[derive(Parser, Debug, Clone)]
pub struct GrantOpts {
    /// Access token issued by the authorization flow
    #[clap(long)]
    pub access_token: String,

    /// Refresh token issued alongside the access token
    #[clap(long)]
    pub refresh_token: String,

    /// Lifetime of the access token in seconds
    #[clap(long, default_value_t = 3600)]
    pub expires_in: u64,

    /// Scope string granted by the user
    #[clap(long, default_value = "")]
    pub scope: String,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Fetch a single resource by its Spotify URI")]
pub struct GetOptions {
    #[command(subcommand)]
    pub command: GetSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GetSubcommand {
    /// Fetch a track
    Track(UriOpt),

    /// Fetch an album, tracks carrying their album context
    Album(UriOpt),

    /// Fetch an artist profile with top tracks and related artists
    Artist(UriOpt),

    /// Fetch a playlist
    Playlist(UriOpt),
}

#[derive(Parser, Debug, Clone)]
pub struct UriOpt {
    /// Spotify URI (e.g. spotify:track:<id>)
    pub uri: String,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Browse the user's library")]
pub struct LibraryOptions {
    #[command(subcommand)]
    pub command: LibrarySubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LibrarySubcommand {
    /// Show the current user's profile
    Me,

    /// List playlists saved in the library
    Playlists,

    /// List followed artists
    Artists,

    /// List albums saved in the library
    Albums,

    /// List tracks saved in the library
    Tracks,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Discover featured and new content")]
pub struct BrowseOptions {
    #[command(subcommand)]
    pub command: BrowseSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum BrowseSubcommand {
    /// List the currently featured playlists
    Featured,

    /// List browse categories, or show one
    Category(CategoryOpts),

    /// List the playlists of a category
    CategoryPlaylists(CategoryIdOpt),

    /// List new album releases
    NewReleases,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoryOpts {
    /// Category id; omit to list all categories
    pub id: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoryIdOpt {
    /// Category id
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => match opt.command {
            AuthSubcommand::Grant(g) => {
                cli::grant(g.access_token, g.refresh_token, g.expires_in, g.scope).await
            }
            AuthSubcommand::Refresh => cli::refresh().await,
            AuthSubcommand::Revoke => cli::revoke().await,
            AuthSubcommand::Show => cli::show().await,
        },

        Command::Get(opt) => match opt.command {
            GetSubcommand::Track(o) => cli::track(o.uri).await,
            GetSubcommand::Album(o) => cli::album(o.uri).await,
            GetSubcommand::Artist(o) => cli::artist(o.uri).await,
            GetSubcommand::Playlist(o) => cli::playlist(o.uri).await,
        },

        Command::Library(opt) => match opt.command {
            LibrarySubcommand::Me => cli::me().await,
            LibrarySubcommand::Playlists => cli::library_playlists().await,
            LibrarySubcommand::Artists => cli::library_artists().await,
            LibrarySubcommand::Albums => cli::library_albums().await,
            LibrarySubcommand::Tracks => cli::library_tracks().await,
        },

        Command::Browse(opt) => match opt.command {
            BrowseSubcommand::Featured => cli::featured().await,
            BrowseSubcommand::Category(o) => cli::category(o.id).await,
            BrowseSubcommand::CategoryPlaylists(o) => cli::category_playlists(o.id).await,
            BrowseSubcommand::NewReleases => cli::new_releases().await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
