use clap::{Parser, Subcommand};

/// Exercise the playlist endpoints of a Plex Media Server.
///
/// Connection settings come from PLEX_BASEURL (or PLEX_SERVER_IP and
/// PLEX_SERVER_PORT), PLEX_TOKEN and optionally PLEX_TIMEOUT.
#[derive(Parser)]
#[command(name = "plex-api-tester", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a playlist by title and print its items
    Main {
        #[arg(default_value = "test_video_playlist_1")]
        title: String,
    },
    /// Print every complete playlist as (ratingKey, title, type)
    Test1,
    /// Time a title lookup plus item fetch, then the regrouping of the items
    Test2 {
        #[arg(default_value = "Car songs")]
        title: String,
    },
    /// List playlists grouped by type
    Playlists,
    /// Print the items of a playlist
    Items {
        rating_key: String,
        /// Regroup items by artist/album, show/season, photo and movie title
        #[arg(short, long)]
        sorted: bool,
    },
    /// Create a playlist from library rating keys
    Create {
        #[arg(short, long)]
        title: String,
        /// audio, video or photo
        #[arg(short = 'k', long = "type")]
        media_type: String,
        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// Delete a playlist
    Delete { rating_key: String },
    /// Remove items from a playlist by playlistItemID
    RemoveItems {
        rating_key: String,
        #[arg(required = true)]
        playlist_item_ids: Vec<String>,
    },
    /// Print the server's identity and version
    Identity,
}
