use indexmap::IndexMap;

pub mod identity;
pub mod playlist;
pub mod sorted;

pub use identity::Identity;
pub use playlist::{PlaylistMediaContainer, PlaylistMetadata};
pub use sorted::{ItemEntry, MovieEntry, PhotoEntry, SortedPlaylistData};

/// Attributes pulled from one media element, in allow-list order. A missing
/// attribute is `None`.
pub type Record = IndexMap<&'static str, Option<String>>;

/// A playlist with all three identifying fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub rating_key: String,
    pub title: String,
    pub playlist_type: String,
}

/// A playlist as listed by `get_playlists`, where incomplete entries are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub rating_key: Option<String>,
    pub title: Option<String>,
    pub playlist_type: Option<String>,
}
