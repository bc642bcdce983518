use serde::Deserialize;

/// Body of `POST /playlists` and `GET /playlists/{key}`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistMediaContainer {
    pub size: Option<String>,
    #[serde(rename = "Playlist", default)]
    pub playlists: Vec<PlaylistMetadata>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistMetadata {
    pub rating_key: String,
    pub key: Option<String>,
    pub title: String,
    pub playlist_type: String,
    pub smart: Option<String>,
    pub leaf_count: Option<String>,
    pub duration: Option<String>,
}
