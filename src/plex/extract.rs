use log::warn;
use xmltree::Element;

use super::{
    models::{PlaylistSummary, Record},
    xml::{descendants, first_descendant, safe_get},
};

pub const AUDIO_ATTRIBUTES: &[&str] = &[
    "key",
    "title",
    "duration",
    "index",
    "type",
    "parentTitle",
    "grandparentTitle",
    "grandparentThumb",
    "playlistItemID",
];

pub const EPISODE_ATTRIBUTES: &[&str] = &[
    "key",
    "title",
    "duration",
    "index",
    "type",
    "parentTitle",
    "grandparentTitle",
    "grandparentThumb",
    "playlistItemID",
];

pub const MOVIE_ATTRIBUTES: &[&str] = &[
    "key",
    "title",
    "type",
    "duration",
    "year",
    "thumb",
    "playlistItemID",
];

/// Photos also carry `file`, read from their first `Part` child.
pub const PHOTO_ATTRIBUTES: &[&str] = &["key", "title", "type", "thumb", "playlistItemID"];

pub fn extract_attributes(element: &Element, names: &[&'static str]) -> Record {
    names
        .iter()
        .map(|name| (*name, element.attributes.get(*name).cloned()))
        .collect()
}

pub fn extract_audio(track: &Element) -> Record {
    extract_attributes(track, AUDIO_ATTRIBUTES)
}

/// `type="episode"` selects the episode fields; any other video is read as a movie.
pub fn extract_video(video: &Element) -> Record {
    if video.attributes.get("type").map(String::as_str) == Some("episode") {
        extract_attributes(video, EPISODE_ATTRIBUTES)
    } else {
        extract_attributes(video, MOVIE_ATTRIBUTES)
    }
}

pub fn extract_photo(photo: &Element) -> Record {
    let mut record = extract_attributes(photo, PHOTO_ATTRIBUTES);
    record.insert("file", safe_get(first_descendant(photo, "Part"), "file"));
    record
}

pub fn extract_playlists(root: Option<&Element>) -> Vec<PlaylistSummary> {
    let Some(root) = root else {
        return Vec::new();
    };

    descendants(root, "Playlist")
        .into_iter()
        .filter_map(|playlist| {
            Some(PlaylistSummary {
                rating_key: non_empty(playlist, "ratingKey")?,
                title: non_empty(playlist, "title")?,
                playlist_type: non_empty(playlist, "playlistType")?,
            })
        })
        .collect()
}

pub fn extract_playlist_items(root: Option<&Element>, playlist_type: &str) -> Vec<Record> {
    let Some(root) = root else {
        return Vec::new();
    };

    match playlist_type {
        "audio" => descendants(root, "Track").into_iter().map(extract_audio).collect(),
        "video" => descendants(root, "Video").into_iter().map(extract_video).collect(),
        "photo" => descendants(root, "Photo").into_iter().map(extract_photo).collect(),
        other => {
            warn!("Unsupported playlist type {:?}", other);
            Vec::new()
        }
    }
}

fn non_empty(element: &Element, attribute: &str) -> Option<String> {
    element
        .attributes
        .get(attribute)
        .filter(|v| !v.is_empty())
        .cloned()
}
