use std::collections::BTreeMap;

use client::Plex;
use log::{error, info};
use models::{PlaylistEntry, PlaylistMetadata, Record};
use reqwest::StatusCode;

pub mod client;
pub mod extract;
pub mod matcher;
pub mod models;
pub mod xml;

pub use models::sorted::sort_playlist_data;

/// Group key for playlists that do not report a `playlistType`.
pub const UNKNOWN_PLAYLIST_TYPE: &str = "unknown";

/// All playlists on the server grouped by `playlistType`. Empty if the listing fails.
pub fn get_playlists(plex: &Plex) -> BTreeMap<String, Vec<PlaylistEntry>> {
    let mut playlists_by_type: BTreeMap<String, Vec<PlaylistEntry>> = BTreeMap::new();
    let Ok(root) = plex.fetch_playlists() else {
        return playlists_by_type;
    };

    for playlist in xml::descendants(&root, "Playlist") {
        let entry = PlaylistEntry {
            rating_key: xml::safe_get(Some(playlist), "ratingKey"),
            title: xml::safe_get(Some(playlist), "title"),
            playlist_type: xml::safe_get(Some(playlist), "playlistType"),
        };
        let group = entry
            .playlist_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_PLAYLIST_TYPE.to_string());
        playlists_by_type.entry(group).or_default().push(entry);
    }

    playlists_by_type
}

/// Rating key of the first playlist titled exactly `title`.
pub fn get_playlist_rating_key(plex: &Plex, title: &str) -> Option<String> {
    let root = plex.fetch_playlists().ok()?;
    let playlists = extract::extract_playlists(Some(&root));

    if let Some(playlist) = matcher::find_by_title(&playlists, title) {
        return Some(playlist.rating_key.clone());
    }

    match matcher::closest_title(&playlists, title) {
        Some(closest) => error!(
            "Playlist titled '{}' not found. Closest match: '{}'",
            title, closest
        ),
        None => error!("Playlist titled '{}' not found.", title),
    }
    None
}

/// Items of a playlist, extracted with the field set of the playlist's type.
///
/// The type is read from the playlist's own metadata first, so this costs two requests.
pub fn get_playlist_items(plex: &Plex, rating_key: &str) -> Vec<Record> {
    let metadata = plex.fetch_playlist_metadata(rating_key).ok();
    let playlist_type = metadata
        .as_ref()
        .and_then(|root| xml::first_descendant(root, "Playlist"))
        .and_then(|playlist| xml::safe_get(Some(playlist), "playlistType"));

    let Some(playlist_type) = playlist_type else {
        error!("Playlist metadata not found for key '{}'.", rating_key);
        return Vec::new();
    };

    let items = plex.fetch_playlist_items(rating_key).ok();
    extract::extract_playlist_items(items.as_ref(), &playlist_type)
}

/// Creates a playlist from library rating keys.
pub fn create_playlist(
    plex: &Plex,
    title: &str,
    media_type: &str,
    item_uris: &[String],
) -> Option<PlaylistMetadata> {
    let uri = item_uris
        .iter()
        .map(|uri| format!("library://{}", uri))
        .collect::<Vec<_>>()
        .join(",");

    let created = plex
        .create_playlist(title, media_type, &uri)
        .ok()
        .and_then(|container| container.playlists.into_iter().next());

    match created {
        Some(playlist) => {
            info!(
                "Playlist '{}' created successfully (ratingKey {}).",
                title, playlist.rating_key
            );
            Some(playlist)
        }
        None => {
            error!("Failed to create playlist '{}'.", title);
            None
        }
    }
}

pub fn delete_playlist(plex: &Plex, rating_key: &str) -> bool {
    match plex.delete(&format!("/playlists/{}", rating_key)) {
        Ok(response) if is_deleted(response.status) => {
            info!("Playlist with key '{}' deleted successfully.", rating_key);
            true
        }
        Ok(response) => {
            error!(
                "Failed to delete playlist with key '{}'. Status code: {}",
                rating_key, response.status
            );
            false
        }
        Err(_) => {
            error!("Failed to delete playlist with key '{}'.", rating_key);
            false
        }
    }
}

/// Removes items one by one, stopping at the first failure.
pub fn remove_playlist_items(plex: &Plex, rating_key: &str, playlist_item_ids: &[String]) -> bool {
    for playlist_item_id in playlist_item_ids {
        let endpoint = format!("/playlists/{}/items/{}", rating_key, playlist_item_id);
        match plex.delete(&endpoint) {
            Ok(response) if is_deleted(response.status) => info!(
                "Item '{}' removed from playlist with key '{}' successfully.",
                playlist_item_id, rating_key
            ),
            Ok(response) => {
                error!(
                    "Failed to remove item from playlist. Status code: {}",
                    response.status
                );
                return false;
            }
            Err(_) => {
                error!("Failed to remove item from playlist. No response received.");
                return false;
            }
        }
    }
    true
}

fn is_deleted(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NO_CONTENT
}
