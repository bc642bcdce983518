use levenshtein::levenshtein;

use super::models::PlaylistSummary;

/// Titles further than this from the query are not worth suggesting.
const MAX_SUGGESTION_DISTANCE: usize = 6;

/// First playlist whose title is exactly `title`.
pub fn find_by_title<'a>(playlists: &'a [PlaylistSummary], title: &str) -> Option<&'a PlaylistSummary> {
    playlists.iter().find(|p| p.title == title)
}

/// The playlist title closest to `title`, compared case-insensitively.
pub fn closest_title<'a>(playlists: &'a [PlaylistSummary], title: &str) -> Option<&'a str> {
    let wanted = title.to_lowercase();
    let mut distances: Vec<(usize, &str)> = playlists
        .iter()
        .map(|p| (levenshtein(&wanted, &p.title.to_lowercase()), p.title.as_str()))
        .collect();
    distances.sort_by_key(|(d, _)| *d);

    distances
        .first()
        .filter(|(d, _)| *d <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, t)| *t)
}
