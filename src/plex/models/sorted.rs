use std::collections::BTreeMap;

use log::{debug, error};

use super::Record;

/// `(title, index, playlistItemID)` of a track or an episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub title: Option<String>,
    pub index: i64,
    pub playlist_item_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoEntry {
    pub file: Option<String>,
    pub thumb: Option<String>,
    pub playlist_item_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieEntry {
    pub year: Option<String>,
    pub duration: Option<String>,
    pub playlist_item_id: Option<String>,
}

/// Playlist items regrouped for display.
///
/// Tracks are keyed artist → album and episodes show → season, each list in
/// playlist order. Photos and movies are keyed by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedPlaylistData {
    pub tracks: BTreeMap<String, BTreeMap<String, Vec<ItemEntry>>>,
    pub photos: BTreeMap<String, PhotoEntry>,
    pub episodes: BTreeMap<String, BTreeMap<String, Vec<ItemEntry>>>,
    pub movies: BTreeMap<String, MovieEntry>,
}

impl SortedPlaylistData {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
            && self.photos.is_empty()
            && self.episodes.is_empty()
            && self.movies.is_empty()
    }
}

/// Regroups extracted records by their `type`. Photo paths are made absolute
/// against `base_url`. Records with an unparsable index are logged and dropped.
pub fn sort_playlist_data(items: &[Record], base_url: &str) -> SortedPlaylistData {
    let mut sorted = SortedPlaylistData::default();

    for item in items {
        match field(item, "type") {
            Some("track") => {
                if let Some(entry) = item_entry(item) {
                    if let (Some(artist), Some(album)) =
                        (field(item, "grandparentTitle"), field(item, "parentTitle"))
                    {
                        sorted
                            .tracks
                            .entry(artist.to_string())
                            .or_default()
                            .entry(album.to_string())
                            .or_default()
                            .push(entry);
                    }
                }
            }
            Some("episode") => {
                if let Some(entry) = item_entry(item) {
                    if let (Some(show), Some(season)) =
                        (field(item, "grandparentTitle"), field(item, "parentTitle"))
                    {
                        sorted
                            .episodes
                            .entry(show.to_string())
                            .or_default()
                            .entry(season.to_string())
                            .or_default()
                            .push(entry);
                    }
                }
            }
            Some("photo") => {
                if let Some(title) = field(item, "title") {
                    sorted.photos.insert(
                        title.to_string(),
                        PhotoEntry {
                            file: field(item, "file").map(|f| absolute(base_url, f)),
                            thumb: field(item, "thumb").map(|t| absolute(base_url, t)),
                            playlist_item_id: owned(item, "playlistItemID"),
                        },
                    );
                }
            }
            Some("movie") => {
                if let Some(title) = field(item, "title") {
                    sorted.movies.insert(
                        title.to_string(),
                        MovieEntry {
                            year: owned(item, "year"),
                            duration: owned(item, "duration"),
                            playlist_item_id: owned(item, "playlistItemID"),
                        },
                    );
                }
            }
            other => debug!("Skipping item of type {:?}", other),
        }
    }

    sorted
}

fn item_entry(item: &Record) -> Option<ItemEntry> {
    let index = match field(item, "index") {
        None => 0,
        Some(raw) => match raw.parse::<i64>() {
            Ok(index) => index,
            Err(e) => {
                error!("Error processing item: {:?}, error: {}", item, e);
                return None;
            }
        },
    };

    Some(ItemEntry {
        title: owned(item, "title"),
        index,
        playlist_item_id: owned(item, "playlistItemID"),
    })
}

fn field<'a>(item: &'a Record, name: &str) -> Option<&'a str> {
    item.get(name)
        .and_then(|v| v.as_deref())
        .filter(|v| !v.is_empty())
}

fn owned(item: &Record, name: &str) -> Option<String> {
    field(item, name).map(str::to_string)
}

fn absolute(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&'static str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (*k, Some(v.to_string())))
            .collect()
    }

    #[test]
    fn groups_tracks_by_artist_and_album_in_playlist_order() {
        let items = vec![
            record(&[
                ("type", "track"),
                ("title", "Second"),
                ("index", "2"),
                ("parentTitle", "Album"),
                ("grandparentTitle", "Artist"),
                ("playlistItemID", "11"),
            ]),
            record(&[
                ("type", "track"),
                ("title", "First"),
                ("index", "1"),
                ("parentTitle", "Album"),
                ("grandparentTitle", "Artist"),
                ("playlistItemID", "10"),
            ]),
        ];

        let sorted = sort_playlist_data(&items, "http://plex:32400");
        let album = &sorted.tracks["Artist"]["Album"];
        let titles: Vec<_> = album.iter().map(|e| e.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_eq!(album[0].index, 2);
        assert_eq!(album[1].playlist_item_id.as_deref(), Some("10"));
    }

    #[test]
    fn missing_index_counts_as_zero_and_bad_index_is_dropped() {
        let items = vec![
            record(&[
                ("type", "episode"),
                ("title", "Pilot"),
                ("parentTitle", "Season 1"),
                ("grandparentTitle", "Show"),
            ]),
            record(&[
                ("type", "episode"),
                ("title", "Broken"),
                ("index", "one"),
                ("parentTitle", "Season 1"),
                ("grandparentTitle", "Show"),
            ]),
        ];

        let sorted = sort_playlist_data(&items, "http://plex:32400");
        let season = &sorted.episodes["Show"]["Season 1"];
        assert_eq!(season.len(), 1);
        assert_eq!(season[0].index, 0);
    }

    #[test]
    fn tracks_without_artist_or_album_are_skipped() {
        let items = vec![record(&[("type", "track"), ("title", "Loose"), ("index", "1")])];
        assert!(sort_playlist_data(&items, "http://plex:32400").is_empty());
    }

    #[test]
    fn photos_get_absolute_urls() {
        let mut item = record(&[
            ("type", "photo"),
            ("title", "Beach"),
            ("thumb", "/library/metadata/7/thumb/1"),
            ("file", "photos/beach.jpg"),
        ]);
        item.insert("playlistItemID", None);

        let sorted = sort_playlist_data(&[item], "http://plex:32400/");
        let photo = &sorted.photos["Beach"];
        assert_eq!(
            photo.thumb.as_deref(),
            Some("http://plex:32400/library/metadata/7/thumb/1")
        );
        assert_eq!(photo.file.as_deref(), Some("http://plex:32400/photos/beach.jpg"));
        assert_eq!(photo.playlist_item_id, None);
    }

    #[test]
    fn movies_keyed_by_title() {
        let items = vec![record(&[
            ("type", "movie"),
            ("title", "Heat"),
            ("year", "1995"),
            ("duration", "10200000"),
        ])];

        let sorted = sort_playlist_data(&items, "http://plex:32400");
        assert_eq!(sorted.movies["Heat"].year.as_deref(), Some("1995"));
        assert!(sorted.tracks.is_empty());
    }
}
