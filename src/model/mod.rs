// Copyright (C) 2026  Stacks Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—Tracks,
//! Playlists and aggregate catalog items—as explicit typed records. The
//! source export is loosely shaped JSON; everything past the loader works
//! with the types defined here, with required and optional fields stated in
//! the type rather than discovered at runtime.

pub(crate) mod scope;

const LIKED_SONGS_SOURCE: &str = "Liked Songs";

/// A single track record, normalized from either export shape.
///
/// `name` and `artist` are always present; the loader rejects records that
/// lack them. `uri` is absent only for tracks that originate from a local
/// file rather than the streaming catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) uri: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) local: bool,
    pub(crate) source: Option<String>,
}

impl Track {
    /// Canonical identity used for deduplication: the catalog URI when one
    /// exists, otherwise a normalized name+artist composite.
    pub(crate) fn dedup_key(&self) -> String {
        match &self.uri {
            Some(uri) => uri.clone(),
            None => format!(
                "{}|||{}",
                self.name.to_lowercase(),
                self.artist.to_lowercase()
            ),
        }
    }

    /// Web URL for the track's catalog page, derived from the trailing
    /// segment of the catalog URI. Local tracks have no resolvable page.
    pub(crate) fn catalog_url(&self) -> Option<String> {
        if self.local {
            return None;
        }
        let uri = self.uri.as_deref()?;
        let id = uri.rsplit(':').next()?;
        Some(format!("https://open.spotify.com/track/{}", id))
    }

    fn with_source(&self, source: &str) -> Track {
        let mut track = self.clone();
        track.source = Some(source.to_string());
        track
    }
}

/// An aggregate catalog entry: an artist, or an album qualified by its
/// owning artist for disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogItem {
    pub(crate) name: String,
    pub(crate) artist: Option<String>,
    pub(crate) count: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Playlist {
    pub(crate) name: String,
    pub(crate) last_modified: String,
    pub(crate) tracks: Vec<Track>,
    /// Number of local tracks, precomputed so hide-local sidebar counts do
    /// not rescan the playlist on every draw.
    pub(crate) local_count: usize,
}

impl Playlist {
    pub(crate) fn visible_count(&self, hide_local: bool) -> usize {
        if hide_local {
            self.tracks.len() - self.local_count
        } else {
            self.tracks.len()
        }
    }
}

/// The full normalized library: the liked-songs set followed by all
/// playlists in canonical order (most recently modified first).
///
/// The store is populated once per load and only read afterwards; scope
/// slices and index passes iterate it, they never mutate it.
#[derive(Debug, Default)]
pub(crate) struct TrackStore {
    pub(crate) liked: Vec<Track>,
    pub(crate) playlists: Vec<Playlist>,
}

impl TrackStore {
    pub(crate) fn total_tracks(&self) -> usize {
        self.liked.len() + self.playlists.iter().map(|p| p.tracks.len()).sum::<usize>()
    }

    /// All tracks in canonical order: liked songs first, then each playlist
    /// in store order. This ordering is what makes the index builder's
    /// tie-break deterministic.
    pub(crate) fn all_tracks(&self) -> impl Iterator<Item = &Track> {
        self.liked
            .iter()
            .chain(self.playlists.iter().flat_map(|p| p.tracks.iter()))
    }

    /// All tracks with their source labelled, for the multi-source view.
    pub(crate) fn all_tracks_labelled(&self) -> Vec<Track> {
        let mut tracks: Vec<Track> = self
            .liked
            .iter()
            .map(|t| t.with_source(LIKED_SONGS_SOURCE))
            .collect();
        for playlist in &self.playlists {
            tracks.extend(
                playlist
                    .tracks
                    .iter()
                    .map(|t| t.with_source(&playlist.name)),
            );
        }
        tracks
    }

    /// Every occurrence of the artist across the library, source-labelled.
    pub(crate) fn artist_tracks(&self, artist: &str) -> Vec<Track> {
        let key = artist.to_lowercase();
        self.collect_labelled(|t| t.artist.to_lowercase() == key)
    }

    /// Every occurrence of the album (qualified by artist), source-labelled.
    pub(crate) fn album_tracks(&self, album: &str, artist: &str) -> Vec<Track> {
        let album_key = album.to_lowercase();
        let artist_key = artist.to_lowercase();
        self.collect_labelled(|t| {
            t.album.to_lowercase() == album_key && t.artist.to_lowercase() == artist_key
        })
    }

    fn collect_labelled(&self, matches: impl Fn(&Track) -> bool) -> Vec<Track> {
        let mut tracks: Vec<Track> = self
            .liked
            .iter()
            .filter(|t| matches(t))
            .map(|t| t.with_source(LIKED_SONGS_SOURCE))
            .collect();
        for playlist in &self.playlists {
            tracks.extend(
                playlist
                    .tracks
                    .iter()
                    .filter(|t| matches(t))
                    .map(|t| t.with_source(&playlist.name)),
            );
        }
        tracks
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn track(name: &str, artist: &str, album: &str, uri: Option<&str>) -> Track {
        Track {
            name: name.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            uri: uri.map(str::to_string),
            date: None,
            local: false,
            source: None,
        }
    }

    #[test]
    fn dedup_key_prefers_uri() {
        let t = track("Song", "Artist", "Album", Some("spotify:track:abc123"));
        assert_eq!(t.dedup_key(), "spotify:track:abc123");
    }

    #[test]
    fn dedup_key_falls_back_to_name_and_artist() {
        let t = track("My Song", "The Band", "", None);
        assert_eq!(t.dedup_key(), "my song|||the band");
    }

    #[test]
    fn catalog_url_uses_trailing_uri_segment() {
        let t = track("Song", "Artist", "Album", Some("spotify:track:abc123"));
        assert_eq!(
            t.catalog_url().as_deref(),
            Some("https://open.spotify.com/track/abc123")
        );
    }

    #[test]
    fn local_tracks_have_no_catalog_url() {
        let mut t = track("Song", "Artist", "Album", None);
        t.local = true;
        assert_eq!(t.catalog_url(), None);
    }

    #[test]
    fn artist_tracks_are_source_labelled_liked_first() {
        let store = TrackStore {
            liked: vec![track("One", "Bee", "Hive", Some("spotify:track:a"))],
            playlists: vec![Playlist {
                name: "Mix".to_string(),
                last_modified: "2024-01-01".to_string(),
                tracks: vec![
                    track("Two", "Bee", "Hive", Some("spotify:track:b")),
                    track("Other", "Wasp", "Nest", Some("spotify:track:c")),
                ],
                local_count: 0,
            }],
        };

        let tracks = store.artist_tracks("bee");
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].source.as_deref(), Some("Liked Songs"));
        assert_eq!(tracks[1].source.as_deref(), Some("Mix"));
    }
}
