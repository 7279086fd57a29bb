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

//! View scopes and navigation history.
//!
//! A scope is the active track collection being viewed: a single playlist,
//! the liked-songs set, the all-sources aggregate, a catalog of artists or
//! albums, an artist/album detail slice, or the stats overview. Scopes
//! resolve themselves against the [`TrackStore`]; the resolved slice is a
//! fresh list that the pipeline consumes.

use crate::model::{Track, TrackStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CatalogMode {
    Artists,
    Albums,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scope {
    Liked,
    Playlist(usize),
    AllTracks,
    Catalog(CatalogMode),
    ArtistDetail(String),
    AlbumDetail { album: String, artist: String },
    Stats,
}

impl Scope {
    pub(crate) fn title(&self, store: &TrackStore) -> String {
        match self {
            Scope::Liked => "Liked Songs".to_string(),
            Scope::Playlist(index) => store
                .playlists
                .get(*index)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            Scope::AllTracks => "All Tracks".to_string(),
            Scope::Catalog(CatalogMode::Artists) => "Artists".to_string(),
            Scope::Catalog(CatalogMode::Albums) => "Albums".to_string(),
            Scope::ArtistDetail(artist) => artist.clone(),
            Scope::AlbumDetail { album, artist } => format!("{} — {}", album, artist),
            Scope::Stats => "Stats".to_string(),
        }
    }

    /// Resolve the scope to its raw track list. Catalog and stats scopes
    /// have no track slice of their own.
    pub(crate) fn tracks(&self, store: &TrackStore) -> Vec<Track> {
        match self {
            Scope::Liked => store.liked.clone(),
            Scope::Playlist(index) => store
                .playlists
                .get(*index)
                .map(|p| p.tracks.clone())
                .unwrap_or_default(),
            Scope::AllTracks => store.all_tracks_labelled(),
            Scope::ArtistDetail(artist) => store.artist_tracks(artist),
            Scope::AlbumDetail { album, artist } => store.album_tracks(album, artist),
            Scope::Catalog(_) | Scope::Stats => vec![],
        }
    }

    /// Whether the per-row source column applies: true for every scope whose
    /// slice mixes tracks from more than one source.
    pub(crate) fn is_multi_source(&self) -> bool {
        matches!(
            self,
            Scope::AllTracks | Scope::ArtistDetail(_) | Scope::AlbumDetail { .. }
        )
    }

    /// Detail scopes offer the dedup toggle; a single playlist cannot
    /// contain the same record twice.
    pub(crate) fn is_detail(&self) -> bool {
        matches!(
            self,
            Scope::AllTracks | Scope::ArtistDetail(_) | Scope::AlbumDetail { .. }
        )
    }

    pub(crate) fn catalog_mode(&self) -> Option<CatalogMode> {
        match self {
            Scope::Catalog(mode) => Some(*mode),
            _ => None,
        }
    }
}

/// Back-navigation stack. Selecting directly from the sidebar clears it;
/// drilling into a detail view pushes the scope it came from.
#[derive(Debug, Default)]
pub(crate) struct NavHistory {
    entries: Vec<Scope>,
}

impl NavHistory {
    pub(crate) fn push(&mut self, scope: Scope) {
        self.entries.push(scope);
    }

    pub(crate) fn pop(&mut self) -> Option<Scope> {
        self.entries.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::track;
    use crate::model::Playlist;

    fn store() -> TrackStore {
        TrackStore {
            liked: vec![track("Liked One", "Bee", "Hive", Some("spotify:track:a"))],
            playlists: vec![Playlist {
                name: "Road Trip".to_string(),
                last_modified: "2024-06-01".to_string(),
                tracks: vec![track("Two", "Bee", "Hive", Some("spotify:track:b"))],
                local_count: 0,
            }],
        }
    }

    #[test]
    fn all_tracks_scope_concatenates_liked_then_playlists() {
        let store = store();
        let tracks = Scope::AllTracks.tracks(&store);
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].source.as_deref(), Some("Liked Songs"));
        assert_eq!(tracks[1].source.as_deref(), Some("Road Trip"));
    }

    #[test]
    fn playlist_scope_has_single_source() {
        let store = store();
        let scope = Scope::Playlist(0);
        assert!(!scope.is_multi_source());
        assert_eq!(scope.tracks(&store).len(), 1);
        assert_eq!(scope.title(&store), "Road Trip");
    }

    #[test]
    fn nav_history_empties_on_pop_and_clear() {
        let mut history = NavHistory::default();
        assert!(history.is_empty());

        history.push(Scope::Liked);
        history.push(Scope::Catalog(CatalogMode::Artists));
        assert!(!history.is_empty());

        assert_eq!(history.pop(), Some(Scope::Catalog(CatalogMode::Artists)));
        assert_eq!(history.pop(), Some(Scope::Liked));
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);

        history.push(Scope::Stats);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn album_detail_title_joins_album_and_artist() {
        let scope = Scope::AlbumDetail {
            album: "Hive".to_string(),
            artist: "Bee".to_string(),
        };
        assert_eq!(scope.title(&store()), "Hive — Bee");
        assert!(scope.is_detail());
    }
}
