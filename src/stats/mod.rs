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

//! Library statistics overview.
//!
//! Aggregate numbers for the stats scope. The per-artist and per-album
//! rollups come straight from the [`LibraryIndex`]; this module adds the
//! unique/local counts computed over the same deduped pass.

use std::collections::HashSet;

use crate::index::LibraryIndex;
use crate::model::{CatalogItem, TrackStore};

const TOP_LIST_LEN: usize = 5;

#[derive(Debug, Default)]
pub(crate) struct LibraryStats {
    pub(crate) liked_count: usize,
    pub(crate) playlist_count: usize,
    pub(crate) total_tracks: usize,
    pub(crate) unique_tracks: usize,
    pub(crate) unique_artists: usize,
    pub(crate) unique_albums: usize,
    pub(crate) local_tracks: usize,
    pub(crate) top_artists: Vec<CatalogItem>,
    pub(crate) top_albums: Vec<CatalogItem>,
}

impl LibraryStats {
    pub(crate) fn collect(store: &TrackStore, index: &LibraryIndex) -> Self {
        let mut seen = HashSet::new();
        let mut unique_tracks = 0;
        let mut local_tracks = 0;
        for track in store.all_tracks() {
            if seen.insert(track.dedup_key()) {
                unique_tracks += 1;
                if track.local {
                    local_tracks += 1;
                }
            }
        }

        Self {
            liked_count: store.liked.len(),
            playlist_count: store.playlists.len(),
            total_tracks: store.total_tracks(),
            unique_tracks,
            unique_artists: index.artists.len(),
            unique_albums: index.albums.len(),
            local_tracks,
            top_artists: index.artists.iter().take(TOP_LIST_LEN).cloned().collect(),
            top_albums: index.albums.iter().take(TOP_LIST_LEN).cloned().collect(),
        }
    }

    /// Share of unique tracks that are local files, in percent.
    pub(crate) fn local_pct(&self) -> f64 {
        if self.unique_tracks == 0 {
            0.0
        } else {
            self.local_tracks as f64 * 100.0 / self.unique_tracks as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::track;
    use crate::model::Playlist;

    #[test]
    fn unique_and_local_counts_are_deduped() {
        let mut local = track("Tape", "Bee", "Bootlegs", None);
        local.local = true;
        let store = TrackStore {
            liked: vec![track("Buzz", "Bee", "Hive", Some("spotify:track:dup"))],
            playlists: vec![Playlist {
                name: "Mix".to_string(),
                last_modified: String::new(),
                tracks: vec![
                    track("Buzz", "Bee", "Hive", Some("spotify:track:dup")),
                    local,
                ],
                local_count: 1,
            }],
        };
        let index = LibraryIndex::build(&store, false);
        let stats = LibraryStats::collect(&store, &index);

        assert_eq!(stats.total_tracks, 3);
        assert_eq!(stats.unique_tracks, 2);
        assert_eq!(stats.local_tracks, 1);
        assert_eq!(stats.unique_artists, 1);
        assert!((stats.local_pct() - 50.0).abs() < f64::EPSILON);
    }
}
