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

//! Aggregate artist/album index.
//!
//! A single pass over the store produces the two catalog rollups. Tracks are
//! deduplicated first, so an album pinned in five playlists still counts its
//! tracks once. The index is rebuilt only when the store changes or the
//! local-track-visibility setting changes, never on filter-text edits.

use std::collections::{HashMap, HashSet};

use crate::model::{CatalogItem, TrackStore};

#[derive(Debug, Default)]
pub(crate) struct LibraryIndex {
    /// Artists, descending by deduped track count.
    pub(crate) artists: Vec<CatalogItem>,
    /// Albums qualified by owning artist, descending by deduped track count.
    pub(crate) albums: Vec<CatalogItem>,
}

impl LibraryIndex {
    /// Build both rollups in one pass.
    ///
    /// Counts are keyed by lowercased artist and lowercased album|||artist;
    /// the first-encountered spelling names the entry. Equal counts keep
    /// first-encounter order across liked songs then playlists in store
    /// order: the sort is stable over insertion order, so the tie-break is
    /// deterministic for a given pass. Toggling `hide_local` re-derives that
    /// order from a fresh pass.
    pub(crate) fn build(store: &TrackStore, hide_local: bool) -> Self {
        let mut seen: HashSet<String> = HashSet::new();

        let mut artists: Vec<CatalogItem> = Vec::new();
        let mut artist_slots: HashMap<String, usize> = HashMap::new();

        let mut albums: Vec<CatalogItem> = Vec::new();
        let mut album_slots: HashMap<String, usize> = HashMap::new();

        for track in store.all_tracks() {
            if hide_local && track.local {
                continue;
            }
            if !seen.insert(track.dedup_key()) {
                continue;
            }

            let artist_key = track.artist.to_lowercase();
            let slot = *artist_slots.entry(artist_key).or_insert_with(|| {
                artists.push(CatalogItem {
                    name: track.artist.clone(),
                    artist: None,
                    count: 0,
                });
                artists.len() - 1
            });
            artists[slot].count += 1;

            let album_key = format!("{}|||{}", track.album, track.artist).to_lowercase();
            let slot = *album_slots.entry(album_key).or_insert_with(|| {
                albums.push(CatalogItem {
                    name: track.album.clone(),
                    artist: Some(track.artist.clone()),
                    count: 0,
                });
                albums.len() - 1
            });
            albums[slot].count += 1;
        }

        artists.sort_by(|a, b| b.count.cmp(&a.count));
        albums.sort_by(|a, b| b.count.cmp(&a.count));

        Self { artists, albums }
    }
}
