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

//! The filter/sort/dedup pipeline.
//!
//! A pure transformation from a scope's raw track list to the list the
//! renderer displays. Processing order is fixed: visibility filter, then
//! substring filter, then optional dedup, then optional stable sort. The
//! output is a fresh list that replaces, never patches, the one the
//! windowing engine consumes; the caller resets the view window to the top
//! on every replacement.

use std::collections::HashSet;

use crate::model::{CatalogItem, Track};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortColumn {
    Name,
    Artist,
    Album,
    Source,
    Date,
}

impl SortColumn {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Track",
            SortColumn::Artist => "Artist",
            SortColumn::Album => "Album",
            SortColumn::Source => "Source",
            SortColumn::Date => "Added",
        }
    }

    fn key<'a>(&self, track: &'a Track) -> &'a str {
        match self {
            SortColumn::Name => &track.name,
            SortColumn::Artist => &track.artist,
            SortColumn::Album => &track.album,
            SortColumn::Source => track.source.as_deref().unwrap_or(""),
            SortColumn::Date => track.date.as_deref().unwrap_or(""),
        }
    }
}

/// Current sort column and direction, with the header-toggle semantics:
/// toggling the active column flips direction, selecting a new column resets
/// to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SortState {
    pub(crate) column: Option<SortColumn>,
    pub(crate) descending: bool,
}

impl SortState {
    pub(crate) fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.descending = !self.descending;
        } else {
            self.column = Some(column);
            self.descending = false;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.column = None;
        self.descending = false;
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PipelineOptions<'a> {
    pub(crate) filter: &'a str,
    pub(crate) sort: SortState,
    pub(crate) dedup: bool,
    pub(crate) hide_local: bool,
}

/// Run the full pipeline over a scope's raw track list.
pub(crate) fn run(tracks: &[Track], options: &PipelineOptions) -> Vec<Track> {
    let query = options.filter.to_lowercase();

    let mut out: Vec<Track> = tracks
        .iter()
        .filter(|t| !(options.hide_local && t.local))
        .filter(|t| query.is_empty() || matches_query(t, &query))
        .cloned()
        .collect();

    if options.dedup {
        let mut seen = HashSet::new();
        out.retain(|t| seen.insert(t.dedup_key()));
    }

    if let Some(column) = options.sort.column {
        // Vec::sort_by is stable, so equal keys keep the order the previous
        // stage produced, in either direction.
        out.sort_by(|a, b| {
            let a_key = column.key(a).to_lowercase();
            let b_key = column.key(b).to_lowercase();
            if options.sort.descending {
                b_key.cmp(&a_key)
            } else {
                a_key.cmp(&b_key)
            }
        });
    }

    out
}

fn matches_query(track: &Track, query: &str) -> bool {
    track.name.to_lowercase().contains(query)
        || track.artist.to_lowercase().contains(query)
        || track.album.to_lowercase().contains(query)
}

/// Reduced pipeline for catalog mode: substring filter only. The backing
/// aggregate is already sorted at build time, so there is no sort or dedup
/// toggle.
pub(crate) fn filter_catalog(items: &[CatalogItem], filter: &str) -> Vec<CatalogItem> {
    let query = filter.to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query)
                || item
                    .artist
                    .as_ref()
                    .is_some_and(|a| a.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::track;

    fn options() -> PipelineOptions<'static> {
        PipelineOptions {
            filter: "",
            sort: SortState::default(),
            dedup: false,
            hide_local: false,
        }
    }

    fn names(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn empty_filter_is_a_no_op() {
        let tracks = vec![track("A", "X", "", None), track("B", "Y", "", None)];
        assert_eq!(run(&tracks, &options()).len(), 2);
    }

    #[test]
    fn substring_filter_matches_name_artist_or_album() {
        let tracks = vec![
            track("Helix", "Someone", "Else", None),
            track("Other", "Helium Club", "Else", None),
            track("Third", "Someone", "The Helpless", None),
            track("Miss", "Nobody", "Nothing", None),
        ];
        let opts = PipelineOptions {
            filter: "HEL",
            ..options()
        };
        assert_eq!(names(&run(&tracks, &opts)), vec!["Helix", "Other", "Third"]);
    }

    #[test]
    fn visibility_filter_runs_before_everything_else() {
        let mut local = track("Bootleg", "Bee", "", None);
        local.local = true;
        let tracks = vec![local, track("Keeper", "Bee", "", Some("spotify:track:a"))];

        let opts = PipelineOptions {
            hide_local: true,
            ..options()
        };
        assert_eq!(names(&run(&tracks, &opts)), vec!["Keeper"]);
    }

    #[test]
    fn dedup_retains_first_occurrence_in_input_order() {
        let tracks = vec![
            track("First", "Bee", "Hive", Some("spotify:track:dup")),
            track("Unrelated", "Wasp", "Nest", Some("spotify:track:other")),
            track("Second Copy", "Bee", "Hive", Some("spotify:track:dup")),
        ];
        let opts = PipelineOptions {
            dedup: true,
            ..options()
        };
        let out = run(&tracks, &opts);
        assert_eq!(names(&out), vec!["First", "Unrelated"]);
    }

    #[test]
    fn dedup_key_is_case_insensitive_for_uriless_tracks() {
        let tracks = vec![
            track("Same Song", "The Band", "", None),
            track("SAME SONG", "the band", "", None),
        ];
        let opts = PipelineOptions {
            dedup: true,
            ..options()
        };
        assert_eq!(names(&run(&tracks, &opts)), vec!["Same Song"]);
    }

    #[test]
    fn sort_is_case_insensitive_and_stable() {
        let mut a1 = track("alpha", "Zed", "", None);
        a1.date = Some("2021-01-01".to_string());
        let mut a2 = track("Alpha", "Abe", "", None);
        a2.date = Some("2022-01-01".to_string());
        let tracks = vec![track("beta", "Mid", "", None), a1, a2];

        let mut sort = SortState::default();
        sort.toggle(SortColumn::Name);
        let opts = PipelineOptions { sort, ..options() };
        let out = run(&tracks, &opts);

        // "alpha" and "Alpha" compare equal after lowercasing; input order
        // between them is preserved.
        assert_eq!(names(&out), vec!["alpha", "Alpha", "beta"]);
        assert_eq!(out[0].artist, "Zed");
    }

    #[test]
    fn descending_sort_preserves_tie_order_too() {
        let tracks = vec![
            track("Tie", "first", "", Some("spotify:track:a")),
            track("tie", "second", "", Some("spotify:track:b")),
            track("Apple", "third", "", Some("spotify:track:c")),
        ];
        let sort = SortState {
            column: Some(SortColumn::Name),
            descending: true,
        };
        let opts = PipelineOptions { sort, ..options() };
        let out = run(&tracks, &opts);
        assert_eq!(names(&out), vec!["Tie", "tie", "Apple"]);
    }

    #[test]
    fn missing_sort_values_compare_as_empty() {
        let mut dated = track("Dated", "A", "", None);
        dated.date = Some("2020-05-05".to_string());
        let undated = track("Undated", "B", "", None);
        let tracks = vec![dated, undated];

        let sort = SortState {
            column: Some(SortColumn::Date),
            descending: false,
        };
        let opts = PipelineOptions { sort, ..options() };
        assert_eq!(names(&run(&tracks, &opts)), vec!["Undated", "Dated"]);
    }

    #[test]
    fn toggle_flips_direction_and_new_column_resets_it() {
        let mut sort = SortState::default();

        sort.toggle(SortColumn::Artist);
        assert_eq!(sort.column, Some(SortColumn::Artist));
        assert!(!sort.descending);

        sort.toggle(SortColumn::Artist);
        assert!(sort.descending);

        sort.toggle(SortColumn::Album);
        assert_eq!(sort.column, Some(SortColumn::Album));
        assert!(!sort.descending);
    }

    #[test]
    fn pipeline_stages_apply_in_fixed_order() {
        // A local duplicate must be dropped by the visibility filter before
        // dedup runs, so the catalog copy survives.
        let mut local = track("Song", "Bee", "Hive", None);
        local.local = true;
        let tracks = vec![local, track("Song", "Bee", "Hive", None)];

        let opts = PipelineOptions {
            dedup: true,
            hide_local: true,
            ..options()
        };
        let out = run(&tracks, &opts);
        assert_eq!(out.len(), 1);
        assert!(!out[0].local);
    }

    #[test]
    fn catalog_filter_matches_name_or_owning_artist() {
        let items = vec![
            CatalogItem {
                name: "Hive".to_string(),
                artist: Some("Bee".to_string()),
                count: 4,
            },
            CatalogItem {
                name: "Nest".to_string(),
                artist: Some("Wasp".to_string()),
                count: 2,
            },
        ];
        assert_eq!(filter_catalog(&items, "bee").len(), 1);
        assert_eq!(filter_catalog(&items, "Ne").len(), 1);
        assert_eq!(filter_catalog(&items, "").len(), 2);
    }
}
