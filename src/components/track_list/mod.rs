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

//! The virtualized track list component.
//!
//! Holds a scope's raw track list, the current pipeline output, the filter
//! input with its debounce timer, and the sort/dedup toggles. The pipeline
//! output is recomputed wholesale on every trigger and replaces the list the
//! windowing engine consumes; every replacement resets the view to the top.

mod render;

use std::time::Instant;

use tui_input::Input;

use crate::components::virtual_list::VirtualList;
use crate::components::LIST_METRICS;
use crate::list::schedule::{Debouncer, FILTER_DEBOUNCE};
use crate::model::Track;
use crate::pipeline::{self, PipelineOptions, SortColumn, SortState};

/// Primary label of a row: a link when the catalog page is resolvable, a
/// marked plain label for local files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PrimaryLabel {
    Linked { text: String, url: String },
    Local(String),
    Plain(String),
}

/// Bound display content of one materialized row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowContent {
    pub(crate) rank: usize,
    pub(crate) primary: PrimaryLabel,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) source: String,
    pub(crate) date: String,
}

fn bind_row(track: &Track, index: usize) -> RowContent {
    let primary = match track.catalog_url() {
        Some(url) => PrimaryLabel::Linked {
            text: track.name.clone(),
            url,
        },
        None if track.local => PrimaryLabel::Local(track.name.clone()),
        None => PrimaryLabel::Plain(track.name.clone()),
    };
    RowContent {
        rank: index + 1,
        primary,
        artist: track.artist.clone(),
        album: track.album.clone(),
        source: track.source.clone().unwrap_or_default(),
        date: track.date.clone().unwrap_or_default(),
    }
}

/// Which empty-state message applies when no rows are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmptyState {
    /// The scope itself has no tracks.
    NoTracks,
    /// The scope has tracks but none match the filter.
    NoMatches,
}

impl EmptyState {
    pub(crate) fn message(&self) -> &'static str {
        match self {
            EmptyState::NoTracks => "No tracks",
            EmptyState::NoMatches => "No matching tracks",
        }
    }
}

pub(crate) struct TrackListState {
    /// The scope's raw track list; pipeline input.
    tracks: Vec<Track>,
    /// Current pipeline output; immutable until the next trigger.
    rows: Vec<Track>,

    pub(crate) filter: Input,
    debounce: Debouncer,
    pub(crate) sort: SortState,
    pub(crate) dedup: bool,
    /// Dedup toggle only offered on detail scopes.
    pub(crate) dedup_available: bool,

    /// Source column applies to multi-source scopes only.
    show_source: bool,
    /// Decided once per full render: shown iff any row carries a date.
    show_date: bool,

    pub(crate) list: VirtualList<RowContent>,
}

impl TrackListState {
    pub(crate) fn new() -> Self {
        Self {
            tracks: vec![],
            rows: vec![],
            filter: Input::default(),
            debounce: Debouncer::new(FILTER_DEBOUNCE),
            sort: SortState::default(),
            dedup: false,
            dedup_available: false,
            show_source: false,
            show_date: false,
            list: VirtualList::new(LIST_METRICS),
        }
    }

    pub(crate) fn rows(&self) -> &[Track] {
        &self.rows
    }

    pub(crate) fn show_source(&self) -> bool {
        self.show_source
    }

    pub(crate) fn show_date(&self) -> bool {
        self.show_date
    }

    pub(crate) fn cursor_track(&self) -> Option<&Track> {
        self.rows.get(self.list.cursor())
    }

    pub(crate) fn empty_state(&self) -> Option<EmptyState> {
        if !self.rows.is_empty() {
            None
        } else if self.tracks.is_empty() {
            Some(EmptyState::NoTracks)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    /// Install a new scope's tracks. Happens synchronously with the scope
    /// switch: the pending debounce is discarded and the window reset in
    /// the same step, so no stale recompute can apply afterwards.
    pub(crate) fn set_scope_tracks(
        &mut self,
        tracks: Vec<Track>,
        multi_source: bool,
        dedup_available: bool,
        hide_local: bool,
    ) {
        self.tracks = tracks;
        self.show_source = multi_source;
        self.dedup_available = dedup_available;
        self.filter = Input::default();
        self.debounce.cancel();
        self.sort.reset();
        self.dedup = false;
        self.refilter(hide_local);
    }

    /// A filter keystroke was applied to the input; restart the debounce
    /// timer. The recompute fires with whatever text is present when the
    /// timer elapses.
    pub(crate) fn on_filter_edit(&mut self, now: Instant) {
        self.debounce.schedule(now);
    }

    /// Clearing the filter (escape) skips the debounce entirely.
    pub(crate) fn clear_filter(&mut self, hide_local: bool) {
        self.filter = Input::default();
        self.debounce.cancel();
        self.refilter(hide_local);
    }

    pub(crate) fn toggle_sort(&mut self, column: SortColumn, hide_local: bool) {
        self.sort.toggle(column);
        self.refilter(hide_local);
    }

    pub(crate) fn toggle_dedup(&mut self, hide_local: bool) {
        if !self.dedup_available {
            return;
        }
        self.dedup = !self.dedup;
        self.refilter(hide_local);
    }

    /// Frame boundary: fire a due debounce, then run the single coalesced
    /// reconcile pass for any scrolling since the last frame.
    pub(crate) fn on_frame(&mut self, now: Instant, hide_local: bool) {
        if self.debounce.fire(now) {
            self.refilter(hide_local);
        }
        let rows = &self.rows;
        self.list.on_frame(|i| bind_row(&rows[i], i));
    }

    /// Rerun the full pipeline and replace the displayed list.
    pub(crate) fn refilter(&mut self, hide_local: bool) {
        let options = PipelineOptions {
            filter: self.filter.value(),
            sort: self.sort,
            dedup: self.dedup,
            hide_local,
        };
        self.rows = pipeline::run(&self.tracks, &options);
        self.show_date = self.rows.iter().any(|t| t.date.is_some());

        let rows = &self.rows;
        self.list.reset(rows.len(), |i| bind_row(&rows[i], i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::track;
    use std::time::Duration;

    fn dated(name: &str, artist: &str, date: &str) -> Track {
        let mut t = track(name, artist, "", None);
        t.uri = Some(format!("spotify:track:{}", name.to_lowercase()));
        t.date = Some(date.to_string());
        t
    }

    fn state_with(tracks: Vec<Track>) -> TrackListState {
        let mut state = TrackListState::new();
        state.list.set_viewport_height(10);
        state.set_scope_tracks(tracks, false, true, false);
        state
    }

    fn type_filter(state: &mut TrackListState, text: &str, now: Instant) {
        state.filter = Input::new(text.to_string());
        state.on_filter_edit(now);
    }

    #[test]
    fn debounced_edits_recompute_once_with_final_text() {
        let start = Instant::now();
        let mut state = state_with(vec![
            track("Alpha", "A", "", Some("spotify:track:1")),
            track("Beta", "B", "", Some("spotify:track:2")),
        ]);

        // Three keystrokes inside the debounce window; only the last value
        // ever reaches the pipeline.
        type_filter(&mut state, "a", start);
        type_filter(&mut state, "al", start + Duration::from_millis(40));
        type_filter(&mut state, "alp", start + Duration::from_millis(80));

        // Not yet due.
        state.on_frame(start + Duration::from_millis(150), false);
        assert_eq!(state.rows().len(), 2);

        state.on_frame(start + Duration::from_millis(210), false);
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.rows()[0].name, "Alpha");
    }

    #[test]
    fn scope_switch_discards_pending_recompute() {
        let start = Instant::now();
        let mut state = state_with(vec![track("Alpha", "A", "", Some("spotify:track:1"))]);

        type_filter(&mut state, "zzz", start);
        state.set_scope_tracks(
            vec![track("Beta", "B", "", Some("spotify:track:2"))],
            false,
            false,
            false,
        );

        // The pending "zzz" filter died with the old scope.
        state.on_frame(start + Duration::from_millis(500), false);
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.filter.value(), "");
    }

    #[test]
    fn replacement_resets_the_window_to_the_top() {
        let tracks: Vec<Track> = (0..100)
            .map(|i| track(&format!("T{}", i), "A", "", None))
            .collect();
        let mut state = state_with(tracks);

        state.list.move_cursor(50);
        state.on_frame(Instant::now(), false);
        assert!(state.list.scroll_offset() > 0);

        state.toggle_sort(SortColumn::Name, false);
        assert_eq!(state.list.scroll_offset(), 0);
        assert_eq!(state.list.cursor(), 0);
    }

    #[test]
    fn date_column_visibility_is_decided_per_render() {
        let mut state = state_with(vec![
            dated("One", "A", "2024-01-01"),
            track("Two", "B", "", Some("spotify:track:2")),
        ]);
        assert!(state.show_date());

        // Filter down to the undated track: the column disappears entirely.
        state.filter = Input::new("Two".to_string());
        state.refilter(false);
        assert!(!state.show_date());
    }

    #[test]
    fn empty_states_distinguish_no_tracks_from_no_matches() {
        let mut state = state_with(vec![]);
        assert_eq!(state.empty_state(), Some(EmptyState::NoTracks));

        state.set_scope_tracks(
            vec![track("Only", "A", "", Some("spotify:track:1"))],
            false,
            false,
            false,
        );
        assert_eq!(state.empty_state(), None);

        state.filter = Input::new("nope".to_string());
        state.refilter(false);
        assert_eq!(state.empty_state(), Some(EmptyState::NoMatches));
    }

    #[test]
    fn dedup_toggle_requires_a_detail_scope() {
        let duplicated = vec![
            track("Same", "A", "", Some("spotify:track:dup")),
            track("Same", "A", "", Some("spotify:track:dup")),
        ];
        let mut state = TrackListState::new();
        state.list.set_viewport_height(10);
        state.set_scope_tracks(duplicated.clone(), true, false, false);

        state.toggle_dedup(false);
        assert_eq!(state.rows().len(), 2);

        state.set_scope_tracks(duplicated, true, true, false);
        state.toggle_dedup(false);
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn rows_bind_rank_labels_and_link_kind() {
        let mut local = track("Tape", "Bee", "Boots", None);
        local.local = true;
        let state = state_with(vec![
            track("Buzz", "Bee", "Hive", Some("spotify:track:abc")),
            local,
        ]);

        let row0 = bind_row(&state.rows()[0], 0);
        assert_eq!(row0.rank, 1);
        assert_eq!(
            row0.primary,
            PrimaryLabel::Linked {
                text: "Buzz".to_string(),
                url: "https://open.spotify.com/track/abc".to_string(),
            }
        );

        let row1 = bind_row(&state.rows()[1], 1);
        assert_eq!(row1.rank, 2);
        assert_eq!(row1.primary, PrimaryLabel::Local("Tape".to_string()));
    }
}
