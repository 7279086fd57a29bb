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

//! The artist/album catalog list component.
//!
//! Same virtualized machinery as the track list but over the pre-ranked
//! catalog aggregates, with the reduced pipeline: a substring filter and
//! nothing else. Activating a row opens the matching detail scope.

mod render;

use std::time::Instant;

use tui_input::Input;

use crate::components::virtual_list::VirtualList;
use crate::components::LIST_METRICS;
use crate::list::schedule::{Debouncer, FILTER_DEBOUNCE};
use crate::model::scope::CatalogMode;
use crate::model::CatalogItem;
use crate::pipeline;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogRowContent {
    pub(crate) rank: usize,
    pub(crate) name: String,
    pub(crate) artist: Option<String>,
    pub(crate) count: usize,
}

fn bind_row(item: &CatalogItem, index: usize) -> CatalogRowContent {
    CatalogRowContent {
        rank: index + 1,
        name: item.name.clone(),
        artist: item.artist.clone(),
        count: item.count,
    }
}

pub(crate) struct CatalogListState {
    mode: CatalogMode,
    items: Vec<CatalogItem>,
    rows: Vec<CatalogItem>,

    pub(crate) filter: Input,
    debounce: Debouncer,

    pub(crate) list: VirtualList<CatalogRowContent>,
}

impl CatalogListState {
    pub(crate) fn new() -> Self {
        Self {
            mode: CatalogMode::Artists,
            items: vec![],
            rows: vec![],
            filter: Input::default(),
            debounce: Debouncer::new(FILTER_DEBOUNCE),
            list: VirtualList::new(LIST_METRICS),
        }
    }

    pub(crate) fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub(crate) fn rows(&self) -> &[CatalogItem] {
        &self.rows
    }

    /// The item under the cursor, for detail-scope activation.
    pub(crate) fn cursor_item(&self) -> Option<&CatalogItem> {
        self.rows.get(self.list.cursor())
    }

    /// Install the ranked aggregate for a catalog scope. The pending
    /// debounce is discarded together with the old filter text.
    pub(crate) fn set_items(&mut self, mode: CatalogMode, items: Vec<CatalogItem>) {
        self.mode = mode;
        self.items = items;
        self.filter = Input::default();
        self.debounce.cancel();
        self.refilter();
    }

    pub(crate) fn on_filter_edit(&mut self, now: Instant) {
        self.debounce.schedule(now);
    }

    pub(crate) fn clear_filter(&mut self) {
        self.filter = Input::default();
        self.debounce.cancel();
        self.refilter();
    }

    pub(crate) fn on_frame(&mut self, now: Instant) {
        if self.debounce.fire(now) {
            self.refilter();
        }
        let rows = &self.rows;
        self.list.on_frame(|i| bind_row(&rows[i], i));
    }

    fn refilter(&mut self) {
        self.rows = pipeline::filter_catalog(&self.items, self.filter.value());
        let rows = &self.rows;
        self.list.reset(rows.len(), |i| bind_row(&rows[i], i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn item(name: &str, artist: Option<&str>, count: usize) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            artist: artist.map(str::to_string),
            count,
        }
    }

    #[test]
    fn filter_narrows_without_reordering() {
        let mut state = CatalogListState::new();
        state.list.set_viewport_height(10);
        state.set_items(
            CatalogMode::Artists,
            vec![item("Beekeepers", None, 9), item("Wasps", None, 4), item("Bees", None, 2)],
        );

        let start = Instant::now();
        state.filter = Input::new("bee".to_string());
        state.on_filter_edit(start);
        state.on_frame(start + Duration::from_millis(200));

        let names: Vec<&str> = state.rows().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Beekeepers", "Bees"]);
        assert_eq!(state.list.cursor(), 0);
    }

    #[test]
    fn cursor_item_follows_the_filtered_rows() {
        let mut state = CatalogListState::new();
        state.list.set_viewport_height(10);
        state.set_items(
            CatalogMode::Albums,
            vec![
                item("Hive", Some("Bee"), 12),
                item("Nest", Some("Wasp"), 3),
            ],
        );

        state.list.move_cursor(1);
        let cursor = state.cursor_item().expect("row under cursor");
        assert_eq!(cursor.name, "Nest");
        assert_eq!(cursor.artist.as_deref(), Some("Wasp"));
    }

    #[test]
    fn album_filter_matches_the_artist_qualifier() {
        let mut state = CatalogListState::new();
        state.list.set_viewport_height(10);
        state.set_items(
            CatalogMode::Albums,
            vec![
                item("Hive", Some("Bee"), 12),
                item("Nest", Some("Wasp"), 3),
            ],
        );

        let start = Instant::now();
        state.filter = Input::new("wasp".to_string());
        state.on_filter_edit(start);
        state.on_frame(start + Duration::from_millis(200));

        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.rows()[0].name, "Nest");
    }
}
