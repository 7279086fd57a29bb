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

//! Viewport windowing arithmetic.
//!
//! Maps a scroll offset and viewport size to the minimal half-open index
//! range that must be materialized. All functions here are pure and
//! synchronous; deferring the expensive reconciliation step to a frame
//! boundary is the caller's job (see [`super::schedule`]).

use std::ops::Range;

/// A half-open row index range, always within `[0, total_rows)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ViewWindow {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl ViewWindow {
    pub(crate) const EMPTY: ViewWindow = ViewWindow { start: 0, end: 0 };

    pub(crate) fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub(crate) fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub(crate) fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Fixed per-build geometry of a virtualized list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ListMetrics {
    /// Height of every row, in surface units. Fixed; variable row heights
    /// are out of scope.
    pub(crate) row_height: u64,
    /// Extra rows materialized above and below the visible range.
    pub(crate) buffer_rows: usize,
}

impl ListMetrics {
    /// Total scrollable extent of the list.
    pub(crate) fn extent(&self, total_rows: usize) -> u64 {
        total_rows as u64 * self.row_height
    }

    /// Fixed vertical offset of a row, relative to the list top.
    pub(crate) fn row_offset(&self, index: usize) -> u64 {
        index as u64 * self.row_height
    }

    /// Largest scroll offset that still fills the viewport.
    pub(crate) fn max_scroll(&self, total_rows: usize, viewport_height: u64) -> u64 {
        self.extent(total_rows).saturating_sub(viewport_height)
    }

    /// Upper bound on materialized rows for a given viewport, regardless of
    /// the total row count and the scroll offset. [`window`](Self::window)
    /// keeps this bound by borrowing from the leading buffer when a mid-row
    /// offset intersects an extra row; with zero buffer rows viewport
    /// coverage wins over the bound.
    pub(crate) fn max_materialized(&self, viewport_height: u64) -> usize {
        viewport_height.div_ceil(self.row_height) as usize + 2 * self.buffer_rows
    }

    /// Compute the index range that must be on screen for the given scroll
    /// position. An empty list yields the empty window; the caller is
    /// expected to suppress the row surface and show an empty-state message
    /// instead of rendering anything.
    pub(crate) fn window(
        &self,
        scroll_offset: u64,
        viewport_height: u64,
        total_rows: usize,
    ) -> ViewWindow {
        if total_rows == 0 {
            return ViewWindow::EMPTY;
        }

        let first_visible = (scroll_offset / self.row_height) as usize;
        let last_needed =
            (scroll_offset + viewport_height).div_ceil(self.row_height) as usize;

        let end = last_needed.saturating_add(self.buffer_rows).min(total_rows);
        let mut start = first_visible.saturating_sub(self.buffer_rows).min(end);

        // A mid-row offset intersects one more row than an aligned one.
        // Take the excess out of the leading buffer; start never moves past
        // the first visible row, so coverage holds even with no buffer.
        let bound = self.max_materialized(viewport_height);
        if end - start > bound {
            start = (end - bound).min(first_visible);
        }

        ViewWindow { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: ListMetrics = ListMetrics {
        row_height: 34,
        buffer_rows: 10,
    };

    #[test]
    fn window_at_top_has_no_leading_buffer() {
        let w = METRICS.window(0, 340, 1000);
        assert_eq!(w, ViewWindow { start: 0, end: 20 });
    }

    #[test]
    fn window_mid_scroll_covers_viewport_plus_buffer() {
        // Row 100 at the top of a 10-row viewport.
        let w = METRICS.window(3400, 340, 1000);
        assert_eq!(w, ViewWindow { start: 90, end: 120 });
        assert_eq!(w.len(), 30);
    }

    #[test]
    fn window_is_clamped_to_total_rows() {
        let w = METRICS.window(METRICS.max_scroll(1000, 340), 340, 1000);
        assert_eq!(w.end, 1000);

        let w = METRICS.window(0, 340, 5);
        assert_eq!(w, ViewWindow { start: 0, end: 5 });
    }

    #[test]
    fn empty_list_yields_empty_window() {
        let w = METRICS.window(0, 340, 0);
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
    }

    #[test]
    fn partial_row_at_viewport_edge_is_included() {
        // 350px viewport over 34px rows shows a sliver of an 11th row.
        let metrics = ListMetrics {
            row_height: 34,
            buffer_rows: 0,
        };
        let w = metrics.window(0, 350, 1000);
        assert_eq!(w, ViewWindow { start: 0, end: 11 });
    }

    #[test]
    fn window_never_exceeds_materialization_bound() {
        let viewport_height = 340;
        let bound = METRICS.max_materialized(viewport_height);
        for total_rows in [0usize, 1, 9, 10, 11, 100, 1000, 100_000] {
            let max_scroll = METRICS.max_scroll(total_rows, viewport_height);
            // Offsets both aligned to the row grid and mid-row.
            let offsets = [
                0,
                17,
                max_scroll / 3,
                max_scroll / 3 + 17,
                max_scroll / 2,
                max_scroll.saturating_sub(5),
                max_scroll,
            ];
            for scroll in offsets {
                let scroll = scroll.min(max_scroll);
                let w = METRICS.window(scroll, viewport_height, total_rows);
                assert!(
                    w.len() <= bound,
                    "rows={} scroll={} window={:?}",
                    total_rows,
                    scroll,
                    w
                );
                assert!(w.end <= total_rows);
            }
        }
    }

    #[test]
    fn mid_row_offset_borrows_from_the_leading_buffer() {
        // Row 100 half-scrolled off the top; rows 100..=110 intersect the
        // viewport, one more than at an aligned offset. The leading buffer
        // shrinks by one so the bound still holds.
        let w = METRICS.window(3417, 340, 1000);
        assert_eq!(w, ViewWindow { start: 91, end: 121 });
        assert_eq!(w.len(), METRICS.max_materialized(340));
        assert!(w.contains(100) && w.contains(110));
    }

    #[test]
    fn extent_is_rows_times_row_height() {
        assert_eq!(METRICS.extent(1000), 34_000);
        assert_eq!(METRICS.row_offset(100), 3400);
    }
}
