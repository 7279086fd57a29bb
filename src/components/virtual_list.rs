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

//! Shared scrolling state for a virtualized list.
//!
//! Glues the windowing engine, the reconciler and a [`TextSurface`]
//! together with a cursor. Cursor movement updates the scroll position
//! immediately (so the next draw is visually correct, buffered rows cover
//! the gap) but reconciliation is deferred to the frame tick, so any number
//! of scroll inputs inside one frame cost a single reconcile pass.

use crate::components::surface::TextSurface;
use crate::list::reconcile::{ReconcileStats, RowReconciler};
use crate::list::schedule::FrameCoalescer;
use crate::list::window::ListMetrics;

pub(crate) struct VirtualList<C> {
    metrics: ListMetrics,
    total_rows: usize,
    cursor: usize,
    scroll_offset: u64,
    pending_scroll: FrameCoalescer<u64>,
    viewport_height: u64,
    reconciler: RowReconciler<TextSurface<C>>,
    surface: TextSurface<C>,
}

impl<C> VirtualList<C> {
    pub(crate) fn new(metrics: ListMetrics) -> Self {
        Self {
            metrics,
            total_rows: 0,
            cursor: 0,
            scroll_offset: 0,
            pending_scroll: FrameCoalescer::default(),
            viewport_height: 0,
            reconciler: RowReconciler::new(metrics),
            surface: TextSurface::default(),
        }
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Vertical offset of the cursor row, in the same units as the scroll
    /// offset and the surface row positions.
    pub(crate) fn cursor_offset(&self) -> u64 {
        self.metrics.row_offset(self.cursor)
    }

    pub(crate) fn surface(&self) -> &TextSurface<C> {
        &self.surface
    }

    /// Replace the backing list wholesale and reset the window to the top.
    /// The new window is reconciled synchronously; a scope switch or filter
    /// recompute must never leave stale rows on screen.
    pub(crate) fn reset(&mut self, total_rows: usize, bind: impl FnMut(usize) -> C) {
        self.total_rows = total_rows;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.pending_scroll.take();
        self.reconciler.reset(&mut self.surface, total_rows);
        let needed = self
            .metrics
            .window(0, self.viewport_height, self.total_rows);
        self.reconciler.reconcile(needed, &mut self.surface, bind);
    }

    /// Record the viewport size seen at draw time. A resize schedules a
    /// reconcile for the next frame.
    pub(crate) fn set_viewport_height(&mut self, viewport_height: u64) {
        if viewport_height != self.viewport_height {
            self.viewport_height = viewport_height;
            self.clamp_scroll();
            self.pending_scroll.push(self.scroll_offset);
        }
    }

    pub(crate) fn move_cursor(&mut self, delta: isize) {
        if self.total_rows == 0 {
            return;
        }
        let last = self.total_rows - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.scroll_cursor_into_view();
    }

    pub(crate) fn cursor_to_start(&mut self) {
        self.cursor = 0;
        self.scroll_cursor_into_view();
    }

    pub(crate) fn cursor_to_end(&mut self) {
        if self.total_rows == 0 {
            return;
        }
        self.cursor = self.total_rows - 1;
        self.scroll_cursor_into_view();
    }

    pub(crate) fn page(&mut self, direction: isize) {
        let rows_per_page = (self.viewport_height / self.metrics.row_height).max(1) as isize;
        self.move_cursor(direction * rows_per_page);
    }

    /// Drain the pending scroll position and reconcile once. Called at the
    /// frame boundary; intermediate scroll values pushed since the last
    /// frame have already been overwritten.
    pub(crate) fn on_frame(&mut self, bind: impl FnMut(usize) -> C) -> Option<ReconcileStats> {
        let offset = self.pending_scroll.take()?;
        let needed = self
            .metrics
            .window(offset, self.viewport_height, self.total_rows);
        Some(self.reconciler.reconcile(needed, &mut self.surface, bind))
    }

    fn scroll_cursor_into_view(&mut self) {
        let row_top = self.metrics.row_offset(self.cursor);
        let row_bottom = row_top + self.metrics.row_height;

        let mut offset = self.scroll_offset;
        if row_top < offset {
            offset = row_top;
        } else if row_bottom > offset + self.viewport_height {
            offset = row_bottom.saturating_sub(self.viewport_height);
        }

        if offset != self.scroll_offset {
            self.scroll_offset = offset;
        }
        // Reconciliation is deferred even when the offset is unchanged; the
        // cursor may have moved into a not-yet-materialized buffer row.
        self.pending_scroll.push(self.scroll_offset);
    }

    fn clamp_scroll(&mut self) {
        let max = self
            .metrics
            .max_scroll(self.total_rows, self.viewport_height);
        self.scroll_offset = self.scroll_offset.min(max);
    }
}
