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

//! Minimal-churn row reconciliation.
//!
//! The [`RowReconciler`] owns the mapping from row index to the handle of
//! the row materialized for it, and brings the surface into agreement with a
//! newly computed window using only create and remove operations. Rows whose
//! index survives from the previous window are never touched: repositioning
//! every visible row on every scroll tick would cost as much as a full
//! redraw and defeat the purpose of virtualization.
//!
//! The surface itself is abstract so the reconciler can be exercised in
//! tests without a real display.

use std::collections::HashMap;

use crate::list::window::{ListMetrics, ViewWindow};

/// The display side of the virtualized list: a container holding a spacer
/// that provides the scroll extent, plus individually addressable rows at
/// fixed offsets.
///
/// Rows are absolutely positioned against the spacer rather than flowed, so
/// inserting or removing one never moves its siblings.
pub(crate) trait RenderSurface {
    type Handle;
    type Content;

    /// Materialize a row at the fixed vertical offset for its index.
    fn attach_row(&mut self, index: usize, offset: u64, content: Self::Content) -> Self::Handle;

    /// Detach a previously materialized row.
    fn detach_row(&mut self, handle: Self::Handle);

    /// Resize the spacer that gives the container its scroll range.
    fn set_extent(&mut self, extent: u64);
}

/// Create/remove counts for a single reconcile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReconcileStats {
    pub(crate) created: usize,
    pub(crate) removed: usize,
}

impl ReconcileStats {
    pub(crate) fn total_ops(&self) -> usize {
        self.created + self.removed
    }
}

/// Owner of the index → row-handle mapping.
///
/// Nothing else may mutate the materialized set; the borrow checker enforces
/// what the design demands.
#[derive(Debug)]
pub(crate) struct RowReconciler<S: RenderSurface> {
    metrics: ListMetrics,
    bindings: HashMap<usize, S::Handle>,
}

impl<S: RenderSurface> RowReconciler<S> {
    pub(crate) fn new(metrics: ListMetrics) -> Self {
        Self {
            metrics,
            bindings: HashMap::new(),
        }
    }

    pub(crate) fn materialized_count(&self) -> usize {
        self.bindings.len()
    }

    /// Replace the backing list wholesale: drop every materialized row and
    /// resize the extent for the new row count. The caller follows up with a
    /// [`reconcile`](Self::reconcile) for the window at the top.
    pub(crate) fn reset(&mut self, surface: &mut S, total_rows: usize) {
        for (_, handle) in self.bindings.drain() {
            surface.detach_row(handle);
        }
        surface.set_extent(self.metrics.extent(total_rows));
    }

    /// Bring the materialized rows into agreement with `needed`.
    ///
    /// Removes every binding outside the window, then creates and binds a
    /// row for every window index that has none. Surviving bindings are left
    /// completely untouched. The number of operations is bounded by the
    /// symmetric difference between the previous and new windows, never by
    /// the total row count.
    pub(crate) fn reconcile(
        &mut self,
        needed: ViewWindow,
        surface: &mut S,
        mut bind: impl FnMut(usize) -> S::Content,
    ) -> ReconcileStats {
        let mut stats = ReconcileStats::default();

        let stale: Vec<usize> = self
            .bindings
            .keys()
            .copied()
            .filter(|index| !needed.contains(*index))
            .collect();
        for index in stale {
            if let Some(handle) = self.bindings.remove(&index) {
                surface.detach_row(handle);
                stats.removed += 1;
            }
        }

        for index in needed.indices() {
            if self.bindings.contains_key(&index) {
                continue;
            }
            let handle = surface.attach_row(index, self.metrics.row_offset(index), bind(index));
            self.bindings.insert(index, handle);
            stats.created += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: ListMetrics = ListMetrics {
        row_height: 34,
        buffer_rows: 10,
    };

    /// Recording surface: remembers attached rows and every operation.
    #[derive(Default)]
    struct TestSurface {
        next_handle: usize,
        rows: HashMap<usize, (usize, u64, String)>,
        extent: u64,
        attach_log: Vec<usize>,
        detach_log: Vec<usize>,
    }

    impl RenderSurface for TestSurface {
        type Handle = usize;
        type Content = String;

        fn attach_row(&mut self, index: usize, offset: u64, content: String) -> usize {
            let handle = self.next_handle;
            self.next_handle += 1;
            self.rows.insert(handle, (index, offset, content));
            self.attach_log.push(index);
            handle
        }

        fn detach_row(&mut self, handle: usize) {
            let (index, _, _) = self.rows.remove(&handle).expect("unknown handle");
            self.detach_log.push(index);
        }

        fn set_extent(&mut self, extent: u64) {
            self.extent = extent;
        }
    }

    fn window(start: usize, end: usize) -> ViewWindow {
        ViewWindow { start, end }
    }

    #[test]
    fn initial_reconcile_creates_every_needed_row() {
        let mut surface = TestSurface::default();
        let mut reconciler: RowReconciler<TestSurface> = RowReconciler::new(METRICS);

        let stats = reconciler.reconcile(window(90, 120), &mut surface, |i| format!("row {}", i));

        assert_eq!(stats, ReconcileStats { created: 30, removed: 0 });
        assert_eq!(reconciler.materialized_count(), 30);
        // Rows sit at their fixed offsets, positioned by index not by flow.
        assert!(surface.rows.values().any(|&(i, o, _)| i == 100 && o == 3400));
    }

    #[test]
    fn unchanged_window_performs_zero_operations() {
        let mut surface = TestSurface::default();
        let mut reconciler: RowReconciler<TestSurface> = RowReconciler::new(METRICS);

        reconciler.reconcile(window(0, 30), &mut surface, |i| i.to_string());
        surface.attach_log.clear();

        let stats = reconciler.reconcile(window(0, 30), &mut surface, |i| i.to_string());
        assert_eq!(stats.total_ops(), 0);
        assert!(surface.attach_log.is_empty());
        assert!(surface.detach_log.is_empty());
    }

    #[test]
    fn scroll_step_touches_only_the_symmetric_difference() {
        let mut surface = TestSurface::default();
        let mut reconciler: RowReconciler<TestSurface> = RowReconciler::new(METRICS);

        reconciler.reconcile(window(90, 120), &mut surface, |i| i.to_string());
        surface.attach_log.clear();

        // One row scrolled: indices 90..120 become 91..121.
        let stats = reconciler.reconcile(window(91, 121), &mut surface, |i| i.to_string());
        assert_eq!(stats, ReconcileStats { created: 1, removed: 1 });
        assert_eq!(surface.attach_log, vec![120]);
        assert_eq!(surface.detach_log, vec![90]);
    }

    #[test]
    fn disjoint_jump_swaps_the_whole_window() {
        let mut surface = TestSurface::default();
        let mut reconciler: RowReconciler<TestSurface> = RowReconciler::new(METRICS);

        reconciler.reconcile(window(0, 30), &mut surface, |i| i.to_string());
        let stats = reconciler.reconcile(window(500, 530), &mut surface, |i| i.to_string());

        assert_eq!(stats, ReconcileStats { created: 30, removed: 30 });
        assert_eq!(reconciler.materialized_count(), 30);
    }

    #[test]
    fn surviving_rows_are_never_rebound() {
        let mut surface = TestSurface::default();
        let mut reconciler: RowReconciler<TestSurface> = RowReconciler::new(METRICS);

        reconciler.reconcile(window(0, 30), &mut surface, |i| format!("first {}", i));
        // Overlapping window with different content for surviving indices;
        // they must keep their original binding.
        reconciler.reconcile(window(10, 40), &mut surface, |i| format!("second {}", i));

        let survivor = surface
            .rows
            .values()
            .find(|&&(index, _, _)| index == 15)
            .expect("row 15 materialized");
        assert_eq!(survivor.2, "first 15");
    }

    #[test]
    fn reset_clears_bindings_and_resizes_extent() {
        let mut surface = TestSurface::default();
        let mut reconciler: RowReconciler<TestSurface> = RowReconciler::new(METRICS);

        reconciler.reconcile(window(0, 30), &mut surface, |i| i.to_string());
        reconciler.reset(&mut surface, 500);

        assert_eq!(reconciler.materialized_count(), 0);
        assert!(surface.rows.is_empty());
        assert_eq!(surface.extent, 500 * 34);
    }

    #[test]
    fn materialized_count_respects_viewport_bound() {
        let mut surface = TestSurface::default();
        let mut reconciler: RowReconciler<TestSurface> = RowReconciler::new(METRICS);

        let viewport_height = 340;
        let total_rows = 100_000;
        let bound = METRICS.max_materialized(viewport_height);

        for scroll in [0, 3400, 3417, 170_000, METRICS.max_scroll(total_rows, viewport_height)] {
            let needed = METRICS.window(scroll, viewport_height, total_rows);
            reconciler.reconcile(needed, &mut surface, |i| i.to_string());
            assert!(reconciler.materialized_count() <= bound);
        }
    }
}
