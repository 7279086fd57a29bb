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

//! Interactive view components.
//!
//! Each component pairs persistent state with rendering logic, mirroring
//! the split between the list core (windowing, reconciliation, pipeline)
//! and the ratatui widgets that display it.

pub(crate) mod catalog;
pub(crate) mod surface;
pub(crate) mod track_list;
pub(crate) mod virtual_list;

use crate::list::window::ListMetrics;

/// Terminal rows are the surface unit: one unit per row.
pub(crate) const ROW_HEIGHT: u64 = 1;

/// Rows materialized above and below the visible range.
pub(crate) const BUFFER_ROWS: usize = 10;

pub(crate) const LIST_METRICS: ListMetrics = ListMetrics {
    row_height: ROW_HEIGHT,
    buffer_rows: BUFFER_ROWS,
};
