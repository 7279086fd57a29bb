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

//! Terminal-backed render surface.
//!
//! The terminal is redrawn from scratch every frame, so "materialized" here
//! means the bound row content is held ready for drawing. Binding a row
//! (formatting its cells from a track record) is the expensive part; the
//! reconciler keeps this set minimal so scrolling a hundred-thousand-row
//! list rebinds a handful of rows per frame instead of all of them.

use std::collections::HashMap;

use crate::list::reconcile::RenderSurface;

/// Opaque identity of a materialized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RowHandle(u64);

#[derive(Debug)]
struct MaterializedRow<C> {
    offset: u64,
    content: C,
}

/// Holds the materialized rows and the scroll extent for one list.
#[derive(Debug)]
pub(crate) struct TextSurface<C> {
    next_handle: u64,
    extent: u64,
    rows: HashMap<RowHandle, MaterializedRow<C>>,
}

impl<C> Default for TextSurface<C> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            extent: 0,
            rows: HashMap::new(),
        }
    }
}

impl<C> TextSurface<C> {
    /// Total scrollable extent, in surface units.
    pub(crate) fn extent(&self) -> u64 {
        self.extent
    }

    /// Every materialized row with its fixed offset, in no particular
    /// order; the renderer positions each against the current scroll.
    pub(crate) fn rows(&self) -> impl Iterator<Item = (u64, &C)> {
        self.rows.values().map(|row| (row.offset, &row.content))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<C> RenderSurface for TextSurface<C> {
    type Handle = RowHandle;
    type Content = C;

    fn attach_row(&mut self, _index: usize, offset: u64, content: C) -> RowHandle {
        let handle = RowHandle(self.next_handle);
        self.next_handle += 1;
        self.rows.insert(handle, MaterializedRow { offset, content });
        handle
    }

    fn detach_row(&mut self, handle: RowHandle) {
        self.rows.remove(&handle);
    }

    fn set_extent(&mut self, extent: u64) {
        self.extent = extent;
    }
}
