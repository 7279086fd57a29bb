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

//! Virtualized list rendering engine.
//!
//! Only the rows covering the visible viewport plus a buffer are ever
//! materialized, so a hundred-thousand-row list costs the same per frame as
//! a thirty-row one. The engine is split into three independently testable
//! pieces:
//!
//! * [`window`]: pure windowing arithmetic mapping a scroll offset and
//!   viewport size to the index range that must be on screen.
//! * [`reconcile`]: minimal-churn diffing of materialized rows against a new
//!   window, over an abstract render surface.
//! * [`schedule`]: debounce and per-frame coalescing primitives driven by an
//!   injected clock.

pub(crate) mod reconcile;
pub(crate) mod schedule;
pub(crate) mod window;
