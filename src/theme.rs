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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides a
//! utility for converting colors to hexadecimal strings used for terminal
//! emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) sidebar_fg: Color,
    pub(crate) sidebar_count_fg: Color,
    pub(crate) sidebar_section_fg: Color,

    pub(crate) rank_fg: Color,
    pub(crate) track_fg: Color,
    pub(crate) link_fg: Color,
    pub(crate) local_track_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) album_fg: Color,
    pub(crate) source_fg: Color,
    pub(crate) date_fg: Color,

    pub(crate) header_fg: Color,
    pub(crate) empty_fg: Color,
    pub(crate) cursor_bg: Color,
    pub(crate) status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 18, 22),
            accent_colour: Color::Rgb(30, 215, 96),
            border_colour: Color::Rgb(70, 70, 78),

            sidebar_fg: Color::Rgb(220, 220, 225),
            sidebar_count_fg: Color::Rgb(130, 130, 140),
            sidebar_section_fg: Color::Rgb(130, 130, 140),

            rank_fg: Color::Rgb(110, 110, 120),
            track_fg: Color::Rgb(255, 255, 255),
            link_fg: Color::Rgb(120, 190, 255),
            local_track_fg: Color::Rgb(160, 160, 170),
            artist_fg: Color::Rgb(255, 215, 0),
            album_fg: Color::Rgb(179, 157, 219),
            source_fg: Color::Rgb(130, 170, 150),
            date_fg: Color::Rgb(150, 150, 160),

            header_fg: Color::Rgb(30, 215, 96),
            empty_fg: Color::Rgb(150, 150, 160),
            cursor_bg: Color::Rgb(45, 45, 58),
            status_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background color.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}
