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

//! UI rendering logic for the catalog list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::components::catalog::{CatalogListState, CatalogRowContent};
use crate::model::scope::CatalogMode;
use crate::theme::Theme;
use crate::util::format::format_count;

impl CatalogListState {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, filter_focused: bool) {
        let show_filter = filter_focused || !self.filter.value().is_empty();
        let [filter_area, header_area, rows_area] = Layout::vertical([
            Constraint::Length(if show_filter { 1 } else { 0 }),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        if show_filter {
            let text = format!("/{}", self.filter.value());
            let style = if filter_focused {
                Style::default().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.status_fg)
            };
            f.render_widget(Paragraph::new(text).style(style), filter_area);
            if filter_focused {
                let cursor_x = filter_area.x + 1 + self.filter.visual_cursor() as u16;
                f.set_cursor_position(Position::new(cursor_x.min(filter_area.right()), filter_area.y));
            }
        }

        self.draw_header(f, header_area, theme);
        self.list.set_viewport_height(rows_area.height as u64);

        if self.rows().is_empty() {
            let message = match self.mode() {
                CatalogMode::Artists => "No matching artists",
                CatalogMode::Albums => "No matching albums",
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(theme.empty_fg))
                .alignment(Alignment::Center);
            f.render_widget(empty, rows_area);
            return;
        }

        let cursor_offset = self.list.cursor_offset();
        let scroll = self.list.scroll_offset();
        for (offset, content) in self.list.surface().rows() {
            if offset < scroll {
                continue;
            }
            let y = offset - scroll;
            if y >= rows_area.height as u64 {
                continue;
            }
            let row_rect = Rect::new(rows_area.x, rows_area.y + y as u16, rows_area.width, 1);
            draw_row(f, row_rect, theme, content, offset == cursor_offset);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rects = Layout::horizontal(COLUMNS).split(area);
        let name = match self.mode() {
            CatalogMode::Artists => "Artist",
            CatalogMode::Albums => "Album",
        };
        let style = Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD);
        f.render_widget(Paragraph::new(name).style(style), rects[1]);
        f.render_widget(
            Paragraph::new(Line::from("Tracks").alignment(Alignment::Right)).style(style),
            rects[2],
        );
    }
}

const COLUMNS: [Constraint; 3] = [
    Constraint::Length(7),
    Constraint::Fill(1),
    Constraint::Length(8),
];

fn draw_row(f: &mut Frame, area: Rect, theme: &Theme, content: &CatalogRowContent, is_cursor: bool) {
    let base = if is_cursor {
        Style::default().bg(theme.cursor_bg)
    } else {
        Style::default()
    };
    if is_cursor {
        f.render_widget(Paragraph::new("").style(base), area);
    }

    let rects = Layout::horizontal(COLUMNS).split(area);

    let rank = Paragraph::new(Line::from(format!("{} ", content.rank)).alignment(Alignment::Right))
        .style(base.fg(theme.rank_fg));
    f.render_widget(rank, rects[0]);

    let name = match &content.artist {
        Some(artist) => format!("{} — {}", content.name, artist),
        None => content.name.clone(),
    };
    f.render_widget(Paragraph::new(name).style(base.fg(theme.track_fg)), rects[1]);

    let count = Paragraph::new(
        Line::from(format_count(content.count)).alignment(Alignment::Right),
    )
    .style(base.fg(theme.sidebar_count_fg));
    f.render_widget(count, rects[2]);
}
