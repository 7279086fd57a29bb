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

//! UI rendering logic for the track list.
//!
//! Draws only the materialized rows, positioned against the current scroll
//! offset. Rows outside the window simply do not exist on the surface, so a
//! hundred-thousand-track list draws the same handful of lines as a short
//! one.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::components::track_list::{PrimaryLabel, RowContent, TrackListState};
use crate::pipeline::SortColumn;
use crate::theme::Theme;

impl TrackListState {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, filter_focused: bool) {
        let show_filter = filter_focused || !self.filter.value().is_empty();
        let [filter_area, header_area, rows_area] = Layout::vertical([
            Constraint::Length(if show_filter { 1 } else { 0 }),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        if show_filter {
            self.draw_filter(f, filter_area, theme, filter_focused);
        }
        self.draw_header(f, header_area, theme);

        self.list.set_viewport_height(rows_area.height as u64);

        if let Some(empty) = self.empty_state() {
            let message = Paragraph::new(empty.message())
                .style(Style::default().fg(theme.empty_fg))
                .alignment(Alignment::Center);
            f.render_widget(message, rows_area);
            return;
        }

        let columns = self.columns();
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
            self.draw_row(f, row_rect, theme, &columns, content, offset == cursor_offset);
        }
    }

    /// Column layout for this render: rank, title, artist, album, then the
    /// optional source and date columns.
    fn columns(&self) -> Vec<(Option<SortColumn>, Constraint)> {
        let mut columns = vec![
            (None, Constraint::Length(7)),
            (Some(SortColumn::Name), Constraint::Fill(3)),
            (Some(SortColumn::Artist), Constraint::Fill(2)),
            (Some(SortColumn::Album), Constraint::Fill(2)),
        ];
        if self.show_source() {
            columns.push((Some(SortColumn::Source), Constraint::Length(16)));
        }
        if self.show_date() {
            columns.push((Some(SortColumn::Date), Constraint::Length(12)));
        }
        columns
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = self.columns();
        let rects = Layout::horizontal(columns.iter().map(|(_, c)| *c)).split(area);

        for ((column, _), rect) in columns.iter().zip(rects.iter()) {
            let Some(column) = column else { continue };
            let mut label = column.label().to_string();
            if self.sort.column == Some(*column) {
                label.push_str(if self.sort.descending { " v" } else { " ^" });
            }
            let header = Paragraph::new(label)
                .style(Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD));
            f.render_widget(header, *rect);
        }
    }

    fn draw_filter(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let text = format!("/{}", self.filter.value());
        let style = if focused {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.status_fg)
        };
        f.render_widget(Paragraph::new(text).style(style), area);
        if focused {
            let cursor_x = area.x + 1 + self.filter.visual_cursor() as u16;
            f.set_cursor_position(Position::new(cursor_x.min(area.right()), area.y));
        }
    }

    fn draw_row(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        columns: &[(Option<SortColumn>, Constraint)],
        content: &RowContent,
        is_cursor: bool,
    ) {
        let base = if is_cursor {
            Style::default().bg(theme.cursor_bg)
        } else {
            Style::default()
        };
        if is_cursor {
            f.render_widget(Paragraph::new("").style(base), area);
        }

        let rects = Layout::horizontal(columns.iter().map(|(_, c)| *c)).split(area);

        let rank = Paragraph::new(
            Line::from(format!("{} ", content.rank)).alignment(Alignment::Right),
        )
        .style(base.fg(theme.rank_fg));
        f.render_widget(rank, rects[0]);

        let title = match &content.primary {
            PrimaryLabel::Linked { text, .. } => Paragraph::new(text.as_str())
                .style(base.fg(theme.link_fg).add_modifier(Modifier::UNDERLINED)),
            PrimaryLabel::Local(text) => Paragraph::new(format!("{} [local]", text))
                .style(base.fg(theme.local_track_fg)),
            PrimaryLabel::Plain(text) => {
                Paragraph::new(text.as_str()).style(base.fg(theme.track_fg))
            }
        };
        f.render_widget(title, rects[1]);

        f.render_widget(
            Paragraph::new(content.artist.as_str()).style(base.fg(theme.artist_fg)),
            rects[2],
        );
        f.render_widget(
            Paragraph::new(content.album.as_str()).style(base.fg(theme.album_fg)),
            rects[3],
        );

        let mut next = 4;
        if self.show_source() {
            f.render_widget(
                Paragraph::new(content.source.as_str()).style(base.fg(theme.source_fg)),
                rects[next],
            );
            next += 1;
        }
        if self.show_date() {
            f.render_widget(
                Paragraph::new(content.date.as_str()).style(base.fg(theme.date_fg)),
                rects[next],
            );
        }
    }
}
