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

//! The bottom status bar.
//!
//! One line: library totals on the left, the cursor track's catalog URL in
//! the middle when one resolves, key hints on the right. A pending error
//! message takes over the whole line until the next state change.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::{App, model::scope::Scope, util::format::format_count};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if let Some(message) = &app.status {
        let error = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red));
        f.render_widget(error, area);
        return;
    }

    let [totals_area, link_area, hints_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let totals = format!(
        "{} liked songs · {} playlists · {} total tracks",
        format_count(app.store.liked.len()),
        format_count(app.store.playlists.len()),
        format_count(app.store.total_tracks()),
    );
    f.render_widget(
        Paragraph::new(totals).style(Style::default().fg(theme.status_fg)),
        totals_area,
    );

    if let Some(url) = cursor_link(app) {
        f.render_widget(
            Paragraph::new(url)
                .style(Style::default().fg(theme.link_fg))
                .alignment(Alignment::Center),
            link_area,
        );
    }

    let mut hints = match app.scope {
        Scope::Catalog(_) => "enter open · / filter · q quit",
        Scope::Stats => "tab sidebar · q quit",
        _ => "/ filter · 1-5 sort · d dedup · a/b drill · q quit",
    }
    .to_string();
    if !app.history.is_empty() {
        hints.insert_str(0, "esc back · ");
    }
    f.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(theme.status_fg))
            .alignment(Alignment::Right),
        hints_area,
    );
}

fn cursor_link(app: &App) -> Option<String> {
    match app.scope {
        Scope::Catalog(_) | Scope::Stats => None,
        _ => app.track_list.cursor_track()?.catalog_url(),
    }
}
