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

//! The stats overview panel.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, model::CatalogItem, util::format::format_count};

pub(crate) fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stats = &app.stats;

    let label_style = Style::default().fg(theme.status_fg);
    let value_style = Style::default().fg(theme.track_fg);

    let line = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), label_style),
            Span::styled(value, value_style),
        ])
    };

    let mut lines = vec![
        line("Liked songs", format_count(stats.liked_count)),
        line("Playlists", format_count(stats.playlist_count)),
        line("Total tracks", format_count(stats.total_tracks)),
        line("Unique tracks", format_count(stats.unique_tracks)),
        line("Unique artists", format_count(stats.unique_artists)),
        line("Unique albums", format_count(stats.unique_albums)),
        line(
            "Local tracks",
            format!(
                "{} ({:.1}%)",
                format_count(stats.local_tracks),
                stats.local_pct()
            ),
        ),
    ];
    lines.push(Line::default());

    let [overview_area, tops_area] = Layout::vertical([
        Constraint::Length(lines.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(area);
    f.render_widget(Paragraph::new(lines), overview_area);

    let [artists_area, albums_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(tops_area);
    draw_top_list(f, artists_area, app, "Top artists", &stats.top_artists);
    draw_top_list(f, albums_area, app, "Top albums", &stats.top_albums);
}

fn draw_top_list(f: &mut Frame, area: Rect, app: &App, title: &str, items: &[CatalogItem]) {
    let theme = &app.theme;
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
    ))];

    for (position, item) in items.iter().enumerate() {
        let name = match &item.artist {
            Some(artist) => format!("{} — {}", item.name, artist),
            None => item.name.clone(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2}. ", position + 1),
                Style::default().fg(theme.rank_fg),
            ),
            Span::styled(name, Style::default().fg(theme.track_fg)),
            Span::styled(
                format!("  {}", format_count(item.count)),
                Style::default().fg(theme.sidebar_count_fg),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
