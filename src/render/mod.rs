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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! The primary entry point is the [`draw`] function, called after every
//! processed event to keep the screen in step with the state.

pub(crate) mod sidebar;
mod stats_view;
mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, Focus, model::scope::Scope};

/// Renders the user interface to the terminal frame.
///
/// Partitions the screen into the sidebar, the scope content area and the
/// status bar, then dispatches the content area to the component matching
/// the active scope.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(outer[0]);

    sidebar::draw_sidebar(f, main[0], app);
    draw_content(f, main[1], app);
    status::draw_status(f, outer[1], app);
}

fn draw_content(f: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
    let theme = app.theme;
    let title = format!(" {} ", app.scope.title(&app.store));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(
            if matches!(app.focus, Focus::Sidebar | Focus::SidebarFilter) {
                theme.border_colour
            } else {
                theme.accent_colour
            },
        ))
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.loading {
        let loading = Paragraph::new("Loading library...")
            .style(Style::default().fg(theme.empty_fg))
            .alignment(Alignment::Center);
        f.render_widget(loading, inner);
        return;
    }

    let filter_focused = app.focus == Focus::Filter;
    match app.scope {
        Scope::Catalog(_) => app.catalog.draw(f, inner, &theme, filter_focused),
        Scope::Stats => stats_view::draw_stats(f, inner, app),
        _ => app.track_list.draw(f, inner, &theme, filter_focused),
    }
}
