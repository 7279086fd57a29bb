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

//! The navigation sidebar.
//!
//! Fixed library entries first, then every playlist in canonical order.
//! When local tracks are hidden the playlist counts shrink accordingly and
//! playlists left with nothing to show are dropped from the list.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use tui_input::Input;

use crate::{
    App, Focus,
    model::TrackStore,
    model::scope::{CatalogMode, Scope},
    util::format::format_count,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEntry {
    Liked,
    AllTracks,
    Artists,
    Albums,
    Stats,
    Playlist(usize),
}

impl SidebarEntry {
    pub(crate) fn scope(&self) -> Scope {
        match self {
            SidebarEntry::Liked => Scope::Liked,
            SidebarEntry::AllTracks => Scope::AllTracks,
            SidebarEntry::Artists => Scope::Catalog(CatalogMode::Artists),
            SidebarEntry::Albums => Scope::Catalog(CatalogMode::Albums),
            SidebarEntry::Stats => Scope::Stats,
            SidebarEntry::Playlist(index) => Scope::Playlist(*index),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SidebarState {
    pub(crate) cursor: usize,
    /// Live entry filter; unlike the list filters this is not debounced,
    /// the entry set is small enough to narrow on every keystroke.
    pub(crate) filter: Input,
}

impl SidebarState {
    /// The selectable entries in display order, narrowed by the sidebar
    /// filter.
    pub(crate) fn entries(&self, store: &TrackStore, hide_local: bool) -> Vec<SidebarEntry> {
        let query = self.filter.value().to_lowercase();
        let mut entries: Vec<SidebarEntry> = [
            SidebarEntry::Liked,
            SidebarEntry::AllTracks,
            SidebarEntry::Artists,
            SidebarEntry::Albums,
            SidebarEntry::Stats,
        ]
        .into_iter()
        .filter(|entry| query.is_empty() || entry_label(entry, store).contains(&query))
        .collect();
        for (index, playlist) in store.playlists.iter().enumerate() {
            if playlist.visible_count(hide_local) == 0 {
                continue;
            }
            if query.is_empty() || playlist.name.to_lowercase().contains(&query) {
                entries.push(SidebarEntry::Playlist(index));
            }
        }
        entries
    }

    pub(crate) fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }
}

fn entry_label(entry: &SidebarEntry, store: &TrackStore) -> String {
    match entry {
        SidebarEntry::Liked => "liked songs".to_string(),
        SidebarEntry::AllTracks => "all tracks".to_string(),
        SidebarEntry::Artists => "artists".to_string(),
        SidebarEntry::Albums => "albums".to_string(),
        SidebarEntry::Stats => "stats".to_string(),
        SidebarEntry::Playlist(index) => store.playlists[*index].name.to_lowercase(),
    }
}

pub(crate) fn draw_sidebar(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    let focused = app.focus == Focus::Sidebar;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        }))
        .title(" Library ")
        .title_style(Style::default().fg(theme.sidebar_fg).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let filter_focused = app.focus == Focus::SidebarFilter;
    let show_filter = filter_focused || !app.sidebar.filter.value().is_empty();
    let mut list_area = inner;
    if show_filter {
        let filter_area = Rect::new(inner.x, inner.y, inner.width, 1);
        let style = if filter_focused {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.status_fg)
        };
        let text = format!("/{}", app.sidebar.filter.value());
        f.render_widget(Paragraph::new(text).style(style), filter_area);
        if filter_focused {
            let cursor_x = filter_area.x + 1 + app.sidebar.filter.visual_cursor() as u16;
            f.set_cursor_position(Position::new(cursor_x.min(filter_area.right()), filter_area.y));
        }
        list_area = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(1),
        );
    }

    let hide_local = app.config.hide_local_tracks;
    let entries = app.sidebar.entries(&app.store, hide_local);
    app.sidebar.cursor = app.sidebar.cursor.min(entries.len().saturating_sub(1));

    let mut lines: Vec<Line> = Vec::with_capacity(entries.len() + 2);
    let mut cursor_line = 0;
    let mut section_drawn = false;
    for (position, entry) in entries.iter().enumerate() {
        // The section header sits between the fixed entries and the
        // playlists; it is display-only and never under the cursor.
        if !section_drawn && matches!(entry, SidebarEntry::Playlist(_)) {
            section_drawn = true;
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Playlists",
                Style::default()
                    .fg(theme.sidebar_section_fg)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        if position == app.sidebar.cursor {
            cursor_line = lines.len();
        }
        lines.push(entry_line(app, entry, position == app.sidebar.cursor, focused));
    }

    // Keep the cursor line inside the visible strip.
    let height = list_area.height as usize;
    let scroll = cursor_line.saturating_sub(height.saturating_sub(1));
    let list = Paragraph::new(lines).scroll((scroll as u16, 0));
    f.render_widget(list, list_area);
}

fn entry_line<'a>(app: &App, entry: &SidebarEntry, selected: bool, focused: bool) -> Line<'a> {
    let theme = &app.theme;
    let hide_local = app.config.hide_local_tracks;

    let (label, count) = match entry {
        SidebarEntry::Liked => ("Liked Songs".to_string(), Some(app.store.liked.len())),
        SidebarEntry::AllTracks => ("All Tracks".to_string(), Some(app.store.total_tracks())),
        SidebarEntry::Artists => ("Artists".to_string(), Some(app.index.artists.len())),
        SidebarEntry::Albums => ("Albums".to_string(), Some(app.index.albums.len())),
        SidebarEntry::Stats => ("Stats".to_string(), None),
        SidebarEntry::Playlist(index) => {
            let playlist = &app.store.playlists[*index];
            (playlist.name.clone(), Some(playlist.visible_count(hide_local)))
        }
    };

    let mut style = Style::default().fg(theme.sidebar_fg);
    if selected {
        style = style.bg(theme.cursor_bg);
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
    }

    let mut spans = vec![Span::styled(label, style)];
    if let Some(count) = count {
        spans.push(Span::styled(
            format!("  {}", format_count(count)),
            Style::default().fg(theme.sidebar_count_fg),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::track;
    use crate::model::Playlist;

    fn store() -> TrackStore {
        let mut local = track("Tape", "Bee", "", None);
        local.local = true;
        TrackStore {
            liked: vec![track("One", "Bee", "Hive", Some("spotify:track:a"))],
            playlists: vec![
                Playlist {
                    name: "Road Trip".to_string(),
                    last_modified: "2024-06-01".to_string(),
                    tracks: vec![track("Two", "Bee", "Hive", Some("spotify:track:b"))],
                    local_count: 0,
                },
                Playlist {
                    name: "Tapes Only".to_string(),
                    last_modified: "2024-01-01".to_string(),
                    tracks: vec![local],
                    local_count: 1,
                },
            ],
        }
    }

    #[test]
    fn fixed_entries_precede_playlists() {
        let state = SidebarState::default();
        let entries = state.entries(&store(), false);
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], SidebarEntry::Liked);
        assert_eq!(entries[5], SidebarEntry::Playlist(0));
    }

    #[test]
    fn hiding_local_drops_fully_local_playlists() {
        let state = SidebarState::default();
        let entries = state.entries(&store(), true);
        assert!(!entries.contains(&SidebarEntry::Playlist(1)));
        assert!(entries.contains(&SidebarEntry::Playlist(0)));
    }

    #[test]
    fn filter_narrows_entries_case_insensitively() {
        let state = SidebarState {
            cursor: 0,
            filter: Input::new("tApEs".to_string()),
        };
        let entries = state.entries(&store(), false);
        assert_eq!(entries, vec![SidebarEntry::Playlist(1)]);
    }
}
