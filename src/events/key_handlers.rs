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

//! Keyboard input routing.
//!
//! Keys are routed by focus: the filter input consumes everything except
//! its exit keys, the sidebar and the main list each have their own
//! navigation bindings, and a small global set applies everywhere else.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    App, Focus,
    events::AppEvent,
    model::scope::{CatalogMode, Scope},
    pipeline::SortColumn,
};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.focus {
        Focus::Filter => handle_filter_key(app, key),
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::SidebarFilter => handle_sidebar_filter_key(app, key),
        Focus::Main => handle_main_key(app, key),
    }
}

/// Sidebar filter focus. The entry set is recomputed on every draw, so the
/// input just needs to be edited; there is no debounce to schedule.
fn handle_sidebar_filter_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.sidebar.filter = tui_input::Input::default();
            app.focus = Focus::Sidebar;
        }
        KeyCode::Enter => app.focus = Focus::Sidebar,
        _ => {
            app.sidebar.filter.handle_event(&Event::Key(key));
        }
    }
    Ok(())
}

/// Filter focus: every printable key edits the input and restarts the
/// debounce; the recompute itself fires on a later frame tick.
fn handle_filter_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            let hide_local = app.config.hide_local_tracks;
            match app.scope {
                Scope::Catalog(_) => app.catalog.clear_filter(),
                _ => app.track_list.clear_filter(hide_local),
            }
            app.focus = Focus::Main;
        }
        KeyCode::Enter => app.focus = Focus::Main,
        _ => {
            let now = Instant::now();
            let event = Event::Key(key);
            match app.scope {
                Scope::Catalog(_) => {
                    if app.catalog.filter.handle_event(&event).is_some() {
                        app.catalog.on_filter_edit(now);
                    }
                }
                _ => {
                    if app.track_list.filter.handle_event(&event).is_some() {
                        app.track_list.on_filter_edit(now);
                    }
                }
            }
        }
    }
    Ok(())
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let entries = app.sidebar.entries(&app.store, app.config.hide_local_tracks);
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Tab => app.focus = Focus::Main,
        KeyCode::Char('/') => app.focus = Focus::SidebarFilter,
        KeyCode::Char('j') | KeyCode::Down => app.sidebar.move_cursor(1, entries.len()),
        KeyCode::Char('k') | KeyCode::Up => app.sidebar.move_cursor(-1, entries.len()),
        KeyCode::Char('g') | KeyCode::Home => app.sidebar.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.sidebar.cursor = entries.len().saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(entry) = entries.get(app.sidebar.cursor) {
                app.event_tx.send(AppEvent::ShowScope(entry.scope()))?;
            }
        }
        KeyCode::Char('x') => app.event_tx.send(AppEvent::ToggleHideLocal)?,
        _ => {}
    }
    Ok(())
}

fn handle_main_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus = Focus::Sidebar;
            return Ok(());
        }
        KeyCode::Char('/') if !matches!(app.scope, Scope::Stats) => {
            app.focus = Focus::Filter;
            return Ok(());
        }
        KeyCode::Esc | KeyCode::Backspace => {
            app.event_tx.send(AppEvent::NavigateBack)?;
            return Ok(());
        }
        KeyCode::Char('x') => {
            app.event_tx.send(AppEvent::ToggleHideLocal)?;
            return Ok(());
        }
        _ => {}
    }

    match app.scope {
        Scope::Catalog(mode) => handle_catalog_key(app, key, mode),
        Scope::Stats => Ok(()),
        _ => handle_track_list_key(app, key),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent, mode: CatalogMode) -> Result<()> {
    let list = &mut app.catalog.list;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => list.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => list.move_cursor(-1),
        KeyCode::PageDown => list.page(1),
        KeyCode::PageUp => list.page(-1),
        KeyCode::Char('g') | KeyCode::Home => list.cursor_to_start(),
        KeyCode::Char('G') | KeyCode::End => list.cursor_to_end(),
        KeyCode::Enter => {
            if let Some(item) = app.catalog.cursor_item() {
                let scope = match mode {
                    CatalogMode::Artists => Scope::ArtistDetail(item.name.clone()),
                    CatalogMode::Albums => Scope::AlbumDetail {
                        album: item.name.clone(),
                        artist: item.artist.clone().unwrap_or_default(),
                    },
                };
                app.event_tx.send(AppEvent::PushScope(scope))?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_track_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let hide_local = app.config.hide_local_tracks;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.track_list.list.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.track_list.list.move_cursor(-1),
        KeyCode::PageDown => app.track_list.list.page(1),
        KeyCode::PageUp => app.track_list.list.page(-1),
        KeyCode::Char('g') | KeyCode::Home => app.track_list.list.cursor_to_start(),
        KeyCode::Char('G') | KeyCode::End => app.track_list.list.cursor_to_end(),

        KeyCode::Char('1') => app.track_list.toggle_sort(SortColumn::Name, hide_local),
        KeyCode::Char('2') => app.track_list.toggle_sort(SortColumn::Artist, hide_local),
        KeyCode::Char('3') => app.track_list.toggle_sort(SortColumn::Album, hide_local),
        KeyCode::Char('4') if app.track_list.show_source() => {
            app.track_list.toggle_sort(SortColumn::Source, hide_local);
        }
        KeyCode::Char('5') if app.track_list.show_date() => {
            app.track_list.toggle_sort(SortColumn::Date, hide_local);
        }

        KeyCode::Char('d') => app.track_list.toggle_dedup(hide_local),

        // Drill into the cursor track's artist or album.
        KeyCode::Char('a') => {
            if let Some(track) = app.track_list.cursor_track() {
                let scope = Scope::ArtistDetail(track.artist.clone());
                app.event_tx.send(AppEvent::PushScope(scope))?;
            }
        }
        KeyCode::Char('b') => {
            if let Some(track) = app.track_list.cursor_track() {
                if !track.album.is_empty() {
                    let scope = Scope::AlbumDetail {
                        album: track.album.clone(),
                        artist: track.artist.clone(),
                    };
                    app.event_tx.send(AppEvent::PushScope(scope))?;
                }
            }
        }
        _ => {}
    }
    Ok(())
}
