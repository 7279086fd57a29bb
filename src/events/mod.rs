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

//! Application logic and event handling.
//!
//! The central hub for the "Controller" logic of the application: the event
//! loop receives every input on one channel and dispatches to handlers that
//! mutate [`App`] state. Key events go through a focus router first; the
//! frame tick drives debounce firing and the coalesced reconcile pass.

mod handlers;
use handlers::*;

mod key_handlers;
use key_handlers::process_key_event;

use std::{io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::TrackStore, model::scope::Scope, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    StoreLoaded(TrackStore),
    LoadFailed(String),

    /// Sidebar activation: replaces the scope and clears back-history.
    ShowScope(Scope),
    /// Drill-down into a detail scope: the current scope is pushed so
    /// back-navigation can return to it.
    PushScope(Scope),
    NavigateBack,

    ToggleHideLocal,

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::StoreLoaded(store) => handle_store_loaded(app, store),
            AppEvent::LoadFailed(message) => handle_load_failed(app, message),
            AppEvent::ShowScope(scope) => handle_show_scope(app, scope),
            AppEvent::PushScope(scope) => handle_push_scope(app, scope),
            AppEvent::NavigateBack => handle_navigate_back(app),
            AppEvent::ToggleHideLocal => handle_toggle_hide_local(app),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick | AppEvent::ExitApplication => handle_tick(app, Instant::now()),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}
