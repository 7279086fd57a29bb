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

use std::time::Instant;

use crate::{
    App, Focus,
    config::save_config,
    index::LibraryIndex,
    model::TrackStore,
    model::scope::{CatalogMode, Scope},
    stats::LibraryStats,
};

pub(super) fn handle_store_loaded(app: &mut App, store: TrackStore) {
    app.store = store;
    app.index = LibraryIndex::build(&app.store, app.config.hide_local_tracks);
    app.stats = LibraryStats::collect(&app.store, &app.index);
    app.loading = false;
    app.status = None;
    resolve_scope(app);
}

pub(super) fn handle_load_failed(app: &mut App, message: String) {
    log::error!("library load failed: {}", message);
    app.loading = false;
    app.status = Some(message);
}

/// Sidebar activation. The scope switch is synchronous: the component's
/// pending debounce is cancelled and its window reset before the next draw.
pub(super) fn handle_show_scope(app: &mut App, scope: Scope) {
    app.history.clear();
    app.scope = scope;
    app.focus = Focus::Main;
    resolve_scope(app);
}

pub(super) fn handle_push_scope(app: &mut App, scope: Scope) {
    if scope == app.scope {
        return;
    }
    let previous = std::mem::replace(&mut app.scope, scope);
    app.history.push(previous);
    app.focus = Focus::Main;
    resolve_scope(app);
}

pub(super) fn handle_navigate_back(app: &mut App) {
    if let Some(scope) = app.history.pop() {
        app.scope = scope;
        resolve_scope(app);
    }
}

pub(super) fn handle_toggle_hide_local(app: &mut App) {
    app.config.hide_local_tracks = !app.config.hide_local_tracks;
    if let Err(e) = save_config(&app.config) {
        log::warn!("failed to persist config: {:#}", e);
    }

    // The aggregate views are derived from the visible set, so both the
    // index and the stats change with the toggle.
    app.index = LibraryIndex::build(&app.store, app.config.hide_local_tracks);
    app.stats = LibraryStats::collect(&app.store, &app.index);

    match app.scope.catalog_mode() {
        Some(mode) => app.catalog.set_items(mode, catalog_items(app, mode)),
        None => app.track_list.refilter(app.config.hide_local_tracks),
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    log::error!("{}", message);
    app.status = Some(message);
}

pub(super) fn handle_tick(app: &mut App, now: Instant) {
    match app.scope {
        Scope::Catalog(_) => app.catalog.on_frame(now),
        Scope::Stats => {}
        _ => app.track_list.on_frame(now, app.config.hide_local_tracks),
    }
}

fn catalog_items(app: &App, mode: CatalogMode) -> Vec<crate::model::CatalogItem> {
    match mode {
        CatalogMode::Artists => app.index.artists.clone(),
        CatalogMode::Albums => app.index.albums.clone(),
    }
}

/// Populate the active component for the current scope.
pub(super) fn resolve_scope(app: &mut App) {
    match app.scope.catalog_mode() {
        Some(mode) => {
            let items = catalog_items(app, mode);
            app.catalog.set_items(mode, items);
        }
        None => {
            if app.scope == Scope::Stats {
                return;
            }
            let tracks = app.scope.tracks(&app.store);
            app.track_list.set_scope_tracks(
                tracks,
                app.scope.is_multi_source(),
                app.scope.is_detail(),
                app.config.hide_local_tracks,
            );
        }
    }
}
