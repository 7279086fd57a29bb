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

//! # Music Library Browser TUI.
//!
//! A terminal browser for exported music-library data: liked songs,
//! playlists, artist/album catalogs and library statistics, over lists that
//! may run to hundreds of thousands of rows.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Loader Thread** parses the export files in the background so the
//!   UI is responsive immediately.
//! * **Event Loops** capture user input and frame ticks to drive the UI
//!   state; the frame tick is what fires debounced filters and coalesced
//!   scroll reconciliation.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod events;
mod index;
mod list;
mod loader;
mod logging;
mod model;
mod pipeline;
mod render;
mod stats;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{self},
    path::PathBuf,
    sync::mpsc::{Receiver, Sender, self},
    thread,
    time::Duration,
};

use crate::{
    components::{catalog::CatalogListState, track_list::TrackListState},
    config::AppConfig,
    events::{AppEvent, process_events},
    index::LibraryIndex,
    model::TrackStore,
    model::scope::{NavHistory, Scope},
    render::sidebar::SidebarState,
    stats::LibraryStats,
    theme::Theme,
};

/// Frame tick period; the effective ceiling on reconcile passes per second.
const FRAME_TICK: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Sidebar,
    SidebarFilter,
    Main,
    Filter,
}

/// Application state.
struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub store: TrackStore,
    pub index: LibraryIndex,
    pub stats: LibraryStats,
    pub loading: bool,
    pub status: Option<String>,

    pub scope: Scope,
    pub history: NavHistory,
    pub focus: Focus,

    pub sidebar: SidebarState,
    pub track_list: TrackListState,
    pub catalog: CatalogListState,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            store: TrackStore::default(),
            index: LibraryIndex::default(),
            stats: LibraryStats::default(),
            loading: true,
            status: None,
            scope: Scope::Liked,
            history: NavHistory::default(),
            focus: Focus::Sidebar,
            sidebar: SidebarState::default(),
            track_list: TrackListState::new(),
            catalog: CatalogListState::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and configuration, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    logging::init_logging(&config.log_level).context("Failed to initialise logging")?;

    let data_dir = data_dir(&config);
    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, data_dir);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// The export directory: the command-line argument wins, then the config
/// file, then `./data`.
fn data_dir(config: &AppConfig) -> PathBuf {
    env::args()
        .nth(1)
        .or_else(|| config.data_dir.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&theme::Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A loader thread that parses the export files and delivers the store.
/// * An input thread to poll for system keyboard events.
/// * A tick thread sending the periodic frame tick.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    data_dir: PathBuf,
) -> Result<()> {
    // Parse the export in the background; the UI shows a loading state
    // until the store arrives.
    let tx_loader = app.event_tx.clone();
    thread::spawn(move || {
        let event = match loader::load_store(&data_dir) {
            Ok(store) => AppEvent::StoreLoaded(store),
            Err(e) => AppEvent::LoadFailed(format!("{:#}", anyhow::Error::new(e))),
        };
        tx_loader.send(event).ok();
    });

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send the periodic frame tick; debounce timers and
    // coalesced scrolling are only ever applied on these ticks.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(FRAME_TICK);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
