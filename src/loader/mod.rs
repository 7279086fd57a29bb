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

//! Export discovery and loading.
//!
//! Walks the data directory for the library file (`YourLibrary.json`) and
//! any playlist files (`Playlist1.json`, `Playlist2.json`, ...), parses
//! them, and assembles the normalized [`TrackStore`]. Playlists are ordered
//! by last-modified date, newest first; that order is the store's canonical
//! playlist order everywhere downstream.

mod parse;

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;
use walkdir::WalkDir;

use crate::model::{Playlist, TrackStore};
use parse::{LibraryExport, PlaylistExport};

const LIBRARY_FILE: &str = "YourLibrary.json";

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("no {LIBRARY_FILE} found under {0}")]
    MissingLibrary(PathBuf),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load and normalize a full export from `dir`.
pub(crate) fn load_store(dir: &Path) -> Result<TrackStore, LoadError> {
    let (library_path, playlist_paths) = discover_export_files(dir);

    let library_path = library_path.ok_or_else(|| LoadError::MissingLibrary(dir.to_path_buf()))?;
    let library: LibraryExport = read_json(&library_path)?;

    let liked: Vec<_> = library
        .tracks
        .into_iter()
        .filter_map(parse::normalize_library_record)
        .collect();

    let mut playlists: Vec<Playlist> = Vec::new();
    for path in playlist_paths {
        let export: PlaylistExport = read_json(&path)?;
        for record in export.playlists {
            let Some(name) = record.name else {
                warn!("skipping unnamed playlist in {}", path.display());
                continue;
            };
            let tracks: Vec<_> = record
                .items
                .into_iter()
                .filter_map(parse::normalize_playlist_item)
                .collect();
            let local_count = tracks.iter().filter(|t| t.local).count();
            playlists.push(Playlist {
                name,
                last_modified: record.last_modified_date.unwrap_or_default(),
                tracks,
                local_count,
            });
        }
    }

    // Newest first; this becomes the store's canonical playlist order.
    playlists.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

    let store = TrackStore { liked, playlists };
    info!(
        "loaded export: {} liked songs, {} playlists, {} total tracks",
        store.liked.len(),
        store.playlists.len(),
        store.total_tracks()
    );

    Ok(store)
}

/// Find the library file and all playlist files under `dir`.
fn discover_export_files(dir: &Path) -> (Option<PathBuf>, Vec<PathBuf>) {
    let mut library = None;
    let mut playlists = Vec::new();

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if name == LIBRARY_FILE {
            library = Some(entry.path().to_path_buf());
        } else if is_playlist_file(name) {
            playlists.push(entry.path().to_path_buf());
        }
    }

    // Stable file order so equal last-modified dates resolve the same way
    // on every load.
    playlists.sort();
    (library, playlists)
}

fn is_playlist_file(name: &str) -> bool {
    name.strip_prefix("Playlist")
        .and_then(|rest| rest.strip_suffix(".json"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
