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

//! Export record shapes and normalization.
//!
//! Two shapes exist in a streaming-service data export: the library file
//! (liked songs) and playlist files. Both are normalized into [`Track`]
//! records here. Records missing a required field (name or artist) are
//! rejected and logged, never defaulted into an empty string that would
//! merge them into the wrong aggregate bucket downstream.

use log::warn;
use percent_encoding::percent_decode_str;
use serde::Deserialize;

use crate::model::Track;

const LOCAL_URI_PREFIX: &str = "spotify:local:";

#[derive(Debug, Deserialize)]
pub(super) struct LibraryExport {
    #[serde(default)]
    pub(super) tracks: Vec<LibraryRecord>,
}

/// A liked-song record: `{track, artist, album, uri}`.
#[derive(Debug, Deserialize)]
pub(super) struct LibraryRecord {
    track: Option<String>,
    artist: Option<String>,
    #[serde(default)]
    album: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaylistExport {
    #[serde(default)]
    pub(super) playlists: Vec<PlaylistRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaylistRecord {
    pub(super) name: Option<String>,
    #[serde(rename = "lastModifiedDate", default)]
    pub(super) last_modified_date: Option<String>,
    #[serde(default)]
    pub(super) items: Vec<PlaylistItem>,
}

/// A playlist entry: either a catalog track or a local file reference.
#[derive(Debug, Deserialize)]
pub(super) struct PlaylistItem {
    track: Option<ItemTrack>,
    #[serde(rename = "localTrack")]
    local_track: Option<LocalTrack>,
    #[serde(rename = "addedDate", default)]
    added_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemTrack {
    #[serde(rename = "trackName")]
    track_name: Option<String>,
    #[serde(rename = "artistName")]
    artist_name: Option<String>,
    #[serde(rename = "albumName", default)]
    album_name: Option<String>,
    #[serde(rename = "trackUri", default)]
    track_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocalTrack {
    uri: Option<String>,
}

/// Normalize a liked-song record. `None` means the record was rejected.
pub(super) fn normalize_library_record(record: LibraryRecord) -> Option<Track> {
    let (Some(name), Some(artist)) = (record.track, record.artist) else {
        warn!("rejecting library record without track name or artist");
        return None;
    };

    Some(Track {
        name,
        artist,
        album: record.album.unwrap_or_default(),
        uri: record.uri,
        date: None,
        local: false,
        source: None,
    })
}

/// Normalize a playlist entry. `None` means the item had neither a catalog
/// track nor a decodable local reference, or was missing a required field.
pub(super) fn normalize_playlist_item(item: PlaylistItem) -> Option<Track> {
    if let Some(track) = item.track {
        let (Some(name), Some(artist)) = (track.track_name, track.artist_name) else {
            warn!("rejecting playlist record without track name or artist");
            return None;
        };
        return Some(Track {
            name,
            artist,
            album: track.album_name.unwrap_or_default(),
            uri: track.track_uri,
            date: item.added_date,
            local: false,
            source: None,
        });
    }

    if let Some(local) = item.local_track {
        let uri = local.uri?;
        let (artist, album, name) = decode_local_uri(&uri)?;
        return Some(Track {
            name,
            artist,
            album,
            uri: None,
            date: item.added_date,
            local: true,
            source: None,
        });
    }

    warn!("rejecting playlist item with neither track nor localTrack");
    None
}

/// Decode a local-file URI of the form
/// `spotify:local:<artist>:<album>:<title>:<duration>`, where the three
/// leading fields are percent-encoded.
fn decode_local_uri(uri: &str) -> Option<(String, String, String)> {
    let rest = uri.strip_prefix(LOCAL_URI_PREFIX)?;
    let mut parts = rest.split(':');

    let artist = decode_field(parts.next(), "Unknown");
    let album = decode_field(parts.next(), "");
    let name = decode_field(parts.next(), "Unknown");

    Some((artist, album, name))
}

fn decode_field(field: Option<&str>, default: &str) -> String {
    match field {
        Some(raw) if !raw.is_empty() => {
            percent_decode_str(raw).decode_utf8_lossy().into_owned()
        }
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_record_normalizes_required_and_optional_fields() {
        let export: LibraryExport = serde_json::from_str(
            r#"{"tracks": [
                {"track": "Buzz", "artist": "Bee", "album": "Hive", "uri": "spotify:track:abc"},
                {"track": "Bare", "artist": "Bee"}
            ]}"#,
        )
        .unwrap();

        let tracks: Vec<Track> = export
            .tracks
            .into_iter()
            .filter_map(normalize_library_record)
            .collect();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].uri.as_deref(), Some("spotify:track:abc"));
        assert_eq!(tracks[1].album, "");
        assert!(!tracks[0].local);
    }

    #[test]
    fn library_record_missing_artist_is_rejected() {
        let export: LibraryExport =
            serde_json::from_str(r#"{"tracks": [{"track": "Orphan"}]}"#).unwrap();
        let tracks: Vec<Track> = export
            .tracks
            .into_iter()
            .filter_map(normalize_library_record)
            .collect();
        assert!(tracks.is_empty());
    }

    #[test]
    fn playlist_item_carries_added_date() {
        let export: PlaylistExport = serde_json::from_str(
            r#"{"playlists": [{"name": "Mix", "lastModifiedDate": "2024-06-01", "items": [
                {"track": {"trackName": "Buzz", "artistName": "Bee", "albumName": "Hive",
                           "trackUri": "spotify:track:abc"},
                 "addedDate": "2023-11-20"}
            ]}]}"#,
        )
        .unwrap();

        let playlist = export.playlists.into_iter().next().unwrap();
        let track = playlist
            .items
            .into_iter()
            .filter_map(normalize_playlist_item)
            .next()
            .unwrap();
        assert_eq!(track.date.as_deref(), Some("2023-11-20"));
        assert_eq!(track.name, "Buzz");
    }

    #[test]
    fn local_uri_fields_are_percent_decoded() {
        let item: PlaylistItem = serde_json::from_str(
            r#"{"localTrack": {"uri": "spotify:local:Daft%20Punk:Homework:Da%20Funk:330"},
                "addedDate": "2022-01-05"}"#,
        )
        .unwrap();

        let track = normalize_playlist_item(item).unwrap();
        assert!(track.local);
        assert_eq!(track.artist, "Daft Punk");
        assert_eq!(track.album, "Homework");
        assert_eq!(track.name, "Da Funk");
        assert_eq!(track.uri, None);
        assert_eq!(track.date.as_deref(), Some("2022-01-05"));
    }

    #[test]
    fn local_uri_with_empty_fields_gets_placeholders() {
        let item: PlaylistItem = serde_json::from_str(
            r#"{"localTrack": {"uri": "spotify:local:::Mystery%20Tape:100"}}"#,
        )
        .unwrap();

        let track = normalize_playlist_item(item).unwrap();
        assert_eq!(track.artist, "Unknown");
        assert_eq!(track.album, "");
        assert_eq!(track.name, "Mystery Tape");
    }

    #[test]
    fn local_uri_without_expected_scheme_is_rejected() {
        let item: PlaylistItem =
            serde_json::from_str(r#"{"localTrack": {"uri": "file:///tmp/song.mp3"}}"#).unwrap();
        assert!(normalize_playlist_item(item).is_none());
    }
}
