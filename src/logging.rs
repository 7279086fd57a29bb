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

//! File logging setup.
//!
//! The TUI owns the terminal, so logs go to a file in the platform data
//! directory rather than stdout. The level comes from the config file.

use std::path::PathBuf;

use flexi_logger::{FileSpec, FlexiLoggerError, Logger};

pub(crate) fn init_logging(level: &str) -> Result<(), FlexiLoggerError> {
    Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_directory())
                .basename("stacks")
                .suppress_timestamp(),
        )
        .append()
        .format_for_files(log_format)
        .start()?;

    log::info!("stacks {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("stacks/logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}
