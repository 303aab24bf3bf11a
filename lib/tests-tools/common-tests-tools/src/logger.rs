//  Copyright (C) 2018  The Dunitrust Project Developers.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Tests logger.

use log::LevelFilter;

/// Initialize stdout logger for tests
///
/// Level is read from `CERTS_TESTS_LOG_LEVEL` (default `debug`). Several tests
/// of the same binary may call this function, only the first call installs
/// the logger.
pub fn init_logger_stdout() {
    let level_filter = match std::env::var("CERTS_TESTS_LOG_LEVEL")
        .unwrap_or_else(|_| String::from("debug"))
        .as_str()
    {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        v => panic!(
            "Unexpected value '{}' for env var CERTS_TESTS_LOG_LEVEL !",
            v
        ),
    };

    let dispatch = fern::Dispatch::new()
        .level(level_filter)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout());

    // A logger is already installed by a previous test
    let _ = dispatch.apply();
}
