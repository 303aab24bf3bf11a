//  Copyright (C) 2017-2019  The AXIOM TEAM Association.
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

//! Certificates configuration constants

/// Name of the configuration file in the profile folder
pub static CONF_FILENAME: &str = "certs-conf.json";

/// Prefix of all configuration environment variables
pub static CERTS_ENV_PREFIX: &str = "CERTS_";

/// Environment variable holding the configuration version
pub static CERTS_CONF_VERSION: &str = "CERTS_CONF_VERSION";

/// Configuration versions understood by this crate
pub static SUPPORTED_CONF_VERSIONS: &[usize] = &[1];
