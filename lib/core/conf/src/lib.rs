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

//! Feature flags configuration for certificates generation.
//!
//! The configuration is read from `certs-conf.json` in a profile folder then
//! overridden by `CERTS_` prefixed environment variables.

#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod constants;
pub mod env;
pub mod errors;
pub mod file;
pub mod flags;

pub use errors::{CertsConfEnvError, CertsConfError, CertsConfFileError};
pub use flags::{CertsConf, CertsUserConf};

use std::path::Path;

/// Load configuration
///
/// Without profile folder, the default configuration is used as base.
pub fn load_conf(profile_path: Option<&Path>) -> Result<CertsConf, CertsConfError> {
    let conf = if let Some(profile_path) = profile_path {
        file::load_conf_from_file(profile_path)?
    } else {
        CertsConf::default()
    };
    Ok(conf.r#override(env::load_env_user_conf()?))
}
