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

//! Certificates configuration from environment variables

use crate::constants;
use crate::errors::CertsConfEnvError;
use crate::flags::CertsUserConf;

/// Load user configuration from environment variables
///
/// Environment variables are ignored unless `CERTS_CONF_VERSION` is set.
pub fn load_env_user_conf() -> Result<CertsUserConf, CertsConfEnvError> {
    if let Ok(conf_version) = std::env::var(constants::CERTS_CONF_VERSION) {
        match conf_version
            .parse::<usize>()
            .map_err(CertsConfEnvError::ConfVersionParseErr)?
        {
            1 => {
                let user_conf = envy::prefixed(constants::CERTS_ENV_PREFIX)
                    .from_env::<CertsUserConf>()
                    .map_err(CertsConfEnvError::EnvyErr)?;
                debug!("Certs conf overridden by env: {:?}", user_conf);
                Ok(user_conf)
            }
            v => Err(CertsConfEnvError::UnsupportedVersion {
                expected: constants::SUPPORTED_CONF_VERSIONS.to_vec(),
                found: v,
            }),
        }
    } else {
        Ok(CertsUserConf::default())
    }
}
