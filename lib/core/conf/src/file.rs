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

//! Certificates configuration file

use crate::constants;
use crate::errors::CertsConfFileError;
use crate::flags::CertsConf;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[inline]
/// Path of the configuration file in a profile folder
pub fn get_conf_path(profile_path: &Path) -> PathBuf {
    profile_path.join(constants::CONF_FILENAME)
}

/// Load configuration file, the file is created with the default
/// configuration when it does not exist.
pub fn load_conf_from_file(profile_path: &Path) -> Result<CertsConf, CertsConfFileError> {
    let conf_file_path = get_conf_path(profile_path);
    if conf_file_path.as_path().exists() {
        let mut f = File::open(conf_file_path.as_path()).map_err(CertsConfFileError::ReadError)?;
        let mut contents = String::new();
        f.read_to_string(&mut contents)
            .map_err(CertsConfFileError::ReadError)?;
        let conf: CertsConf =
            serde_json::from_str(&contents).map_err(CertsConfFileError::ParseError)?;
        info!("Load certs conf file {:?}", conf_file_path);
        Ok(conf)
    } else {
        let conf = CertsConf::default();
        write_conf_file(conf_file_path.as_path(), &conf)
            .map_err(CertsConfFileError::WriteError)?;
        info!("Create default certs conf file {:?}", conf_file_path);
        Ok(conf)
    }
}

/// Write configuration file
pub fn write_conf_file(conf_path: &Path, conf: &CertsConf) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(conf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let mut f = File::create(conf_path)?;
    f.write_all(json.as_bytes())?;
    f.sync_all()?;
    Ok(())
}
