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

//! Certificates errors

use crate::db::DbError;
use crate::services::CollaboratorError;
use failure::Fail;

/// Certificates error
#[derive(Debug, Fail)]
pub enum CertsError {
    /// A collaborator failed
    #[fail(display = "{}", _0)]
    Collaborator(CollaboratorError),
    /// Storage failure
    #[fail(display = "Database error: {}", _0)]
    Db(String),
    /// The rules engine could not apply a chain
    #[fail(display = "Rules engine error: {}", _0)]
    Rules(String),
}

impl From<CollaboratorError> for CertsError {
    fn from(e: CollaboratorError) -> Self {
        CertsError::Collaborator(e)
    }
}

impl From<DbError> for CertsError {
    fn from(e: DbError) -> Self {
        CertsError::Db(format!("{}", e))
    }
}
