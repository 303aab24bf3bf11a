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

//! Status based check, used by course runs with neither allowlist nor v2
//! certificates.

use crate::db::{CertsDbReader, DbError};
use crate::models::{CourseRunKey, UserId};
use crate::status::CertificateStatus;

/// Whether a certificate can be generated given the current certificate
/// status. Only a `downloadable` certificate blocks generation, a missing
/// user, course run or certificate does not.
pub fn can_generate_certificate_for_status(
    db: &dyn CertsDbReader,
    user: Option<UserId>,
    course_run: Option<&CourseRunKey>,
) -> Result<bool, DbError> {
    let (user, course_run) = match (user, course_run) {
        (Some(user), Some(course_run)) => (user, course_run),
        _ => return Ok(true),
    };

    match db.get_certificate(user, course_run)? {
        Some(cert) if cert.status == CertificateStatus::Downloadable => {
            debug!(
                "Certificate {:?} of user {} in {} is already downloadable",
                cert.id, user, course_run
            );
            Ok(false)
        }
        _ => Ok(true),
    }
}
