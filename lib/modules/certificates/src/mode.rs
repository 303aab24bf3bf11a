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

//! Enrollment mode resolution

use crate::db::{CertsDbReader, DbError};
use crate::features::CourseFeatures;
use crate::models::{CourseRunKey, EnrollmentMode, UserId};

/// Mode of the active enrollment of the user in the course run
pub fn effective_mode(
    db: &dyn CertsDbReader,
    user: UserId,
    course_run: &CourseRunKey,
) -> Result<Option<EnrollmentMode>, DbError> {
    Ok(db
        .get_enrollment(user, course_run)?
        .filter(|enrollment| enrollment.is_active)
        .map(|enrollment| enrollment.mode))
}

/// Whether a certificate can be delivered for this enrollment mode
pub fn mode_is_certificate_eligible(mode: EnrollmentMode, features: &CourseFeatures) -> bool {
    match mode {
        EnrollmentMode::Audit => false,
        EnrollmentMode::Honor => !features.honor_certificates_disabled,
        _ => true,
    }
}
