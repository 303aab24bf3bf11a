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

//! Unified certificate decision

use crate::context::CertsContext;
use crate::eligibility::{evaluate_allowlist_certificate, evaluate_v2_certificate};
use crate::errors::CertsError;
use crate::features::EligibilityMode;
use crate::models::{CourseRunKey, UserId};
use crate::status_check::can_generate_certificate_for_status;

/// The course run uses the allowlist mechanism
pub fn is_using_certificate_allowlist(ctx: CertsContext, course_run: &CourseRunKey) -> bool {
    ctx.features(course_run).eligibility_mode == EligibilityMode::Allowlist
}

/// The course run uses v2 certificates
pub fn is_using_v2_course_certificates(ctx: CertsContext, course_run: &CourseRunKey) -> bool {
    ctx.features(course_run).eligibility_mode == EligibilityMode::V2
}

/// The user has an allowlist entry with `whitelist` set
pub fn is_on_allowlist(
    ctx: CertsContext,
    user: UserId,
    course_run: &CourseRunKey,
) -> Result<bool, CertsError> {
    Ok(ctx
        .db
        .get_allowlist_entry(user, course_run)?
        .map(|entry| entry.whitelist)
        .unwrap_or(false))
}

/// The course run uses the allowlist and the user is on it
pub fn is_using_certificate_allowlist_and_is_on_allowlist(
    ctx: CertsContext,
    user: UserId,
    course_run: &CourseRunKey,
) -> Result<bool, CertsError> {
    Ok(is_using_certificate_allowlist(ctx, course_run) && is_on_allowlist(ctx, user, course_run)?)
}

/// Whether a certificate can be generated for the user in the course run,
/// with the mechanism the course run uses.
pub fn can_generate_certificate_task(
    ctx: CertsContext,
    user: UserId,
    course_run: &CourseRunKey,
) -> Result<bool, CertsError> {
    let features = ctx.features(course_run);
    match features.eligibility_mode {
        EligibilityMode::Allowlist => {
            debug!("{} uses the allowlist", course_run);
            Ok(evaluate_allowlist_certificate(ctx, &features, user, course_run, None)?
                .is_eligible())
        }
        EligibilityMode::V2 => {
            debug!("{} uses v2 certificates", course_run);
            Ok(evaluate_v2_certificate(ctx, &features, user, course_run)?.is_eligible())
        }
        EligibilityMode::Legacy => Ok(can_generate_certificate_for_status(
            ctx.db,
            Some(user),
            Some(course_run),
        )?),
    }
}
