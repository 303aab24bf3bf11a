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

//! Eligibility rules
//!
//! Each rule checks one condition. A failing rule returns the reason of the
//! ineligibility, or the collaborator error that prevented the check.

pub mod all_rules;
mod allowlist_entry;
mod beta_tester;
mod ccx;
mod enrollment;
mod id_verification;
mod invalidation;
mod mechanism;
#[cfg(test)]
pub(crate) mod mocks;
mod passing_grade;
mod web_certs;

use crate::context::CertsContext;
use crate::db::DbError;
use crate::features::CourseFeatures;
use crate::models::{CourseRunKey, EnrollmentMode, UserId};
use crate::services::CollaboratorError;
use failure::Fail;

/// Datas shared by the rules of a chain
pub struct RuleDatas<'a> {
    pub(crate) ctx: CertsContext<'a>,
    pub(crate) features: CourseFeatures,
    pub(crate) user: UserId,
    pub(crate) course_run: &'a CourseRunKey,
    /// Supplied by the caller, or resolved by the enrollment rule
    pub(crate) mode: Option<EnrollmentMode>,
}

/// Why a certificate cannot be generated
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum IneligibilityReason {
    /// The course run does not use the allowlist
    AllowlistModeDisabled,
    /// The course run does not use v2 certificates
    V2ModeDisabled,
    /// No active enrollment
    NotEnrolled,
    /// No certificate for this enrollment mode
    IneligibleMode(EnrollmentMode),
    /// The user is not on the allowlist
    NotOnAllowlist,
    /// The certificate has an active invalidation
    Invalidated,
    /// The course run is a CCX
    CcxCourse,
    /// The user is a beta tester
    BetaTester,
    /// The identity of the user is not verified
    Unverified,
    /// The user did not reach the passing grade
    FailingGrade,
    /// Web certificates are disabled for the course run
    WebCertificatesDisabled,
}

impl std::fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IneligibilityReason::AllowlistModeDisabled => write!(f, "allowlist mode disabled"),
            IneligibilityReason::V2ModeDisabled => write!(f, "v2 certificates disabled"),
            IneligibilityReason::NotEnrolled => write!(f, "no active enrollment"),
            IneligibilityReason::IneligibleMode(mode) => {
                write!(f, "no certificate for mode '{}'", mode)
            }
            IneligibilityReason::NotOnAllowlist => write!(f, "not on allowlist"),
            IneligibilityReason::Invalidated => write!(f, "certificate invalidated"),
            IneligibilityReason::CcxCourse => write!(f, "CCX course"),
            IneligibilityReason::BetaTester => write!(f, "beta tester"),
            IneligibilityReason::Unverified => write!(f, "identity not verified"),
            IneligibilityReason::FailingGrade => write!(f, "failing grade"),
            IneligibilityReason::WebCertificatesDisabled => {
                write!(f, "web certificates disabled")
            }
        }
    }
}

/// Rule failure
#[derive(Clone, Debug, Eq, Fail, PartialEq)]
pub enum RuleFailure {
    /// Ineligible
    #[fail(display = "ineligible: {}", _0)]
    Ineligible(IneligibilityReason),
    /// A collaborator failed
    #[fail(display = "{}", _0)]
    Collaborator(CollaboratorError),
    /// Storage failure
    #[fail(display = "Database error: {}", _0)]
    Db(String),
}

impl From<IneligibilityReason> for RuleFailure {
    fn from(reason: IneligibilityReason) -> Self {
        RuleFailure::Ineligible(reason)
    }
}

impl From<CollaboratorError> for RuleFailure {
    fn from(e: CollaboratorError) -> Self {
        RuleFailure::Collaborator(e)
    }
}

impl From<DbError> for RuleFailure {
    fn from(e: DbError) -> Self {
        RuleFailure::Db(format!("{}", e))
    }
}
