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

//! Allowlist and v2 eligibility predicates

pub mod rules;

pub use rules::{IneligibilityReason, RuleFailure};

use crate::context::CertsContext;
use crate::errors::CertsError;
use crate::features::CourseFeatures;
use crate::models::{CourseRunKey, EnrollmentMode, UserId};
use certs_rules_engine::rule::RuleError;
use certs_rules_engine::{EngineError, RulesChain, RulesEngine};
use rules::all_rules;
use rules::RuleDatas;

/// Outcome of an eligibility evaluation
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Eligibility {
    /// A certificate can be generated
    Eligible {
        /// Enrollment mode of the certificate
        mode: EnrollmentMode,
    },
    /// No certificate can be generated
    Ineligible {
        /// First failing rule
        reason: IneligibilityReason,
        /// Enrollment mode, when it was resolved before the failure
        mode: Option<EnrollmentMode>,
    },
}

impl Eligibility {
    /// A certificate can be generated
    #[inline]
    pub fn is_eligible(&self) -> bool {
        match self {
            Eligibility::Eligible { .. } => true,
            Eligibility::Ineligible { .. } => false,
        }
    }
    /// Enrollment mode, when known
    pub fn mode(&self) -> Option<EnrollmentMode> {
        match *self {
            Eligibility::Eligible { mode } => Some(mode),
            Eligibility::Ineligible { mode, .. } => mode,
        }
    }
}

fn evaluate(
    ctx: CertsContext,
    features: &CourseFeatures,
    user: UserId,
    course_run: &CourseRunKey,
    mode: Option<EnrollmentMode>,
    chain: &RulesChain,
) -> Result<Eligibility, CertsError> {
    let engine = RulesEngine::new(all_rules::get_all_rules());
    let mut datas = RuleDatas {
        ctx,
        features: *features,
        user,
        course_run,
        mode,
    };

    match engine.apply_chain(chain, &mut datas) {
        Ok(()) => {
            let mode = datas.mode.ok_or_else(|| {
                CertsError::Rules("chain passed without resolving the enrollment mode".to_owned())
            })?;
            Ok(Eligibility::Eligible { mode })
        }
        Err(EngineError::RuleError(RuleError { cause, .. })) => match cause {
            RuleFailure::Ineligible(reason) => {
                debug!(
                    "User {} is not eligible for a certificate in {}: {}",
                    user, course_run, reason
                );
                Ok(Eligibility::Ineligible {
                    reason,
                    mode: datas.mode,
                })
            }
            RuleFailure::Collaborator(e) => Err(CertsError::Collaborator(e)),
            RuleFailure::Db(e) => Err(CertsError::Db(e)),
        },
        Err(e) => Err(CertsError::Rules(format!("{}", e))),
    }
}

/// Evaluate allowlist eligibility with already read course features.
///
/// A supplied `mode` is used instead of the active enrollment.
pub fn evaluate_allowlist_certificate(
    ctx: CertsContext,
    features: &CourseFeatures,
    user: UserId,
    course_run: &CourseRunKey,
    mode: Option<EnrollmentMode>,
) -> Result<Eligibility, CertsError> {
    evaluate(
        ctx,
        features,
        user,
        course_run,
        mode,
        &all_rules::allowlist_chain(),
    )
}

/// Whether an allowlist certificate can be generated
pub fn can_generate_allowlist_certificate(
    ctx: CertsContext,
    user: UserId,
    course_run: &CourseRunKey,
    mode: Option<EnrollmentMode>,
) -> Result<bool, CertsError> {
    let features = ctx.features(course_run);
    Ok(evaluate_allowlist_certificate(ctx, &features, user, course_run, mode)?.is_eligible())
}

/// Evaluate v2 eligibility with already read course features
pub fn evaluate_v2_certificate(
    ctx: CertsContext,
    features: &CourseFeatures,
    user: UserId,
    course_run: &CourseRunKey,
) -> Result<Eligibility, CertsError> {
    evaluate(ctx, features, user, course_run, None, &all_rules::v2_chain())
}

/// Whether a v2 certificate can be generated
pub fn can_generate_v2_certificate(
    ctx: CertsContext,
    user: UserId,
    course_run: &CourseRunKey,
) -> Result<bool, CertsError> {
    let features = ctx.features(course_run);
    Ok(evaluate_v2_certificate(ctx, &features, user, course_run)?.is_eligible())
}
