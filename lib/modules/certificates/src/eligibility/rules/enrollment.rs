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

//! Rule 10 - the enrollment mode delivers certificates
//!
//! A mode supplied by the caller is used as is, otherwise the mode of the
//! active enrollment is resolved and kept for the next rules.

use super::{IneligibilityReason, RuleDatas, RuleFailure};
use crate::mode::{effective_mode, mode_is_certificate_eligible};
use certs_rules_engine::rule::{Rule, RuleFn};
use certs_rules_engine::BoolExt;

#[inline]
pub fn rule<'a>() -> Rule<RuleDatas<'a>, RuleFailure> {
    Rule::new("eligible enrollment", RuleFn::RefMut(eligible_enrollment))
}

fn eligible_enrollment(datas: &mut RuleDatas) -> Result<(), RuleFailure> {
    let mode = match datas.mode {
        Some(mode) => mode,
        None => {
            let mode = effective_mode(datas.ctx.db, datas.user, datas.course_run)?
                .ok_or(IneligibilityReason::NotEnrolled)?;
            datas.mode = Some(mode);
            mode
        }
    };

    mode_is_certificate_eligible(mode, &datas.features)
        .or_err(IneligibilityReason::IneligibleMode(mode).into())
}
