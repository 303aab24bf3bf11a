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

//! Rules 1 and 2 - the course run uses the evaluated mechanism

use super::{IneligibilityReason, RuleDatas, RuleFailure};
use crate::features::EligibilityMode;
use certs_rules_engine::rule::{Rule, RuleFn};
use certs_rules_engine::BoolExt;

#[inline]
pub fn allowlist_rule<'a>() -> Rule<RuleDatas<'a>, RuleFailure> {
    Rule::new("allowlist mode", RuleFn::Ref(allowlist_mode))
}

#[inline]
pub fn v2_rule<'a>() -> Rule<RuleDatas<'a>, RuleFailure> {
    Rule::new("v2 mode", RuleFn::Ref(v2_mode))
}

fn allowlist_mode(datas: &RuleDatas) -> Result<(), RuleFailure> {
    (datas.features.eligibility_mode == EligibilityMode::Allowlist)
        .or_err(IneligibilityReason::AllowlistModeDisabled.into())
}

fn v2_mode(datas: &RuleDatas) -> Result<(), RuleFailure> {
    (datas.features.eligibility_mode == EligibilityMode::V2)
        .or_err(IneligibilityReason::V2ModeDisabled.into())
}
