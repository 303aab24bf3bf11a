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

//! Rule 70 - the user reached the passing grade

use super::{IneligibilityReason, RuleDatas, RuleFailure};
use certs_rules_engine::rule::{Rule, RuleFn};
use certs_rules_engine::BoolExt;

#[inline]
pub fn rule<'a>() -> Rule<RuleDatas<'a>, RuleFailure> {
    Rule::new("passing grade", RuleFn::Ref(passing_grade))
}

fn passing_grade(datas: &RuleDatas) -> Result<(), RuleFailure> {
    datas
        .ctx
        .grading
        .has_passing_grade(datas.user, datas.course_run)?
        .or_err(IneligibilityReason::FailingGrade.into())
}
