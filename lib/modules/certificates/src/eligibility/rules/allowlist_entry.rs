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

//! Rule 20 - the user is on the allowlist

use super::{IneligibilityReason, RuleDatas, RuleFailure};
use certs_rules_engine::rule::{Rule, RuleFn};
use certs_rules_engine::BoolExt;

#[inline]
pub fn rule<'a>() -> Rule<RuleDatas<'a>, RuleFailure> {
    Rule::new("on allowlist", RuleFn::Ref(on_allowlist))
}

fn on_allowlist(datas: &RuleDatas) -> Result<(), RuleFailure> {
    datas
        .ctx
        .db
        .get_allowlist_entry(datas.user, datas.course_run)?
        .map(|entry| entry.whitelist)
        .unwrap_or(false)
        .or_err(IneligibilityReason::NotOnAllowlist.into())
}

#[cfg(test)]
mod tests {

    use super::super::mocks::{course, features, MocksEnv};
    use super::*;
    use crate::features::EligibilityMode;
    use crate::models::{AllowlistEntry, UserId};
    use mockall::predicate::eq;

    fn env_with_entry(whitelist: Option<bool>) -> MocksEnv {
        let mut env = MocksEnv::new();
        env.db
            .expect_get_allowlist_entry()
            .with(eq(UserId(1)), eq(course()))
            .times(1)
            .returning(move |user, course_run| {
                Ok(whitelist.map(|whitelist| AllowlistEntry {
                    user,
                    course_run: course_run.clone(),
                    whitelist,
                    notes: String::new(),
                }))
            });
        env
    }

    #[test]
    fn test_on_allowlist() {
        let course = course();

        let env = env_with_entry(Some(true));
        let datas = env.datas(&course, features(EligibilityMode::Allowlist), None);
        assert_eq!(Ok(()), on_allowlist(&datas));

        for whitelist in &[Some(false), None] {
            let env = env_with_entry(*whitelist);
            let datas = env.datas(&course, features(EligibilityMode::Allowlist), None);
            assert_eq!(
                Err(RuleFailure::Ineligible(IneligibilityReason::NotOnAllowlist)),
                on_allowlist(&datas)
            );
        }
    }
}
