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

//! Rule 60 - the identity of the user is verified
//!
//! Skipped when the course run uses the integrity signature.

use super::{IneligibilityReason, RuleDatas, RuleFailure};
use certs_rules_engine::rule::{Rule, RuleFn};
use certs_rules_engine::BoolExt;

#[inline]
pub fn rule<'a>() -> Rule<RuleDatas<'a>, RuleFailure> {
    Rule::new("id verified", RuleFn::Ref(id_verified))
}

fn id_verified(datas: &RuleDatas) -> Result<(), RuleFailure> {
    if datas.features.integrity_signature_enabled {
        return Ok(());
    }
    datas
        .ctx
        .id_verification
        .user_is_verified(datas.user)?
        .or_err(IneligibilityReason::Unverified.into())
}

#[cfg(test)]
mod tests {

    use super::super::mocks::{course, features, MocksEnv};
    use super::*;
    use crate::features::EligibilityMode;
    use crate::models::UserId;
    use mockall::predicate::eq;

    #[test]
    fn test_unverified() {
        let course = course();
        let mut env = MocksEnv::new();
        env.id_verification
            .expect_user_is_verified()
            .with(eq(UserId(1)))
            .times(1)
            .returning(|_| Ok(false));

        let datas = env.datas(&course, features(EligibilityMode::Allowlist), None);
        assert_eq!(
            Err(RuleFailure::Ineligible(IneligibilityReason::Unverified)),
            id_verified(&datas)
        );
    }

    #[test]
    fn test_integrity_signature_skips_verification() {
        let course = course();
        let mut env = MocksEnv::new();
        env.id_verification.expect_user_is_verified().times(0);
        let mut features = features(EligibilityMode::V2);
        features.integrity_signature_enabled = true;

        let datas = env.datas(&course, features, None);
        assert_eq!(Ok(()), id_verified(&datas));
    }
}
