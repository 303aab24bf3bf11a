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

//! Rule 30 - the existing certificate has no active invalidation

use super::{IneligibilityReason, RuleDatas, RuleFailure};
use certs_rules_engine::rule::{Rule, RuleFn};

#[inline]
pub fn rule<'a>() -> Rule<RuleDatas<'a>, RuleFailure> {
    Rule::new("not invalidated", RuleFn::Ref(not_invalidated))
}

fn not_invalidated(datas: &RuleDatas) -> Result<(), RuleFailure> {
    let db = datas.ctx.db;
    if let Some(cert) = db.get_certificate(datas.user, datas.course_run)? {
        if let Some(invalidation) = db.get_active_invalidation(cert.id)? {
            debug!(
                "Certificate {:?} of user {} is invalidated by {}",
                cert.id, datas.user, invalidation.invalidated_by
            );
            return Err(IneligibilityReason::Invalidated.into());
        }
    }
    Ok(())
}
