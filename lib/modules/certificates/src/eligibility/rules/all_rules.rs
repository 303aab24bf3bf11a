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

//! All eligibility rules and the chains of each mechanism.

use super::{
    allowlist_entry, beta_tester, ccx, enrollment, id_verification, invalidation, mechanism,
    passing_grade, web_certs,
};
use super::{RuleDatas, RuleFailure};
use certs_rules_engine::rule::{Rule, RuleNumber};
use certs_rules_engine::RulesChain;
use std::collections::BTreeMap;
use unwrap::unwrap;

#[inline]
pub fn get_all_rules<'a>() -> BTreeMap<RuleNumber, Rule<RuleDatas<'a>, RuleFailure>> {
    maplit::btreemap![
        RuleNumber(1) => mechanism::allowlist_rule(),
        RuleNumber(2) => mechanism::v2_rule(),
        RuleNumber(10) => enrollment::rule(),
        RuleNumber(20) => allowlist_entry::rule(),
        RuleNumber(30) => invalidation::rule(),
        RuleNumber(40) => ccx::rule(),
        RuleNumber(50) => beta_tester::rule(),
        RuleNumber(60) => id_verification::rule(),
        RuleNumber(70) => passing_grade::rule(),
        RuleNumber(80) => web_certs::rule(),
    ]
}

/// Allowlist certificates
#[inline]
pub fn allowlist_chain() -> RulesChain {
    unwrap!(RulesChain::new(vec![1, 10, 20, 30, 60, 80]))
}

/// V2 certificates
#[inline]
pub fn v2_chain() -> RulesChain {
    unwrap!(RulesChain::new(vec![2, 10, 30, 40, 50, 60, 70, 80]))
}
