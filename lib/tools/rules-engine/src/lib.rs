//  Copyright (C) 2019  Éloïs SANCHEZ
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

//! Rules engine
//!
//! Rules are registered once under a number, then applied in the order given
//! by a [`RulesChain`](struct.RulesChain.html). The first failing rule stops
//! the chain and its error is returned.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate log;

pub mod bool_ext;
pub mod rule;

pub use bool_ext::BoolExt;

use failure::Fail;
use rule::{Rule, RuleError, RuleNumber};
use std::collections::{BTreeMap, BTreeSet};

/// Ordered list of rules numbers
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RulesChain(Vec<RuleNumber>);

impl RulesChain {
    /// Create new rules chain
    ///
    /// A rule number can appear only once in a chain.
    pub fn new(rules_numbers: Vec<usize>) -> Result<Self, DuplicateRule> {
        let mut seen = BTreeSet::new();
        for rule_number in &rules_numbers {
            if !seen.insert(*rule_number) {
                return Err(DuplicateRule {
                    rule_number: RuleNumber(*rule_number),
                });
            }
        }
        Ok(RulesChain(
            rules_numbers.into_iter().map(RuleNumber).collect(),
        ))
    }
    /// Rules numbers, in application order
    pub fn rules_numbers(&self) -> &[RuleNumber] {
        &self.0
    }
}

#[derive(Debug, Copy, Clone, Eq, Fail, PartialEq)]
#[fail(
    display = "Fatal error: rules-engine: rule n°{} appears twice in the same chain !",
    rule_number
)]
/// A chain references the same rule twice
pub struct DuplicateRule {
    /// Rule number
    pub rule_number: RuleNumber,
}

/// Rules engine
pub struct RulesEngine<D, E: Eq + Fail + PartialEq> {
    /// All rules
    all_rules: BTreeMap<RuleNumber, Rule<D, E>>,
}

impl<D, E: Eq + Fail + PartialEq> RulesEngine<D, E> {
    /// Create new rules engine
    pub fn new(all_rules: BTreeMap<RuleNumber, Rule<D, E>>) -> Self {
        RulesEngine { all_rules }
    }

    /// Apply the rules of the chain in order, stop at the first failure
    pub fn apply_chain(&self, chain: &RulesChain, rule_datas: &mut D) -> Result<(), EngineError<E>> {
        for rule_number in chain.rules_numbers() {
            let rule = self
                .all_rules
                .get(rule_number)
                .ok_or(EngineError::RuleNotExist {
                    rule_number: *rule_number,
                })?;
            if let Err(err) = rule.execute(*rule_number, rule_datas) {
                debug!("rules-engine: rule n°{} ({}) failed", rule_number, rule.name());
                return Err(err);
            }
            trace!("rules-engine: rule n°{} ({}) passed", rule_number, rule.name());
        }
        Ok(())
    }
}

/// Engine error
#[derive(Debug, Eq, Fail, PartialEq)]
pub enum EngineError<E: Eq + Fail + PartialEq> {
    #[fail(display = "{}", _0)]
    /// Rule Error
    RuleError(RuleError<E>),
    #[fail(display = "Rule n°{} not exist (required by chain)", rule_number)]
    /// A rule required by the chain does not exist
    RuleNotExist {
        /// Rule number
        rule_number: RuleNumber,
    },
}
