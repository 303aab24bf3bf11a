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

//! Rules engine : rules

use crate::EngineError;
use failure::Fail;

#[derive(Copy, Clone, Debug, Ord, PartialEq, PartialOrd, Eq, Hash)]
/// Rule number
pub struct RuleNumber(pub usize);

impl std::fmt::Display for RuleNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule error
#[derive(Debug, Eq, Fail, PartialEq)]
#[fail(display = "rule n°{} ({}) failed: {}", rule_number, rule_name, cause)]
pub struct RuleError<E: Eq + Fail + PartialEq> {
    /// Rule number
    pub rule_number: RuleNumber,
    /// Rule name
    pub rule_name: &'static str,
    /// Cause of the error
    pub cause: E,
}

/// Rule read-only check
pub type RuleFnRef<D, E> = fn(&D) -> Result<(), E>;

/// Rule check allowed to record what it resolved for the next rules
pub type RuleFnRefMut<D, E> = fn(&mut D) -> Result<(), E>;

/// Rule execution function
pub enum RuleFn<D, E> {
    /// Read-only
    Ref(RuleFnRef<D, E>),
    /// May write into the rule datas
    RefMut(RuleFnRefMut<D, E>),
}

/// Rule
pub struct Rule<D, E: Eq + Fail + PartialEq> {
    name: &'static str,
    rule_fn: RuleFn<D, E>,
}

impl<D, E: Eq + Fail + PartialEq> Rule<D, E> {
    /// Create new rule
    pub fn new(name: &'static str, rule_fn: RuleFn<D, E>) -> Self {
        Rule { name, rule_fn }
    }
    /// Human readable rule name, used in logs and errors
    pub fn name(&self) -> &'static str {
        self.name
    }
    /// Whether the rule writes into the rule datas
    pub fn is_mut(&self) -> bool {
        match self.rule_fn {
            RuleFn::Ref(_) => false,
            RuleFn::RefMut(_) => true,
        }
    }
    /// Executes the rule
    pub fn execute(&self, rule_number: RuleNumber, rule_datas: &mut D) -> Result<(), EngineError<E>> {
        match self.rule_fn {
            RuleFn::Ref(rule_fn_ref) => rule_fn_ref(rule_datas),
            RuleFn::RefMut(rule_fn_ref_mut) => rule_fn_ref_mut(rule_datas),
        }
        .map_err(|err| {
            EngineError::RuleError(RuleError {
                rule_number,
                rule_name: self.name,
                cause: err,
            })
        })
    }
}

impl<D, E: Eq + Fail + PartialEq> std::fmt::Debug for Rule<D, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("mut", &self.is_mut())
            .finish()
    }
}
