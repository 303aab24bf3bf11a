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

//! Course run features
//!
//! Toggles are read once per decision into a [`CourseFeatures`] snapshot,
//! every rule of the decision then sees the same values.

use crate::models::CourseRunKey;
use certs_conf::CertsConf;

#[cfg(test)]
use mockall::*;

/// Feature toggles source
#[cfg_attr(test, automock)]
pub trait FeatureToggleService {
    /// Allowlist mode toggle
    fn use_allowlist(&self, course_run: &CourseRunKey) -> bool;
    /// V2 certificates toggle
    fn use_v2_certificates(&self, course_run: &CourseRunKey) -> bool;
    /// Integrity signature replaces ID verification
    fn integrity_signature_enabled(&self, course_run: &CourseRunKey) -> bool;
    /// Honor certificates are disabled, for the whole installation or for the course run
    fn honor_certificates_disabled(&self, course_run: &CourseRunKey) -> bool;
}

impl FeatureToggleService for CertsConf {
    #[inline]
    fn use_allowlist(&self, course_run: &CourseRunKey) -> bool {
        self.allowlist_enabled_for(course_run.as_str())
    }
    #[inline]
    fn use_v2_certificates(&self, course_run: &CourseRunKey) -> bool {
        self.v2_enabled_for(course_run.as_str())
    }
    #[inline]
    fn integrity_signature_enabled(&self, course_run: &CourseRunKey) -> bool {
        self.integrity_signature_enabled_for(course_run.as_str())
    }
    #[inline]
    fn honor_certificates_disabled(&self, course_run: &CourseRunKey) -> bool {
        self.honor_certificates_disabled_for(course_run.as_str())
    }
}

/// Eligibility mechanism used by a course run
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum EligibilityMode {
    /// Manual allowlist
    Allowlist,
    /// Rules based certificates
    V2,
    /// Status based check, certificates are generated outside of this engine
    Legacy,
}

impl EligibilityMode {
    /// Mode for the given toggles.
    ///
    /// Both toggles enabled is ambiguous and falls back to `Legacy`.
    pub fn from_toggles(use_allowlist: bool, use_v2: bool) -> Self {
        match (use_allowlist, use_v2) {
            (true, false) => EligibilityMode::Allowlist,
            (false, true) => EligibilityMode::V2,
            (true, true) | (false, false) => EligibilityMode::Legacy,
        }
    }
}

/// Features of a course run, read once
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CourseFeatures {
    /// Eligibility mechanism
    pub eligibility_mode: EligibilityMode,
    /// Integrity signature replaces ID verification
    pub integrity_signature_enabled: bool,
    /// Honor certificates are disabled
    pub honor_certificates_disabled: bool,
}

impl CourseFeatures {
    /// Read the features of a course run
    pub fn resolve(toggles: &dyn FeatureToggleService, course_run: &CourseRunKey) -> Self {
        let use_allowlist = toggles.use_allowlist(course_run);
        let use_v2 = toggles.use_v2_certificates(course_run);
        if use_allowlist && use_v2 {
            warn!(
                "{}: allowlist and v2 certificates are both enabled, fallback to legacy",
                course_run
            );
        }
        CourseFeatures {
            eligibility_mode: EligibilityMode::from_toggles(use_allowlist, use_v2),
            integrity_signature_enabled: toggles.integrity_signature_enabled(course_run),
            honor_certificates_disabled: toggles.honor_certificates_disabled(course_run),
        }
    }
}
