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

//! Certificates feature flags
//!
//! Course runs are identified by their key, for example
//! `course-v1:edX+DemoX+Demo_Course`.

use std::collections::HashSet;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
/// Certificates configuration
pub struct CertsConf {
    /// Honor certificates are disabled on the whole installation
    #[serde(default)]
    pub disable_honor_certificates: bool,
    /// Allowlist mode is enabled for every course run
    #[serde(default)]
    pub allowlist_for_all_courses: bool,
    /// Course runs using allowlist mode
    #[serde(default)]
    pub allowlist_courses: HashSet<String>,
    /// V2 certificates are enabled for every course run
    #[serde(default)]
    pub v2_for_all_courses: bool,
    /// Course runs using v2 certificates
    #[serde(default)]
    pub v2_courses: HashSet<String>,
    /// Course runs where the integrity signature replaces ID verification
    #[serde(default)]
    pub integrity_signature_courses: HashSet<String>,
    /// Course runs where honor certificates are disabled
    #[serde(default)]
    pub honor_disabled_courses: HashSet<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
/// Certificates configuration overrides, every field is optional
pub struct CertsUserConf {
    /// See `CertsConf::disable_honor_certificates`
    pub disable_honor_certificates: Option<bool>,
    /// See `CertsConf::allowlist_for_all_courses`
    pub allowlist_for_all_courses: Option<bool>,
    /// See `CertsConf::allowlist_courses`
    pub allowlist_courses: Option<HashSet<String>>,
    /// See `CertsConf::v2_for_all_courses`
    pub v2_for_all_courses: Option<bool>,
    /// See `CertsConf::v2_courses`
    pub v2_courses: Option<HashSet<String>>,
    /// See `CertsConf::integrity_signature_courses`
    pub integrity_signature_courses: Option<HashSet<String>>,
    /// See `CertsConf::honor_disabled_courses`
    pub honor_disabled_courses: Option<HashSet<String>>,
}

impl CertsConf {
    /// Override configuration with user configuration
    pub fn r#override(self, user_conf: CertsUserConf) -> Self {
        CertsConf {
            disable_honor_certificates: user_conf
                .disable_honor_certificates
                .unwrap_or(self.disable_honor_certificates),
            allowlist_for_all_courses: user_conf
                .allowlist_for_all_courses
                .unwrap_or(self.allowlist_for_all_courses),
            allowlist_courses: user_conf
                .allowlist_courses
                .unwrap_or(self.allowlist_courses),
            v2_for_all_courses: user_conf
                .v2_for_all_courses
                .unwrap_or(self.v2_for_all_courses),
            v2_courses: user_conf.v2_courses.unwrap_or(self.v2_courses),
            integrity_signature_courses: user_conf
                .integrity_signature_courses
                .unwrap_or(self.integrity_signature_courses),
            honor_disabled_courses: user_conf
                .honor_disabled_courses
                .unwrap_or(self.honor_disabled_courses),
        }
    }
    /// Allowlist toggle for a course run
    pub fn allowlist_enabled_for(&self, course_run_key: &str) -> bool {
        self.allowlist_for_all_courses || self.allowlist_courses.contains(course_run_key)
    }
    /// V2 certificates toggle for a course run
    pub fn v2_enabled_for(&self, course_run_key: &str) -> bool {
        self.v2_for_all_courses || self.v2_courses.contains(course_run_key)
    }
    /// Integrity signature toggle for a course run
    pub fn integrity_signature_enabled_for(&self, course_run_key: &str) -> bool {
        self.integrity_signature_courses.contains(course_run_key)
    }
    /// Honor certificates are disabled for the installation or for this course run
    pub fn honor_certificates_disabled_for(&self, course_run_key: &str) -> bool {
        self.disable_honor_certificates || self.honor_disabled_courses.contains(course_run_key)
    }
}

impl From<CertsUserConf> for CertsConf {
    fn from(user_conf: CertsUserConf) -> Self {
        Self::default().r#override(user_conf)
    }
}
