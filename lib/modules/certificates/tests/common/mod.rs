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

#![allow(dead_code)]

use certs_conf::CertsConf;
use certs_generation::*;

pub static COURSE: &str = "course-v1:org+c1+r1";

pub fn course() -> CourseRunKey {
    COURSE.into()
}

/// Collaborators answering from plain fields
pub struct StubServices {
    pub verified: bool,
    pub passing: bool,
    pub percent: f64,
    pub ccx: bool,
    pub web_certs: bool,
    pub beta_tester: bool,
    pub grading_down: bool,
}

impl Default for StubServices {
    fn default() -> Self {
        StubServices {
            verified: true,
            passing: true,
            percent: 0.8,
            ccx: false,
            web_certs: true,
            beta_tester: false,
            grading_down: false,
        }
    }
}

impl IdVerificationService for StubServices {
    fn user_is_verified(&self, _user: UserId) -> Result<bool, CollaboratorError> {
        Ok(self.verified)
    }
}

impl GradingService for StubServices {
    fn has_passing_grade(
        &self,
        _user: UserId,
        _course_run: &CourseRunKey,
    ) -> Result<bool, CollaboratorError> {
        if self.grading_down {
            Err(CollaboratorError {
                service: "grading",
                reason: "grades unavailable".to_owned(),
            })
        } else {
            Ok(self.passing)
        }
    }
    fn percent_grade(
        &self,
        _user: UserId,
        _course_run: &CourseRunKey,
    ) -> Result<f64, CollaboratorError> {
        if self.grading_down {
            Err(CollaboratorError {
                service: "grading",
                reason: "grades unavailable".to_owned(),
            })
        } else {
            Ok(self.percent)
        }
    }
}

impl CourseMetadataService for StubServices {
    fn is_ccx_course(&self, _course_run: &CourseRunKey) -> Result<bool, CollaboratorError> {
        Ok(self.ccx)
    }
    fn has_html_certificates_enabled(
        &self,
        _course_run: &CourseRunKey,
    ) -> Result<bool, CollaboratorError> {
        Ok(self.web_certs)
    }
}

impl BetaTesterService for StubServices {
    fn is_beta_tester(
        &self,
        _user: UserId,
        _course_run: &CourseRunKey,
    ) -> Result<bool, CollaboratorError> {
        Ok(self.beta_tester)
    }
}

/// In memory store, configuration and stub collaborators
pub struct Fixture {
    pub store: CertsStore,
    pub conf: CertsConf,
    pub services: StubServices,
}

impl Fixture {
    pub fn new(conf: CertsConf) -> Self {
        certs_common_tests_tools::logger::init_logger_stdout();
        Fixture {
            store: CertsStore::open(None).expect("fail to open memory store"),
            conf,
            services: StubServices::default(),
        }
    }
    pub fn allowlist_course() -> Self {
        let mut conf = CertsConf::default();
        conf.allowlist_courses.insert(COURSE.to_owned());
        Self::new(conf)
    }
    pub fn v2_course() -> Self {
        let mut conf = CertsConf::default();
        conf.v2_courses.insert(COURSE.to_owned());
        Self::new(conf)
    }
    pub fn ctx(&self) -> CertsContext {
        CertsContext {
            db: &self.store,
            id_verification: &self.services,
            grading: &self.services,
            course_metadata: &self.services,
            beta_testers: &self.services,
            feature_toggles: &self.conf,
        }
    }
    pub fn enroll(&self, user: UserId, mode: EnrollmentMode) {
        self.store
            .save_enrollment(Enrollment {
                user,
                course_run: course(),
                mode,
                is_active: true,
            })
            .expect("fail to save enrollment");
    }
    pub fn add_to_allowlist(&self, user: UserId, whitelist: bool) {
        self.store
            .save_allowlist_entry(AllowlistEntry {
                user,
                course_run: course(),
                whitelist,
                notes: String::new(),
            })
            .expect("fail to save allowlist entry");
    }
    pub fn certificate(&self, user: UserId) -> Option<GeneratedCertificate> {
        self.store
            .get_certificate(user, &course())
            .expect("fail to read certificate")
    }
    pub fn status(&self, user: UserId) -> Option<CertificateStatus> {
        self.certificate(user).map(|cert| cert.status)
    }
}
