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

//! Mocked collaborators for rules tests

use super::RuleDatas;
use crate::context::CertsContext;
use crate::db::MockCertsDbReader;
use crate::features::{CourseFeatures, EligibilityMode, MockFeatureToggleService};
use crate::models::{CourseRunKey, EnrollmentMode, UserId};
use crate::services::{
    MockBetaTesterService, MockCourseMetadataService, MockGradingService,
    MockIdVerificationService,
};

pub(crate) fn course() -> CourseRunKey {
    "course-v1:org+c1+r1".into()
}

pub(crate) fn user() -> UserId {
    UserId(1)
}

pub(crate) fn features(eligibility_mode: EligibilityMode) -> CourseFeatures {
    CourseFeatures {
        eligibility_mode,
        integrity_signature_enabled: false,
        honor_certificates_disabled: false,
    }
}

/// Collaborators without any expectation, a test sets only what its rule uses
pub(crate) struct MocksEnv {
    pub(crate) db: MockCertsDbReader,
    pub(crate) id_verification: MockIdVerificationService,
    pub(crate) grading: MockGradingService,
    pub(crate) course_metadata: MockCourseMetadataService,
    pub(crate) beta_testers: MockBetaTesterService,
    pub(crate) feature_toggles: MockFeatureToggleService,
}

impl MocksEnv {
    pub(crate) fn new() -> Self {
        MocksEnv {
            db: MockCertsDbReader::new(),
            id_verification: MockIdVerificationService::new(),
            grading: MockGradingService::new(),
            course_metadata: MockCourseMetadataService::new(),
            beta_testers: MockBetaTesterService::new(),
            feature_toggles: MockFeatureToggleService::new(),
        }
    }
    pub(crate) fn ctx(&self) -> CertsContext {
        CertsContext {
            db: &self.db,
            id_verification: &self.id_verification,
            grading: &self.grading,
            course_metadata: &self.course_metadata,
            beta_testers: &self.beta_testers,
            feature_toggles: &self.feature_toggles,
        }
    }
    pub(crate) fn datas<'a>(
        &'a self,
        course_run: &'a CourseRunKey,
        features: CourseFeatures,
        mode: Option<EnrollmentMode>,
    ) -> RuleDatas<'a> {
        RuleDatas {
            ctx: self.ctx(),
            features,
            user: user(),
            course_run,
            mode,
        }
    }
}
