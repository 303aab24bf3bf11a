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

//! Decision context

use crate::db::CertsDbReader;
use crate::features::{CourseFeatures, FeatureToggleService};
use crate::models::CourseRunKey;
use crate::services::{
    BetaTesterService, CourseMetadataService, GradingService, IdVerificationService,
};

/// Collaborators of a decision
#[derive(Copy, Clone)]
pub struct CertsContext<'a> {
    /// Certificates datas
    pub db: &'a dyn CertsDbReader,
    /// Identity verification
    pub id_verification: &'a dyn IdVerificationService,
    /// Grading
    pub grading: &'a dyn GradingService,
    /// Course metadata
    pub course_metadata: &'a dyn CourseMetadataService,
    /// Beta testers
    pub beta_testers: &'a dyn BetaTesterService,
    /// Feature toggles
    pub feature_toggles: &'a dyn FeatureToggleService,
}

impl<'a> CertsContext<'a> {
    /// Read the features of a course run
    #[inline]
    pub fn features(&self, course_run: &CourseRunKey) -> CourseFeatures {
        CourseFeatures::resolve(self.feature_toggles, course_run)
    }
}
