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

//! External collaborators consumed by the decision engine

use crate::models::{CourseRunKey, UserId};
use failure::Fail;

#[cfg(test)]
use mockall::*;

/// A collaborator could not answer
#[derive(Clone, Debug, Eq, Fail, PartialEq)]
#[fail(display = "{} service failure: {}", service, reason)]
pub struct CollaboratorError {
    /// Failing service
    pub service: &'static str,
    /// Failure reason
    pub reason: String,
}

/// Identity verification
#[cfg_attr(test, automock)]
pub trait IdVerificationService {
    /// The user identity is verified
    fn user_is_verified(&self, user: UserId) -> Result<bool, CollaboratorError>;
}

/// Grading
#[cfg_attr(test, automock)]
pub trait GradingService {
    /// The user reached the passing grade of the course run
    fn has_passing_grade(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
    ) -> Result<bool, CollaboratorError>;
    /// Current grade of the user, between 0.0 and 1.0
    fn percent_grade(&self, user: UserId, course_run: &CourseRunKey)
        -> Result<f64, CollaboratorError>;
}

/// Course metadata
#[cfg_attr(test, automock)]
pub trait CourseMetadataService {
    /// The course run is a custom course (CCX)
    fn is_ccx_course(&self, course_run: &CourseRunKey) -> Result<bool, CollaboratorError>;
    /// Web certificates are enabled for the course run
    fn has_html_certificates_enabled(
        &self,
        course_run: &CourseRunKey,
    ) -> Result<bool, CollaboratorError>;
}

/// Beta testers
#[cfg_attr(test, automock)]
pub trait BetaTesterService {
    /// The user is a beta tester of the course run
    fn is_beta_tester(&self, user: UserId, course_run: &CourseRunKey)
        -> Result<bool, CollaboratorError>;
}
