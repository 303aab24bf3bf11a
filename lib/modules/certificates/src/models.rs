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

//! Certificates data model

use crate::status::CertificateStatus;
use failure::Fail;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User identifier
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course run key, for example `course-v1:edX+DemoX+Demo_Course`
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CourseRunKey(pub String);

impl CourseRunKey {
    /// Key as str
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseRunKey {
    fn from(key: &str) -> Self {
        CourseRunKey(key.to_owned())
    }
}

impl std::fmt::Display for CourseRunKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generated certificate identifier
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CertificateId(pub u64);

/// Certificate invalidation identifier
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct InvalidationId(pub u64);

/// Enrollment mode
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentMode {
    /// Audit
    Audit,
    /// Honor
    Honor,
    /// Verified
    Verified,
    /// Professional
    Professional,
    /// Professional without ID verification
    NoIdProfessional,
    /// Credit
    Credit,
    /// Masters
    Masters,
    /// Executive education
    ExecutiveEducation,
}

impl EnrollmentMode {
    /// All enrollment modes
    pub const ALL: [EnrollmentMode; 8] = [
        EnrollmentMode::Audit,
        EnrollmentMode::Honor,
        EnrollmentMode::Verified,
        EnrollmentMode::Professional,
        EnrollmentMode::NoIdProfessional,
        EnrollmentMode::Credit,
        EnrollmentMode::Masters,
        EnrollmentMode::ExecutiveEducation,
    ];

    /// Mode name as stored
    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentMode::Audit => "audit",
            EnrollmentMode::Honor => "honor",
            EnrollmentMode::Verified => "verified",
            EnrollmentMode::Professional => "professional",
            EnrollmentMode::NoIdProfessional => "no-id-professional",
            EnrollmentMode::Credit => "credit",
            EnrollmentMode::Masters => "masters",
            EnrollmentMode::ExecutiveEducation => "executive-education",
        }
    }
}

impl std::fmt::Display for EnrollmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown enrollment mode name
#[derive(Clone, Debug, Eq, Fail, PartialEq)]
#[fail(display = "unknown enrollment mode '{}'", _0)]
pub struct UnknownEnrollmentMode(pub String);

impl FromStr for EnrollmentMode {
    type Err = UnknownEnrollmentMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnrollmentMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownEnrollmentMode(s.to_owned()))
    }
}

/// Enrollment of a user in a course run
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Enrollment {
    /// User
    pub user: UserId,
    /// Course run
    pub course_run: CourseRunKey,
    /// Enrollment mode
    pub mode: EnrollmentMode,
    /// An inactive enrollment counts as no enrollment
    pub is_active: bool,
}

/// Manual allowlist entry
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AllowlistEntry {
    /// User
    pub user: UserId,
    /// Course run
    pub course_run: CourseRunKey,
    /// The user is on the allowlist only when true
    pub whitelist: bool,
    /// Free notes
    pub notes: String,
}

/// How the generation was triggered
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GenerationMode {
    /// Batch generation triggered by staff or by a scheduled task
    #[serde(rename = "batch")]
    Batch,
    /// Generation requested by the learner
    #[serde(rename = "self")]
    SelfGenerated,
}

impl Default for GenerationMode {
    fn default() -> Self {
        GenerationMode::Batch
    }
}

/// Generated certificate record, one per (user, course run)
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GeneratedCertificate {
    /// Record id, kept across updates
    pub id: CertificateId,
    /// User
    pub user: UserId,
    /// Course run
    pub course_run: CourseRunKey,
    /// Enrollment mode at generation time
    pub mode: EnrollmentMode,
    /// Current status
    pub status: CertificateStatus,
    /// Grade snapshot, may be empty
    pub grade: String,
    /// Download metadata
    pub download_url: Option<String>,
    /// Generation trigger
    pub generation_mode: GenerationMode,
}

/// Administrative invalidation of a certificate
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CertificateInvalidation {
    /// Invalidation id
    pub id: InvalidationId,
    /// Invalidated certificate
    pub certificate_id: CertificateId,
    /// Administrator who invalidated the certificate
    pub invalidated_by: UserId,
    /// Free notes
    pub notes: String,
    /// Only an active invalidation blocks regeneration
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_mode_names_parse_back() {
        for mode in EnrollmentMode::ALL.iter() {
            assert_eq!(Ok(*mode), mode.as_str().parse::<EnrollmentMode>());
        }
        assert_eq!(
            Err(UnknownEnrollmentMode("no_id_professional".to_owned())),
            "no_id_professional".parse::<EnrollmentMode>()
        );
    }

    #[test]
    fn default_generation_mode_is_batch() {
        assert_eq!(GenerationMode::Batch, GenerationMode::default());
    }
}
