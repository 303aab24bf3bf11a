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

//! Certificate statuses

use failure::Fail;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a generated certificate
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    /// No certificate can be delivered (initial or revoked by an old flow)
    Unavailable,
    /// Certificate was deleted
    Deleted,
    /// Certificate deletion is in progress
    Deleting,
    /// Certificate is generated and available
    Downloadable,
    /// Certificate generation is in progress
    Generating,
    /// Learner did not reach the passing grade
    Notpassing,
    /// Learner is restricted (embargo)
    Restricted,
    /// Generation failed
    Error,
    /// Audit learner with a passing grade, no certificate for audit
    AuditPassing,
    /// Audit learner without a passing grade
    AuditNotpassing,
    /// Honor learner with a passing grade while honor certificates are disabled
    HonorPassing,
    /// Identity of the learner is not verified
    Unverified,
    /// Certificate was invalidated by an administrator
    Invalidated,
    /// Certificate was requested by the learner
    Requesting,
}

impl CertificateStatus {
    /// All statuses
    pub const ALL: [CertificateStatus; 14] = [
        CertificateStatus::Unavailable,
        CertificateStatus::Deleted,
        CertificateStatus::Deleting,
        CertificateStatus::Downloadable,
        CertificateStatus::Generating,
        CertificateStatus::Notpassing,
        CertificateStatus::Restricted,
        CertificateStatus::Error,
        CertificateStatus::AuditPassing,
        CertificateStatus::AuditNotpassing,
        CertificateStatus::HonorPassing,
        CertificateStatus::Unverified,
        CertificateStatus::Invalidated,
        CertificateStatus::Requesting,
    ];

    /// Status name as stored
    pub fn as_str(self) -> &'static str {
        match self {
            CertificateStatus::Unavailable => "unavailable",
            CertificateStatus::Deleted => "deleted",
            CertificateStatus::Deleting => "deleting",
            CertificateStatus::Downloadable => "downloadable",
            CertificateStatus::Generating => "generating",
            CertificateStatus::Notpassing => "notpassing",
            CertificateStatus::Restricted => "restricted",
            CertificateStatus::Error => "error",
            CertificateStatus::AuditPassing => "audit_passing",
            CertificateStatus::AuditNotpassing => "audit_notpassing",
            CertificateStatus::HonorPassing => "honor_passing",
            CertificateStatus::Unverified => "unverified",
            CertificateStatus::Invalidated => "invalidated",
            CertificateStatus::Requesting => "requesting",
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown certificate status name
#[derive(Clone, Debug, Eq, Fail, PartialEq)]
#[fail(display = "unknown certificate status '{}'", _0)]
pub struct UnknownCertificateStatus(pub String);

impl FromStr for CertificateStatus {
    type Err = UnknownCertificateStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CertificateStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownCertificateStatus(s.to_owned()))
    }
}
