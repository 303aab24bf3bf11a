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

//! Status of a regular certificate for an enrollment mode and a grade outcome

use crate::features::CourseFeatures;
use crate::models::EnrollmentMode;
use crate::status::CertificateStatus;
use maplit::btreemap;
use std::collections::BTreeMap;

/// (mode, passed) => status
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusTable(BTreeMap<(EnrollmentMode, bool), CertificateStatus>);

impl StatusTable {
    /// Table for a course run where honor certificates are disabled or not
    pub fn new(honor_certificates_disabled: bool) -> Self {
        use crate::status::CertificateStatus::*;
        use crate::models::EnrollmentMode::*;

        let (honor_passing, honor_failing) = if honor_certificates_disabled {
            (HonorPassing, Notpassing)
        } else {
            (Downloadable, Notpassing)
        };
        StatusTable(btreemap![
            (Audit, true) => AuditPassing,
            (Audit, false) => AuditNotpassing,
            (EnrollmentMode::Honor, true) => honor_passing,
            (EnrollmentMode::Honor, false) => honor_failing,
            (Verified, true) => Downloadable,
            (Verified, false) => Notpassing,
            (Professional, true) => Downloadable,
            (Professional, false) => Notpassing,
            (NoIdProfessional, true) => Downloadable,
            (NoIdProfessional, false) => Notpassing,
            (Credit, true) => Downloadable,
            (Credit, false) => Notpassing,
            (Masters, true) => Downloadable,
            (Masters, false) => Notpassing,
            (ExecutiveEducation, true) => Downloadable,
            (ExecutiveEducation, false) => Notpassing,
        ])
    }
    /// Table for the features of a course run
    #[inline]
    pub fn for_features(features: &CourseFeatures) -> Self {
        Self::new(features.honor_certificates_disabled)
    }
    /// Status for the enrollment mode and the grade outcome
    pub fn status_for(&self, mode: EnrollmentMode, passed: bool) -> CertificateStatus {
        self.0
            .get(&(mode, passed))
            .copied()
            .unwrap_or(if passed {
                CertificateStatus::Downloadable
            } else {
                CertificateStatus::Notpassing
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_mode() {
        for honor_disabled in &[false, true] {
            let table = StatusTable::new(*honor_disabled);
            assert_eq!(EnrollmentMode::ALL.len() * 2, table.0.len());
        }
    }

    #[test]
    fn honor_statuses_follow_the_flag() {
        let enabled = StatusTable::new(false);
        let disabled = StatusTable::new(true);

        assert_eq!(
            CertificateStatus::Downloadable,
            enabled.status_for(EnrollmentMode::Honor, true)
        );
        assert_eq!(
            CertificateStatus::HonorPassing,
            disabled.status_for(EnrollmentMode::Honor, true)
        );
        assert_eq!(
            CertificateStatus::Notpassing,
            disabled.status_for(EnrollmentMode::Honor, false)
        );
        assert_eq!(
            CertificateStatus::AuditNotpassing,
            enabled.status_for(EnrollmentMode::Audit, false)
        );
        assert_eq!(
            CertificateStatus::AuditPassing,
            disabled.status_for(EnrollmentMode::Audit, true)
        );
        assert_eq!(
            CertificateStatus::Downloadable,
            disabled.status_for(EnrollmentMode::Masters, true)
        );
    }
}
