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

//! Certificates persistence traits

pub use certs_dbs_tools::DbError;

use crate::models::{
    AllowlistEntry, CertificateId, CertificateInvalidation, CourseRunKey, Enrollment,
    EnrollmentMode, GeneratedCertificate, GenerationMode, UserId,
};
use crate::status::CertificateStatus;

#[cfg(test)]
use mockall::*;

/// Read access to certificates datas
#[cfg_attr(test, automock)]
pub trait CertsDbReader {
    /// Enrollment of the user in the course run, active or not
    fn get_enrollment(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
    ) -> Result<Option<Enrollment>, DbError>;
    /// Allowlist entry of the user in the course run
    fn get_allowlist_entry(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
    ) -> Result<Option<AllowlistEntry>, DbError>;
    /// Certificate of the user in the course run, unless it is deleted
    fn get_certificate(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
    ) -> Result<Option<GeneratedCertificate>, DbError>;
    /// Active invalidation of the certificate
    fn get_active_invalidation(
        &self,
        certificate_id: CertificateId,
    ) -> Result<Option<CertificateInvalidation>, DbError>;
}

/// Fields written by a certificate upsert
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateUpdate {
    /// Enrollment mode
    pub mode: EnrollmentMode,
    /// New status
    pub status: CertificateStatus,
    /// Grade snapshot
    pub grade: String,
    /// Generation trigger
    pub generation_mode: GenerationMode,
}

/// Write access to certificates datas
#[cfg_attr(test, automock)]
pub trait CertsDbWriter {
    /// Create or replace the enrollment of the user in the course run
    fn save_enrollment(&self, enrollment: Enrollment) -> Result<(), DbError>;
    /// Create or replace the allowlist entry of the user in the course run
    fn save_allowlist_entry(&self, entry: AllowlistEntry) -> Result<(), DbError>;
    /// Create the certificate of the user in the course run or update it in place
    fn upsert_certificate(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
        update: CertificateUpdate,
    ) -> Result<GeneratedCertificate, DbError>;
    /// Invalidate a certificate and mark it `invalidated`.
    /// Returns `None` when the certificate does not exist.
    fn invalidate_certificate(
        &self,
        certificate_id: CertificateId,
        invalidated_by: UserId,
        notes: String,
    ) -> Result<Option<CertificateInvalidation>, DbError>;
    /// Deactivate the active invalidation of a certificate.
    /// Returns false when there was none.
    fn deactivate_invalidation(&self, certificate_id: CertificateId) -> Result<bool, DbError>;
}
