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

//! Embedded certificates store

use crate::db::{CertificateUpdate, CertsDbReader, CertsDbWriter, DbError};
use crate::models::{
    AllowlistEntry, CertificateId, CertificateInvalidation, CourseRunKey, Enrollment,
    GeneratedCertificate, InvalidationId, UserId,
};
use crate::status::CertificateStatus;
use certs_dbs_tools::{open_free_struct_db, BinFreeStructDb};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

/// Store file name
pub static CERTS_DB_FILE_NAME: &str = "certificates.db";

type UserCourseRun = (UserId, CourseRunKey);

/// Datas of the store
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CertsDatas {
    enrollments: HashMap<UserCourseRun, Enrollment>,
    allowlist: HashMap<UserCourseRun, AllowlistEntry>,
    certificates: HashMap<UserCourseRun, GeneratedCertificate>,
    invalidations: HashMap<CertificateId, Vec<CertificateInvalidation>>,
    next_certificate_id: u64,
    next_invalidation_id: u64,
}

/// Certificates store backed by a free structure database
#[derive(Debug)]
pub struct CertsStore {
    db: BinFreeStructDb<CertsDatas>,
}

impl CertsStore {
    /// Open the store in the given folder, or in memory
    pub fn open(dbs_folder_path: Option<&Path>) -> Result<Self, DbError> {
        Ok(CertsStore {
            db: open_free_struct_db::<CertsDatas>(dbs_folder_path, CERTS_DB_FILE_NAME)?,
        })
    }
    /// Invalidations of a certificate, active or not
    pub fn invalidations(
        &self,
        certificate_id: CertificateId,
    ) -> Result<Vec<CertificateInvalidation>, DbError> {
        Ok(self.db.read(|datas| {
            datas
                .invalidations
                .get(&certificate_id)
                .cloned()
                .unwrap_or_default()
        })?)
    }
}

impl CertsDbReader for CertsStore {
    fn get_enrollment(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
    ) -> Result<Option<Enrollment>, DbError> {
        let key = (user, course_run.clone());
        Ok(self.db.read(|datas| datas.enrollments.get(&key).cloned())?)
    }
    fn get_allowlist_entry(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
    ) -> Result<Option<AllowlistEntry>, DbError> {
        let key = (user, course_run.clone());
        Ok(self.db.read(|datas| datas.allowlist.get(&key).cloned())?)
    }
    fn get_certificate(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
    ) -> Result<Option<GeneratedCertificate>, DbError> {
        let key = (user, course_run.clone());
        Ok(self.db.read(|datas| {
            datas
                .certificates
                .get(&key)
                .filter(|cert| cert.status != CertificateStatus::Deleted)
                .cloned()
        })?)
    }
    fn get_active_invalidation(
        &self,
        certificate_id: CertificateId,
    ) -> Result<Option<CertificateInvalidation>, DbError> {
        Ok(self.db.read(|datas| {
            datas
                .invalidations
                .get(&certificate_id)
                .and_then(|invalidations| invalidations.iter().find(|inv| inv.active))
                .cloned()
        })?)
    }
}

impl CertsDbWriter for CertsStore {
    fn save_enrollment(&self, enrollment: Enrollment) -> Result<(), DbError> {
        self.db.write_and_save(|datas| {
            datas.enrollments.insert(
                (enrollment.user, enrollment.course_run.clone()),
                enrollment,
            );
        })
    }
    fn save_allowlist_entry(&self, entry: AllowlistEntry) -> Result<(), DbError> {
        self.db.write_and_save(|datas| {
            datas
                .allowlist
                .insert((entry.user, entry.course_run.clone()), entry);
        })
    }
    fn upsert_certificate(
        &self,
        user: UserId,
        course_run: &CourseRunKey,
        update: CertificateUpdate,
    ) -> Result<GeneratedCertificate, DbError> {
        self.db.write_and_save(|datas| {
            let CertificateUpdate {
                mode,
                status,
                grade,
                generation_mode,
            } = update;
            match datas.certificates.entry((user, course_run.clone())) {
                Entry::Occupied(mut entry) => {
                    let cert = entry.get_mut();
                    cert.mode = mode;
                    cert.status = status;
                    cert.grade = grade;
                    cert.generation_mode = generation_mode;
                    cert.clone()
                }
                Entry::Vacant(entry) => {
                    datas.next_certificate_id += 1;
                    entry
                        .insert(GeneratedCertificate {
                            id: CertificateId(datas.next_certificate_id),
                            user,
                            course_run: course_run.clone(),
                            mode,
                            status,
                            grade,
                            download_url: None,
                            generation_mode,
                        })
                        .clone()
                }
            }
        })
    }
    fn invalidate_certificate(
        &self,
        certificate_id: CertificateId,
        invalidated_by: UserId,
        notes: String,
    ) -> Result<Option<CertificateInvalidation>, DbError> {
        self.db.write_and_save(|datas| {
            let cert = datas
                .certificates
                .values_mut()
                .find(|cert| cert.id == certificate_id)?;
            cert.status = CertificateStatus::Invalidated;
            datas.next_invalidation_id += 1;
            let invalidation = CertificateInvalidation {
                id: InvalidationId(datas.next_invalidation_id),
                certificate_id,
                invalidated_by,
                notes,
                active: true,
            };
            datas
                .invalidations
                .entry(certificate_id)
                .or_insert_with(Vec::new)
                .push(invalidation.clone());
            Some(invalidation)
        })
    }
    fn deactivate_invalidation(&self, certificate_id: CertificateId) -> Result<bool, DbError> {
        self.db.write_and_save(|datas| {
            let mut deactivated = false;
            if let Some(invalidations) = datas.invalidations.get_mut(&certificate_id) {
                for invalidation in invalidations.iter_mut().filter(|inv| inv.active) {
                    invalidation.active = false;
                    deactivated = true;
                }
            }
            deactivated
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnrollmentMode, GenerationMode};
    use pretty_assertions::assert_eq;

    fn update(status: CertificateStatus, grade: &str) -> CertificateUpdate {
        CertificateUpdate {
            mode: EnrollmentMode::Verified,
            status,
            grade: grade.to_owned(),
            generation_mode: GenerationMode::Batch,
        }
    }

    #[test]
    fn upsert_keeps_certificate_id() -> Result<(), DbError> {
        let store = CertsStore::open(None)?;
        let course: CourseRunKey = "course-v1:org+c1+r1".into();

        let created =
            store.upsert_certificate(UserId(1), &course, update(CertificateStatus::Notpassing, "0.40"))?;
        let updated = store.upsert_certificate(
            UserId(1),
            &course,
            update(CertificateStatus::Downloadable, "0.80"),
        )?;
        let other = store.upsert_certificate(
            UserId(2),
            &course,
            update(CertificateStatus::Downloadable, "0.90"),
        )?;

        assert_eq!(created.id, updated.id);
        assert_ne!(created.id, other.id);
        assert_eq!(Some(updated), store.get_certificate(UserId(1), &course)?);
        Ok(())
    }

    #[test]
    fn deleted_certificate_is_not_returned() -> Result<(), DbError> {
        let store = CertsStore::open(None)?;
        let course: CourseRunKey = "course-v1:org+c1+r1".into();

        store.upsert_certificate(UserId(1), &course, update(CertificateStatus::Deleted, ""))?;

        assert_eq!(None, store.get_certificate(UserId(1), &course)?);
        Ok(())
    }

    #[test]
    fn invalidation_lifecycle() -> Result<(), DbError> {
        let store = CertsStore::open(None)?;
        let course: CourseRunKey = "course-v1:org+c1+r1".into();
        let cert = store.upsert_certificate(
            UserId(1),
            &course,
            update(CertificateStatus::Downloadable, "0.80"),
        )?;

        assert_eq!(
            None,
            store.invalidate_certificate(CertificateId(999), UserId(42), String::new())?
        );
        let invalidation = store
            .invalidate_certificate(cert.id, UserId(42), "cheating".to_owned())?
            .expect("certificate exists");
        assert_eq!(
            Some(invalidation.clone()),
            store.get_active_invalidation(cert.id)?
        );
        assert_eq!(
            Some(CertificateStatus::Invalidated),
            store.get_certificate(UserId(1), &course)?.map(|c| c.status)
        );

        assert!(store.deactivate_invalidation(cert.id)?);
        assert!(!store.deactivate_invalidation(cert.id)?);
        assert_eq!(None, store.get_active_invalidation(cert.id)?);
        assert_eq!(1, store.invalidations(cert.id)?.len());
        Ok(())
    }

    #[test]
    fn file_store_is_reloaded() -> Result<(), DbError> {
        let tmp_dir = tempfile::tempdir()?;
        let course: CourseRunKey = "course-v1:org+c1+r1".into();
        let enrollment = Enrollment {
            user: UserId(3),
            course_run: course.clone(),
            mode: EnrollmentMode::Honor,
            is_active: true,
        };
        {
            let store = CertsStore::open(Some(tmp_dir.path()))?;
            store.save_enrollment(enrollment.clone())?;
        }
        let store = CertsStore::open(Some(tmp_dir.path()))?;
        assert_eq!(Some(enrollment), store.get_enrollment(UserId(3), &course)?);
        Ok(())
    }
}
