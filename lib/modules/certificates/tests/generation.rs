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

mod common;

use certs_generation::*;
use common::{course, Fixture};
use pretty_assertions::assert_eq;

static USER: UserId = UserId(30);

fn allowlist_fixture() -> Fixture {
    let fixture = Fixture::allowlist_course();
    fixture.enroll(USER, EnrollmentMode::Verified);
    fixture.add_to_allowlist(USER, true);
    fixture
}

fn generate(fixture: &Fixture) -> Result<bool, CertsError> {
    generate_certificate_task(
        fixture.ctx(),
        &fixture.store,
        USER,
        &course(),
        GenerationMode::Batch,
    )
}

#[test]
fn allowlist_learner_gets_downloadable_certificate() -> Result<(), CertsError> {
    let fixture = allowlist_fixture();

    assert!(generate_allowlist_certificate_task(
        fixture.ctx(),
        &fixture.store,
        USER,
        &course(),
        GenerationMode::Batch,
    )?);

    let cert = fixture.certificate(USER).expect("certificate is written");
    assert_eq!(CertificateStatus::Downloadable, cert.status);
    assert_eq!(EnrollmentMode::Verified, cert.mode);
    assert_eq!("0.80", cert.grade);
    assert_eq!(GenerationMode::Batch, cert.generation_mode);
    assert_eq!(None, cert.download_url);
    Ok(())
}

#[test]
fn invalidated_allowlist_certificate_is_not_regenerated() -> Result<(), CertsError> {
    let fixture = allowlist_fixture();
    assert!(generate(&fixture)?);
    let cert = fixture.certificate(USER).expect("certificate is written");
    fixture
        .store
        .invalidate_certificate(cert.id, UserId(1), "misconduct".to_owned())?;

    assert!(!can_generate_allowlist_certificate(
        fixture.ctx(),
        USER,
        &course(),
        None
    )?);
    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::Invalidated), fixture.status(USER));

    fixture.store.deactivate_invalidation(cert.id)?;
    assert!(generate(&fixture)?);
    let regenerated = fixture.certificate(USER).expect("certificate is written");
    assert_eq!(CertificateStatus::Downloadable, regenerated.status);
    assert_eq!(cert.id, regenerated.id);
    Ok(())
}

#[test]
fn v2_toggle_alone_flips_eligibility() -> Result<(), CertsError> {
    let mut fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Professional);

    assert!(can_generate_v2_certificate(fixture.ctx(), USER, &course())?);
    fixture.conf.v2_courses.clear();
    assert!(!can_generate_v2_certificate(fixture.ctx(), USER, &course())?);
    Ok(())
}

#[test]
fn generation_is_idempotent() -> Result<(), CertsError> {
    let fixture = allowlist_fixture();

    assert!(generate(&fixture)?);
    let first = fixture.certificate(USER);
    assert!(generate(&fixture)?);
    assert_eq!(first, fixture.certificate(USER));

    let self_generated = generate_allowlist_certificate_task(
        fixture.ctx(),
        &fixture.store,
        USER,
        &course(),
        GenerationMode::SelfGenerated,
    )?;
    assert!(self_generated);
    // nothing changed, the record is not rewritten
    assert_eq!(first, fixture.certificate(USER));
    Ok(())
}

#[test]
fn grade_change_updates_the_snapshot() -> Result<(), CertsError> {
    let mut fixture = allowlist_fixture();
    assert!(generate(&fixture)?);

    fixture.services.percent = 0.916;
    assert!(generate(&fixture)?);
    assert_eq!(
        "0.92",
        fixture.certificate(USER).expect("certificate").grade
    );
    Ok(())
}

#[test]
fn unverified_allowlist_learner() -> Result<(), CertsError> {
    let mut fixture = allowlist_fixture();
    fixture.services.verified = false;

    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::Unverified), fixture.status(USER));

    fixture
        .conf
        .integrity_signature_courses
        .insert(common::COURSE.to_owned());
    assert!(generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::Downloadable), fixture.status(USER));
    Ok(())
}

#[test]
fn other_allowlist_rejections_write_nothing() -> Result<(), CertsError> {
    let mut fixture = Fixture::allowlist_course();
    fixture.enroll(USER, EnrollmentMode::Verified);

    // not on the allowlist
    assert!(!generate(&fixture)?);
    assert_eq!(None, fixture.certificate(USER));

    fixture.add_to_allowlist(USER, true);
    fixture.services.web_certs = false;
    assert!(!generate(&fixture)?);
    assert_eq!(None, fixture.certificate(USER));
    Ok(())
}

#[test]
fn v2_failing_learner_gets_notpassing() -> Result<(), CertsError> {
    let mut fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Verified);
    fixture.services.passing = false;
    fixture.services.percent = 0.3;

    assert!(!generate(&fixture)?);
    let cert = fixture.certificate(USER).expect("certificate is written");
    assert_eq!(CertificateStatus::Notpassing, cert.status);
    assert_eq!("0.30", cert.grade);

    fixture.services.passing = true;
    fixture.services.percent = 0.75;
    assert!(generate(&fixture)?);
    let cert = fixture.certificate(USER).expect("certificate is written");
    assert_eq!(CertificateStatus::Downloadable, cert.status);
    assert_eq!("0.75", cert.grade);
    Ok(())
}

#[test]
fn v2_audit_learner_gets_audit_status() -> Result<(), CertsError> {
    let mut fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Audit);

    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::AuditPassing), fixture.status(USER));

    fixture.services.passing = false;
    assert!(!generate(&fixture)?);
    assert_eq!(
        Some(CertificateStatus::AuditNotpassing),
        fixture.status(USER)
    );
    Ok(())
}

#[test]
fn v2_honor_status_follows_honor_flag() -> Result<(), CertsError> {
    let mut fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Honor);

    assert!(generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::Downloadable), fixture.status(USER));

    fixture.conf.disable_honor_certificates = true;
    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::HonorPassing), fixture.status(USER));
    Ok(())
}

#[test]
fn v2_unverified_and_ccx() -> Result<(), CertsError> {
    let mut fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Verified);

    fixture.services.ccx = true;
    assert!(!generate(&fixture)?);
    assert_eq!(None, fixture.certificate(USER));

    fixture.services.ccx = false;
    fixture.services.verified = false;
    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::Unverified), fixture.status(USER));
    Ok(())
}

#[test]
fn v2_invalidation_marks_existing_certificate() -> Result<(), CertsError> {
    let fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Verified);
    assert!(generate(&fixture)?);
    let cert = fixture.certificate(USER).expect("certificate is written");

    fixture
        .store
        .invalidate_certificate(cert.id, UserId(1), String::new())?;
    // the status is restored by hand, the invalidation is still active
    fixture.store.upsert_certificate(
        USER,
        &course(),
        CertificateUpdate {
            mode: cert.mode,
            status: CertificateStatus::Downloadable,
            grade: cert.grade.clone(),
            generation_mode: GenerationMode::Batch,
        },
    )?;

    assert!(!generate_regular_certificate_task(
        fixture.ctx(),
        &fixture.store,
        USER,
        &course(),
        GenerationMode::Batch,
    )?);
    let invalidated = fixture.certificate(USER).expect("certificate is kept");
    assert_eq!(CertificateStatus::Invalidated, invalidated.status);
    assert_eq!(cert.grade, invalidated.grade);
    Ok(())
}

fn invalidate(fixture: &Fixture) -> Result<CertificateId, CertsError> {
    let cert = fixture.certificate(USER).expect("certificate is written");
    fixture
        .store
        .invalidate_certificate(cert.id, UserId(1), String::new())?;
    Ok(cert.id)
}

#[test]
fn invalidation_survives_audit_downgrade() -> Result<(), CertsError> {
    let fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Verified);
    assert!(generate(&fixture)?);
    let cert_id = invalidate(&fixture)?;

    fixture.enroll(USER, EnrollmentMode::Audit);
    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::Invalidated), fixture.status(USER));
    assert!(fixture.store.get_active_invalidation(cert_id)?.is_some());
    Ok(())
}

#[test]
fn invalidation_survives_honor_certificates_disabling() -> Result<(), CertsError> {
    let mut fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Honor);
    assert!(generate(&fixture)?);
    let cert_id = invalidate(&fixture)?;

    fixture.conf.disable_honor_certificates = true;
    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::Invalidated), fixture.status(USER));

    // once the invalidation is lifted the status table applies again
    assert!(fixture.store.deactivate_invalidation(cert_id)?);
    assert!(!generate(&fixture)?);
    assert_eq!(Some(CertificateStatus::HonorPassing), fixture.status(USER));
    Ok(())
}

#[test]
fn legacy_course_generates_nothing() -> Result<(), CertsError> {
    let fixture = Fixture::new(Default::default());
    fixture.enroll(USER, EnrollmentMode::Verified);

    assert!(!generate(&fixture)?);
    assert_eq!(None, fixture.certificate(USER));
    Ok(())
}

#[test]
fn collaborator_failure_aborts_generation() {
    let mut fixture = Fixture::v2_course();
    fixture.enroll(USER, EnrollmentMode::Verified);
    fixture.services.grading_down = true;

    match generate(&fixture) {
        Err(CertsError::Collaborator(e)) => assert_eq!("grading", e.service),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(None, fixture.certificate(USER));
}

#[test]
fn file_store_keeps_generated_certificates() -> Result<(), CertsError> {
    let tmp_dir = tempfile::tempdir().map_err(DbError::from)?;
    let mut conf = certs_conf::CertsConf::default();
    conf.allowlist_for_all_courses = true;
    let services = common::StubServices::default();
    {
        let store = CertsStore::open(Some(tmp_dir.path()))?;
        let fixture = Fixture {
            store,
            conf,
            services,
        };
        fixture.enroll(USER, EnrollmentMode::Masters);
        fixture.add_to_allowlist(USER, true);
        assert!(generate(&fixture)?);
    }
    let store = CertsStore::open(Some(tmp_dir.path()))?;
    assert_eq!(
        Some(CertificateStatus::Downloadable),
        store.get_certificate(USER, &course())?.map(|cert| cert.status)
    );
    Ok(())
}
