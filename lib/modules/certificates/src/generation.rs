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

//! Certificates generation
//!
//! Each task evaluates eligibility again right before writing, then upserts
//! the certificate of the user with the resulting status. A rejection only
//! writes a status when it tells the learner something (unverified identity,
//! invalidation, grade or enrollment mode), never `error`.

use crate::context::CertsContext;
use crate::db::{CertificateUpdate, CertsDbWriter};
use crate::eligibility::{
    evaluate_allowlist_certificate, evaluate_v2_certificate, Eligibility, IneligibilityReason,
};
use crate::errors::CertsError;
use crate::features::EligibilityMode;
use crate::models::{CourseRunKey, GenerationMode, UserId};
use crate::status::CertificateStatus;
use crate::status_table::StatusTable;

/// Status written by the allowlist task, `None` when nothing is written
pub fn allowlist_certificate_status(eligibility: &Eligibility) -> Option<CertificateStatus> {
    match eligibility {
        Eligibility::Eligible { .. } => Some(CertificateStatus::Downloadable),
        Eligibility::Ineligible { reason, .. } => match reason {
            IneligibilityReason::Unverified => Some(CertificateStatus::Unverified),
            IneligibilityReason::Invalidated => Some(CertificateStatus::Invalidated),
            _ => None,
        },
    }
}

/// Status written by the regular task, `None` when nothing is written.
///
/// `passed` is only called for an ineligible enrollment mode.
pub fn regular_certificate_status<E, F>(
    eligibility: &Eligibility,
    status_table: &StatusTable,
    passed: F,
) -> Result<Option<CertificateStatus>, E>
where
    F: FnOnce() -> Result<bool, E>,
{
    Ok(match *eligibility {
        Eligibility::Eligible { .. } => Some(CertificateStatus::Downloadable),
        Eligibility::Ineligible { reason, mode } => match reason {
            IneligibilityReason::FailingGrade => {
                mode.map(|mode| status_table.status_for(mode, false))
            }
            IneligibilityReason::IneligibleMode(mode) => {
                Some(status_table.status_for(mode, passed()?))
            }
            IneligibilityReason::Unverified => Some(CertificateStatus::Unverified),
            IneligibilityReason::Invalidated => Some(CertificateStatus::Invalidated),
            _ => None,
        },
    })
}

fn write_status(
    ctx: CertsContext,
    writer: &dyn CertsDbWriter,
    user: UserId,
    course_run: &CourseRunKey,
    eligibility: &Eligibility,
    status: Option<CertificateStatus>,
    generation_mode: GenerationMode,
) -> Result<(), CertsError> {
    let status = if let Some(status) = status {
        status
    } else {
        debug!("No certificate written for user {} in {}", user, course_run);
        return Ok(());
    };
    let existing = ctx.db.get_certificate(user, course_run)?;

    let (mode, grade) = if status == CertificateStatus::Invalidated {
        // an invalidation only marks an existing certificate
        match existing {
            Some(ref cert) => (cert.mode, cert.grade.clone()),
            None => return Ok(()),
        }
    } else if let Some(mode) = eligibility.mode() {
        let percent = ctx.grading.percent_grade(user, course_run)?;
        (mode, format!("{:.2}", percent))
    } else {
        return Ok(());
    };

    if let Some(ref cert) = existing {
        if cert.status == status && cert.mode == mode && cert.grade == grade {
            debug!(
                "Certificate {:?} of user {} in {} is already {}",
                cert.id, user, course_run, status
            );
            return Ok(());
        }
    }

    let cert = writer.upsert_certificate(
        user,
        course_run,
        CertificateUpdate {
            mode,
            status,
            grade,
            generation_mode,
        },
    )?;
    info!(
        "Certificate {:?} of user {} in {}: status={}, mode={}, grade={}",
        cert.id, user, course_run, cert.status, cert.mode, cert.grade
    );
    Ok(())
}

fn has_active_invalidation(
    ctx: CertsContext,
    user: UserId,
    course_run: &CourseRunKey,
) -> Result<bool, CertsError> {
    if let Some(cert) = ctx.db.get_certificate(user, course_run)? {
        Ok(ctx.db.get_active_invalidation(cert.id)?.is_some())
    } else {
        Ok(false)
    }
}

/// Generate the allowlist certificate of the user.
/// Returns whether the certificate is downloadable.
pub fn generate_allowlist_certificate_task(
    ctx: CertsContext,
    writer: &dyn CertsDbWriter,
    user: UserId,
    course_run: &CourseRunKey,
    generation_mode: GenerationMode,
) -> Result<bool, CertsError> {
    let features = ctx.features(course_run);
    let eligibility = evaluate_allowlist_certificate(ctx, &features, user, course_run, None)?;
    let status = allowlist_certificate_status(&eligibility);

    write_status(
        ctx,
        writer,
        user,
        course_run,
        &eligibility,
        status,
        generation_mode,
    )?;
    Ok(eligibility.is_eligible())
}

/// Generate the v2 certificate of the user.
/// Returns whether the certificate is downloadable.
pub fn generate_regular_certificate_task(
    ctx: CertsContext,
    writer: &dyn CertsDbWriter,
    user: UserId,
    course_run: &CourseRunKey,
    generation_mode: GenerationMode,
) -> Result<bool, CertsError> {
    let features = ctx.features(course_run);
    let eligibility = evaluate_v2_certificate(ctx, &features, user, course_run)?;
    let mut status = regular_certificate_status(
        &eligibility,
        &StatusTable::for_features(&features),
        || ctx.grading.has_passing_grade(user, course_run),
    )?;
    // the enrollment rule runs before the invalidation rule
    if let Eligibility::Ineligible {
        reason: IneligibilityReason::IneligibleMode(_),
        ..
    } = eligibility
    {
        if has_active_invalidation(ctx, user, course_run)? {
            status = Some(CertificateStatus::Invalidated);
        }
    }

    write_status(
        ctx,
        writer,
        user,
        course_run,
        &eligibility,
        status,
        generation_mode,
    )?;
    Ok(eligibility.is_eligible())
}

/// Generate the certificate of the user with the mechanism of the course run.
/// Legacy course runs are not handled and return false.
pub fn generate_certificate_task(
    ctx: CertsContext,
    writer: &dyn CertsDbWriter,
    user: UserId,
    course_run: &CourseRunKey,
    generation_mode: GenerationMode,
) -> Result<bool, CertsError> {
    match ctx.features(course_run).eligibility_mode {
        EligibilityMode::Allowlist => {
            generate_allowlist_certificate_task(ctx, writer, user, course_run, generation_mode)
        }
        EligibilityMode::V2 => {
            generate_regular_certificate_task(ctx, writer, user, course_run, generation_mode)
        }
        EligibilityMode::Legacy => {
            debug!(
                "{} uses neither allowlist nor v2 certificates, nothing generated for user {}",
                course_run, user
            );
            Ok(false)
        }
    }
}
