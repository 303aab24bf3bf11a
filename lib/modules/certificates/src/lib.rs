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

//! Certificate generation eligibility engine.
//!
//! Decides whether a learner can get a certificate for a course run, with the
//! allowlist mechanism, the v2 rules or the legacy status check, then writes
//! the resulting certificate status.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate log;

pub mod context;
pub mod db;
pub mod decision;
pub mod eligibility;
pub mod errors;
pub mod features;
pub mod generation;
pub mod mode;
pub mod models;
pub mod services;
pub mod status;
pub mod status_check;
pub mod status_table;
pub mod store;

pub use context::CertsContext;
pub use db::{CertificateUpdate, CertsDbReader, CertsDbWriter, DbError};
pub use decision::{
    can_generate_certificate_task, is_on_allowlist, is_using_certificate_allowlist,
    is_using_certificate_allowlist_and_is_on_allowlist, is_using_v2_course_certificates,
};
pub use eligibility::{
    can_generate_allowlist_certificate, can_generate_v2_certificate, Eligibility,
    IneligibilityReason,
};
pub use errors::CertsError;
pub use features::{CourseFeatures, EligibilityMode, FeatureToggleService};
pub use generation::{
    allowlist_certificate_status, generate_allowlist_certificate_task,
    generate_certificate_task, generate_regular_certificate_task, regular_certificate_status,
};
pub use models::{
    AllowlistEntry, CertificateId, CertificateInvalidation, CourseRunKey, Enrollment,
    EnrollmentMode, GeneratedCertificate, GenerationMode, UserId,
};
pub use services::{
    BetaTesterService, CollaboratorError, CourseMetadataService, GradingService,
    IdVerificationService,
};
pub use status::CertificateStatus;
pub use status_check::can_generate_certificate_for_status;
pub use status_table::StatusTable;
pub use store::CertsStore;
