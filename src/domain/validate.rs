//! Field-level validation and cross-field consistency checks
//!
//! Every function here is pure: the tree is never touched, diagnostics are
//! returned for the caller to route. Malformed input is reported, not raised;
//! nothing at this layer is fatal.

use regex::Regex;

use crate::domain::diagnostics::{Diagnostic, EntityKind};
use crate::domain::entities::{attr, Folder, Job};
use crate::domain::patterns::{NamingRules, DAY_CALENDAR_LITERALS};

/// Check one attribute value against its anchored format contract.
/// An absent or empty value is a violation; partial matches are rejected by
/// the contract's anchors.
pub fn validate_field(
    entity: EntityKind,
    attribute: &'static str,
    value: Option<&str>,
    contract: &Regex,
    line: u64,
) -> Diagnostic {
    match value {
        Some(v) if !v.is_empty() && contract.is_match(v) => {
            Diagnostic::conforms(entity, attribute, v, line)
        }
        _ => Diagnostic::violates(entity, attribute, value, line),
    }
}

/// Calendar codes get a literal-token short-circuit before the coded-calendar
/// contract is consulted. Call only when the attribute is present; absence is
/// skipped by the walker, not reported.
pub fn validate_day_calendar(value: Option<&str>, rules: &NamingRules, line: u64) -> Diagnostic {
    if let Some(v) = value {
        if DAY_CALENDAR_LITERALS.contains(&v) {
            return Diagnostic::conforms(EntityKind::Job, attr::DAY_CALENDAR, v, line);
        }
    }
    validate_field(
        EntityKind::Job,
        attr::DAY_CALENDAR,
        value,
        &rules.day_calendar,
        line,
    )
}

/// Verify that a folder's `SUB_APPLICATION` mirrors its own `JOBNAME`.
/// Emitted per folder/job pair, carrying the job's source line; two absent
/// values compare equal.
pub fn check_folder_consistency(folder: &Folder, line: u64) -> Option<Diagnostic> {
    if folder.sub_application == folder.jobname {
        return None;
    }
    Some(Diagnostic::mismatch(
        EntityKind::Folder,
        attr::SUB_APPLICATION,
        folder.sub_application.as_deref(),
        attr::JOBNAME,
        folder.jobname.as_deref(),
        line,
    ))
}

/// Verify that a job's `SUB_APPLICATION` mirrors the parent folder's.
pub fn check_job_consistency(folder: &Folder, job: &Job) -> Option<Diagnostic> {
    if job.sub_application == folder.sub_application {
        return None;
    }
    Some(Diagnostic::mismatch(
        EntityKind::Job,
        attr::SUB_APPLICATION,
        job.sub_application.as_deref(),
        "SMART_FOLDER SUB_APPLICATION",
        folder.sub_application.as_deref(),
        job.line,
    ))
}
