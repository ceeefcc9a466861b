//! Compiled format contracts for each identifier kind
//!
//! One `NamingRules` value is built at startup and passed by reference into
//! the walkers. Contracts are anchored and case-sensitive; values are matched
//! as-is, without trimming or case-folding.

use regex::Regex;

use crate::domain::error::DomainResult;

/// Calendar codes accepted verbatim, without pattern evaluation.
pub const DAY_CALENDAR_LITERALS: [&str; 2] = ["C-WORKDAY", "C-ALL"];

/// Format contracts for validation plus the decomposition variants used by
/// the rewrite rules. The `*_parts` contracts carry capture groups isolating
/// the mutable fragments.
#[derive(Debug)]
pub struct NamingRules {
    pub folder_jobname: Regex,
    pub job_jobname: Regex,
    pub application: Regex,
    pub node_id: Regex,
    pub quantitative_name: Regex,
    pub day_calendar: Regex,
    pub condition_name: Regex,

    pub folder_jobname_parts: Regex,
    pub job_jobname_parts: Regex,
    pub application_parts: Regex,
    pub node_id_parts: Regex,
}

impl NamingRules {
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            folder_jobname: Regex::new(r"^[A-Za-z0-9]{5}[0-9]{2}[A-Za-z]-[0-9]{3}-[A-Za-z0-9]{3,}$")?,
            job_jobname: Regex::new(
                r"^[A-Za-z][A-Za-z0-9]{5}[0-9]{2}[A-Za-z][0-9]{3}[A-Za-z0-9]{3}[0-9]{3}$",
            )?,
            application: Regex::new(r"^[A-Za-z0-9]{5}-[A-Za-z0-9]{5}-[A-Za-z][0-9]$")?,
            node_id: Regex::new(r"^NG_[A-Za-z0-9]{5}-[A-Za-z0-9]{5}-[A-Za-z][0-9]_[A-Za-z0-9]+$")?,
            quantitative_name: Regex::new(r"^QR_[A-Za-z0-9]{5}$")?,
            day_calendar: Regex::new(r"^C[RPBL]-[A-Za-z][A-Za-z0-9]{5}[0-9]{2}-[A-Za-z0-9]+$")?,
            condition_name: Regex::new(
                r"^(?:OK|KO|%%NODEID\._OK|%%NODEID\._KO)_[A-Za-z][A-Za-z0-9]{5}[0-9]{2}[A-Za-z][0-9]{3}_[A-Za-z][A-Za-z0-9]{5}[0-9]{2}[A-Za-z][0-9]{3}$",
            )?,

            folder_jobname_parts: Regex::new(
                r"^([A-Za-z0-9]{5})([0-9]{2})([A-Za-z]-[0-9]{3}-[A-Za-z0-9]{3,})$",
            )?,
            job_jobname_parts: Regex::new(
                r"^([A-Za-z])([A-Za-z0-9]{5})([0-9]{2})([A-Za-z][0-9]{3}[A-Za-z0-9]{3}[0-9]{3})$",
            )?,
            application_parts: Regex::new(r"^([A-Za-z0-9]{5}-[A-Za-z0-9]{5}-)([A-Za-z])([0-9])$")?,
            node_id_parts: Regex::new(
                r"^(NG_[A-Za-z0-9]{5}-[A-Za-z0-9]{5}-)([A-Za-z])([0-9])(_[A-Za-z0-9]+)$",
            )?,
        })
    }
}
