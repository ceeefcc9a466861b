//! Domain entities: typed views and rewrite parameters

use crate::domain::error::{DomainError, DomainResult};

/// Document tag names of the definition hierarchy.
pub mod tag {
    pub const FOLDER: &str = "SMART_FOLDER";
    pub const JOB: &str = "JOB";
    pub const QUANTITATIVE: &str = "QUANTITATIVE";
    pub const IN_CONDITION: &str = "INCOND";
    pub const OUT_CONDITION: &str = "OUTCOND";
}

/// Attribute names checked or rewritten by the naming standard.
pub mod attr {
    pub const JOBNAME: &str = "JOBNAME";
    pub const APPLICATION: &str = "APPLICATION";
    pub const SUB_APPLICATION: &str = "SUB_APPLICATION";
    pub const DATACENTER: &str = "DATACENTER";
    pub const NODE_ID: &str = "NODEID";
    pub const DAY_CALENDAR: &str = "DAYSCAL";
    pub const NAME: &str = "NAME";
}

/// Snapshot of a folder node's checked attributes.
/// Invariant under the standard: `sub_application == jobname`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub jobname: Option<String>,
    pub application: Option<String>,
    pub sub_application: Option<String>,
    pub datacenter: Option<String>,
    pub line: u64,
}

/// Snapshot of a job node's checked attributes.
/// Invariant under the standard: `sub_application` mirrors the parent folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub jobname: Option<String>,
    pub application: Option<String>,
    pub sub_application: Option<String>,
    pub node_id: Option<String>,
    pub day_calendar: Option<String>,
    pub line: u64,
}

/// Validated rewrite parameters.
///
/// The center code is one logical value with two serializations: the
/// zero-padded two-digit form used inside folder and job names, and the bare
/// form used inside `APPLICATION` and `NODEID`. Both are derived here so that
/// callers cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Single-letter environment code
    pub environment: String,
    /// Center code, zero-padded to two digits
    pub center_wide: String,
    /// Center code, unpadded
    pub center_bare: String,
    /// Replacement datacenter name, free-form
    pub datacenter: String,
}

impl RenamePlan {
    /// Validate the raw parameters and derive both center-code forms.
    /// Fails before any document is touched.
    pub fn new(environment: &str, center: &str, datacenter: &str) -> DomainResult<Self> {
        let mut env_chars = environment.chars();
        let valid_env = matches!(
            (env_chars.next(), env_chars.next()),
            (Some(c), None) if c.is_ascii_alphabetic()
        );
        if !valid_env {
            return Err(DomainError::InvalidEnvironmentCode(environment.to_string()));
        }

        if center.is_empty()
            || center.len() > 2
            || !center.chars().all(|c| c.is_ascii_digit())
        {
            return Err(DomainError::InvalidCenterCode(center.to_string()));
        }
        let value: u8 = center
            .parse()
            .map_err(|_| DomainError::InvalidCenterCode(center.to_string()))?;

        Ok(Self {
            environment: environment.to_string(),
            center_wide: format!("{value:02}"),
            center_bare: value.to_string(),
            datacenter: datacenter.to_string(),
        })
    }
}
