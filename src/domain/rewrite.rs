//! Identifier decomposition and recomposition
//!
//! Each rule matches a value against its decomposition contract, substitutes
//! the new code fragments into the capture positions, and reconstructs the
//! string with every other fragment verbatim. A value the contract does not
//! recognize is returned unchanged; legacy identifiers pass through silently.

use crate::domain::entities::RenamePlan;
use crate::domain::patterns::NamingRules;

/// Replace the two-digit center code of a folder name, keeping the leading
/// five-character code and the trailing segment.
pub fn rewrite_folder_jobname(rules: &NamingRules, value: &str, plan: &RenamePlan) -> String {
    match rules.folder_jobname_parts.captures(value) {
        Some(caps) => format!("{}{}{}", &caps[1], plan.center_wide, &caps[3]),
        None => value.to_string(),
    }
}

/// Replace the leading environment letter and the two-digit center code of a
/// job name, keeping the middle code and the trailing fixed-width segment.
pub fn rewrite_job_jobname(rules: &NamingRules, value: &str, plan: &RenamePlan) -> String {
    match rules.job_jobname_parts.captures(value) {
        Some(caps) => format!(
            "{}{}{}{}",
            plan.environment, &caps[2], plan.center_wide, &caps[4]
        ),
        None => value.to_string(),
    }
}

/// Replace the trailing environment letter and center digit of an
/// application code, keeping the two hyphen-delimited segments.
pub fn rewrite_application(rules: &NamingRules, value: &str, plan: &RenamePlan) -> String {
    match rules.application_parts.captures(value) {
        Some(caps) => format!("{}{}{}", &caps[1], plan.environment, plan.center_bare),
        None => value.to_string(),
    }
}

/// Replace the embedded environment letter and center digit of a node
/// identifier, keeping the prefix and the trailing suffix.
pub fn rewrite_node_id(rules: &NamingRules, value: &str, plan: &RenamePlan) -> String {
    match rules.node_id_parts.captures(value) {
        Some(caps) => format!(
            "{}{}{}{}",
            &caps[1], plan.environment, plan.center_bare, &caps[4]
        ),
        None => value.to_string(),
    }
}
