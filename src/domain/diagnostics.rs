//! Diagnostic values produced by validation
//!
//! A `Diagnostic` carries the verdict for one checked attribute or relation.
//! Rendering to the report line format lives here so that verdict computation
//! and presentation stay decoupled; callers choose the sink.

use std::fmt;

/// Node kind a diagnostic refers to, named by its document tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Folder,
    Job,
    Quantitative,
    InCondition,
    OutCondition,
}

impl EntityKind {
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Folder => "SMART_FOLDER",
            EntityKind::Job => "JOB",
            EntityKind::Quantitative => "QUANTITATIVE",
            EntityKind::InCondition => "INCOND",
            EntityKind::OutCondition => "OUTCOND",
        }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Value is present and matches its format contract
    Conforms,
    /// Value is absent, empty, or fails its format contract
    Violates,
    /// Value disagrees with the related attribute it must mirror
    Mismatch {
        relation: &'static str,
        expected: Option<String>,
    },
}

/// One checked attribute or relation. Produced during traversal, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub entity: EntityKind,
    pub attribute: &'static str,
    pub value: Option<String>,
    pub line: u64,
    pub verdict: Verdict,
}

impl Diagnostic {
    pub fn conforms(
        entity: EntityKind,
        attribute: &'static str,
        value: &str,
        line: u64,
    ) -> Self {
        Self {
            entity,
            attribute,
            value: Some(value.to_string()),
            line,
            verdict: Verdict::Conforms,
        }
    }

    pub fn violates(
        entity: EntityKind,
        attribute: &'static str,
        value: Option<&str>,
        line: u64,
    ) -> Self {
        Self {
            entity,
            attribute,
            value: value.map(str::to_string),
            line,
            verdict: Verdict::Violates,
        }
    }

    pub fn mismatch(
        entity: EntityKind,
        attribute: &'static str,
        value: Option<&str>,
        relation: &'static str,
        expected: Option<&str>,
        line: u64,
    ) -> Self {
        Self {
            entity,
            attribute,
            value: value.map(str::to_string),
            line,
            verdict: Verdict::Mismatch {
                relation,
                expected: expected.map(str::to_string),
            },
        }
    }

    pub fn is_violation(&self) -> bool {
        !matches!(self.verdict, Verdict::Conforms)
    }

    fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Conforms => write!(
                f,
                "{} {} '{}' matches the format.",
                self.entity.tag(),
                self.attribute,
                self.value_str()
            ),
            Verdict::Violates => write!(
                f,
                "{} {} '{}' does not match the format (line {}).",
                self.entity.tag(),
                self.attribute,
                self.value_str(),
                self.line
            ),
            Verdict::Mismatch { relation, expected } => write!(
                f,
                "{} {} '{}' does not match {} '{}' (line {}).",
                self.entity.tag(),
                self.attribute,
                self.value_str(),
                relation,
                expected.as_deref().unwrap_or(""),
                self.line
            ),
        }
    }
}

/// Receiver for diagnostics as the walker produces them.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
