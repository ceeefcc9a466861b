//! Naming-standard audit over a definition tree
//!
//! Walks folder, then its jobs, then each job's quantitative resources and
//! conditions, in document order. One diagnostic per checked attribute or
//! relation; the walk never stops early and nothing here is fatal.

use tracing::debug;

use crate::domain::entities::{attr, tag, Folder, Job};
use crate::domain::validate::{
    check_folder_consistency, check_job_consistency, validate_day_calendar, validate_field,
};
use crate::domain::{DiagnosticSink, EntityKind, NamingRules};
use crate::infrastructure::document::{Document, Node};

/// Validation-mode tree walker.
pub struct AuditService<'a> {
    rules: &'a NamingRules,
}

impl<'a> AuditService<'a> {
    pub fn new(rules: &'a NamingRules) -> Self {
        Self { rules }
    }

    /// Audit every folder under the document root.
    pub fn audit(&self, document: &Document, sink: &mut dyn DiagnosticSink) {
        let folders: Vec<&Node> = document.root.children_named(tag::FOLDER).collect();
        debug!("audit: {} folders", folders.len());
        for folder in folders {
            self.audit_folder(folder, sink);
        }
    }

    fn audit_folder(&self, node: &Node, sink: &mut dyn DiagnosticSink) {
        let folder = folder_view(node);

        sink.emit(validate_field(
            EntityKind::Folder,
            attr::JOBNAME,
            folder.jobname.as_deref(),
            &self.rules.folder_jobname,
            folder.line,
        ));
        sink.emit(validate_field(
            EntityKind::Folder,
            attr::APPLICATION,
            folder.application.as_deref(),
            &self.rules.application,
            folder.line,
        ));

        for job_node in node.children_named(tag::JOB) {
            self.audit_job(&folder, job_node, sink);
        }
    }

    fn audit_job(&self, folder: &Folder, node: &Node, sink: &mut dyn DiagnosticSink) {
        let job = job_view(node);

        sink.emit(validate_field(
            EntityKind::Job,
            attr::JOBNAME,
            job.jobname.as_deref(),
            &self.rules.job_jobname,
            job.line,
        ));
        sink.emit(validate_field(
            EntityKind::Job,
            attr::APPLICATION,
            job.application.as_deref(),
            &self.rules.application,
            job.line,
        ));
        sink.emit(validate_field(
            EntityKind::Job,
            attr::NODE_ID,
            job.node_id.as_deref(),
            &self.rules.node_id,
            job.line,
        ));

        // Format and consistency checks are orthogonal; both always run.
        if let Some(d) = check_folder_consistency(folder, job.line) {
            sink.emit(d);
        }
        if let Some(d) = check_job_consistency(folder, &job) {
            sink.emit(d);
        }

        // DAYSCAL is optional; absence is skipped, not reported.
        if job.day_calendar.is_some() {
            sink.emit(validate_day_calendar(
                job.day_calendar.as_deref(),
                self.rules,
                job.line,
            ));
        }

        for child in node.children_named(tag::QUANTITATIVE) {
            sink.emit(validate_field(
                EntityKind::Quantitative,
                attr::NAME,
                child.attribute(attr::NAME),
                &self.rules.quantitative_name,
                child.line,
            ));
        }
        for child in node.children_named(tag::IN_CONDITION) {
            sink.emit(validate_field(
                EntityKind::InCondition,
                attr::NAME,
                child.attribute(attr::NAME),
                &self.rules.condition_name,
                child.line,
            ));
        }
        for child in node.children_named(tag::OUT_CONDITION) {
            sink.emit(validate_field(
                EntityKind::OutCondition,
                attr::NAME,
                child.attribute(attr::NAME),
                &self.rules.condition_name,
                child.line,
            ));
        }
    }
}

fn folder_view(node: &Node) -> Folder {
    Folder {
        jobname: node.attribute(attr::JOBNAME).map(str::to_string),
        application: node.attribute(attr::APPLICATION).map(str::to_string),
        sub_application: node.attribute(attr::SUB_APPLICATION).map(str::to_string),
        datacenter: node.attribute(attr::DATACENTER).map(str::to_string),
        line: node.line,
    }
}

fn job_view(node: &Node) -> Job {
    Job {
        jobname: node.attribute(attr::JOBNAME).map(str::to_string),
        application: node.attribute(attr::APPLICATION).map(str::to_string),
        sub_application: node.attribute(attr::SUB_APPLICATION).map(str::to_string),
        node_id: node.attribute(attr::NODE_ID).map(str::to_string),
        day_calendar: node.attribute(attr::DAY_CALENDAR).map(str::to_string),
        line: node.line,
    }
}
