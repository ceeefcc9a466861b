//! Bulk identifier rewrite over a definition tree
//!
//! Mutates attribute values in place, folder by folder in document order.
//! A folder is fully processed before its jobs: the jobs' `SUB_APPLICATION`
//! derivation needs the folder's rewritten name. Values the decomposition
//! contracts do not recognize pass through untouched; rewrite mode has no
//! diagnostic channel.

use tracing::debug;

use crate::domain::entities::{attr, tag, RenamePlan};
use crate::domain::rewrite::{
    rewrite_application, rewrite_folder_jobname, rewrite_job_jobname, rewrite_node_id,
};
use crate::domain::NamingRules;
use crate::infrastructure::document::{Document, Node};

/// Rewrite-mode tree walker.
pub struct RenameService<'a> {
    rules: &'a NamingRules,
    plan: &'a RenamePlan,
}

impl<'a> RenameService<'a> {
    pub fn new(rules: &'a NamingRules, plan: &'a RenamePlan) -> Self {
        Self { rules, plan }
    }

    /// Apply the plan to every folder under the document root.
    pub fn apply(&self, document: &mut Document) {
        let mut folders = 0;
        for folder in document.root.children_named_mut(tag::FOLDER) {
            self.rename_folder(folder);
            folders += 1;
        }
        debug!("apply: rewrote {} folders", folders);
    }

    fn rename_folder(&self, node: &mut Node) {
        if node
            .attribute(attr::DATACENTER)
            .is_some_and(|v| !v.is_empty())
        {
            node.set_attribute(attr::DATACENTER, &self.plan.datacenter);
        }

        let new_jobname = node
            .attribute(attr::JOBNAME)
            .map(|v| rewrite_folder_jobname(self.rules, v, self.plan));
        if let Some(jobname) = &new_jobname {
            node.set_attribute(attr::JOBNAME, jobname);
        }

        if let Some(application) = node
            .attribute(attr::APPLICATION)
            .map(|v| rewrite_application(self.rules, v, self.plan))
        {
            node.set_attribute(attr::APPLICATION, &application);
        }

        // SUB_APPLICATION is always derived from the folder name, never
        // independently rewritten.
        if let Some(jobname) = &new_jobname {
            node.set_attribute(attr::SUB_APPLICATION, jobname);
        }

        for job in node.children_named_mut(tag::JOB) {
            self.rename_job(job, new_jobname.as_deref());
        }
    }

    fn rename_job(&self, node: &mut Node, folder_sub_application: Option<&str>) {
        if let Some(jobname) = node
            .attribute(attr::JOBNAME)
            .map(|v| rewrite_job_jobname(self.rules, v, self.plan))
        {
            node.set_attribute(attr::JOBNAME, &jobname);
        }

        if let Some(application) = node
            .attribute(attr::APPLICATION)
            .map(|v| rewrite_application(self.rules, v, self.plan))
        {
            node.set_attribute(attr::APPLICATION, &application);
        }

        if let Some(sub_application) = folder_sub_application {
            node.set_attribute(attr::SUB_APPLICATION, sub_application);
        }

        if let Some(node_id) = node
            .attribute(attr::NODE_ID)
            .map(|v| rewrite_node_id(self.rules, v, self.plan))
        {
            node.set_attribute(attr::NODE_ID, &node_id);
        }
    }
}
