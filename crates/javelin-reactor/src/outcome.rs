use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Terminal state of one project's build within a reactor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildOutcome {
    Success,
    Failure,
}

/// One finished project: what was built, how it ended, how long it took.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub project: Project,
    pub outcome: BuildOutcome,
    /// Wall-clock time the project's build took. Planning ignores it.
    pub wall_time: Duration,
}

/// Ordered record of a reactor run.
///
/// Summaries are appended as projects finish, in the reactor's topological
/// order. Projects the run never reached have no summary.
#[derive(Debug, Clone, Default)]
pub struct ReactorResult {
    summaries: Vec<BuildSummary>,
}

impl ReactorResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished project's summary.
    pub fn record(&mut self, summary: BuildSummary) {
        self.summaries.push(summary);
    }

    pub fn record_success(&mut self, project: Project, wall_time: Duration) {
        self.record(BuildSummary {
            project,
            outcome: BuildOutcome::Success,
            wall_time,
        });
    }

    pub fn record_failure(&mut self, project: Project, wall_time: Duration) {
        self.record(BuildSummary {
            project,
            outcome: BuildOutcome::Failure,
            wall_time,
        });
    }

    /// All summaries in reactor order.
    pub fn summaries(&self) -> &[BuildSummary] {
        &self.summaries
    }

    /// Failed projects in reactor order.
    pub fn failed_projects(&self) -> Vec<&Project> {
        self.summaries
            .iter()
            .filter(|s| s.outcome == BuildOutcome::Failure)
            .map(|s| &s.project)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
