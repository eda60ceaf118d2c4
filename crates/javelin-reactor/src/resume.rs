//! Resumption planning: where a failed reactor build should restart, and
//! which already-built projects it can skip.

use std::collections::BTreeMap;

use javelin_core::coordinate::Coordinate;
use javelin_core::errors::JavelinError;
use serde::{Deserialize, Serialize};

use crate::outcome::{BuildOutcome, ReactorResult};
use crate::project::Project;

/// Property key naming the project to resume from.
const RESUME_FROM: &str = "resumeFrom";
/// Property key listing projects that can be skipped.
const EXCLUDED_PROJECTS: &str = "excludedProjects";
/// Separator between coordinates in the excluded-projects property.
const PROPERTY_DELIMITER: &str = ", ";

/// The minimal instruction set for re-running a partially failed reactor
/// build: start here, skip these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumptionPlan {
    /// Coordinate of the first failed project, when resuming there would
    /// actually save work.
    #[serde(default)]
    pub resume_from: Option<Coordinate>,
    /// Successful projects after the first failure that do not depend on
    /// any failed project, in reactor order.
    #[serde(default)]
    pub excluded_projects: Vec<Coordinate>,
}

impl ResumptionPlan {
    /// Returns `true` if the plan carries no instructions. An empty plan is
    /// not worth persisting: re-running from the start is a full rebuild.
    pub fn is_empty(&self) -> bool {
        self.resume_from.is_none() && self.excluded_projects.is_empty()
    }

    /// Render the plan as the key/value property set persisted between
    /// invocations.
    ///
    /// Absent instructions are omitted entirely rather than written as
    /// empty strings.
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let mut properties = BTreeMap::new();
        if let Some(resume_from) = &self.resume_from {
            properties.insert(RESUME_FROM.to_string(), resume_from.to_string());
        }
        if !self.excluded_projects.is_empty() {
            let joined = self
                .excluded_projects
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(PROPERTY_DELIMITER);
            properties.insert(EXCLUDED_PROJECTS.to_string(), joined);
        }
        properties
    }

    /// Rebuild a plan from a previously persisted property set.
    ///
    /// Missing keys yield an empty field; malformed coordinates are an
    /// error.
    pub fn from_properties(properties: &BTreeMap<String, String>) -> miette::Result<Self> {
        let resume_from = match properties.get(RESUME_FROM) {
            Some(value) => Some(parse_coordinate(value)?),
            None => None,
        };

        let mut excluded_projects = Vec::new();
        if let Some(value) = properties.get(EXCLUDED_PROJECTS) {
            for part in value.split(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                excluded_projects.push(parse_coordinate(part)?);
            }
        }

        Ok(Self {
            resume_from,
            excluded_projects,
        })
    }
}

fn parse_coordinate(value: &str) -> miette::Result<Coordinate> {
    let coordinate = Coordinate::parse(value).ok_or_else(|| JavelinError::InvalidCoordinate {
        input: value.to_string(),
    })?;
    Ok(coordinate)
}

/// Compute the resumption plan for a finished reactor run.
///
/// The plan is empty when nothing failed. When the very first project
/// failed, no resume point is recorded, since resuming there is equivalent
/// to a full rebuild; later successful projects are still excluded.
pub fn plan(result: &ReactorResult) -> ResumptionPlan {
    let summaries = result.summaries();

    let Some(first_failed) = summaries
        .iter()
        .position(|s| s.outcome == BuildOutcome::Failure)
    else {
        tracing::debug!("no failed projects in the reactor; nothing to resume");
        return ResumptionPlan::default();
    };

    // A resume point at the first project would redo the whole build.
    let resume_from = if first_failed == 0 {
        tracing::debug!("the first reactor project failed; not recording a resume point");
        None
    } else {
        Some(summaries[first_failed].project.coordinate())
    };

    let failed: Vec<Coordinate> = result
        .failed_projects()
        .iter()
        .map(|p| p.coordinate())
        .collect();

    let excluded_projects: Vec<Coordinate> = summaries
        .iter()
        .skip(first_failed + 1)
        .filter(|s| s.outcome == BuildOutcome::Success)
        .filter(|s| !depends_on_any(&s.project, &failed))
        .map(|s| s.project.coordinate())
        .collect();

    ResumptionPlan {
        resume_from,
        excluded_projects,
    }
}

/// Returns `true` if the project declares a direct dependency on any of the
/// given coordinates. Transitive dependencies are not consulted.
fn depends_on_any(project: &Project, coordinates: &[Coordinate]) -> bool {
    project
        .dependencies
        .iter()
        .any(|dep| coordinates.iter().any(|c| dep.matches(c)))
}
