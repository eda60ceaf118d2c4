use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// A dependency declared by a project's model.
///
/// Only the `group:artifact` pair participates in reactor matching; version
/// and scope are carried along for downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub artifact: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl Dependency {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: None,
            scope: None,
        }
    }

    /// The `group:artifact` coordinate this dependency points at.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.group.clone(), self.artifact.clone())
    }

    /// Returns `true` if this dependency points at the given coordinate,
    /// ignoring version and scope.
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        self.group == coordinate.group && self.artifact == coordinate.artifact
    }
}
