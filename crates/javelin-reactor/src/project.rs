use javelin_core::coordinate::Coordinate;
use javelin_core::dependency::Dependency;
use serde::{Deserialize, Serialize};

/// A reactor member: one project of the multi-module build.
///
/// The orchestrator supplies projects already topologically sorted, so a
/// project never precedes one it depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub group: String,
    pub artifact: String,
    /// Dependencies declared by this project's model, in declaration order.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Project {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            dependencies: Vec::new(),
        }
    }

    /// The `group:artifact` coordinate identifying this project.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.group.clone(), self.artifact.clone())
    }
}
