use crate::management::ManagementTable;
use crate::provenance::SourceId;

/// A project model under assembly.
///
/// Identity fields are optional because a model may not be fully
/// interpolated when composition runs; the importer only requires the
/// dependency-management table.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub version: Option<String>,
    /// Effective dependency-management table, once composed.
    pub dependency_management: Option<ManagementTable>,
    /// Provenance node of the file this model was read from.
    pub source: Option<SourceId>,
}

impl Model {
    /// Renders `group:artifact:version` for logs and diagnostics, with
    /// unknown fields left blank.
    pub fn id(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group.as_deref().unwrap_or(""),
            self.artifact.as_deref().unwrap_or(""),
            self.version.as_deref().unwrap_or("")
        )
    }

    /// Managed version for `group:artifact`, if the effective table declares
    /// one.
    pub fn managed_version(&self, group: &str, artifact: &str) -> Option<&str> {
        self.dependency_management
            .as_ref()?
            .entries()
            .iter()
            .find(|e| e.key.group == group && e.key.artifact == artifact)
            .and_then(|e| e.version.as_deref())
    }
}
