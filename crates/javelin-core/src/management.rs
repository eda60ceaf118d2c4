use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::provenance::SourceId;

fn default_type() -> String {
    "jar".to_string()
}

/// Identity of a dependency-management constraint.
///
/// The key deliberately excludes the version: two constraints for the same
/// `group:artifact:type[:classifier]` are duplicates even when their
/// versions differ, and the earliest declaration wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagementKey {
    pub group: String,
    pub artifact: String,
    /// Artifact type, `jar` unless declared otherwise.
    #[serde(rename = "type", default = "default_type")]
    pub type_: String,
    #[serde(default)]
    pub classifier: Option<String>,
}

impl ManagementKey {
    /// A key for a plain `jar` artifact with no classifier.
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            type_: default_type(),
            classifier: None,
        }
    }
}

impl std::fmt::Display for ManagementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.type_)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// A managed version/scope constraint.
#[derive(Debug, Clone)]
pub struct ManagementEntry {
    pub key: ManagementKey,
    pub version: Option<String>,
    pub scope: Option<String>,
    /// Provenance node of the declaring file, when location tracking is on.
    pub source: Option<SourceId>,
}

impl ManagementEntry {
    pub fn new(key: ManagementKey) -> Self {
        Self {
            key,
            version: None,
            scope: None,
            source: None,
        }
    }
}

/// An ordered table of dependency-management constraints.
///
/// Entries keep their insertion order so downstream serialization stays
/// deterministic; key lookups go through a separate index. Inserting a key
/// that is already present leaves the table unchanged: the first declaration
/// wins, everywhere this table is built up.
#[derive(Debug, Clone, Default)]
pub struct ManagementTable {
    entries: Vec<ManagementEntry>,
    index: HashMap<ManagementKey, usize>,
    /// Provenance node of the file this table was declared in.
    pub source: Option<SourceId>,
}

impl ManagementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table attributed to the given provenance source.
    pub fn with_source(source: SourceId) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    /// Insert a constraint unless its key is already present.
    ///
    /// Returns `true` if the entry was added. Duplicate keys are skipped
    /// silently and the existing entry stays authoritative.
    pub fn insert(&mut self, entry: ManagementEntry) -> bool {
        if self.index.contains_key(&entry.key) {
            return false;
        }
        self.index.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, key: &ManagementKey) -> Option<&ManagementEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains_key(&self, key: &ManagementKey) -> bool {
        self.index.contains_key(key)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[ManagementEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
