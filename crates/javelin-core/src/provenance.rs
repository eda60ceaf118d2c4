//! Provenance sources: which file declared a piece of model content, and
//! which import made it visible.
//!
//! Sources live in an arena owned by the model-building session; entries and
//! tables refer to them by [`SourceId`]. Each node carries at most one
//! importer link, forming a singly linked chain from the file up to the root
//! of the build. Links are write-once and never allowed to close a loop.

/// Identifier of a provenance node within a [`SourceArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(usize);

/// One originating file of model content.
#[derive(Debug, Clone)]
pub struct SourceNode {
    /// `group:artifact:version` of the model this file declared.
    pub model_id: String,
    /// Path or URL of the file, when known.
    pub location: Option<String>,
    imported_by: Option<SourceId>,
}

impl SourceNode {
    /// The source whose import made this one visible, if recorded.
    pub fn imported_by(&self) -> Option<SourceId> {
        self.imported_by
    }
}

/// Arena of provenance nodes for one model-building session.
///
/// The arena outlives any single merge call; importers mutate nodes in place
/// as imports are processed.
#[derive(Debug, Clone, Default)]
pub struct SourceArena {
    nodes: Vec<SourceNode>,
}

impl SourceArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new source and return its identifier.
    pub fn add(&mut self, model_id: impl Into<String>, location: Option<String>) -> SourceId {
        let id = SourceId(self.nodes.len());
        self.nodes.push(SourceNode {
            model_id: model_id.into(),
            location,
            imported_by: None,
        });
        id
    }

    /// Node for an identifier minted by this arena.
    pub fn node(&self, id: SourceId) -> &SourceNode {
        &self.nodes[id.0]
    }

    /// The importer recorded for `id`, if any.
    pub fn imported_by(&self, id: SourceId) -> Option<SourceId> {
        self.nodes[id.0].imported_by
    }

    /// Record that `id`'s content became visible through `importer`.
    ///
    /// The link is write-once: a node that already has an importer keeps it.
    /// A link that would make a node its own transitive importer is refused.
    /// Returns `true` if the link was installed.
    pub fn set_imported_by(&mut self, id: SourceId, importer: SourceId) -> bool {
        if self.nodes[id.0].imported_by.is_some() {
            return false;
        }
        if self.chain(importer).any(|node| node == id) {
            tracing::warn!(
                "refusing importer link {} -> {}: it would close an import cycle",
                self.nodes[id.0].model_id,
                self.nodes[importer.0].model_id
            );
            return false;
        }
        self.nodes[id.0].imported_by = Some(importer);
        true
    }

    /// Walk from `id` to the root of its importer chain, yielding every node
    /// on the way, `id` included.
    pub fn chain(&self, id: SourceId) -> ImportChain<'_> {
        ImportChain {
            arena: self,
            next: Some(id),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over an importer chain, innermost source first.
pub struct ImportChain<'a> {
    arena: &'a SourceArena,
    next: Option<SourceId>,
}

impl Iterator for ImportChain<'_> {
    type Item = SourceId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.arena.imported_by(current);
        Some(current)
    }
}
