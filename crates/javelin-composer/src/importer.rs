//! First-wins merge of imported dependency-management tables.

use javelin_core::management::{ManagementEntry, ManagementTable};
use javelin_core::model::Model;
use javelin_core::provenance::SourceArena;

/// Merge imported dependency-management tables into the target model.
///
/// The target's own entries always take precedence. Imported entries are
/// added first-wins, in import order and then in each table's own order;
/// entries whose key is already present are skipped silently. With
/// `track_provenance` enabled, each inserted entry's importer chain is
/// updated so diagnostics can explain why the entry is in effect.
///
/// An empty `sources` slice leaves the target untouched; in particular, a
/// model without a management table does not gain one.
pub fn import_management(
    target: &mut Model,
    sources: &[ManagementTable],
    arena: &mut SourceArena,
    track_provenance: bool,
) {
    if sources.is_empty() {
        return;
    }

    let mut merged = target.dependency_management.take().unwrap_or_default();

    let mut imported = 0usize;
    for bom in sources {
        for entry in bom.entries() {
            if merged.insert(entry.clone()) {
                imported += 1;
                if track_provenance {
                    update_dependency_hierarchy(entry, bom, arena);
                }
            }
        }
    }

    tracing::debug!(
        "imported {imported} managed dependencies into {}",
        target.id()
    );

    target.dependency_management = Some(merged);
}

/// Record that the entry's originating file became reachable through the
/// importing table's file.
///
/// Walks the entry source's importer chain and stops as soon as the
/// importing source is already on it, so repeated merges never produce
/// duplicate or conflicting links; otherwise the chain's current root gets
/// the importing source as its importer.
fn update_dependency_hierarchy(
    entry: &ManagementEntry,
    bom: &ManagementTable,
    arena: &mut SourceArena,
) {
    // Only the originating files matter here, not positions within them.
    let (Some(entry_source), Some(bom_source)) = (entry.source, bom.source) else {
        return;
    };

    let bom_model_id = arena.node(bom_source).model_id.clone();
    if arena.node(entry_source).model_id == bom_model_id {
        return;
    }

    let mut current = entry_source;
    while let Some(importer) = arena.imported_by(current) {
        if arena.node(importer).model_id == bom_model_id {
            return;
        }
        current = importer;
    }

    // The link applies to the whole file: a model's import hierarchy is a
    // property of the file, not of one entry within it.
    if arena.set_imported_by(current, bom_source) {
        tracing::trace!(
            "recorded that {} is imported by {bom_model_id}",
            arena.node(current).model_id
        );
    }
}
