//! Human-readable provenance reporting for managed dependencies.

use javelin_core::management::ManagementEntry;
use javelin_core::provenance::SourceArena;

/// Explain where a managed constraint came from by walking its import
/// chain.
///
/// Renders `declared in <model_id>` followed by one `imported via
/// <model_id>` segment per link, innermost first. Returns `None` when the
/// entry carries no provenance.
pub fn describe_origin(entry: &ManagementEntry, arena: &SourceArena) -> Option<String> {
    let source = entry.source?;

    let mut chain = arena.chain(source);
    let declared_in = chain.next()?;
    let mut description = format!("declared in {}", arena.node(declared_in).model_id);
    for importer in chain {
        description.push_str(", imported via ");
        description.push_str(&arena.node(importer).model_id);
    }
    Some(description)
}
