use javelin_composer::diagnostics::describe_origin;
use javelin_composer::importer::import_management;
use javelin_core::management::{ManagementEntry, ManagementKey, ManagementTable};
use javelin_core::model::Model;
use javelin_core::provenance::{SourceArena, SourceId};

fn entry(group: &str, artifact: &str, version: &str) -> ManagementEntry {
    let mut e = ManagementEntry::new(ManagementKey::new(group, artifact));
    e.version = Some(version.to_string());
    e
}

fn sourced_entry(
    group: &str,
    artifact: &str,
    version: &str,
    source: SourceId,
) -> ManagementEntry {
    let mut e = entry(group, artifact, version);
    e.source = Some(source);
    e
}

fn table_with(entries: Vec<ManagementEntry>) -> ManagementTable {
    let mut table = ManagementTable::new();
    for e in entries {
        table.insert(e);
    }
    table
}

#[test]
fn import_into_a_model_without_a_table_installs_one() {
    let mut arena = SourceArena::new();
    let mut target = Model::default();
    let bom = table_with(vec![entry("test", "lib", "1.0")]);

    import_management(&mut target, &[bom], &mut arena, false);

    let table = target.dependency_management.as_ref().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(target.managed_version("test", "lib"), Some("1.0"));
}

#[test]
fn empty_sources_leave_the_target_untouched() {
    let mut arena = SourceArena::new();
    let mut target = Model::default();

    import_management(&mut target, &[], &mut arena, true);

    assert!(target.dependency_management.is_none());
}

#[test]
fn empty_import_still_installs_a_table() {
    let mut arena = SourceArena::new();
    let mut target = Model::default();

    import_management(&mut target, &[ManagementTable::new()], &mut arena, false);

    let table = target.dependency_management.as_ref().unwrap();
    assert!(table.is_empty());
}

#[test]
fn target_entries_win_over_imports() {
    let mut arena = SourceArena::new();
    let mut target = Model {
        dependency_management: Some(table_with(vec![entry("test", "lib", "1.0")])),
        ..Model::default()
    };
    let bom = table_with(vec![entry("test", "lib", "2.0")]);

    import_management(&mut target, &[bom], &mut arena, false);

    assert_eq!(target.managed_version("test", "lib"), Some("1.0"));
    assert_eq!(target.dependency_management.as_ref().unwrap().len(), 1);
}

#[test]
fn earlier_imports_win_over_later_ones() {
    let mut arena = SourceArena::new();
    let mut target = Model::default();
    let first = table_with(vec![entry("test", "lib", "1.0")]);
    let second = table_with(vec![entry("test", "lib", "2.0")]);

    import_management(&mut target, &[first, second], &mut arena, false);

    assert_eq!(target.managed_version("test", "lib"), Some("1.0"));
}

#[test]
fn merged_entries_keep_import_order() {
    let mut arena = SourceArena::new();
    let mut target = Model {
        dependency_management: Some(table_with(vec![entry("test", "own", "1")])),
        ..Model::default()
    };
    let first = table_with(vec![entry("test", "a", "1"), entry("test", "b", "1")]);
    let second = table_with(vec![entry("test", "c", "1")]);

    import_management(&mut target, &[first, second], &mut arena, false);

    let artifacts: Vec<&str> = target
        .dependency_management
        .as_ref()
        .unwrap()
        .entries()
        .iter()
        .map(|e| e.key.artifact.as_str())
        .collect();
    assert_eq!(artifacts, vec!["own", "a", "b", "c"]);
}

#[test]
fn repeated_merge_into_the_same_target_is_idempotent() {
    let mut arena = SourceArena::new();
    let mut target = Model::default();
    let sources = vec![table_with(vec![
        entry("test", "a", "1.0"),
        entry("test", "b", "2.0"),
    ])];

    import_management(&mut target, &sources, &mut arena, false);
    import_management(&mut target, &sources, &mut arena, false);

    let table = target.dependency_management.as_ref().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(target.managed_version("test", "a"), Some("1.0"));
    assert_eq!(target.managed_version("test", "b"), Some("2.0"));
}

#[test]
fn provenance_link_records_the_importing_file() {
    let mut arena = SourceArena::new();
    let bom_file = arena.add("test:platform-bom:5", Some("boms/platform.xml".to_string()));
    let entry_file = arena.add("test:runtime-bom:2", None);

    let mut bom = ManagementTable::with_source(bom_file);
    bom.insert(sourced_entry("test", "lib", "1.0", entry_file));

    let mut target = Model::default();
    import_management(&mut target, &[bom], &mut arena, true);

    assert_eq!(arena.imported_by(entry_file), Some(bom_file));
    assert_eq!(arena.imported_by(bom_file), None);
}

#[test]
fn remerge_does_not_duplicate_links() {
    let mut arena = SourceArena::new();
    let bom_file = arena.add("test:platform-bom:5", None);
    let entry_file = arena.add("test:runtime-bom:2", None);

    let mut bom = ManagementTable::with_source(bom_file);
    bom.insert(sourced_entry("test", "lib", "1.0", entry_file));
    let sources = vec![bom];

    let mut first_target = Model::default();
    import_management(&mut first_target, &sources, &mut arena, true);

    let mut second_target = Model::default();
    import_management(&mut second_target, &sources, &mut arena, true);

    assert_eq!(arena.imported_by(entry_file), Some(bom_file));
    assert_eq!(arena.imported_by(bom_file), None);
}

#[test]
fn entries_from_the_importing_file_itself_get_no_link() {
    let mut arena = SourceArena::new();
    let bom_file = arena.add("test:platform-bom:5", None);

    let mut bom = ManagementTable::with_source(bom_file);
    bom.insert(sourced_entry("test", "lib", "1.0", bom_file));

    let mut target = Model::default();
    import_management(&mut target, &[bom], &mut arena, true);

    assert_eq!(arena.imported_by(bom_file), None);
}

#[test]
fn chain_walk_links_the_root_of_an_existing_chain() {
    let mut arena = SourceArena::new();
    let leaf = arena.add("test:runtime-bom:2", None);
    let middle = arena.add("test:platform-bom:5", None);
    let root = arena.add("test:app-parent:1", None);
    arena.set_imported_by(leaf, middle);

    let mut bom = ManagementTable::with_source(root);
    bom.insert(sourced_entry("test", "lib", "1.0", leaf));

    let mut target = Model::default();
    import_management(&mut target, &[bom], &mut arena, true);

    assert_eq!(arena.imported_by(middle), Some(root));
    let chain: Vec<SourceId> = arena.chain(leaf).collect();
    assert_eq!(chain, vec![leaf, middle, root]);
}

#[test]
fn walk_stops_when_the_importer_is_already_recorded() {
    let mut arena = SourceArena::new();
    let leaf = arena.add("test:runtime-bom:2", None);
    let middle = arena.add("test:platform-bom:5", None);
    arena.set_imported_by(leaf, middle);

    let mut bom = ManagementTable::with_source(middle);
    bom.insert(sourced_entry("test", "lib", "1.0", leaf));

    let mut target = Model::default();
    import_management(&mut target, &[bom], &mut arena, true);

    assert_eq!(arena.imported_by(middle), None);
}

#[test]
fn entries_without_provenance_are_still_merged() {
    let mut arena = SourceArena::new();
    let bom_file = arena.add("test:platform-bom:5", None);

    let mut bom = ManagementTable::with_source(bom_file);
    bom.insert(entry("test", "lib", "1.0"));

    let mut target = Model::default();
    import_management(&mut target, &[bom], &mut arena, true);

    assert_eq!(target.managed_version("test", "lib"), Some("1.0"));
    assert_eq!(arena.imported_by(bom_file), None);
}

#[test]
fn tracking_disabled_records_no_links() {
    let mut arena = SourceArena::new();
    let bom_file = arena.add("test:platform-bom:5", None);
    let entry_file = arena.add("test:runtime-bom:2", None);

    let mut bom = ManagementTable::with_source(bom_file);
    bom.insert(sourced_entry("test", "lib", "1.0", entry_file));

    let mut target = Model::default();
    import_management(&mut target, &[bom], &mut arena, false);

    assert_eq!(target.managed_version("test", "lib"), Some("1.0"));
    assert_eq!(arena.imported_by(entry_file), None);
}

#[test]
fn only_newly_inserted_entries_get_links() {
    let mut arena = SourceArena::new();
    let bom_file = arena.add("test:platform-bom:5", None);
    let lib_file = arena.add("test:lib-bom:1", None);
    let other_file = arena.add("test:other-bom:1", None);

    let mut bom = ManagementTable::with_source(bom_file);
    bom.insert(sourced_entry("test", "lib", "2.0", lib_file));
    bom.insert(sourced_entry("test", "other", "1.0", other_file));

    let mut target = Model {
        dependency_management: Some(table_with(vec![entry("test", "lib", "1.0")])),
        ..Model::default()
    };
    import_management(&mut target, &[bom], &mut arena, true);

    assert_eq!(target.managed_version("test", "lib"), Some("1.0"));
    assert_eq!(target.managed_version("test", "other"), Some("1.0"));
    assert_eq!(arena.imported_by(lib_file), None);
    assert_eq!(arena.imported_by(other_file), Some(bom_file));
}

#[test]
fn multiple_boms_each_link_their_own_entries() {
    let mut arena = SourceArena::new();
    let first_file = arena.add("test:first-bom:1", None);
    let second_file = arena.add("test:second-bom:1", None);
    let a_file = arena.add("test:a-parent:1", None);
    let b_file = arena.add("test:b-parent:1", None);

    let mut first = ManagementTable::with_source(first_file);
    first.insert(sourced_entry("test", "a", "1.0", a_file));
    let mut second = ManagementTable::with_source(second_file);
    second.insert(sourced_entry("test", "b", "1.0", b_file));

    let mut target = Model::default();
    import_management(&mut target, &[first, second], &mut arena, true);

    assert_eq!(arena.imported_by(a_file), Some(first_file));
    assert_eq!(arena.imported_by(b_file), Some(second_file));
}

#[test]
fn circular_imports_never_produce_a_cycle() {
    let mut arena = SourceArena::new();
    let first_file = arena.add("test:first-bom:1", None);
    let second_file = arena.add("test:second-bom:1", None);

    // Each table carries an entry declared in the other table's file.
    let mut first = ManagementTable::with_source(first_file);
    first.insert(sourced_entry("test", "a", "1.0", second_file));
    let mut second = ManagementTable::with_source(second_file);
    second.insert(sourced_entry("test", "b", "1.0", first_file));

    let mut target = Model::default();
    import_management(&mut target, &[first, second], &mut arena, true);

    assert_eq!(arena.imported_by(second_file), Some(first_file));
    assert_eq!(arena.imported_by(first_file), None);
    let chain: Vec<SourceId> = arena.chain(second_file).collect();
    assert_eq!(chain, vec![second_file, first_file]);
}

#[test]
fn origin_description_follows_the_recorded_chain() {
    let mut arena = SourceArena::new();
    let bom_file = arena.add("test:platform-bom:5", None);
    let entry_file = arena.add("test:runtime-bom:2", None);

    let mut bom = ManagementTable::with_source(bom_file);
    bom.insert(sourced_entry("test", "lib", "1.0", entry_file));

    let mut target = Model::default();
    import_management(&mut target, &[bom], &mut arena, true);

    let table = target.dependency_management.as_ref().unwrap();
    let merged = table.get(&ManagementKey::new("test", "lib")).unwrap();
    assert_eq!(
        describe_origin(merged, &arena).as_deref(),
        Some("declared in test:runtime-bom:2, imported via test:platform-bom:5")
    );
}
