//! Wiring reconciled libraries into module dependency lists

use blaze_libsync_core::{
    DependencyList, DependencyWirer, ExternallyAddedLibraries, InMemoryLibraryTable,
    LibraryKey, LibraryReconciler, OrderEntry, WireOptions,
};
use blaze_libsync_suite::{decoder, jar_library};

#[test]
fn test_wire_after_reconcile() {
    let desired = vec![jar_library("guava"), jar_library("junit")];
    let mut table = InMemoryLibraryTable::new();
    LibraryReconciler::new(decoder())
        .reconcile(&mut table, &desired, &ExternallyAddedLibraries::default())
        .unwrap();

    let modules = vec![
        "app".to_string(),
        "external-guava-src".to_string(),
        "javatests".to_string(),
    ];
    let mut deps = DependencyList::new();
    let report = DependencyWirer::new(&table).wire(
        &mut deps,
        &desired,
        &WireOptions::with_external_modules(&modules),
    );

    assert!(report.is_consistent());
    assert_eq!(
        deps.entries(),
        &[
            OrderEntry::Module("external-guava-src".to_string()),
            OrderEntry::Library("guava".to_string()),
            OrderEntry::Library("junit".to_string()),
        ]
    );
}

#[test]
fn test_one_missing_library_reports_one_error() {
    let table = InMemoryLibraryTable::new()
        .with_library("guava", &[], &[])
        .with_library("junit", &[], &[]);
    let desired = vec![jar_library("guava"), jar_library("truth"), jar_library("junit")];
    let mut deps = DependencyList::new();

    let report = DependencyWirer::new(&table).wire(&mut deps, &desired, &WireOptions::default());

    assert_eq!(report.missing, vec![LibraryKey::from_store_name("truth")]);
    assert_eq!(
        deps.entries(),
        &[
            OrderEntry::Library("guava".to_string()),
            OrderEntry::Library("junit".to_string()),
        ]
    );
}

#[test]
fn test_external_modules_are_skipped_without_source() {
    let table = InMemoryLibraryTable::new().with_library("guava", &[], &[]);
    let mut deps = DependencyList::new();

    let report =
        DependencyWirer::new(&table).wire(&mut deps, &[jar_library("guava")], &WireOptions::default());

    assert!(report.modules.is_empty());
    assert_eq!(deps.entries(), &[OrderEntry::Library("guava".to_string())]);
}
