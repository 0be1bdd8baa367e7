use mirror_core::{MemoryReporter, TreeSynchronizer};
use mirror_test_utils::{Side, TestTree};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Relative file paths built from `d*` directory and `f*` file names, so a
/// name is never used as both a file and a directory.
fn file_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(0..3u8, 0..3), 0..4u8).prop_map(|(dirs, file)| {
        let mut path: String = dirs.iter().map(|d| format!("d{}/", d)).collect();
        path.push_str(&format!("f{}", file));
        path
    })
}

fn file_set() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(
        file_path(),
        prop::sample::select(vec!["", "x", "y", "hello"]).prop_map(String::from),
        0..8,
    )
}

fn parent(path: &str) -> &str {
    path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_destination_levels_mirror_source(source in file_set(), initial in file_set()) {
        let tree = TestTree::new();
        for (rel, content) in &source {
            tree.write(Side::Source, rel, content);
        }
        for (rel, content) in &initial {
            tree.write(Side::Destination, rel, content);
        }

        let synchronizer = TreeSynchronizer::new();
        let mut reporter = MemoryReporter::new();
        let report = synchronizer
            .sync(&tree.source(), &tree.destination(), &mut reporter)
            .unwrap();
        prop_assert!(report.is_success());

        let mirrored = tree.snapshot(Side::Destination);

        // Every source file is present with the same content.
        for (rel, content) in &source {
            prop_assert_eq!(mirrored.get(rel), Some(content));
        }

        // No extra file survives in a directory that also exists in the source.
        for rel in mirrored.keys() {
            if tree.path(Side::Source, parent(rel)).is_dir() {
                prop_assert!(source.contains_key(rel), "stale file survived: {}", rel);
            }
        }

        // A second pass changes nothing and reports only completed folders.
        reporter.take();
        let second = synchronizer
            .sync(&tree.source(), &tree.destination(), &mut reporter)
            .unwrap();
        prop_assert_eq!(second.changed().count(), 0);
        prop_assert!(second.deleted.is_empty());
        prop_assert!(reporter.messages().iter().all(|m| m.starts_with("Folder synced: ")));
        prop_assert_eq!(tree.snapshot(Side::Destination), mirrored);
    }
}
