//! Tests for the pass loop

use mirror_core::{Driver, Error, MemoryReporter, Reporter, SyncConfig};
use mirror_fs::NormalizedPath;
use mirror_test_utils::{Side, TestTree};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn config(tree: &TestTree) -> SyncConfig {
    SyncConfig::new(tree.source(), tree.destination()).with_interval(Duration::ZERO)
}

fn root_synced(tree: &TestTree) -> String {
    format!(
        "Folder synced: {} to {}",
        NormalizedPath::new(tree.source()),
        NormalizedPath::new(tree.destination())
    )
}

#[test]
fn test_run_stops_after_limit() {
    let tree = TestTree::new();
    tree.write(Side::Source, "a.txt", "alpha");

    let driver = Driver::new(config(&tree));
    let mut reporter = MemoryReporter::new();
    let passes = driver.run(&mut reporter, Some(2)).unwrap();

    assert_eq!(passes, 2);
    assert_eq!(
        reporter.take(),
        vec![
            "a.txt added/updated".to_string(),
            root_synced(&tree),
            root_synced(&tree),
        ]
    );
}

#[test]
fn test_run_with_zero_limit_does_nothing() {
    let tree = TestTree::new();
    let driver = Driver::new(config(&tree));
    let mut reporter = MemoryReporter::new();

    assert_eq!(driver.run(&mut reporter, Some(0)).unwrap(), 0);
    assert!(reporter.messages().is_empty());
    tree.assert_not_exists(Side::Destination, "");
}

#[test]
fn test_each_pass_sees_fresh_source_state() {
    let tree = TestTree::new();
    tree.write(Side::Source, "a.txt", "alpha");
    let driver = Driver::new(config(&tree));
    let mut reporter = MemoryReporter::new();

    driver.run_pass(&mut reporter).unwrap();
    std::fs::remove_file(tree.path(Side::Source, "a.txt")).unwrap();
    tree.write(Side::Source, "b.txt", "beta");
    reporter.take();

    let report = driver.run_pass(&mut reporter).unwrap();

    assert_eq!(
        reporter.take(),
        vec![
            "a.txt has been deleted".to_string(),
            "b.txt added/updated".to_string(),
            root_synced(&tree),
        ]
    );
    assert!(report.is_success());
}

#[test]
fn test_failed_pass_keeps_loop_running() {
    let tree = TestTree::new();
    let missing = tree.root().join("missing-source");
    let driver = Driver::new(
        SyncConfig::new(missing, tree.destination()).with_interval(Duration::ZERO),
    );
    let mut reporter = MemoryReporter::new();

    let passes = driver.run(&mut reporter, Some(3)).unwrap();

    assert_eq!(passes, 3);
    assert_eq!(reporter.messages().len(), 3);
    assert!(
        reporter
            .messages()
            .iter()
            .all(|m| m.starts_with("An error occurred: "))
    );
}

struct FailAfter {
    remaining: usize,
}

impl Reporter for FailAfter {
    fn report(&mut self, _message: &str) -> mirror_core::Result<()> {
        if self.remaining == 0 {
            return Err(Error::Report {
                source: std::io::Error::other("log closed"),
            });
        }
        self.remaining -= 1;
        Ok(())
    }
}

#[test]
fn test_fatal_reporter_error_ends_loop() {
    let tree = TestTree::new();
    tree.write(Side::Source, "a.txt", "alpha");
    let driver = Driver::new(config(&tree));

    // First pass emits two events, the second pass fails on its first.
    let result = driver.run(&mut FailAfter { remaining: 2 }, None);

    assert!(matches!(result, Err(Error::Report { .. })));
}
