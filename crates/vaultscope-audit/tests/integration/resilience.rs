//! Scenarios with defective directory data: cycles, dangling
//! references, malformed grants. The audit must finish and say what it
//! skipped.

use vaultscope_audit::run_audit;
use vaultscope_core::{AuditWarning, RawGrant};

use crate::common::SnapshotBuilder;

#[test]
fn test_membership_cycle_does_not_stop_the_audit() {
    let snapshot = SnapshotBuilder::new()
        .user("u-alice", "Alice")
        .group("g-a", "Alpha")
        .group("g-b", "Beta")
        .vault("v-1", "Infra")
        .member("u-alice", "g-a")
        .nested("g-a", "g-b")
        .nested("g-b", "g-a")
        .group_grant("v-1", "g-b", &["view"])
        .build();

    let outcome = run_audit(&snapshot);

    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].access_via_display(), "Group: Beta");
    assert!(
        outcome
            .warnings
            .iter()
            .any(|warning| matches!(warning, AuditWarning::MembershipCycle { .. }))
    );
}

#[test]
fn test_dirty_snapshot_yields_rows_plus_warnings() {
    // One good path, one malformed grant, one dangling subject, one
    // dangling vault, one ghost member.
    let snapshot = SnapshotBuilder::new()
        .user("u-alice", "Alice")
        .group("g-eng", "Engineering")
        .vault("v-1", "Infra")
        .member("u-alice", "g-eng")
        .member("u-ghost", "g-eng")
        .group_grant("v-1", "g-eng", &["view"])
        .raw_grant(RawGrant::new(
            "v-1",
            Some("svc".to_string()),
            "s-1",
            vec!["view".to_string()],
        ))
        .user_grant("v-1", "u-nobody", &["edit"])
        .user_grant("v-missing", "u-alice", &["edit"])
        .build();

    let outcome = run_audit(&snapshot);

    // Alice's row survives untouched by the noise around it.
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].user_name, "Alice");
    assert_eq!(outcome.rows[0].permissions_display(), "view");

    let rendered: Vec<String> = outcome
        .warnings
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered.len(), 4);
    assert!(rendered.iter().any(|w| w.contains("unrecognized subject kind `svc`")));
    assert!(rendered.iter().any(|w| w.contains("`u-ghost`")));
    assert!(rendered.iter().any(|w| w.contains("`u-nobody`")));
    assert!(rendered.iter().any(|w| w.contains("`v-missing`")));
}

#[test]
fn test_ghost_member_produces_no_row() {
    // The membership edge is kept and warned about, but a user the
    // directory never listed cannot appear in the report.
    let snapshot = SnapshotBuilder::new()
        .group("g-eng", "Engineering")
        .vault("v-1", "Infra")
        .member("u-ghost", "g-eng")
        .group_grant("v-1", "g-eng", &["view"])
        .build();

    let outcome = run_audit(&snapshot);
    assert!(outcome.rows.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(
        matches!(&outcome.warnings[0], AuditWarning::DanglingReference { id, .. } if id == "u-ghost")
    );
}

#[test]
fn test_warning_order_is_stable() {
    // Normalization first, then membership, then aggregation.
    let snapshot = SnapshotBuilder::new()
        .user("u-alice", "Alice")
        .group("g-eng", "Engineering")
        .vault("v-1", "Infra")
        .member("u-ghost", "g-eng")
        .raw_grant(RawGrant::new("v-1", None, "x", vec![]))
        .user_grant("v-1", "u-nobody", &["view"])
        .build();

    let outcome = run_audit(&snapshot);
    let rendered: Vec<String> = outcome.warnings.iter().map(ToString::to_string).collect();

    assert_eq!(rendered.len(), 3);
    assert!(rendered[0].contains("missing subject kind"));
    assert!(rendered[1].contains("u-ghost"));
    assert!(rendered[2].contains("u-nobody"));
}
