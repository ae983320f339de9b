//! End-to-end aggregation scenarios over realistic snapshots.

use vaultscope_audit::run_audit;

use crate::common::SnapshotBuilder;

#[test]
fn test_single_group_path() {
    // Alice is in Engineering; Engineering can view Infra.
    let snapshot = SnapshotBuilder::new()
        .user("u-alice", "Alice")
        .group("g-eng", "Engineering")
        .vault("v-infra", "Infra")
        .member("u-alice", "g-eng")
        .group_grant("v-infra", "g-eng", &["view"])
        .build();

    let outcome = run_audit(&snapshot);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.rows.len(), 1);

    let row = &outcome.rows[0];
    assert_eq!(row.user_name, "Alice");
    assert_eq!(row.user_email, "u-alice@example.com");
    assert_eq!(row.vault_name, "Infra");
    assert_eq!(row.permissions_display(), "view");
    assert_eq!(row.access_via_display(), "Group: Engineering");
}

#[test]
fn test_direct_grant_added_on_top_of_group_path() {
    let snapshot = SnapshotBuilder::new()
        .user("u-alice", "Alice")
        .group("g-eng", "Engineering")
        .vault("v-infra", "Infra")
        .member("u-alice", "g-eng")
        .group_grant("v-infra", "g-eng", &["view"])
        .user_grant("v-infra", "u-alice", &["edit"])
        .build();

    let outcome = run_audit(&snapshot);
    assert_eq!(outcome.rows.len(), 1);

    let row = &outcome.rows[0];
    assert_eq!(row.permissions_display(), "edit, view");
    assert_eq!(row.access_via_display(), "Direct; Group: Engineering");
}

#[test]
fn test_small_org_full_report() {
    // Two vaults, two groups, three users; Carol is in both groups.
    let snapshot = SnapshotBuilder::new()
        .user("u-alice", "Alice")
        .user("u-bob", "Bob")
        .user("u-carol", "Carol")
        .group("g-eng", "Engineering")
        .group("g-ops", "Operations")
        .vault("v-infra", "Infra")
        .vault("v-fin", "Finance")
        .member("u-alice", "g-eng")
        .member("u-carol", "g-eng")
        .member("u-bob", "g-ops")
        .member("u-carol", "g-ops")
        .group_grant("v-infra", "g-eng", &["view", "edit"])
        .group_grant("v-infra", "g-ops", &["view", "export"])
        .user_grant("v-fin", "u-carol", &["manage"])
        .build();

    let outcome = run_audit(&snapshot);
    assert!(outcome.warnings.is_empty());

    let summary: Vec<(String, String, String, String)> = outcome
        .rows
        .iter()
        .map(|row| {
            (
                row.user_name.clone(),
                row.vault_name.clone(),
                row.permissions_display(),
                row.access_via_display(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (
                "Alice".to_string(),
                "Infra".to_string(),
                "edit, view".to_string(),
                "Group: Engineering".to_string()
            ),
            (
                "Bob".to_string(),
                "Infra".to_string(),
                "export, view".to_string(),
                "Group: Operations".to_string()
            ),
            (
                "Carol".to_string(),
                "Finance".to_string(),
                "manage".to_string(),
                "Direct".to_string()
            ),
            (
                "Carol".to_string(),
                "Infra".to_string(),
                "edit, export, view".to_string(),
                "Group: Engineering; Group: Operations".to_string()
            ),
        ]
    );
}

#[test]
fn test_deep_nesting_chain() {
    // u-dev sits three levels down from the granted group.
    let snapshot = SnapshotBuilder::new()
        .user("u-dev", "Dev")
        .group("g-l1", "Level One")
        .group("g-l2", "Level Two")
        .group("g-l3", "Level Three")
        .vault("v-root", "Root")
        .member("u-dev", "g-l1")
        .nested("g-l1", "g-l2")
        .nested("g-l2", "g-l3")
        .group_grant("v-root", "g-l3", &["view"])
        .build();

    let outcome = run_audit(&snapshot);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].access_via_display(), "Group: Level Three");
}

#[test]
fn test_groups_sharing_a_name_share_a_label() {
    // Two distinct groups named "Admins"; their provenance labels
    // coincide and the label set collapses to one entry.
    let snapshot = SnapshotBuilder::new()
        .user("u-root", "Root")
        .group("g-1", "Admins")
        .group("g-2", "Admins")
        .vault("v-1", "Everything")
        .member("u-root", "g-1")
        .member("u-root", "g-2")
        .group_grant("v-1", "g-1", &["view"])
        .group_grant("v-1", "g-2", &["manage"])
        .build();

    let outcome = run_audit(&snapshot);
    assert_eq!(outcome.rows.len(), 1);
    let row = &outcome.rows[0];
    assert_eq!(row.permissions_display(), "manage, view");
    assert_eq!(row.access_via_display(), "Group: Admins");
}

#[test]
fn test_permissionless_grant_still_produces_a_row() {
    let snapshot = SnapshotBuilder::new()
        .user("u-alice", "Alice")
        .vault("v-1", "Infra")
        .user_grant("v-1", "u-alice", &[])
        .build();

    let outcome = run_audit(&snapshot);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].permissions_display(), "");
    assert_eq!(outcome.rows[0].access_via_display(), "Direct");
}
