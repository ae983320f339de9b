//! Property-based tests for core types.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::types::{GroupId, Permission, PermissionSet, Provenance, UserId};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_user_id_roundtrip(s in "\\PC+") {
            let id = UserId::new(s.clone());
            assert_eq!(id.as_str(), &s);
            assert_eq!(id.to_string(), s);
        }

        #[test]
        fn test_permission_ordering_matches_str_ordering(a in "\\PC+", b in "\\PC+") {
            let pa = Permission::new(a.clone());
            let pb = Permission::new(b.clone());
            assert_eq!(pa.cmp(&pb), a.cmp(&b));
        }

        #[test]
        fn test_from_tokens_never_keeps_blanks(tokens in prop::collection::vec("[ a-z]{0,8}", 0..16)) {
            let set = PermissionSet::from_tokens(&tokens);
            for permission in set.iter() {
                assert!(!permission.as_str().is_empty());
                assert_eq!(permission.as_str(), permission.as_str().trim());
            }
        }

        #[test]
        fn test_from_tokens_is_idempotent(tokens in prop::collection::vec("[a-z]{1,8}", 0..16)) {
            let once = PermissionSet::from_tokens(&tokens);
            let rebuilt: Vec<String> =
                once.iter().map(|p| p.as_str().to_string()).collect();
            let twice = PermissionSet::from_tokens(&rebuilt);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_merge_is_commutative(
            left in prop::collection::vec("[a-z]{1,6}", 0..8),
            right in prop::collection::vec("[a-z]{1,6}", 0..8),
        ) {
            let a = PermissionSet::from_tokens(&left);
            let b = PermissionSet::from_tokens(&right);

            let mut ab = a.clone();
            ab.merge(&b);
            let mut ba = b.clone();
            ba.merge(&a);

            assert_eq!(ab, ba);
            assert!(a.iter().all(|p| ab.contains(p.as_str())));
            assert!(b.iter().all(|p| ab.contains(p.as_str())));
        }

        #[test]
        fn test_direct_sorts_before_every_group(name in "\\PC*") {
            assert!(Provenance::Direct < Provenance::Group(name));
        }

        #[test]
        fn test_group_id_serde_roundtrip(s in "\\PC+") {
            let id = GroupId::new(s);
            let json = serde_json::to_string(&id).unwrap();
            let back: GroupId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, back);
        }
    }
}
