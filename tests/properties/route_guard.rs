//! Property tests for blocked-route matching.

use proptest::prelude::*;

use distsplit::domain::entities::AppFlags;
use distsplit::domain::value_objects::ArtifactKind;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

fn flags(blocked: &[&str]) -> AppFlags {
    AppFlags::new(
        ArtifactKind::Console,
        blocked.iter().map(|r| r.to_string()).collect(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a prefix blocks itself and everything beneath it.
    #[test]
    fn property_prefix_blocks_subtree(prefix in segment(), rest in proptest::collection::vec(segment(), 0..=3)) {
        let guard = AppFlags::new(ArtifactKind::Landing, vec![format!("/{prefix}")]);
        let mut path = format!("/{prefix}");
        for seg in &rest {
            path.push('/');
            path.push_str(seg);
        }
        prop_assert!(guard.is_blocked(&path));
        let with_slash = format!("{}/", path);
        prop_assert!(guard.is_blocked(&with_slash));
    }

    /// PROPERTY: a prefix does not block siblings that merely share its text.
    #[test]
    fn property_prefix_respects_segment_boundary(prefix in segment(), suffix in segment()) {
        let guard = AppFlags::new(ArtifactKind::Landing, vec![format!("/{prefix}")]);
        let sibling = format!("/{prefix}{suffix}");
        prop_assert!(!guard.is_blocked(&sibling));
    }

    /// PROPERTY: the root prefix blocks only the root.
    #[test]
    fn property_root_blocks_only_root(seg in segment()) {
        let guard = flags(&["/"]);
        prop_assert!(guard.is_blocked("/"));
        let path = format!("/{seg}");
        prop_assert!(!guard.is_blocked(&path));
    }
}

#[test]
fn console_artifact_routes() {
    let console = flags(&["/", "/shipper", "/carrier", "/owner"]);
    assert!(console.is_blocked("/"));
    assert!(console.is_blocked("/shipper/orders/42"));
    assert!(console.is_blocked("/owner?tab=fleet"));
    assert!(!console.is_blocked("/console"));
    assert!(!console.is_blocked("/console/keys"));
}

#[test]
fn landing_artifact_routes() {
    let landing = flags(&["/console"]);
    assert!(landing.is_blocked("/console"));
    assert!(landing.is_blocked("/console/"));
    assert!(landing.is_blocked("/console#docs"));
    assert!(!landing.is_blocked("/"));
    assert!(!landing.is_blocked("/consoles"));
    assert!(!landing.is_blocked("/shipper"));
}
