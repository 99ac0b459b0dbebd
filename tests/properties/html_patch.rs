//! Property tests for entry HTML patching.

use proptest::prelude::*;

use distsplit::domain::entities::{AppFlags, ArtifactSet, ArtifactSpec};
use distsplit::domain::services::html_patch::{count_blocks, replace_title, title, upsert_block};
use distsplit::domain::value_objects::ArtifactKind;

fn text() -> impl Strategy<Value = String> {
    // no '<' so generated text never forms a tag or marker
    proptest::string::string_regex("[A-Za-z0-9 \n_=\"'./-]{0,60}").unwrap()
}

fn document() -> impl Strategy<Value = String> {
    (text(), text(), text(), text()).prop_map(|(pre, head, title, body)| {
        format!("{pre}<html><head>{head}<title>{title}</title></head><body>{body}</body></html>")
    })
}

/// Any route an artifact definition accepts: leading `/`, no `<`, no control chars.
fn routes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("/[^<\\x00-\\x1f\\x7f-\\x9f]{0,12}").unwrap(),
        0..=4,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: patching twice gives the same document as patching once.
    #[test]
    fn property_upsert_is_idempotent(html in document(), blocked in routes()) {
        let block = AppFlags::new(ArtifactKind::Console, blocked).render_block();
        let once = upsert_block(&html, &block).unwrap();
        let twice = upsert_block(&once, &block).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: the result holds exactly one block and it reads back.
    #[test]
    fn property_exactly_one_block(html in document(), blocked in routes()) {
        let mut spec = ArtifactSpec::landing();
        spec.blocked_routes = blocked;
        prop_assert!(ArtifactSet::new(vec![spec.clone()]).is_ok());
        let flags = spec.flags();
        let stale = AppFlags::new(ArtifactKind::Console, vec!["/".to_string()]).render_block();

        let first = upsert_block(&html, &stale).unwrap();
        let patched = upsert_block(&first, &flags.render_block()).unwrap();

        prop_assert_eq!(count_blocks(&patched), 1);
        prop_assert_eq!(AppFlags::parse_block(&patched).unwrap(), flags);
    }

    /// PROPERTY: only the title and the block change.
    #[test]
    fn property_patch_preserves_surroundings(html in document(), new_title in text()) {
        let spec = ArtifactSpec::landing();
        let titled = replace_title(&html, &new_title).unwrap();
        prop_assert_eq!(title(&titled), Some(new_title.as_str()));

        let patched = upsert_block(&titled, &spec.flags().render_block()).unwrap();
        let restored = patched.replacen(&format!("\n{}", spec.flags().render_block()), "", 1);
        prop_assert_eq!(restored, titled);
    }

    /// PROPERTY: patching never panics on arbitrary input.
    #[test]
    fn property_upsert_never_panics(html in "(?s).{0,512}") {
        let block = ArtifactSpec::console().flags().render_block();
        let _ = upsert_block(&html, &block);
        let _ = replace_title(&html, "t");
        let _ = AppFlags::parse_block(&html);
    }
}
