#![no_main]

use distsplit::domain::entities::{AppFlags, ArtifactSpec};
use distsplit::domain::services::html_patch;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(html) = std::str::from_utf8(data) {
        let block = ArtifactSpec::console().flags().render_block();
        if let Ok(patched) = html_patch::upsert_block(html, &block) {
            assert_eq!(html_patch::count_blocks(&patched), 1);
            assert!(AppFlags::parse_block(&patched).is_ok());
        }
        let _ = html_patch::replace_title(html, "fuzz");
    }
});
