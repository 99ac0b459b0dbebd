#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // config parsing and artifact validation must never panic
        if let Ok(config) = toml::from_str::<distsplit::Config>(content) {
            let _ = config.artifact_set();
        }
    }
});
