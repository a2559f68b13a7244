#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use tprompts::infrastructure::JsonManifestLoader;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = JsonManifestLoader::new().parse(Path::new("tprompts.json"), content);
    }
});
