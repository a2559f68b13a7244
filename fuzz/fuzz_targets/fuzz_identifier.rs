#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(identifier) = std::str::from_utf8(data) {
        if let Ok(parsed) = tprompts::ParsedIdentifier::parse(identifier) {
            assert!(!parsed.prompt_path.is_empty());
            assert!(!parsed.prompt_path.split('/').any(|s| s == ".."));
        }
    }
});
