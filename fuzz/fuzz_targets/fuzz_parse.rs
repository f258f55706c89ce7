#![no_main]
use libfuzzer_sys::fuzz_target;

use ini::{Options, load_from_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let doc = load_from_str(s, &Options::default());
        for section in doc.section_names() {
            let _ = doc.section_entries(section);
        }
    }
});
