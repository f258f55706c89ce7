#![no_main]
use libfuzzer_sys::fuzz_target;

use ini::{Options, load_from_str};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    if let Ok(s) = std::str::from_utf8(rest) {
        let options = Options {
            ignore_empty_values: flags & 0x01 != 0,
            override_duplicate_keys: flags & 0x02 != 0,
            disable_quotes: flags & 0x04 != 0,
            disable_hash_comments: flags & 0x08 != 0,
            disable_colon_assignment: flags & 0x10 != 0,
            disable_comment_anywhere: flags & 0x20 != 0,
            disable_case_sensitivity: flags & 0x40 != 0,
            disable_warnings: flags & 0x80 != 0,
            ..Options::default()
        };
        let doc = load_from_str(s, &options);
        let _ = doc.get("k");
        let _ = doc.get_i64("k");
        let _ = doc.get_bool("k");
        let _ = doc.get_csv("k");
    }
});
