//! Load a document and read values by section and key.

use ini::{GLOBAL_SECTION_NAME, Options, load_from_str};

const CONFIG: &str = "\
this_key = is_global

[ graphics ]
window_width = 1920
window_height : 1080    ; colon assignment works too
title = \"  spaced out  \"
";

fn main() {
    let doc = load_from_str(CONFIG, &Options::default());

    let global = doc.get_from(GLOBAL_SECTION_NAME, "this_key").unwrap();
    println!("this_key = {global}");

    let width = doc.get_i64_from("graphics", "window_width").unwrap();
    let height = doc.get_i64_from("graphics", "window_height").unwrap();
    println!("resolution: {width}x{height}");

    // quoted values keep their whitespace
    println!("title = {:?}", doc.get_from("graphics", "title").unwrap());
}
