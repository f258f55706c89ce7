//! Enumerate sections and their keys.

use ini::{Options, load_from_str};

const CONFIG: &str = "\
shared = yes

[section1]
a = 1
b = 2

[section2]
c = 3

[section1]
d = 4
";

fn main() {
    let doc = load_from_str(CONFIG, &Options::default());

    println!("sections: {:?}", doc.section_names());
    println!("{} keys total", doc.key_count());

    // A reopened section enumerates all of its occurrences in file order.
    for (name, value) in doc.section_entries("section1").unwrap() {
        println!("section1: {name} = {value}");
    }

    for section in doc.section_names() {
        let names = doc.section_key_names(section).unwrap();
        println!("{section}: {names:?}");
    }
}
