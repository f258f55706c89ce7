//! First-wins versus override duplicate-key handling.

use ini::{Options, load_from_str};

const CONFIG: &str = "\
[section1]
key = foo
key = bar

[section2]
key = hello world
";

fn main() {
    // By default a repeated key name inside one section is ignored.
    let doc = load_from_str(CONFIG, &Options::default());
    println!("this should be 'foo': {:?}", doc.get_from("section1", "key").unwrap());

    // Keys may share a name with keys in other sections; a search across
    // all keys stops at the first occurrence.
    println!("this should be 'hello world': {:?}", doc.get_from("section2", "key").unwrap());
    println!("this should be 'foo': {:?}", doc.get("key").unwrap());

    // With the override option later values win, and the global search
    // runs to the last occurrence in the file.
    let options = Options {
        override_duplicate_keys: true,
        ..Options::default()
    };
    let doc = load_from_str(CONFIG, &options);
    println!("this should be 'bar': {:?}", doc.get_from("section1", "key").unwrap());
    println!("this should be 'hello world': {:?}", doc.get("key").unwrap());
}
