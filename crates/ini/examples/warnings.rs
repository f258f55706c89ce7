//! The advisory warning pass in action.

use ini::{Options, load_from_named_str};

const CONFIG: &str = "\
[forgot_to_close
key = value
strange[0] = data
";

fn main() {
    let doc = load_from_named_str(CONFIG, "warnings.ini", &Options::default());

    for warning in doc.warnings() {
        println!("{}:{}", doc.name(), warning);
    }

    // Warnings are advisory: parsing still produced a usable document.
    println!("sections: {:?}", doc.section_names());
}
