use ini::{Error, GLOBAL_SECTION_NAME, Options, load_from_named_str, load_from_reader, load_from_str};

const BASIC: &str = "\
key1 = one
[ section 1 ]
key2 = two
[section 2]
key3 = three
";

#[test]
fn scoped_and_global_lookups() {
    let doc = load_from_str(BASIC, &Options::default());

    assert_eq!(doc.get_from(GLOBAL_SECTION_NAME, "key1").unwrap(), "one");
    assert_eq!(doc.get_from("section 1", "key2").unwrap(), "two");
    assert_eq!(doc.get_from("section 2", "key3").unwrap(), "three");

    assert_eq!(doc.get("key1").unwrap(), "one");
    assert_eq!(doc.get("key2").unwrap(), "two");
    assert_eq!(doc.get("key3").unwrap(), "three");
}

#[test]
fn missing_keys_and_sections() {
    let doc = load_from_str(BASIC, &Options::default());

    assert!(matches!(
        doc.get_from(GLOBAL_SECTION_NAME, "key2"),
        Err(Error::KeyNotFoundInSection { .. })
    ));
    assert!(matches!(
        doc.get_from("section 1", "key1"),
        Err(Error::KeyNotFoundInSection { .. })
    ));
    assert!(matches!(
        doc.get_from("no such section", "key1"),
        Err(Error::SectionNotFound(_))
    ));
    assert!(matches!(doc.get("nope"), Err(Error::KeyNotFound(_))));
}

#[test]
fn error_slot_tracks_the_most_recent_call() {
    let doc = load_from_str(BASIC, &Options::default());
    assert!(!doc.has_error());

    assert!(doc.get("nope").is_err());
    assert!(doc.has_error());
    assert!(doc.last_error().unwrap().contains("not found"));

    assert!(doc.get("key1").is_ok());
    assert!(!doc.has_error());
    assert_eq!(doc.last_error(), None);
}

#[test]
fn model_counts_and_names() {
    let doc = load_from_str(BASIC, &Options::default());
    assert_eq!(doc.key_count(), 3);
    assert_eq!(doc.section_names(), ["global", "section 1", "section 2"]);
    assert_eq!(doc.name(), "ini");

    let named = load_from_named_str(BASIC, "settings.ini", &Options::default());
    assert_eq!(named.name(), "settings.ini");
}

#[test]
fn quoted_values_keep_whitespace_unquoted_values_trim() {
    let doc = load_from_str(
        "spaced = \"  spaced  \"\ntrimmed =   trimmed   \n",
        &Options::default(),
    );
    assert_eq!(doc.get("spaced").unwrap(), "  spaced  ");
    assert_eq!(doc.get("trimmed").unwrap(), "trimmed");
}

#[test]
fn empty_value_is_kept_by_default() {
    let doc = load_from_str("empty =\nnext = 1\n", &Options::default());
    assert_eq!(doc.get("empty").unwrap(), "");
    assert_eq!(doc.key_count(), 2);
}

#[test]
fn reader_input() {
    let doc = load_from_reader(&b"a = 1\n"[..], "buffer", &Options::default()).unwrap();
    assert_eq!(doc.get("a").unwrap(), "1");
    assert_eq!(doc.name(), "buffer");
}
