use ini::Options;
use ini::parse::scanner::strip_comments;

#[test]
fn blanks_comments_and_counts() {
    let input = "a=1 ; trailing\n[sec] # x\nb:2\n".to_string();
    let (out, est) = strip_comments(input, &Options::default());

    let expected = format!("a=1{}\n[sec]{}\nb:2\n", " ".repeat(11), " ".repeat(4));
    assert_eq!(out, expected);
    assert_eq!(est.sections, 2); // global + [sec]
    assert_eq!(est.keys, 2); // '=' and ':'
}

#[test]
fn markers_inside_comments_are_not_counted() {
    let (_, est) = strip_comments("; [fake] = 1\n".to_string(), &Options::default());
    assert_eq!(est.sections, 1);
    assert_eq!(est.keys, 0);
}

#[test]
fn start_of_line_only_policy() {
    let options = Options {
        disable_comment_anywhere: true,
        ..Options::default()
    };
    let (out, est) = strip_comments("k=v ; kept\n; gone\n".to_string(), &options);
    assert_eq!(out, format!("k=v ; kept\n{}\n", " ".repeat(6)));
    assert_eq!(est.keys, 1);

    // the very start of the buffer counts as a line start
    let (out, _) = strip_comments("; first\nk=v\n".to_string(), &options);
    assert_eq!(out, format!("{}\nk=v\n", " ".repeat(7)));
}

#[test]
fn hash_can_be_disabled() {
    let options = Options {
        disable_hash_comments: true,
        ..Options::default()
    };
    let (out, est) = strip_comments("#k = 1\n".to_string(), &options);
    assert_eq!(out, "#k = 1\n");
    assert_eq!(est.keys, 1);
}

#[test]
fn comment_at_end_without_newline() {
    let (out, _) = strip_comments("a=1 ; no newline".to_string(), &Options::default());
    assert_eq!(out, format!("a=1{}", " ".repeat(13)));
}

#[test]
fn multibyte_text_survives_blanking() {
    let (out, _) = strip_comments("name = café ; héllo\n".to_string(), &Options::default());
    assert_eq!(out, format!("name = café{}\n", " ".repeat(9)));
}
