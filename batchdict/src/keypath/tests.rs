use rstest::rstest;

use super::{Keypath, Marker};

#[rstest]
#[case("/a/b", &["a", "b"])]
#[case("a/b", &["a", "b"])]
#[case("//a//b/", &["a", "b"])]
#[case("", &[])]
#[case("/", &[])]
fn parsing_skips_empty_segments(#[case] text: &str, #[case] expected: &[&str]) {
    let path = Keypath::parse(text);
    let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();
    assert_eq!(segments, expected);
}

#[rstest]
#[case("a/ii", "/a/ii")]
#[case("", "/")]
fn display_uses_leading_separator(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(Keypath::parse(text).to_string(), expected);
}

#[rstest]
fn sanitized_form_joins_with_dots() {
    assert_eq!(Keypath::parse("/a/ii/").sanitized(), "a.ii");
}

#[rstest]
#[case("@", Some(Marker::Anonymous))]
#[case("@1", Some(Marker::Named("1")))]
#[case("@lr", Some(Marker::Named("lr")))]
#[case("a@", None)]
#[case("plain", None)]
fn markers_are_recognised_by_sigil(#[case] segment: &str, #[case] expected: Option<Marker<'static>>) {
    assert_eq!(Marker::parse(segment), expected);
}

#[rstest]
fn terminal_marker_is_exposed() {
    assert_eq!(Keypath::parse("/a/@2").marker(), Some(Marker::Named("2")));
    assert_eq!(Keypath::parse("/a/b").marker(), None);
}

#[rstest]
fn split_last_separates_parent() {
    let path = Keypath::parse("/a/ii/@1");
    let (parent, last) = path.split_last().unwrap_or_default();
    assert_eq!(parent, Keypath::parse("/a/ii"));
    assert_eq!(last, "@1");
    assert!(Keypath::root().split_last().is_none());
}

#[rstest]
fn prefixes_are_detected_by_segment() {
    let parent = Keypath::parse("/a");
    assert!(Keypath::parse("/a/b").starts_with(&parent));
    assert!(!Keypath::parse("/ab").starts_with(&parent));
}
