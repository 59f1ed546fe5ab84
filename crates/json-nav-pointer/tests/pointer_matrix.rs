use json_nav_pointer::{JsonPointer, PointerError, Segment};
use proptest::prelude::*;

#[test]
fn pointer_compile_format_roundtrip_matrix() {
    let cases = [
        "",
        "/",
        "/foo",
        "/foo/bar",
        "/a~0b/c~1d",
        "/arr/0",
        "/~0/~1",
        "/foo//",
    ];

    for expr in cases {
        let ptr = JsonPointer::compile(expr).expect("valid pointer");
        assert_eq!(ptr.to_string(), expr);
    }
}

#[test]
fn pointer_index_recognition_matrix() {
    let cases: [(&str, Option<usize>); 7] = [
        ("0", Some(0)),
        ("10", Some(10)),
        ("-", None),
        ("00", None),
        ("1e3", None),
        ("", None),
        ("4294967296", None),
    ];

    for (token, expected) in cases {
        assert_eq!(Segment::new(token).index(), expected, "token {token:?}");
    }
}

#[test]
fn pointer_compile_errors() {
    assert!(matches!(
        JsonPointer::compile("a"),
        Err(PointerError::MissingLeadingSlash(_))
    ));
    let long = format!("/{}", "x".repeat(1024));
    assert_eq!(JsonPointer::compile(&long), Err(PointerError::TooLong(1025)));
}

#[test]
fn pointer_steps_flag_only_the_last() {
    let ptr = JsonPointer::compile("/a/b/c/d").unwrap();
    let flags: Vec<bool> = ptr.segments().map(|step| step.is_last()).collect();
    assert_eq!(flags, vec![false, false, false, true]);
}

proptest! {
    #[test]
    fn pointer_tokens_survive_display_and_compile(tokens in prop::collection::vec("[a-z0-9~/]{0,6}", 0..6)) {
        let ptr = JsonPointer::from_tokens(tokens.clone());
        let reparsed = JsonPointer::compile(&ptr.to_string()).unwrap();
        let names: Vec<String> = reparsed.segments().map(|s| s.segment().name().to_string()).collect();
        prop_assert_eq!(names, tokens);
        prop_assert_eq!(reparsed, ptr);
    }

    #[test]
    fn pointer_segments_are_restartable(tokens in prop::collection::vec("[a-z]{1,4}", 0..8)) {
        let ptr = JsonPointer::from_tokens(tokens);
        let first: Vec<_> = ptr.segments().collect();
        let second: Vec<_> = ptr.segments().collect();
        prop_assert_eq!(first.len(), ptr.len());
        prop_assert_eq!(first, second);
    }
}
