#![allow(clippy::unwrap_used, reason = "tests unwrap known-good results")]

use pretty_assertions::assert_eq;
use skein_ir::SliceRange;

use super::*;
use crate::errors::{ErrorCategory, StrErrorKind};
use crate::{Bytes, Text};

fn t(s: &str) -> Text {
    Text::from(s)
}

fn b(raw: &[u8]) -> Bytes {
    Bytes::from(raw)
}

fn strings(parts: &[Text]) -> Vec<String> {
    parts.iter().map(Text::to_string).collect()
}

// Length, indexing, slicing

#[test]
fn get_returns_whole_characters() {
    let text = t("héllo");
    assert_eq!(text.get(1).unwrap(), "é");
    assert_eq!(text.get(-5).unwrap(), "h");

    let err = text.get(5).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::IndexError);
    assert_eq!(err.message, "string index out of range");
    assert!(text.get(-6).is_err());
}

#[test]
fn get_steps_over_surrogate_pairs() {
    let text = t("a😀b");
    assert_eq!(text.len(), 3);
    assert_eq!(text.get(1).unwrap(), "😀");
    assert_eq!(text.get(2).unwrap(), "b");
}

#[test]
fn slice_clamps_bounds() {
    let text = t("hello");
    assert_eq!(text.slice(Some(1), Some(3)), "el");
    assert_eq!(text.slice(Some(-3), None), "llo");
    assert_eq!(text.slice(None, Some(-1)), "hell");
    assert_eq!(text.slice(Some(-100), Some(100)), "hello");
    assert_eq!(text.slice(Some(4), Some(2)), "");
    assert_eq!(text.slice(Some(5), None), "");
    assert_eq!(text.slice(Some(9), None), "");
}

#[test]
fn slice_translates_through_the_index() {
    let text = t("a😀b😀");
    assert_eq!(text.slice(Some(1), Some(2)), "😀");
    assert_eq!(text.slice(Some(2), None), "b😀");
    assert_eq!(text.slice(Some(7), None), "");
}

#[test]
fn stepped_slices() {
    let text = t("a😀bc");
    assert_eq!(
        text.slice_with(&SliceRange::new(None, None, Some(-1))).unwrap(),
        "cb😀a"
    );
    assert_eq!(
        text.slice_with(&SliceRange::new(None, None, Some(2))).unwrap(),
        "ab"
    );
    let err = text
        .slice_with(&SliceRange::new(None, None, Some(0)))
        .unwrap_err();
    assert_eq!(err.kind, StrErrorKind::ZeroStep);
    assert_eq!(err.category(), ErrorCategory::ValueError);
}

// Concatenation and repetition

#[test]
fn concat_and_repeat() {
    assert_eq!(t("ab").concat(&t("cd")), "abcd");
    assert_eq!(t("ab").repeat(3).unwrap(), "ababab");
    assert_eq!(t("ab").repeat(0).unwrap(), "");
    assert_eq!(b(b"x").repeat(2).unwrap(), b(b"xx"));
}

#[test]
fn oversized_repeat_is_overflow_error() {
    let err = t("a").repeat(i64::MAX).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::IndexOverflow);
    assert_eq!(err.category(), ErrorCategory::ValueError);
    let err = b(b"ab").repeat(i64::MAX).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::IndexOverflow);
    assert_eq!(t("").repeat(i64::MAX).unwrap(), "");
}

#[test]
fn negative_repeat_is_type_error() {
    let err = t("ab").repeat(-1).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeError);
}

// Search

#[test]
fn find_and_rfind() {
    let text = t("hello");
    assert_eq!(text.find(&t("l"), None, None), 2);
    assert_eq!(text.rfind(&t("l"), None, None), 3);
    assert_eq!(text.find(&t("l"), Some(3), None), 3);
    assert_eq!(text.find(&t("lo"), Some(-2), None), 3);
    assert_eq!(text.find(&t("z"), None, None), -1);
    assert_eq!(text.find(&t("lo"), None, Some(4)), -1);
}

#[test]
fn find_window_edges() {
    let text = t("hello");
    // start == length still finds the empty needle
    assert_eq!(text.find(&t(""), Some(5), None), 5);
    assert_eq!(text.find(&t(""), Some(6), None), -1);
    assert_eq!(text.find(&t("l"), Some(4), Some(2)), -1);
    assert_eq!(text.rfind(&t(""), None, None), 5);
}

#[test]
fn find_reports_logical_offsets() {
    let text = t("a😀b😀");
    assert_eq!(text.find(&t("b"), None, None), 2);
    assert_eq!(text.rfind(&t("😀"), None, None), 3);
    assert_eq!(text.find(&t("😀"), Some(2), None), 3);
}

#[test]
fn find_never_starts_inside_a_pair() {
    let text = t("😀");
    let low = Text::from_utf16(vec![0xDE00]);
    assert_eq!(text.find(&low, None, None), -1);
    assert!(!text.contains(&low));
}

#[test]
fn matches_never_end_inside_a_pair() {
    let text = t("a😀b");
    let high = Text::from_utf16(vec![0xD83D]);
    let a_high = Text::from_utf16(vec![u16::from(b'a'), 0xD83D]);
    assert_eq!(text.find(&high, None, None), -1);
    assert_eq!(text.rfind(&high, None, None), -1);
    assert!(!text.contains(&high));
    assert_eq!(text.find(&a_high, None, None), -1);
    assert_eq!(text.count(&high, None, None), 0);
    assert!(text.index(&a_high, None, None).is_err());
    assert_eq!(text.replace(&high, &t("x"), None), "a😀b");
    assert_eq!(text.split(Some(&high), None).unwrap(), vec![t("a😀b")]);
    let (head, sep, tail) = text.partition(&a_high).unwrap();
    assert_eq!((head, sep, tail), (t("a😀b"), t(""), t("")));
    assert!(!text.startswith(&a_high));
    assert!(!t("😀").endswith(&Text::from_utf16(vec![0xDE00])));
    assert!(text.startswith(&t("a😀")));
}

#[test]
fn index_raises_where_find_misses() {
    let text = t("abc");
    assert_eq!(text.index(&t("c"), None, None).unwrap(), 2);
    assert_eq!(text.rindex(&t("a"), None, None).unwrap(), 0);
    let err = text.index(&t("z"), None, None).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::SubstringNotFound);
    assert_eq!(err.category(), ErrorCategory::ValueError);
}

#[test]
fn count_occurrences() {
    assert_eq!(t("aaaa").count(&t("aa"), None, None), 2);
    assert_eq!(t("aaaa").count(&t("a"), Some(1), None), 3);
    assert_eq!(t("abc").count(&t(""), None, None), 4);
    assert_eq!(t("abc").count(&t("a"), Some(2), Some(1)), 0);
}

#[test]
fn prefix_and_suffix() {
    assert!(t("hello").startswith(&t("he")));
    assert!(t("hello").endswith(&t("lo")));
    assert!(!t("hello").startswith(&t("lo")));
    assert!(b(b"abc").endswith(&b(b"")));
}

// Strip

#[test]
fn strip_whitespace() {
    assert_eq!(t("  x y \t\n").strip(None), "x y");
    assert_eq!(t("  x  ").lstrip(None), "x  ");
    assert_eq!(t("  x  ").rstrip(None), "  x");
    assert_eq!(t("   ").strip(None), "");
}

#[test]
fn strip_explicit_set() {
    assert_eq!(t("xyhixy").strip(Some(&t("yx"))), "hi");
    assert_eq!(t("😀a😀").strip(Some(&t("😀"))), "a");
    let low = Text::from_utf16(vec![0xDE00]);
    assert_eq!(t("😀a").strip(Some(&low)), "😀a");
}

#[test]
fn strip_unchanged_returns_same_instance() {
    let text = t("abc");
    assert!(text.strip(None).is_same(&text));
}

// Split family

#[test]
fn split_on_whitespace() {
    assert_eq!(strings(&t(" a  b ").split(None, None).unwrap()), vec!["a", "b"]);
    assert_eq!(
        strings(&t("a b c").split(None, Some(1)).unwrap()),
        vec!["a", "b c"]
    );
    assert_eq!(
        strings(&t("  a b  ").split(None, Some(1)).unwrap()),
        vec!["a", "b  "]
    );
    assert!(t("   ").split(None, None).unwrap().is_empty());
}

#[test]
fn split_on_separator_keeps_empties() {
    assert_eq!(
        strings(&t("a,,b").split(Some(&t(",")), None).unwrap()),
        vec!["a", "", "b"]
    );
    assert_eq!(
        strings(&t("a,b,c").split(Some(&t(",")), Some(0)).unwrap()),
        vec!["a,b,c"]
    );
    assert_eq!(
        strings(&t("a,b,c").split(Some(&t(",")), Some(-1)).unwrap()),
        vec!["a", "b", "c"]
    );
    assert_eq!(strings(&t("").split(Some(&t(",")), None).unwrap()), vec![""]);
}

#[test]
fn split_rejects_empty_separator() {
    let err = t("abc").split(Some(&t("")), None).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::EmptySeparator);
}

#[test]
fn splitlines_handles_every_terminator() {
    let text = t("a\nb\r\nc\rd");
    assert_eq!(strings(&text.splitlines(false)), vec!["a", "b", "c", "d"]);
    assert_eq!(
        strings(&text.splitlines(true)),
        vec!["a\n", "b\r\n", "c\r", "d"]
    );
    assert_eq!(strings(&t("a\n").splitlines(false)), vec!["a"]);
    assert_eq!(strings(&t("\n\n").splitlines(false)), vec!["", ""]);
}

#[test]
fn partition_and_rpartition() {
    let (head, sep, tail) = t("a=b=c").partition(&t("=")).unwrap();
    assert_eq!((head, sep, tail), (t("a"), t("="), t("b=c")));

    let (head, sep, tail) = t("a=b=c").rpartition(&t("=")).unwrap();
    assert_eq!((head, sep, tail), (t("a=b"), t("="), t("c")));

    assert_eq!(
        t("abc").partition(&t("=")).unwrap(),
        (t("abc"), t(""), t(""))
    );
    assert_eq!(
        t("abc").rpartition(&t("=")).unwrap(),
        (t(""), t(""), t("abc"))
    );
    assert!(t("abc").partition(&t("")).is_err());
}

// Join

#[test]
fn join_sequences() {
    assert_eq!(t(",").join(&[t("a"), t("b"), t("c")]), "a,b,c");
    assert_eq!(t(",").join(&[]), "");
    assert_eq!(b(b"-").join(&[b(b"x"), b(b"y")]), b(b"x-y"));
}

#[test]
fn join_values_checks_each_item() {
    let items = vec![Value::text("a"), Value::int(1)];
    let err = t(",").join_values(&items).unwrap_err();
    assert_eq!(
        err.kind,
        StrErrorKind::JoinItem {
            position: 1,
            expected: "str",
            got: "int".to_string(),
        }
    );
    assert_eq!(err.message, "sequence item 1: expected str instance, int found");

    let items = vec![Value::bytes(b(b"a")), Value::text("b")];
    let err = b(b",").join_values(&items).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeError);
}

// Replace

#[test]
fn replace_with_limit() {
    assert_eq!(t("aaa").replace(&t("a"), &t("b"), None), "bbb");
    assert_eq!(t("aaa").replace(&t("a"), &t("b"), Some(2)), "bba");
    assert_eq!(t("aaa").replace(&t("a"), &t("b"), Some(-1)), "bbb");
    assert_eq!(t("aaa").replace(&t("a"), &t("b"), Some(0)), "aaa");
    assert_eq!(t("abab").replace(&t("ab"), &t(""), None), "");
}

#[test]
fn replace_empty_pattern_inserts_between_characters() {
    assert_eq!(t("ab").replace(&t(""), &t("-"), None), "-a-b-");
    assert_eq!(t("a😀").replace(&t(""), &t("-"), Some(2)), "-a-😀");
}

// Case

#[test]
fn case_transforms_touch_only_ascii() {
    assert_eq!(t("hello World").upper(), "HELLO WORLD");
    assert_eq!(t("Hello World").lower(), "hello world");
    assert_eq!(t("Hello").swapcase(), "hELLO");
    assert_eq!(t("hELLO wORLD").capitalize(), "Hello world");
    assert_eq!(t("hello wORLD 3rd").title(), "Hello World 3Rd");
    assert_eq!(t("\u{c9}t\u{e9}").upper(), "\u{c9}T\u{e9}");
    assert_eq!(b(&[b'a', 0xe9]).upper(), b(&[b'A', 0xe9]));
}

#[test]
fn predicates() {
    assert!(t("123").isdigit());
    assert!(t("123").isnumeric());
    assert!(!t("").isdigit());
    assert!(t("abc").isalpha());
    assert!(!t("\u{e9}").isalpha());
    assert!(t("abc1").isalnum());
    assert!(t(" \t\n").isspace());
    assert!(!t("").isspace());
    assert!(t("hello1").islower());
    assert!(!t("123").islower());
    assert!(t("HELLO!").isupper());
    assert!(!t("Hello").isupper());
}

#[test]
fn istitle_transitions() {
    assert!(t("Hello World").istitle());
    assert!(t("A1 B").istitle());
    assert!(!t("Hello world").istitle());
    assert!(!t("HEllo").istitle());
    assert!(!t("123").istitle());
    assert!(!t("").istitle());
}

// Layout

#[test]
fn justify_and_center() {
    assert_eq!(t("abc").ljust(5, Some(&t("*"))).unwrap(), "abc**");
    assert_eq!(t("abc").rjust(5, None).unwrap(), "  abc");
    assert_eq!(t("ab").center(5, None).unwrap(), " ab  ");
    assert_eq!(t("ab").center(6, Some(&t("😀"))).unwrap(), "😀😀ab😀😀");
    assert_eq!(t("abc").ljust(2, None).unwrap(), "abc");
    assert_eq!(t("abc").rjust(-1, None).unwrap(), "abc");
}

#[test]
fn fill_must_be_one_character() {
    let err = t("abc").ljust(5, Some(&t("ab"))).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::FillChar);
    assert!(t("abc").center(5, Some(&t(""))).is_err());
}

#[test]
fn zfill_keeps_sign() {
    assert_eq!(t("42").zfill(5).unwrap(), "00042");
    assert_eq!(t("-42").zfill(5).unwrap(), "-0042");
    assert_eq!(t("+7").zfill(3).unwrap(), "+07");
    assert_eq!(t("42").zfill(1).unwrap(), "42");
    assert_eq!(b(b"-1").zfill(4).unwrap(), b(b"-001"));
}

#[test]
fn oversized_padding_is_overflow_error() {
    let err = t("a").ljust(i64::MAX, None).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::IndexOverflow);
    let err = t("a").center(i64::MAX, Some(&t("😀"))).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::IndexOverflow);
    let err = t("-1").zfill(i64::MAX).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::IndexOverflow);
    let err = t("\t").expandtabs(Some(i64::MAX)).unwrap_err();
    assert_eq!(err.kind, StrErrorKind::IndexOverflow);
}

#[test]
fn expandtabs_tracks_columns() {
    assert_eq!(t("a\tb").expandtabs(None).unwrap(), "a       b");
    assert_eq!(t("ab\tc\n\td").expandtabs(Some(4)).unwrap(), "ab  c\n    d");
    assert_eq!(t("a\tb").expandtabs(Some(0)).unwrap(), "ab");
    assert_eq!(t("😀\tx").expandtabs(Some(4)).unwrap(), "😀   x");
}

// Bytes share the same algorithms

#[test]
fn bytes_use_the_shared_algorithms() {
    assert_eq!(b(b"  x \x0b").strip(None), b(b"x"));
    let parts = b(b"a,b").split(Some(&b(b",")), None).unwrap();
    assert_eq!(parts, vec![b(b"a"), b(b"b")]);
    assert_eq!(b(b"hello").find(&b(b"ll"), None, None), 2);
    assert_eq!(b(b"AbC").lower(), b(b"abc"));
    assert_eq!(b(b"a\tb").expandtabs(Some(2)).unwrap(), b(b"a b"));
}

// Window helpers

#[test]
fn resolve_window_clamps() {
    assert_eq!(resolve_window(5, None, None), Some(0..5));
    assert_eq!(resolve_window(5, Some(-2), None), Some(3..5));
    assert_eq!(resolve_window(5, Some(-10), Some(99)), Some(0..5));
    assert_eq!(resolve_window(5, Some(5), None), Some(5..5));
    assert_eq!(resolve_window(5, Some(6), None), None);
    assert_eq!(resolve_window(5, Some(3), Some(1)), None);
}

#[test]
fn normalize_index_wraps_once() {
    assert_eq!(normalize_index(-1, 3), Some(2));
    assert_eq!(normalize_index(3, 3), None);
    assert_eq!(normalize_index(-4, 3), None);
}
