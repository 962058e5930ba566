use std::borrow::Cow;

use pretty_assertions::assert_eq;

use super::*;

// === Argument Validation ===

#[test]
fn null_text_is_rejected() {
    assert_eq!(unindent_nullable(None, 8), Err(UnindentError::NullText));
}

#[test]
fn null_text_is_checked_before_tab_stop() {
    assert_eq!(unindent_nullable(None, 0), Err(UnindentError::NullText));
}

#[test]
fn zero_tab_stop_is_rejected() {
    assert_eq!(
        unindent_with("anything", 0),
        Err(UnindentError::TabStopOutOfRange { tab_stop: 0 })
    );
    assert_eq!(
        unindent_nullable(Some("anything"), 0),
        Err(UnindentError::TabStopOutOfRange { tab_stop: 0 })
    );
}

#[test]
fn present_text_is_unindented() {
    assert_eq!(
        unindent_nullable(Some("  ab\n  cd"), 8).as_deref(),
        Ok("ab\ncd")
    );
}

// === Borrowing ===

#[test]
fn unchanged_input_is_returned_itself() {
    let text = "ab\ncd\n";
    let out = unindent(text);
    assert!(matches!(out, Cow::Borrowed(_)));
    assert!(is_unchanged(text, &out));
}

#[test]
fn trim_only_borrows_a_sub_slice() {
    let text = "\nab\ncd  ";
    let out = unindent(text);
    let Cow::Borrowed(slice) = out else {
        panic!("expected a borrowed result");
    };
    assert_eq!(slice, "ab\ncd");
    assert!(!is_unchanged(text, slice));
    assert!(std::ptr::eq(slice.as_ptr(), text[1..].as_ptr()));
}

#[test]
fn unindenting_allocates() {
    let out = unindent("  ab");
    assert!(matches!(out, Cow::Owned(_)));
    assert_eq!(out, "ab");
}

#[test]
fn equal_copy_is_not_unchanged() {
    let text = "ab";
    let copy = String::from(text);
    assert!(!is_unchanged(text, &copy));
}

// === Entry Points Agree ===

#[test]
fn default_matches_explicit_eight() {
    let text = "\t  ab\n \t cd";
    assert_eq!(unindent(text), unindent_with(text, 8).unwrap_or_default());
    assert_eq!(unindent(text), unindent_with_tab_stop(text, TabStop::DEFAULT));
}

#[test]
fn tab_stop_changes_result() {
    let text = "\tab\n    cd";
    assert_eq!(unindent(text), "    ab\ncd");
    assert_eq!(unindent_with(text, 4).as_deref(), Ok("ab\ncd"));
}
