use pretty_assertions::assert_eq;

use super::*;

fn copy_all(s: &str, indent: usize, tab_stop: usize) -> String {
    copy_unindented(s, 0, s.len(), indent, tab_stop)
}

// === Skip Phase ===

#[test]
fn skip_exact_spaces() {
    let mut out = String::new();
    assert_eq!(skip_indent(b"    ab", 0, 6, 4, 8, &mut out), 4);
    assert_eq!(out, "");
}

#[test]
fn skip_stops_at_indent_leaving_extra_space() {
    let mut out = String::new();
    assert_eq!(skip_indent(b"      ab", 0, 8, 4, 8, &mut out), 4);
    assert_eq!(out, "");
}

#[test]
fn skip_tab_overshoot_pushes_make_up_spaces() {
    let mut out = String::new();
    assert_eq!(skip_indent(b"\tab", 0, 3, 3, 4, &mut out), 1);
    assert_eq!(out, " ");
}

#[test]
fn skip_tab_landing_on_indent_pushes_nothing() {
    let mut out = String::new();
    assert_eq!(skip_indent(b"\tab", 0, 3, 8, 8, &mut out), 1);
    assert_eq!(out, "");
}

#[test]
fn skip_early_eol_stops_without_output() {
    let mut out = String::new();
    assert_eq!(skip_indent(b"  \nab", 0, 5, 4, 8, &mut out), 2);
    assert_eq!(out, "");
}

#[test]
fn skip_never_passes_limit() {
    let mut out = String::new();
    assert_eq!(skip_indent(b"    ", 0, 2, 4, 8, &mut out), 2);
    assert_eq!(out, "");
}

// === Whole Region ===

#[test]
fn copies_lines_with_indent_removed() {
    assert_eq!(copy_all("    ab\n      cd\n    ef", 4, 8), "ab\n  cd\nef");
}

#[test]
fn keeps_every_terminator_style() {
    assert_eq!(copy_all("  ab\r\n  cd\r  ef\n  gh", 2, 8), "ab\r\ncd\ref\ngh");
}

#[test]
fn blank_lines_without_space_pass_through() {
    assert_eq!(copy_all("  ab\n\n\n  cd", 2, 8), "ab\n\n\ncd");
}

#[test]
fn short_blank_lines_become_empty() {
    assert_eq!(copy_all("\t   ab\n\t\n \n\t de\n", 9, 8), "  ab\n\n\nde\n");
}

#[test]
fn long_blank_lines_keep_excess_space() {
    assert_eq!(copy_all("\t ab\n\t  \t \n\t de", 9, 8), "ab\n \t \nde");
}

#[test]
fn tab_across_indent_keeps_alignment() {
    assert_eq!(copy_all("\t(one)\n   (two)", 3, 4), " (one)\n(two)");
}

#[test]
fn multibyte_content_is_copied_intact() {
    assert_eq!(copy_all("  héllo\n    wörld", 2, 8), "héllo\n  wörld");
}

#[test]
fn honors_region_offsets() {
    let s = "\n    ab\n    cd   ";
    assert_eq!(copy_unindented(s, 1, 14, 4, 8), "ab\ncd");
}
