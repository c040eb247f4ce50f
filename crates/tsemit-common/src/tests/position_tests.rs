use super::*;

// =============================================================================
// compute_line_starts
// =============================================================================

#[test]
fn test_line_starts_empty_and_single_line() {
    assert_eq!(compute_line_starts(""), vec![0]);
    assert_eq!(compute_line_starts("const x = 1;"), vec![0]);
}

#[test]
fn test_line_starts_line_feed() {
    assert_eq!(compute_line_starts("a\nbc\nd"), vec![0, 2, 5]);
    // A trailing newline opens an empty final line.
    assert_eq!(compute_line_starts("a\n"), vec![0, 2]);
    assert_eq!(compute_line_starts("\n\n"), vec![0, 1, 2]);
}

#[test]
fn test_line_starts_carriage_return() {
    assert_eq!(compute_line_starts("a\r\nb"), vec![0, 3]);
    assert_eq!(compute_line_starts("a\rb"), vec![0, 2]);
    assert_eq!(compute_line_starts("a\r\r\nb"), vec![0, 2, 4]);
}

#[test]
fn test_line_starts_unicode_separators() {
    // U+2028 is three bytes in UTF-8.
    assert_eq!(compute_line_starts("a\u{2028}b"), vec![0, 4]);
    assert_eq!(compute_line_starts("é\u{2029}"), vec![0, 5]);
    // NEL is whitespace but not a line break.
    assert_eq!(compute_line_starts("a\u{0085}b"), vec![0]);
}

#[test]
fn test_contains_line_break() {
    assert!(!contains_line_break(""));
    assert!(!contains_line_break("class A {"));
    assert!(contains_line_break("a\nb"));
    assert!(contains_line_break("a\r"));
    assert!(contains_line_break("x\u{2029}"));
    // Other chars with a 0xE2 lead byte are not breaks.
    assert!(!contains_line_break("a \u{2026} b \u{2003}"));
}

// =============================================================================
// LineMap
// =============================================================================

#[test]
fn test_line_map_simple() {
    let source = "line1\nline2\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    assert_eq!(map.offset_to_position(4, source), Position::new(0, 4));
    assert_eq!(map.offset_to_position(5, source), Position::new(0, 5));
    assert_eq!(map.offset_to_position(6, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(12, source), Position::new(2, 0));
}

#[test]
fn test_line_map_windows_line_endings() {
    let source = "line1\r\nline2\r\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(7, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(source.len(), source), Position::new(2, 5));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "ab\ncd";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(source.len() + 10, source), Position::new(1, 2));
    assert_eq!(map.offset_to_position(usize::MAX, source), Position::new(1, 2));
}

#[test]
fn test_position_counts_utf16_units() {
    let source = "a😀b";
    let map = LineMap::build(source);

    // The emoji is 4 bytes and 2 UTF-16 units.
    assert_eq!(map.offset_to_position(5, source), Position::new(0, 3));
    assert_eq!(map.offset_to_position(source.len(), source), Position::new(0, 4));
}

#[test]
fn test_trailing_break_ends_on_empty_line() {
    let source = "x;\u{2028}";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(source.len(), source), Position::new(1, 0));
}
