//! Character classification used when scanning emitted text.

/// Line terminators recognized by the ECMAScript grammar.
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whitespace that does not end a line.
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{0085}' // next line
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200B}'
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // byte order mark
    )
}

pub fn is_white_space_like(ch: char) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks() {
        for ch in ['\n', '\r', '\u{2028}', '\u{2029}'] {
            assert!(is_line_break(ch), "{ch:?}");
            assert!(is_white_space_like(ch), "{ch:?}");
            assert!(!is_white_space_single_line(ch), "{ch:?}");
        }
        assert!(!is_line_break('\u{0085}'));
    }

    #[test]
    fn test_single_line_whitespace() {
        for ch in [' ', '\t', '\u{00A0}', '\u{2003}', '\u{200B}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_white_space_single_line(ch), "{ch:?}");
        }
        for ch in ['a', '0', ';', '\u{200C}', '}'] {
            assert!(!is_white_space_like(ch), "{ch:?}");
        }
    }
}
