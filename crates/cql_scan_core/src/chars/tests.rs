use super::*;

// === Byte-level sets ===

#[test]
fn identifier_table_matches_set_definition() {
    for b in 0u8..=255 {
        let expected =
            b.is_ascii_alphanumeric() || matches!(b, b'-' | b'+' | b'.' | b'_' | b'&');
        assert_eq!(is_identifier_byte(b), expected, "byte {b:#04x}");
    }
}

#[test]
fn blank_set_is_space_tab_newline_only() {
    for b in 0u8..=255 {
        let expected = matches!(b, b' ' | b'\t' | b'\n');
        assert_eq!(is_blank_byte(b), expected, "byte {b:#04x}");
    }
}

#[test]
fn nul_is_neither_identifier_nor_blank() {
    // eat_while relies on pred(0) == false to stop at EOF.
    assert!(!is_identifier_byte(0));
    assert!(!is_blank_byte(0));
}

#[test]
fn carriage_return_is_not_blank() {
    assert!(!is_blank_byte(b'\r'));
}

// === Char-level predicates ===

#[test]
fn identifier_chars_accepted() {
    for c in ['a', 'z', 'A', 'Z', '0', '9', '-', '+', '.', '_', '&'] {
        assert!(is_identifier_char(c), "char {c:?}");
    }
}

#[test]
fn identifier_chars_rejected() {
    for c in [' ', '\t', '\n', '\'', '"', '{', '[', '(', ',', ':', '/', '*'] {
        assert!(!is_identifier_char(c), "char {c:?}");
    }
}

#[test]
fn non_ascii_is_never_identifier_or_blank() {
    for c in ['é', 'λ', '\u{a0}', '😀'] {
        assert!(!is_identifier_char(c), "char {c:?}");
        assert!(!is_blank(c), "char {c:?}");
    }
}

#[test]
fn blank_chars() {
    assert!(is_blank(' '));
    assert!(is_blank('\t'));
    assert!(is_blank('\n'));
    assert!(!is_blank('\r'));
    assert!(!is_blank('a'));
}
