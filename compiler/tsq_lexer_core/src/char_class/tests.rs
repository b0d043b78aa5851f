use super::*;

#[test]
fn ident_table_matches_ascii_classes() {
    for b in 0u8..=255 {
        let expected = b.is_ascii_alphanumeric() || b == b'_';
        assert_eq!(is_ident_char(b), expected, "byte {b:#04x}");
    }
}

#[test]
fn high_bit_bytes_are_never_ident() {
    for b in 0x80u8..=0xFF {
        assert!(!is_ident_char(b));
    }
}

#[test]
fn vertical_tab_continues_but_does_not_start_whitespace() {
    assert!(is_space(0x0B));
    assert!(!is_space_start(0x0B));
    assert!(!is_space(0));
}

#[test]
fn duration_suffixes_either_case() {
    for b in *b"asmhdnywASMHDNYW" {
        assert!(is_duration_suffix(b), "{}", b as char);
    }
    for b in *b"bcxBCXe_0" {
        assert!(!is_duration_suffix(b), "{}", b as char);
    }
}
