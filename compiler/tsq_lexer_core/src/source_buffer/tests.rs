use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.as_str(), "");
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("select * from t");
    assert_eq!(buf.len(), 15);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"select * from t");
    assert_eq!(buf.as_str(), "select * from t");
    assert_eq!(buf.as_sentinel_bytes()[15], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "select '\u{6E29}\u{5EA6}' from t";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_str(), source);
}

// === Padding ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 59, 60, 61, 63, 64, 65, 127, 128, 1000] {
        let source: String = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.as_sentinel_bytes().len(),
            len
        );
    }
}

#[test]
fn lookahead_room_after_last_byte() {
    // peek2() from the last source byte must stay inside the buffer,
    // including lengths that sit right below a cache-line boundary.
    for len in [0, 1, 59, 60, 61, 62, 63, 64, 127] {
        let source: String = "7".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert!(
            buf.as_sentinel_bytes().len() >= len + MIN_PADDING,
            "not enough padding for source length {len}"
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.as_sentinel_bytes()[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === Slicing ===

#[test]
fn slice_extracts_query_text() {
    let buf = SourceBuffer::new("db.tbl");
    assert_eq!(buf.slice(0, 2), "db");
    assert_eq!(buf.slice(3, 6), "tbl");
}

#[test]
fn slice_out_of_range_is_empty() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.slice(2, 10), "");
    assert_eq!(buf.slice(3, 1), "");
}

#[test]
fn slice_splitting_a_character_is_empty() {
    let buf = SourceBuffer::new("\u{00E9}");
    assert_eq!(buf.slice(0, 1), "");
    assert_eq!(buf.slice(0, 2), "\u{00E9}");
}

// === Cursor Creation ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}

#[test]
fn cursor_at_positions_mid_buffer() {
    let buf = SourceBuffer::new("select x");
    let cursor = buf.cursor_at(7);
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn cursor_at_clamps_to_sentinel() {
    let buf = SourceBuffer::new("ab");
    let cursor = buf.cursor_at(100);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Large Source ===

#[test]
fn large_source() {
    let source: String = "x".repeat(100_000);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.len(), 100_000);
    assert_eq!(buf.as_sentinel_bytes()[100_000], 0);
    assert_eq!(buf.as_sentinel_bytes().len() % CACHE_LINE, 0);
}

#[test]
fn clamp_keeps_short_sources() {
    assert_eq!(clamp_to_max_len("select"), "select");
}
