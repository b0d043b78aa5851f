use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

/// Alternate upper/lower case letter by letter: `SELECT` -> `sElEcT`.
fn mixed_case(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

// === Vocabulary invariants ===

#[test]
fn no_duplicate_names() {
    let mut seen = HashSet::new();
    for entry in KEYWORDS {
        assert!(seen.insert(entry.name), "duplicate keyword {:?}", entry.name);
    }
}

#[test]
fn names_are_uppercase_identifiers() {
    for entry in KEYWORDS {
        assert!(
            entry
                .name
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b == b'_'),
            "{:?} is not an uppercase identifier",
            entry.name
        );
    }
}

#[test]
fn max_len_is_tight() {
    let longest = KEYWORDS.iter().map(|e| e.name.len()).max();
    assert_eq!(longest, Some(MAX_KEYWORD_LEN));
}

#[test]
fn index_has_one_entry_per_name() {
    let index = KeywordIndex::new();
    assert_eq!(index.len(), KEYWORDS.len());
    assert!(!index.is_empty());
}

#[test]
fn building_twice_gives_same_index() {
    let a = KeywordIndex::new();
    let b = KeywordIndex::new();
    assert_eq!(a.len(), b.len());
    for entry in KEYWORDS {
        assert_eq!(a.lookup(entry.name), b.lookup(entry.name));
    }
}

// === Lookup ===

#[test]
fn every_entry_resolves_in_any_case() {
    let index = KeywordIndex::new();
    for entry in KEYWORDS {
        assert_eq!(index.lookup(entry.name), entry.kind, "{}", entry.name);
        assert_eq!(
            index.lookup(&entry.name.to_ascii_lowercase()),
            entry.kind,
            "{}",
            entry.name
        );
        assert_eq!(
            index.lookup(&mixed_case(entry.name)),
            entry.kind,
            "{}",
            entry.name
        );
    }
}

#[test]
fn extra_letter_is_identifier() {
    let index = KeywordIndex::new();
    for entry in KEYWORDS {
        let extended = format!("{}Q", entry.name);
        assert_eq!(index.lookup(&extended), TokenKind::Id, "{extended}");
    }
}

#[test]
fn common_keywords() {
    let index = KeywordIndex::new();
    assert_eq!(index.lookup("select"), TokenKind::Select);
    assert_eq!(index.lookup("From"), TokenKind::From);
    assert_eq!(index.lookup("WHERE"), TokenKind::Where);
    assert_eq!(index.lookup("interval"), TokenKind::Interval);
    assert_eq!(index.lookup("last_row"), TokenKind::LastRow);
    assert_eq!(index.lookup("fill"), TokenKind::Fill);
    assert_eq!(index.lookup("none"), TokenKind::FillNone);
}

#[test]
fn aliases_share_a_kind() {
    let index = KeywordIndex::new();
    assert_eq!(index.lookup("int"), TokenKind::Integer);
    assert_eq!(index.lookup("integer"), TokenKind::Integer);
    assert_eq!(index.lookup("lp"), TokenKind::LeftParen);
    assert_eq!(index.lookup("plus"), TokenKind::Plus);
    assert_eq!(index.lookup("rem"), TokenKind::Rem);
}

#[test]
fn length_sensitive() {
    let index = KeywordIndex::new();
    assert_eq!(index.lookup("SELECTX"), TokenKind::Id);
    assert_eq!(index.lookup("SELEC"), TokenKind::Id);
    assert_eq!(index.lookup(""), TokenKind::Id);
}

#[test]
fn too_long_is_identifier() {
    let index = KeywordIndex::new();
    assert_eq!(index.lookup("leastsquaresx"), TokenKind::Id);
    assert_eq!(index.lookup(&"a".repeat(200)), TokenKind::Id);
}

#[test]
fn non_ascii_is_identifier() {
    let index = KeywordIndex::new();
    assert_eq!(index.lookup("s\u{00E9}lect"), TokenKind::Id);
}

#[test]
fn uppercasing_only_touches_letters() {
    // '_' (0x5F) and digits must not be changed by the 0x20 mask.
    let index = KeywordIndex::new();
    assert_eq!(index.lookup("Last_Row"), TokenKind::LastRow);
    assert_eq!(index.lookup("last\u{7F}row"), TokenKind::Id);
}

// === Free functions ===

#[test]
fn keyword_kind_uses_global_index() {
    assert_eq!(keyword_kind("select"), TokenKind::Select);
    assert_eq!(keyword_kind("temperature"), TokenKind::Id);
}

#[test]
fn is_keyword_excludes_id_entry() {
    assert!(is_keyword("select"));
    assert!(is_keyword("TBNAME"));
    assert!(!is_keyword("id"));
    assert!(!is_keyword("sensor_01"));
}

// === Global build ===

#[test]
fn global_index_builds_once_under_contention() {
    let addrs: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                s.spawn(|| {
                    let index = KeywordIndex::global();
                    // Every caller must observe a fully built index.
                    assert_eq!(index.len(), KEYWORDS.len());
                    assert_eq!(index.lookup("select"), TokenKind::Select);
                    std::ptr::from_ref(index) as usize
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });

    let first = addrs[0];
    assert_ne!(first, 0);
    assert!(addrs.iter().all(|&a| a == first));
}

proptest! {
    #[test]
    fn lookup_ignores_ascii_case(idx in 0..KEYWORDS.len(), flips in prop::collection::vec(any::<bool>(), MAX_KEYWORD_LEN)) {
        let entry = KEYWORDS[idx];
        let text: String = entry
            .name
            .chars()
            .zip(flips.iter())
            .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assert_eq!(keyword_kind(&text), entry.kind);
    }

    #[test]
    fn lookup_never_panics(text in "\\PC{0,40}") {
        let _ = keyword_kind(&text);
    }
}
