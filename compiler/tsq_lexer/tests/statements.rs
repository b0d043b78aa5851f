// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole-statement lexing tests.
//!
//! Unit tests next to each module cover single rules; these drive realistic
//! queries end to end through the public API only.
//!
//! ```bash
//! cargo test -p tsq_lexer --test statements
//! ```

use pretty_assertions::assert_eq;
use tsq_lexer::{lex, lex_statements, LexError, LexOptions};
use tsq_lexer_core::{SourceBuffer, TokenKind};

use tsq_lexer_core::TokenKind as K;

/// Lex the first statement of `query` into `(kind, text)` pairs.
fn tokens(query: &str) -> Vec<(TokenKind, String)> {
    let buf = SourceBuffer::new(query);
    lex(&buf, &LexOptions::default())
        .unwrap()
        .into_iter()
        .map(|tok| (tok.kind, tok.text.to_owned()))
        .collect()
}

fn kinds(query: &str) -> Vec<TokenKind> {
    tokens(query).into_iter().map(|(kind, _)| kind).collect()
}

#[test]
fn create_table_with_tags() {
    assert_eq!(
        kinds("CREATE TABLE db.meters (ts TIMESTAMP, v FLOAT, loc BINARY(64)) TAGS (gid INT)"),
        vec![
            K::Create, K::Table, K::Id, K::LeftParen, K::Id, K::Timestamp, K::Id, K::Float, K::Id,
            K::Binary, K::LeftParen, K::Integer, K::RightParen, K::RightParen, K::Tags,
            K::LeftParen, K::Id, K::Integer, K::RightParen,
        ]
    );
}

#[test]
fn insert_values() {
    let toks = tokens("INSERT INTO d1 VALUES (now, 10.3, -2, 'on''line', 0x1F, true)");
    let texts: Vec<&str> = toks.iter().map(|(_, text)| text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "INSERT", "INTO", "d1", "VALUES", "(", "now", "10.3", "-2", "'on''line'", "0x1F",
            "true", ")",
        ]
    );
    assert_eq!(
        kinds("INSERT INTO d1 VALUES (now, 10.3, -2, 'on''line', 0x1F, true)"),
        vec![
            K::Insert, K::Into, K::Id, K::Values, K::LeftParen, K::Now, K::Float, K::Integer,
            K::String, K::Hex, K::Bool, K::RightParen,
        ]
    );
}

#[test]
fn windowed_aggregate() {
    assert_eq!(
        kinds(
            "SELECT avg(v) FROM db.meters WHERE ts >= now - 1h \
             INTERVAL(10m) SLIDING(5m) FILL(NULL) ORDER BY ts DESC LIMIT 10"
        ),
        vec![
            K::Select, K::Avg, K::LeftParen, K::Id, K::RightParen, K::From, K::Id, K::Where, K::Id,
            K::Ge, K::Now, K::Minus, K::Variable, K::Interval, K::LeftParen, K::Variable,
            K::RightParen, K::Sliding, K::LeftParen, K::Variable, K::RightParen, K::Fill,
            K::LeftParen, K::Null, K::RightParen, K::Order, K::By, K::Id, K::Desc, K::Limit,
            K::Integer,
        ]
    );
}

#[test]
fn script_with_comments() {
    let buf = SourceBuffer::new(
        "-- header\nSELECT * FROM t1; /* two */ SELECT ip FROM t2 WHERE ip = 192.168.0.1;",
    );
    let statements = lex_statements(&buf, &LexOptions::default()).unwrap();
    let kinds: Vec<Vec<TokenKind>> = statements
        .iter()
        .map(|stmt| stmt.iter().map(|tok| tok.kind).collect())
        .collect();
    assert_eq!(
        kinds,
        vec![
            vec![K::Select, K::Star, K::From, K::Id],
            vec![K::Select, K::Id, K::From, K::Id, K::Where, K::Id, K::Eq, K::IpToken],
        ]
    );
    assert_eq!(statements[1][7].text, "192.168.0.1");
}

#[test]
fn scanner_and_validator_disagree_on_dotted_numbers() {
    let buf = SourceBuffer::new("x = 12.3.4");
    let toks = lex(&buf, &LexOptions::default()).unwrap();
    assert_eq!(toks[2].kind, K::Float);
    assert_eq!(toks[2].text, "12.3.4");
    assert_eq!(toks[2].numeric_kind(), None);
}

#[test]
fn error_reports_position() {
    let buf = SourceBuffer::new("SELECT a,, b");
    let err = lex(&buf, &LexOptions::default()).unwrap_err();
    assert_eq!(err, LexError::RepeatedComma { offset: 9 });
    assert_eq!(err.to_string(), "repeated comma at offset 9");
}

#[test]
fn comments_survive_when_kept() {
    let buf = SourceBuffer::new("SELECT /* all */ * FROM t");
    let toks = lex(&buf, &LexOptions::default().keep_trivia()).unwrap();
    let kinds: Vec<TokenKind> = toks.iter().map(|tok| tok.kind).collect();
    assert_eq!(kinds, vec![K::Select, K::Comment, K::Star, K::From, K::Id]);
}
