//! `tsq number` and `tsq keywords`.

use tsq_lexer_core::{validate_numeric, TokenKind, KEYWORDS, MAX_KEYWORD_LEN};

/// Run `tsq number`. Returns `false` if `text` is not a number.
pub fn number_command(text: &str) -> bool {
    let (line, valid) = describe_number(text);
    println!("{line}");
    valid
}

fn describe_number(text: &str) -> (String, bool) {
    match validate_numeric(text) {
        Some(kind) => (format!("{text}: {}", TokenKind::from(kind)), true),
        None => (format!("{text}: illegal"), false),
    }
}

/// Run `tsq keywords`.
pub fn keywords_command() {
    let lines = keyword_lines();
    println!("{} keywords:", lines.len());
    for line in lines {
        println!("{line}");
    }
}

/// One line per reserved word, sorted by name.
fn keyword_lines() -> Vec<String> {
    let mut entries: Vec<_> = KEYWORDS.iter().collect();
    entries.sort_unstable_by_key(|entry| entry.name);
    entries
        .into_iter()
        .map(|entry| format!("  {:<MAX_KEYWORD_LEN$} {:?}", entry.name, entry.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers() {
        assert_eq!(describe_number("-12"), ("-12: integer".to_string(), true));
        assert_eq!(describe_number("0x1f"), ("0x1f: hex literal".to_string(), true));
        assert_eq!(describe_number("12.3.4"), ("12.3.4: illegal".to_string(), false));
    }

    #[test]
    fn keyword_listing_is_sorted_and_complete() {
        let lines = keyword_lines();
        assert_eq!(lines.len(), KEYWORDS.len());
        assert!(lines.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(lines.contains(&format!("  {:<12} Select", "SELECT")));
    }
}
