//! `tsq lex`: dump the tokens of a query.

use tsq_lexer::{LexOptions, TokenAssembler, TokenStream};
use tsq_lexer_core::{RawScanner, SourceBuffer, TokenKind};

use super::read_file;

/// Where the query text comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum LexInput {
    File(String),
    Inline(String),
}

/// Parsed `tsq lex` arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct LexArgs {
    pub input: LexInput,
    /// Show raw scanner tokens instead of assembled ones.
    pub raw: bool,
    /// Stop skipping comments.
    pub keep_trivia: bool,
}

impl LexArgs {
    /// Parse the arguments after `lex`.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut input = None;
        let mut raw = false;
        let mut keep_trivia = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--raw" => raw = true,
                "--keep-trivia" => keep_trivia = true,
                "-e" => {
                    let Some(sql) = iter.next() else {
                        return Err("-e needs a query".to_string());
                    };
                    input = Some(LexInput::Inline(sql.clone()));
                }
                flag if flag.starts_with('-') => return Err(format!("unknown option: {flag}")),
                path if input.is_none() => input = Some(LexInput::File(path.to_string())),
                extra => return Err(format!("unexpected argument: {extra}")),
            }
        }

        let input = input.ok_or_else(|| "missing query: pass <file> or -e <sql>".to_string())?;
        Ok(Self {
            input,
            raw,
            keep_trivia,
        })
    }

    fn options(&self) -> LexOptions {
        let options = LexOptions::default();
        if self.keep_trivia {
            options.keep_trivia()
        } else {
            options
        }
    }
}

/// Rendered token dump.
#[derive(Debug, Default)]
struct Listing {
    lines: Vec<String>,
    count: usize,
    error: Option<String>,
}

impl Listing {
    fn token(&mut self, line: String) {
        self.lines.push(line);
        self.count += 1;
    }

    fn print(&self, label: &str) {
        println!("Tokens for '{}' ({} tokens):", label, self.count);
        for line in &self.lines {
            println!("{line}");
        }
        if let Some(error) = &self.error {
            eprintln!("error: {error}");
        }
    }
}

/// Run `tsq lex`. Returns `false` if lexing stopped on bad input.
pub fn lex_command(args: &LexArgs) -> bool {
    let (label, text) = match &args.input {
        LexInput::File(path) => (path.clone(), read_file(path)),
        LexInput::Inline(sql) => ("<inline>".to_string(), sql.clone()),
    };
    let buf = SourceBuffer::new(&text);
    let listing = if args.raw {
        raw_listing(&buf)
    } else {
        assembled_listing(&buf, args.options())
    };
    listing.print(&label);
    listing.error.is_none()
}

/// Every statement through the assembler, with `;` markers between them.
fn assembled_listing(buf: &SourceBuffer, options: LexOptions) -> Listing {
    let mut listing = Listing::default();
    let mut stream = TokenStream::new(TokenAssembler::new(buf, options));
    loop {
        for item in stream.by_ref() {
            match item {
                Ok(tok) => listing.token(format!("  {tok:?}")),
                Err(err) => listing.error = Some(err.to_string()),
            }
        }
        if stream.at_statement_end() {
            listing.lines.push(format!("  ; @ {}", stream.pos()));
        }
        if !stream.next_statement() {
            return listing;
        }
    }
}

/// Single-token scanner output, trivia included.
fn raw_listing(buf: &SourceBuffer) -> Listing {
    let mut listing = Listing::default();
    let mut scanner = RawScanner::with_global_keywords(buf.cursor());
    loop {
        let start = scanner.pos();
        let tok = scanner.next_token();
        if tok.kind == TokenKind::Eof {
            return listing;
        }
        let end = start + tok.len;
        listing.token(format!(
            "  {:?} @ {}..{} {:?}",
            tok.kind,
            start,
            end,
            buf.slice(start, end)
        ));
        if tok.kind == TokenKind::Illegal && listing.error.is_none() {
            listing.error = Some(format!("illegal token at offset {start}"));
        }
        if tok.len == 0 {
            return listing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_file_with_flags() {
        assert_eq!(
            LexArgs::parse(&args(&["q.sql", "--raw", "--keep-trivia"])),
            Ok(LexArgs {
                input: LexInput::File("q.sql".to_string()),
                raw: true,
                keep_trivia: true,
            })
        );
    }

    #[test]
    fn parse_inline_query() {
        assert_eq!(
            LexArgs::parse(&args(&["-e", "select 1"])),
            Ok(LexArgs {
                input: LexInput::Inline("select 1".to_string()),
                raw: false,
                keep_trivia: false,
            })
        );
    }

    #[test]
    fn parse_errors() {
        assert!(LexArgs::parse(&args(&[])).is_err());
        assert!(LexArgs::parse(&args(&["-e"])).is_err());
        assert!(LexArgs::parse(&args(&["--bogus", "q.sql"])).is_err());
        assert!(LexArgs::parse(&args(&["a.sql", "b.sql"])).is_err());
    }

    #[test]
    fn assembled_marks_statement_ends() {
        let buf = SourceBuffer::new("select 1; db.t");
        let listing = assembled_listing(&buf, LexOptions::default());
        assert_eq!(
            listing.lines,
            vec![
                "  Select(0..6) \"select\"",
                "  Integer(7..8) \"1\"",
                "  ; @ 8",
                "  Id(10..14) \"db.t\"",
            ]
        );
        assert_eq!(listing.count, 3);
        assert_eq!(listing.error, None);
    }

    #[test]
    fn assembled_reports_error() {
        let buf = SourceBuffer::new("a,,b");
        let listing = assembled_listing(&buf, LexOptions::default());
        assert_eq!(listing.count, 1);
        assert_eq!(listing.error.as_deref(), Some("repeated comma at offset 2"));
    }

    #[test]
    fn raw_keeps_trivia() {
        let buf = SourceBuffer::new("a -- c");
        let listing = raw_listing(&buf);
        assert_eq!(
            listing.lines,
            vec![
                "  Id @ 0..1 \"a\"",
                "  Space @ 1..2 \" \"",
                "  Comment @ 2..6 \"-- c\"",
            ]
        );
        assert_eq!(listing.error, None);
    }

    #[test]
    fn raw_stops_on_stuck_token() {
        let buf = SourceBuffer::new("a 'x");
        let listing = raw_listing(&buf);
        assert_eq!(listing.count, 3);
        assert_eq!(listing.error.as_deref(), Some("illegal token at offset 2"));
    }
}
