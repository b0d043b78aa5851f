//! Reserved-word table and case-insensitive keyword index.
//!
//! [`KEYWORDS`] is the fixed vocabulary. [`KeywordIndex`] hashes it once by
//! uppercase spelling; a lookup uppercases the candidate into a stack buffer
//! and probes the map, so lookups never allocate.
//!
//! Callers that own an index pass it by reference. Callers without an init
//! step use [`KeywordIndex::global()`], which builds exactly once per process
//! even when many threads race to it.
//!
//! Some entries are aliases: `INT` and `INTEGER` share a kind, and grammar
//! symbol names such as `LP` or `PLUS` resolve to the punctuation kinds they
//! name. `ID` maps to [`TokenKind::Id`], so it never reads as a keyword.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Longest keyword spelling in bytes (`LEASTSQUARES`).
pub const MAX_KEYWORD_LEN: usize = 12;

/// One reserved word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Uppercase spelling.
    pub name: &'static str,
    pub kind: TokenKind,
}

impl KeywordEntry {
    const fn new(name: &'static str, kind: TokenKind) -> Self {
        Self { name, kind }
    }
}

/// The keyword vocabulary.
pub static KEYWORDS: &[KeywordEntry] = &[
    KeywordEntry::new("ID", TokenKind::Id),
    KeywordEntry::new("BOOL", TokenKind::Bool),
    KeywordEntry::new("TINYINT", TokenKind::TinyInt),
    KeywordEntry::new("SMALLINT", TokenKind::SmallInt),
    KeywordEntry::new("INTEGER", TokenKind::Integer),
    KeywordEntry::new("INT", TokenKind::Integer),
    KeywordEntry::new("BIGINT", TokenKind::BigInt),
    KeywordEntry::new("FLOAT", TokenKind::Float),
    KeywordEntry::new("DOUBLE", TokenKind::Double),
    KeywordEntry::new("STRING", TokenKind::String),
    KeywordEntry::new("TIMESTAMP", TokenKind::Timestamp),
    KeywordEntry::new("BINARY", TokenKind::Binary),
    KeywordEntry::new("NCHAR", TokenKind::NChar),
    KeywordEntry::new("OR", TokenKind::Or),
    KeywordEntry::new("AND", TokenKind::And),
    KeywordEntry::new("NOT", TokenKind::Not),
    KeywordEntry::new("EQ", TokenKind::Eq),
    KeywordEntry::new("NE", TokenKind::Ne),
    KeywordEntry::new("ISNULL", TokenKind::IsNull),
    KeywordEntry::new("NOTNULL", TokenKind::NotNull),
    KeywordEntry::new("IS", TokenKind::Is),
    KeywordEntry::new("LIKE", TokenKind::Like),
    KeywordEntry::new("GLOB", TokenKind::Glob),
    KeywordEntry::new("BETWEEN", TokenKind::Between),
    KeywordEntry::new("IN", TokenKind::In),
    KeywordEntry::new("GT", TokenKind::Gt),
    KeywordEntry::new("GE", TokenKind::Ge),
    KeywordEntry::new("LT", TokenKind::Lt),
    KeywordEntry::new("LE", TokenKind::Le),
    KeywordEntry::new("BITAND", TokenKind::BitAnd),
    KeywordEntry::new("BITOR", TokenKind::BitOr),
    KeywordEntry::new("LSHIFT", TokenKind::LShift),
    KeywordEntry::new("RSHIFT", TokenKind::RShift),
    KeywordEntry::new("PLUS", TokenKind::Plus),
    KeywordEntry::new("MINUS", TokenKind::Minus),
    KeywordEntry::new("DIVIDE", TokenKind::Divide),
    KeywordEntry::new("TIMES", TokenKind::Times),
    KeywordEntry::new("STAR", TokenKind::Star),
    KeywordEntry::new("SLASH", TokenKind::Slash),
    KeywordEntry::new("REM", TokenKind::Rem),
    KeywordEntry::new("CONCAT", TokenKind::Concat),
    KeywordEntry::new("UMINUS", TokenKind::UMinus),
    KeywordEntry::new("UPLUS", TokenKind::UPlus),
    KeywordEntry::new("BITNOT", TokenKind::BitNot),
    KeywordEntry::new("SHOW", TokenKind::Show),
    KeywordEntry::new("DATABASES", TokenKind::Databases),
    KeywordEntry::new("MNODES", TokenKind::MNodes),
    KeywordEntry::new("DNODES", TokenKind::DNodes),
    KeywordEntry::new("ACCOUNTS", TokenKind::Accounts),
    KeywordEntry::new("USERS", TokenKind::Users),
    KeywordEntry::new("MODULES", TokenKind::Modules),
    KeywordEntry::new("QUERIES", TokenKind::Queries),
    KeywordEntry::new("CONNECTIONS", TokenKind::Connections),
    KeywordEntry::new("STREAMS", TokenKind::Streams),
    KeywordEntry::new("CONFIGS", TokenKind::Configs),
    KeywordEntry::new("SCORES", TokenKind::Scores),
    KeywordEntry::new("GRANTS", TokenKind::Grants),
    KeywordEntry::new("DOT", TokenKind::Dot),
    KeywordEntry::new("TABLES", TokenKind::Tables),
    KeywordEntry::new("STABLES", TokenKind::STables),
    KeywordEntry::new("VGROUPS", TokenKind::VGroups),
    KeywordEntry::new("DROP", TokenKind::Drop),
    KeywordEntry::new("TABLE", TokenKind::Table),
    KeywordEntry::new("DATABASE", TokenKind::Database),
    KeywordEntry::new("DNODE", TokenKind::DNode),
    KeywordEntry::new("USER", TokenKind::User),
    KeywordEntry::new("ACCOUNT", TokenKind::Account),
    KeywordEntry::new("USE", TokenKind::Use),
    KeywordEntry::new("DESCRIBE", TokenKind::Describe),
    KeywordEntry::new("ALTER", TokenKind::Alter),
    KeywordEntry::new("PASS", TokenKind::Pass),
    KeywordEntry::new("PRIVILEGE", TokenKind::Privilege),
    KeywordEntry::new("LOCAL", TokenKind::Local),
    KeywordEntry::new("IF", TokenKind::If),
    KeywordEntry::new("EXISTS", TokenKind::Exists),
    KeywordEntry::new("CREATE", TokenKind::Create),
    KeywordEntry::new("PPS", TokenKind::Pps),
    KeywordEntry::new("TSERIES", TokenKind::TSeries),
    KeywordEntry::new("DBS", TokenKind::Dbs),
    KeywordEntry::new("STORAGE", TokenKind::Storage),
    KeywordEntry::new("QTIME", TokenKind::QTime),
    KeywordEntry::new("CONNS", TokenKind::Conns),
    KeywordEntry::new("STATE", TokenKind::State),
    KeywordEntry::new("KEEP", TokenKind::Keep),
    KeywordEntry::new("REPLICA", TokenKind::Replica),
    KeywordEntry::new("DAYS", TokenKind::Days),
    KeywordEntry::new("ROWS", TokenKind::Rows),
    KeywordEntry::new("CACHE", TokenKind::Cache),
    KeywordEntry::new("ABLOCKS", TokenKind::ABlocks),
    KeywordEntry::new("TBLOCKS", TokenKind::TBlocks),
    KeywordEntry::new("CTIME", TokenKind::CTime),
    KeywordEntry::new("CLOG", TokenKind::CLog),
    KeywordEntry::new("COMP", TokenKind::Comp),
    KeywordEntry::new("PRECISION", TokenKind::Precision),
    KeywordEntry::new("LP", TokenKind::LeftParen),
    KeywordEntry::new("RP", TokenKind::RightParen),
    KeywordEntry::new("TAGS", TokenKind::Tags),
    KeywordEntry::new("USING", TokenKind::Using),
    KeywordEntry::new("AS", TokenKind::As),
    KeywordEntry::new("COMMA", TokenKind::Comma),
    KeywordEntry::new("NULL", TokenKind::Null),
    KeywordEntry::new("SELECT", TokenKind::Select),
    KeywordEntry::new("FROM", TokenKind::From),
    KeywordEntry::new("VARIABLE", TokenKind::Variable),
    KeywordEntry::new("INTERVAL", TokenKind::Interval),
    KeywordEntry::new("FILL", TokenKind::Fill),
    KeywordEntry::new("SLIDING", TokenKind::Sliding),
    KeywordEntry::new("ORDER", TokenKind::Order),
    KeywordEntry::new("BY", TokenKind::By),
    KeywordEntry::new("ASC", TokenKind::Asc),
    KeywordEntry::new("DESC", TokenKind::Desc),
    KeywordEntry::new("GROUP", TokenKind::Group),
    KeywordEntry::new("HAVING", TokenKind::Having),
    KeywordEntry::new("LIMIT", TokenKind::Limit),
    KeywordEntry::new("OFFSET", TokenKind::Offset),
    KeywordEntry::new("SLIMIT", TokenKind::SLimit),
    KeywordEntry::new("SOFFSET", TokenKind::SOffset),
    KeywordEntry::new("WHERE", TokenKind::Where),
    KeywordEntry::new("NOW", TokenKind::Now),
    KeywordEntry::new("INSERT", TokenKind::Insert),
    KeywordEntry::new("INTO", TokenKind::Into),
    KeywordEntry::new("VALUES", TokenKind::Values),
    KeywordEntry::new("RESET", TokenKind::Reset),
    KeywordEntry::new("QUERY", TokenKind::Query),
    KeywordEntry::new("ADD", TokenKind::Add),
    KeywordEntry::new("COLUMN", TokenKind::Column),
    KeywordEntry::new("TAG", TokenKind::Tag),
    KeywordEntry::new("CHANGE", TokenKind::Change),
    KeywordEntry::new("SET", TokenKind::Set),
    KeywordEntry::new("KILL", TokenKind::Kill),
    KeywordEntry::new("CONNECTION", TokenKind::Connection),
    KeywordEntry::new("COLON", TokenKind::Colon),
    KeywordEntry::new("STREAM", TokenKind::Stream),
    KeywordEntry::new("ABORT", TokenKind::Abort),
    KeywordEntry::new("AFTER", TokenKind::After),
    KeywordEntry::new("ATTACH", TokenKind::Attach),
    KeywordEntry::new("BEFORE", TokenKind::Before),
    KeywordEntry::new("BEGIN", TokenKind::Begin),
    KeywordEntry::new("CASCADE", TokenKind::Cascade),
    KeywordEntry::new("CLUSTER", TokenKind::Cluster),
    KeywordEntry::new("CONFLICT", TokenKind::Conflict),
    KeywordEntry::new("COPY", TokenKind::Copy),
    KeywordEntry::new("DEFERRED", TokenKind::Deferred),
    KeywordEntry::new("DELIMITERS", TokenKind::Delimiters),
    KeywordEntry::new("DETACH", TokenKind::Detach),
    KeywordEntry::new("EACH", TokenKind::Each),
    KeywordEntry::new("END", TokenKind::End),
    KeywordEntry::new("EXPLAIN", TokenKind::Explain),
    KeywordEntry::new("FAIL", TokenKind::Fail),
    KeywordEntry::new("FOR", TokenKind::For),
    KeywordEntry::new("IGNORE", TokenKind::Ignore),
    KeywordEntry::new("IMMEDIATE", TokenKind::Immediate),
    KeywordEntry::new("INITIALLY", TokenKind::Initially),
    KeywordEntry::new("INSTEAD", TokenKind::Instead),
    KeywordEntry::new("MATCH", TokenKind::Match),
    KeywordEntry::new("KEY", TokenKind::Key),
    KeywordEntry::new("OF", TokenKind::Of),
    KeywordEntry::new("RAISE", TokenKind::Raise),
    KeywordEntry::new("REPLACE", TokenKind::Replace),
    KeywordEntry::new("RESTRICT", TokenKind::Restrict),
    KeywordEntry::new("ROW", TokenKind::Row),
    KeywordEntry::new("STATEMENT", TokenKind::Statement),
    KeywordEntry::new("TRIGGER", TokenKind::Trigger),
    KeywordEntry::new("VIEW", TokenKind::View),
    KeywordEntry::new("ALL", TokenKind::All),
    KeywordEntry::new("COUNT", TokenKind::Count),
    KeywordEntry::new("SUM", TokenKind::Sum),
    KeywordEntry::new("AVG", TokenKind::Avg),
    KeywordEntry::new("MIN", TokenKind::Min),
    KeywordEntry::new("MAX", TokenKind::Max),
    KeywordEntry::new("FIRST", TokenKind::First),
    KeywordEntry::new("LAST", TokenKind::Last),
    KeywordEntry::new("TOP", TokenKind::Top),
    KeywordEntry::new("BOTTOM", TokenKind::Bottom),
    KeywordEntry::new("STDDEV", TokenKind::Stddev),
    KeywordEntry::new("PERCENTILE", TokenKind::Percentile),
    KeywordEntry::new("APERCENTILE", TokenKind::APercentile),
    KeywordEntry::new("LEASTSQUARES", TokenKind::LeastSquares),
    KeywordEntry::new("HISTOGRAM", TokenKind::Histogram),
    KeywordEntry::new("DIFF", TokenKind::Diff),
    KeywordEntry::new("SPREAD", TokenKind::Spread),
    KeywordEntry::new("TWA", TokenKind::Twa),
    KeywordEntry::new("INTERP", TokenKind::Interp),
    KeywordEntry::new("LAST_ROW", TokenKind::LastRow),
    KeywordEntry::new("SEMI", TokenKind::Semi),
    KeywordEntry::new("NONE", TokenKind::FillNone),
    KeywordEntry::new("PREV", TokenKind::Prev),
    KeywordEntry::new("LINEAR", TokenKind::Linear),
    KeywordEntry::new("IMPORT", TokenKind::Import),
    KeywordEntry::new("METRIC", TokenKind::Metric),
    KeywordEntry::new("TBNAME", TokenKind::TbName),
    KeywordEntry::new("JOIN", TokenKind::Join),
    KeywordEntry::new("METRICS", TokenKind::Metrics),
    KeywordEntry::new("STABLE", TokenKind::STable),
    KeywordEntry::new("FILE", TokenKind::File),
];

/// Uppercase spelling → kind.
///
/// Immutable once built. Shared across threads by reference.
#[derive(Clone, Debug)]
pub struct KeywordIndex {
    map: FxHashMap<&'static [u8], TokenKind>,
}

static GLOBAL_KEYWORD_INDEX: OnceLock<KeywordIndex> = OnceLock::new();

impl KeywordIndex {
    /// Build an index over [`KEYWORDS`].
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.reserve(KEYWORDS.len());
        for entry in KEYWORDS {
            map.insert(entry.name.as_bytes(), entry.kind);
        }
        Self { map }
    }

    /// Process-wide index, built on first use.
    pub fn global() -> &'static KeywordIndex {
        GLOBAL_KEYWORD_INDEX.get_or_init(|| {
            let index = KeywordIndex::new();
            tracing::debug!(entries = index.len(), "built keyword index");
            index
        })
    }

    /// Resolve `text` to a keyword kind, or [`TokenKind::Id`].
    ///
    /// Matching is ASCII case-insensitive and covers the whole text:
    /// `select` is [`TokenKind::Select`], `selectx` is an identifier.
    pub fn lookup(&self, text: &str) -> TokenKind {
        let bytes = text.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_KEYWORD_LEN {
            return TokenKind::Id;
        }

        let mut upper = [0u8; MAX_KEYWORD_LEN];
        for (dst, &b) in upper.iter_mut().zip(bytes) {
            *dst = if b.is_ascii_lowercase() { b & !0x20 } else { b };
        }

        self.map
            .get(&upper[..bytes.len()])
            .copied()
            .unwrap_or(TokenKind::Id)
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `text` against the global index.
#[inline]
pub fn keyword_kind(text: &str) -> TokenKind {
    KeywordIndex::global().lookup(text)
}

/// Returns `true` if `text` is a reserved word.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    keyword_kind(text) != TokenKind::Id
}

#[cfg(test)]
mod tests;
