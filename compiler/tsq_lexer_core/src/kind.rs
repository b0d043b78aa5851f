//! Token kinds and the raw `(kind, len)` scanner output.
//!
//! [`TokenKind`] is one byte wide. Discriminants 1-194 are the token codes
//! the query grammar is generated against, so `kind as u8` can be handed to
//! a parser table directly. Kinds the grammar has no code for sit above
//! that range:
//!
//! | Range   | Category                                  |
//! |---------|-------------------------------------------|
//! | 1-194   | Grammar tokens (literals, operators, keywords) |
//! | 195-201 | Scanner-only kinds (trivia, radix literals, `?`) |
//! | 255     | End of input                              |
//!
//! Several kinds double as keywords and literal classes: `Integer` is both the
//! `INT` type keyword and an integer literal, `String` is both `STRING` and a
//! quoted literal. The scanner decides which by context, not by kind.

use std::fmt;

/// Defines [`TokenKind`] together with its variant list and display names.
macro_rules! token_kinds {
    ($( $(#[$meta:meta])* $variant:ident = $code:literal => $name:literal, )*) => {
        /// Classification of a single token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TokenKind {
            $( $(#[$meta])* $variant = $code, )*
        }

        impl TokenKind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )* ];

            /// Human-readable name: the keyword spelling for keywords, the
            /// operator text for operators, a short description otherwise.
            pub const fn name(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $name, )*
                }
            }
        }
    };
}

token_kinds! {
    // === Literals and type names (1-12) ===
    /// Identifier, including `[bracketed]` names and `db.tbl` pairs.
    Id = 1 => "identifier",
    /// `true` / `false`, or the `BOOL` type keyword.
    Bool = 2 => "boolean",
    TinyInt = 3 => "TINYINT",
    SmallInt = 4 => "SMALLINT",
    /// Decimal integer literal, or the `INT`/`INTEGER` type keyword.
    Integer = 5 => "integer",
    BigInt = 6 => "BIGINT",
    /// Float literal, or the `FLOAT` type keyword.
    Float = 7 => "float",
    Double = 8 => "DOUBLE",
    /// Quoted string literal, or the `STRING` type keyword.
    String = 9 => "string",
    Timestamp = 10 => "TIMESTAMP",
    Binary = 11 => "BINARY",
    NChar = 12 => "NCHAR",

    // === Logical and comparison operators (13-28) ===
    Or = 13 => "OR",
    And = 14 => "AND",
    Not = 15 => "NOT",
    /// `=` or `==`.
    Eq = 16 => "=",
    /// `<>` or `!=`.
    Ne = 17 => "<>",
    IsNull = 18 => "ISNULL",
    NotNull = 19 => "NOTNULL",
    Is = 20 => "IS",
    Like = 21 => "LIKE",
    Glob = 22 => "GLOB",
    Between = 23 => "BETWEEN",
    In = 24 => "IN",
    Gt = 25 => ">",
    Ge = 26 => ">=",
    Lt = 27 => "<",
    Le = 28 => "<=",

    // === Arithmetic and bitwise operators (29-43) ===
    BitAnd = 29 => "&",
    BitOr = 30 => "|",
    LShift = 31 => "<<",
    RShift = 32 => ">>",
    Plus = 33 => "+",
    Minus = 34 => "-",
    Divide = 35 => "DIVIDE",
    Times = 36 => "TIMES",
    Star = 37 => "*",
    Slash = 38 => "/",
    Rem = 39 => "%",
    Concat = 40 => "||",
    UMinus = 41 => "UMINUS",
    UPlus = 42 => "UPLUS",
    BitNot = 43 => "~",

    // === Statement keywords and delimiters (44-194) ===
    Show = 44 => "SHOW",
    Databases = 45 => "DATABASES",
    MNodes = 46 => "MNODES",
    DNodes = 47 => "DNODES",
    Accounts = 48 => "ACCOUNTS",
    Users = 49 => "USERS",
    Modules = 50 => "MODULES",
    Queries = 51 => "QUERIES",
    Connections = 52 => "CONNECTIONS",
    Streams = 53 => "STREAMS",
    Configs = 54 => "CONFIGS",
    Scores = 55 => "SCORES",
    Grants = 56 => "GRANTS",
    Dot = 57 => ".",
    Tables = 58 => "TABLES",
    STables = 59 => "STABLES",
    VGroups = 60 => "VGROUPS",
    Drop = 61 => "DROP",
    Table = 62 => "TABLE",
    Database = 63 => "DATABASE",
    DNode = 64 => "DNODE",
    /// Four dotted digit segments: `192.168.0.1`.
    IpToken = 65 => "ip address",
    User = 66 => "USER",
    Account = 67 => "ACCOUNT",
    Use = 68 => "USE",
    Describe = 69 => "DESCRIBE",
    Alter = 70 => "ALTER",
    Pass = 71 => "PASS",
    Privilege = 72 => "PRIVILEGE",
    Local = 73 => "LOCAL",
    If = 74 => "IF",
    Exists = 75 => "EXISTS",
    Create = 76 => "CREATE",
    Pps = 77 => "PPS",
    TSeries = 78 => "TSERIES",
    Dbs = 79 => "DBS",
    Storage = 80 => "STORAGE",
    QTime = 81 => "QTIME",
    Conns = 82 => "CONNS",
    State = 83 => "STATE",
    Keep = 84 => "KEEP",
    Cache = 85 => "CACHE",
    Replica = 86 => "REPLICA",
    Days = 87 => "DAYS",
    Rows = 88 => "ROWS",
    ABlocks = 89 => "ABLOCKS",
    TBlocks = 90 => "TBLOCKS",
    CTime = 91 => "CTIME",
    CLog = 92 => "CLOG",
    Comp = 93 => "COMP",
    Precision = 94 => "PRECISION",
    LeftParen = 95 => "(",
    RightParen = 96 => ")",
    Tags = 97 => "TAGS",
    Using = 98 => "USING",
    As = 99 => "AS",
    Comma = 100 => ",",
    Null = 101 => "NULL",
    Select = 102 => "SELECT",
    From = 103 => "FROM",
    /// Duration literal: a digit run with one time-unit suffix (`10m`).
    Variable = 104 => "duration",
    Interval = 105 => "INTERVAL",
    Fill = 106 => "FILL",
    Sliding = 107 => "SLIDING",
    Order = 108 => "ORDER",
    By = 109 => "BY",
    Asc = 110 => "ASC",
    Desc = 111 => "DESC",
    Group = 112 => "GROUP",
    Having = 113 => "HAVING",
    Limit = 114 => "LIMIT",
    Offset = 115 => "OFFSET",
    SLimit = 116 => "SLIMIT",
    SOffset = 117 => "SOFFSET",
    Where = 118 => "WHERE",
    Now = 119 => "NOW",
    Insert = 120 => "INSERT",
    Into = 121 => "INTO",
    Values = 122 => "VALUES",
    Reset = 123 => "RESET",
    Query = 124 => "QUERY",
    Add = 125 => "ADD",
    Column = 126 => "COLUMN",
    Tag = 127 => "TAG",
    Change = 128 => "CHANGE",
    Set = 129 => "SET",
    Kill = 130 => "KILL",
    Connection = 131 => "CONNECTION",
    Colon = 132 => ":",
    Stream = 133 => "STREAM",
    Abort = 134 => "ABORT",
    After = 135 => "AFTER",
    Attach = 136 => "ATTACH",
    Before = 137 => "BEFORE",
    Begin = 138 => "BEGIN",
    Cascade = 139 => "CASCADE",
    Cluster = 140 => "CLUSTER",
    Conflict = 141 => "CONFLICT",
    Copy = 142 => "COPY",
    Deferred = 143 => "DEFERRED",
    Delimiters = 144 => "DELIMITERS",
    Detach = 145 => "DETACH",
    Each = 146 => "EACH",
    End = 147 => "END",
    Explain = 148 => "EXPLAIN",
    Fail = 149 => "FAIL",
    For = 150 => "FOR",
    Ignore = 151 => "IGNORE",
    Immediate = 152 => "IMMEDIATE",
    Initially = 153 => "INITIALLY",
    Instead = 154 => "INSTEAD",
    Match = 155 => "MATCH",
    Key = 156 => "KEY",
    Of = 157 => "OF",
    Raise = 158 => "RAISE",
    Replace = 159 => "REPLACE",
    Restrict = 160 => "RESTRICT",
    Row = 161 => "ROW",
    Statement = 162 => "STATEMENT",
    Trigger = 163 => "TRIGGER",
    View = 164 => "VIEW",
    All = 165 => "ALL",
    Count = 166 => "COUNT",
    Sum = 167 => "SUM",
    Avg = 168 => "AVG",
    Min = 169 => "MIN",
    Max = 170 => "MAX",
    First = 171 => "FIRST",
    Last = 172 => "LAST",
    Top = 173 => "TOP",
    Bottom = 174 => "BOTTOM",
    Stddev = 175 => "STDDEV",
    Percentile = 176 => "PERCENTILE",
    APercentile = 177 => "APERCENTILE",
    LeastSquares = 178 => "LEASTSQUARES",
    Histogram = 179 => "HISTOGRAM",
    Diff = 180 => "DIFF",
    Spread = 181 => "SPREAD",
    Twa = 182 => "TWA",
    Interp = 183 => "INTERP",
    LastRow = 184 => "LAST_ROW",
    /// `;`. The assembler reports it as a zero-length statement end.
    Semi = 185 => ";",
    /// `NONE` fill mode.
    FillNone = 186 => "NONE",
    Prev = 187 => "PREV",
    Linear = 188 => "LINEAR",
    Import = 189 => "IMPORT",
    Metric = 190 => "METRIC",
    TbName = 191 => "TBNAME",
    Join = 192 => "JOIN",
    Metrics = 193 => "METRICS",
    STable = 194 => "STABLE",

    // === Scanner-only kinds (195-201) ===
    File = 195 => "FILE",
    /// Whitespace run.
    Space = 196 => "whitespace",
    /// `-- line` or `/* block */` comment.
    Comment = 197 => "comment",
    /// Scanner or assembler failure.
    Illegal = 198 => "illegal token",
    /// `0x` literal with at least one hex digit.
    Hex = 199 => "hex literal",
    /// `0b` literal with at least one binary digit.
    Bin = 200 => "binary literal",
    Question = 201 => "?",

    // === Control ===
    Eof = 255 => "end of input",
}

/// Lookup from discriminant to kind.
static FROM_CODE: [Option<TokenKind>; 256] = {
    let mut table = [None; 256];
    let mut i = 0;
    while i < TokenKind::ALL.len() {
        let kind = TokenKind::ALL[i];
        table[kind as usize] = Some(kind);
        i += 1;
    }
    table
};

impl TokenKind {
    /// Number of kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Recover a kind from its grammar code.
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        FROM_CODE[code as usize]
    }

    /// Grammar code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Fixed source text for kinds with exactly one spelling.
    ///
    /// `Eq` (`=`/`==`) and `Ne` (`<>`/`!=`) have two spellings and return
    /// `None`, as do keywords and literal classes.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Gt => Some(">"),
            Self::Ge => Some(">="),
            Self::Lt => Some("<"),
            Self::Le => Some("<="),
            Self::BitAnd => Some("&"),
            Self::BitOr => Some("|"),
            Self::LShift => Some("<<"),
            Self::RShift => Some(">>"),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Rem => Some("%"),
            Self::Concat => Some("||"),
            Self::BitNot => Some("~"),
            Self::Dot => Some("."),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::Comma => Some(","),
            Self::Colon => Some(":"),
            Self::Semi => Some(";"),
            Self::Question => Some("?"),
            _ => None,
        }
    }

    /// Numeric literal kinds: integer, float, hex, binary.
    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Hex | Self::Bin)
    }

    /// Whitespace and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Space | Self::Comment)
    }

    /// Symbolic and word operators.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Or
                | Self::And
                | Self::Not
                | Self::Eq
                | Self::Ne
                | Self::Is
                | Self::Like
                | Self::Glob
                | Self::Between
                | Self::In
                | Self::Gt
                | Self::Ge
                | Self::Lt
                | Self::Le
                | Self::BitAnd
                | Self::BitOr
                | Self::LShift
                | Self::RShift
                | Self::Plus
                | Self::Minus
                | Self::Star
                | Self::Slash
                | Self::Rem
                | Self::Concat
                | Self::BitNot
        )
    }

    /// Kinds that can end an operand.
    ///
    /// A `+` or `-` right after one of these is binary; anywhere else it is
    /// a sign that may attach to the following number.
    pub const fn ends_operand(self) -> bool {
        matches!(
            self,
            Self::Id
                | Self::Bool
                | Self::Integer
                | Self::Float
                | Self::Hex
                | Self::Bin
                | Self::String
                | Self::Variable
                | Self::IpToken
                | Self::RightParen
                | Self::Null
                | Self::Now
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scanner output: a kind and the number of bytes it covers.
///
/// `len == 0` means no token was produced: end of input, or an `Illegal`
/// byte the scanner refuses to step over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub kind: TokenKind,
    pub len: u32,
}

impl RawToken {
    #[inline]
    pub const fn new(kind: TokenKind, len: u32) -> Self {
        Self { kind, len }
    }

    /// Zero-length `Illegal`.
    pub const ILLEGAL: Self = Self::new(TokenKind::Illegal, 0);

    /// Zero-length `Eof`.
    pub const EOF: Self = Self::new(TokenKind::Eof, 0);
}
