//! Parse-time vocabulary shared with the compiler: AST node categories,
//! reserved keywords, and the operator tokens that rewrite to native calls.

use crate::builtins;

/// Categories of AST nodes produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Symbol,
    Capture,
    FieldAccess,
    Keyword,
    String,
    Number,
    List,
    Closure,
    Macro,
    Spread,
    Unused,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Symbol => "Symbol",
            NodeKind::Capture => "Capture",
            NodeKind::FieldAccess => "FieldAccess",
            NodeKind::Keyword => "Keyword",
            NodeKind::String => "String",
            NodeKind::Number => "Number",
            NodeKind::List => "List",
            NodeKind::Closure => "Closure",
            NodeKind::Macro => "Macro",
            NodeKind::Spread => "Spread",
            NodeKind::Unused => "Unused",
        }
    }
}

/// Reserved words of the language, each bound to exactly one spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Fun,
    Let,
    Mut,
    Set,
    If,
    While,
    Begin,
    Import,
    Quote,
    Del,
}

impl Keyword {
    pub const ALL: [Keyword; 10] = [
        Keyword::Fun,
        Keyword::Let,
        Keyword::Mut,
        Keyword::Set,
        Keyword::If,
        Keyword::While,
        Keyword::Begin,
        Keyword::Import,
        Keyword::Quote,
        Keyword::Del,
    ];

    pub fn spelling(self) -> &'static str {
        match self {
            Keyword::Fun => "fun",
            Keyword::Let => "let",
            Keyword::Mut => "mut",
            Keyword::Set => "set",
            Keyword::If => "if",
            Keyword::While => "while",
            Keyword::Begin => "begin",
            Keyword::Import => "import",
            Keyword::Quote => "quote",
            Keyword::Del => "del",
        }
    }

    pub fn from_spelling(text: &str) -> Option<Keyword> {
        Self::ALL.iter().copied().find(|kw| kw.spelling() == text)
    }
}

pub fn is_keyword(text: &str) -> bool {
    Keyword::from_spelling(text).is_some()
}

/// Operator tokens come straight from the builtin registration table, so
/// the compiler's view of the syntax can never drift from the bridge's
/// registered names.
pub fn operator_tokens() -> impl Iterator<Item = &'static str> {
    builtins::BUILTINS.iter().filter_map(|spec| spec.operator)
}

pub fn is_operator_token(text: &str) -> bool {
    operator_tokens().any(|token| token == text)
}
