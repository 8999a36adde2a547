use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("print", TokenKind::Print);
        map.insert("int", TokenKind::IntType);
        map.insert("float", TokenKind::FloatType);
        map.insert("char", TokenKind::CharType);
        map.insert("string", TokenKind::StringType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("program", TokenKind::Program);
        map.insert("true", TokenKind::BoolConst);
        map.insert("false", TokenKind::BoolConst);
        map
    };
}

// Variant order is load-bearing: the reserved words must stay first so
// `is_keyword` can check the sub-range.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    If,
    Else,
    Print,
    IntType,
    FloatType,
    CharType,
    StringType,
    BoolType,
    Program,

    Identifier,

    IntConst,
    RealConst,
    StringConst,
    CharConst,
    BoolConst,

    Plus,
    Dash,
    Star,
    Slash,
    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,

    Greater,
    Less,
    And,
    Or,
    Not,

    Percent,

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Dot,

    Error,
    EOF,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        *self <= TokenKind::Program
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::IntConst | TokenKind::RealConst | TokenKind::BoolConst => {
                write!(f, "{}: ({})", self.kind, self.lexeme)
            }
            TokenKind::Identifier => write!(f, "{}: <{}>", self.kind, self.lexeme),
            TokenKind::StringConst => write!(f, "{}: \"{}\"", self.kind, self.lexeme),
            TokenKind::CharConst => write!(f, "{}: '{}'", self.kind, self.lexeme),
            TokenKind::Error => write!(
                f,
                "{}: In line {}, Error Message {{{}}}",
                self.kind, self.line, self.lexeme
            ),
            _ => write!(f, "{}", self.kind),
        }
    }
}
