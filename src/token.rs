use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// "Words" produced by `Lexer`.
///
/// A token is a kind plus the source lexeme it was read from.  For the
/// fixed tokens the lexeme is implied by the kind; `Ident`, `Int`, `Str`
/// and `Illegal` carry it as payload.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Illegal(char),
    Eof,

    Ident(String),
    Int(String),
    Str(String),

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// Name of the token kind, as it appears in parser diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Illegal(_) => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Ident(_) => "IDENT",
            Token::Int(_) => "INT",
            Token::Str(_) => "STRING",
            Token::Assign => "ASSIGN",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Bang => "BANG",
            Token::Asterisk => "ASTERISK",
            Token::Slash => "SLASH",
            Token::Lt => "LT",
            Token::Gt => "GT",
            Token::Eq => "EQ",
            Token::NotEq => "NOT_EQ",
            Token::Comma => "COMMA",
            Token::Semicolon => "SEMICOLON",
            Token::Colon => "COLON",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
            Token::LBrace => "LBRACE",
            Token::RBrace => "RBRACE",
            Token::LBracket => "LBRACKET",
            Token::RBracket => "RBRACKET",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Illegal(ch) => write!(f, "{}", ch),
            Token::Eof => Ok(()),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Int(lit) => write!(f, "{}", lit),
            Token::Str(text) => write!(f, "{}", text),
            Token::Assign => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Bang => write!(f, "!"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::Eq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Colon => write!(f, ":"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Function => write!(f, "fn"),
            Token::Let => write!(f, "let"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::Return => write!(f, "return"),
        }
    }
}

const KEYWORDS: [(&str, Token); 7] = [
    ("fn", Token::Function),
    ("let", Token::Let),
    ("true", Token::True),
    ("false", Token::False),
    ("if", Token::If),
    ("else", Token::Else),
    ("return", Token::Return),
];

static KEYWORD_TABLE: Lazy<HashMap<&'static str, Token>> =
    Lazy::new(|| KEYWORDS.iter().cloned().collect());

/// Maps a scanned word to its keyword token, or to `Ident` otherwise.
pub fn lookup_ident(word: &str) -> Token {
    match KEYWORD_TABLE.get(word) {
        Some(token) => token.clone(),
        None => Token::Ident(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_looked_up() {
        assert_eq!(lookup_ident("fn"), Token::Function);
        assert_eq!(lookup_ident("let"), Token::Let);
        assert_eq!(lookup_ident("return"), Token::Return);
    }

    #[test]
    fn non_keywords_become_identifiers() {
        assert_eq!(lookup_ident("foobar"), Token::Ident("foobar".to_string()));
        assert_eq!(lookup_ident("lets"), Token::Ident("lets".to_string()));
    }

    #[test]
    fn display_is_the_lexeme() {
        assert_eq!(Token::NotEq.to_string(), "!=");
        assert_eq!(Token::Function.to_string(), "fn");
        assert_eq!(Token::Ident("x".to_string()).to_string(), "x");
    }
}
