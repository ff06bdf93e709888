//! Diagnostic types shared by the parser and the evaluator.

use std::error::Error;
use std::fmt;
use std::io;

/// Syntax diagnostics accumulated by the parser.
///
/// The parser never bails out; it records one of these per failed
/// expectation and keeps going, so a single run can surface several errors.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// An expectation on the next token failed.
    UnexpectedToken {
        expected: &'static str,
        got: &'static str,
    },
    /// No expression can start with the given token.
    NoPrefixParseFn(&'static str),
    /// Integer literal out of range (or otherwise unparseable).
    BadIntLiteral(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, got } => write!(
                f,
                "expected next token to be {}, got {} instead",
                expected, got
            ),
            ParseError::NoPrefixParseFn(kind) => {
                write!(f, "no prefix parse function found for {} found", kind)
            }
            ParseError::BadIntLiteral(literal) => {
                write!(f, "could not parse \"{}\" as integer", literal)
            }
        }
    }
}

impl Error for ParseError {}

/// Faults raised while evaluating a syntactically valid program.
///
/// These surface to Monkey programs as `ERROR` values; `Display` is the
/// message text behind the `ERROR: ` prefix.
#[derive(Debug)]
pub enum RuntimeError {
    TypeMismatch {
        left: &'static str,
        operator: String,
        right: &'static str,
    },
    UnknownPrefixOperator {
        operator: String,
        right: &'static str,
    },
    UnknownInfixOperator {
        left: &'static str,
        operator: String,
        right: &'static str,
    },
    IdentifierNotFound(String),
    NotAFunction(&'static str),
    WrongNumberOfArguments {
        got: usize,
        want: usize,
    },
    LenNotSupported(&'static str),
    ArrayArgumentRequired {
        builtin: &'static str,
        got: &'static str,
    },
    UnusableAsHashKey(&'static str),
    IndexNotSupported(&'static str),
    DivisionByZero,
    Io(io::Error),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeMismatch {
                left,
                operator,
                right,
            } => write!(f, "type mismatch: {} {} {}", left, operator, right),
            RuntimeError::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {}{}", operator, right)
            }
            RuntimeError::UnknownInfixOperator {
                left,
                operator,
                right,
            } => write!(f, "unknown operator: {} {} {}", left, operator, right),
            RuntimeError::IdentifierNotFound(name) => {
                write!(f, "identifier not found: {}", name)
            }
            RuntimeError::NotAFunction(kind) => write!(f, "not a function: {}", kind),
            RuntimeError::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments. got={}, want={}", got, want)
            }
            RuntimeError::LenNotSupported(kind) => {
                write!(f, "argument to len not supported, got {}", kind)
            }
            RuntimeError::ArrayArgumentRequired { builtin, got } => {
                write!(f, "argument to {} must be an ARRAY, got {}", builtin, got)
            }
            RuntimeError::UnusableAsHashKey(kind) => {
                write!(f, "unusable as hash key: {}", kind)
            }
            RuntimeError::IndexNotSupported(kind) => {
                write!(f, "index operator not supported: {}", kind)
            }
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for RuntimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RuntimeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> RuntimeError {
        RuntimeError::Io(e)
    }
}
