//! Abstract syntax tree produced by the parser.
//!
//! Nodes are passive data; `Display` renders the canonical string form that
//! the parser tests use as an oracle.  The canonical form of a parsed
//! program re-parses to the same tree.

use std::fmt;

/// Root node: an ordered sequence of statements.
#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let(String, Expression),
    /// `return <value>;`
    Return(Expression),
    /// An expression in statement position; its value is the statement's
    /// value.
    Expression(Expression),
}

impl Statement {
    /// Literal of the token that introduced the statement.
    pub fn token_literal(&self) -> String {
        match self {
            Statement::Let(..) => "let".to_string(),
            Statement::Return(..) => "return".to_string(),
            Statement::Expression(expr) => expr.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(name, value) => write!(f, "let {} = {};", name, value),
            Statement::Return(value) => write!(f, "return {};", value),
            Statement::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

/// `{ <statements> }` as it appears in if arms and function bodies.
#[derive(Debug, PartialEq, Clone)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    StringLiteral(String),
    Boolean(bool),
    /// Operator and operand: `(!x)`, `(-x)`.
    Prefix(String, Box<Expression>),
    /// Left operand, operator, right operand.
    Infix(Box<Expression>, String, Box<Expression>),
    /// Condition, consequence, optional alternative.
    If(Box<Expression>, BlockStatement, Option<BlockStatement>),
    /// Parameter names and body.
    FunctionLiteral(Vec<String>, BlockStatement),
    /// Callee and arguments.
    Call(Box<Expression>, Vec<Expression>),
    ArrayLiteral(Vec<Expression>),
    /// Indexed target and index.
    Index(Box<Expression>, Box<Expression>),
    /// Key/value pairs in source order; duplicates are kept.
    HashLiteral(Vec<(Expression, Expression)>),
}

impl Expression {
    /// Literal of the token that introduced the expression.
    pub fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(name) => name.clone(),
            Expression::IntegerLiteral(value) => value.to_string(),
            Expression::StringLiteral(text) => text.clone(),
            Expression::Boolean(value) => value.to_string(),
            Expression::Prefix(op, _) => op.clone(),
            Expression::Infix(_, op, _) => op.clone(),
            Expression::If(..) => "if".to_string(),
            Expression::FunctionLiteral(..) => "fn".to_string(),
            Expression::Call(..) => "(".to_string(),
            Expression::ArrayLiteral(..) => "[".to_string(),
            Expression::Index(..) => "[".to_string(),
            Expression::HashLiteral(..) => "{".to_string(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::IntegerLiteral(value) => write!(f, "{}", value),
            Expression::StringLiteral(text) => write!(f, "{}", text),
            Expression::Boolean(value) => write!(f, "{}", value),
            Expression::Prefix(op, right) => write!(f, "({}{})", op, right),
            Expression::Infix(left, op, right) => write!(f, "({} {} {})", left, op, right),
            Expression::If(condition, consequence, alternative) => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral(parameters, body) => {
                write!(f, "fn({}) {}", parameters.join(", "), body)
            }
            Expression::Call(callee, arguments) => {
                write!(f, "{}({})", callee, join(arguments))
            }
            Expression::ArrayLiteral(elements) => write!(f, "[{}]", join(elements)),
            Expression::Index(target, index) => write!(f, "({}[{}])", target, index),
            Expression::HashLiteral(pairs) => {
                let rendered = pairs
                    .iter()
                    .map(|(key, value)| format!("{}:{}", key, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", rendered)
            }
        }
    }
}

fn join(expressions: &[Expression]) -> String {
    expressions
        .iter()
        .map(Expression::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
