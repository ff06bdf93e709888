//! API to control the interpreter.

use std::error::Error;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::diag::ParseError;
use crate::eval::Evaluator;
use crate::lexer::Lexer;
use crate::object::{Env, Object};
use crate::parser::Parser;

/// Tree-walk interpreter whose global environment persists across `eval`
/// calls.
///
/// # Example
///
/// Define a function in one call and use it in later ones:
///
/// ```
/// # use rmonkey::interpreter::{Interpreter, SyntaxErrors};
/// let mut output: Vec<u8> = Vec::new();
/// let mut interp = Interpreter::new(&mut output);
///
/// interp.eval("let newAdder = fn(x) { fn(y) { x + y } };")?;
/// interp.eval("let add2 = newAdder(2);")?;
///
/// let result = interp.eval("add2(3);")?.expect("interpreter produced no value");
/// assert_eq!(result.inspect(), "5");
/// # Ok::<(), SyntaxErrors>(())
/// ```
#[derive(Debug)]
pub struct Interpreter<'t, W: Write> {
    evaluator: Evaluator<'t, W>,
    env: Rc<Env>,
}

impl<W: Write> Interpreter<'_, W> {
    pub fn new(output: &mut W) -> Interpreter<'_, W> {
        Interpreter {
            evaluator: Evaluator::new(output),
            env: Env::new(),
        }
    }

    /// Parses and evaluates one source string in the persistent global
    /// environment.
    ///
    /// Syntax errors come back as `Err` and nothing is evaluated.  Runtime
    /// faults are part of the language and surface as the `ERROR` object in
    /// the `Ok` value.  `Ok(None)` means the input produced nothing
    /// observable (for example it ends in a `let`).
    pub fn eval(&mut self, input: &str) -> Result<Option<Rc<Object>>, SyntaxErrors> {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            return Err(SyntaxErrors(parser.errors().to_vec()));
        }
        Ok(self.evaluator.eval(&program, &self.env))
    }
}

/// The parser diagnostics for one source input, in source order.
#[derive(Debug)]
pub struct SyntaxErrors(Vec<ParseError>);

impl SyntaxErrors {
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl fmt::Display for SyntaxErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl Error for SyntaxErrors {}
