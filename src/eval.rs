//! Tree-walking evaluator.
//!
//! Faults travel internally as `Result<_, RuntimeError>`, which gives the
//! short-circuit behavior the language wants: the first error aborts every
//! enclosing evaluation.  The public entry point turns an `Err` into the
//! language-level `ERROR` value.

use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::diag::RuntimeError;
use crate::object::{self, BuiltinFn, Env, HashPair, Object};

/// Walks an AST against an environment chain.  `puts` writes to `output`.
#[derive(Debug)]
pub struct Evaluator<'a, W: Write> {
    output: &'a mut W,
}

impl<'a, W: Write> Evaluator<'a, W> {
    pub fn new(output: &'a mut W) -> Evaluator<'a, W> {
        Evaluator { output }
    }

    /// Evaluates a parsed program in `env`.
    ///
    /// Runtime faults come back as the language's `ERROR` value.  `None`
    /// means the program produced nothing observable (for example it ends
    /// in a `let`), which the REPL renders as silence.
    pub fn eval(&mut self, program: &Program, env: &Rc<Env>) -> Option<Rc<Object>> {
        match self.eval_program(program, env) {
            Ok(result) => result,
            Err(e) => Some(Rc::new(Object::Error(e.to_string()))),
        }
    }

    /// Statements run in order; a `ReturnValue` ends the program early and
    /// is unwrapped here.
    fn eval_program(
        &mut self,
        program: &Program,
        env: &Rc<Env>,
    ) -> Result<Option<Rc<Object>>, RuntimeError> {
        let mut result = None;
        for stmt in &program.statements {
            result = self.eval_statement(stmt, env)?;
            if let Some(Object::ReturnValue(inner)) = result.as_deref() {
                return Ok(Some(inner.clone()));
            }
        }
        Ok(result)
    }

    fn eval_statement(
        &mut self,
        stmt: &Statement,
        env: &Rc<Env>,
    ) -> Result<Option<Rc<Object>>, RuntimeError> {
        match stmt {
            Statement::Let(name, value) => {
                let value = self.eval_expression(value, env)?;
                env.set(name, value);
                Ok(None)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value, env)?;
                Ok(Some(Rc::new(Object::ReturnValue(value))))
            }
            Statement::Expression(expression) => {
                Ok(Some(self.eval_expression(expression, env)?))
            }
        }
    }

    /// Unlike the program, a block returns a `ReturnValue` without
    /// unwrapping it, so that `return` escapes nested blocks up to the
    /// enclosing function or program boundary.
    fn eval_block(
        &mut self,
        block: &BlockStatement,
        env: &Rc<Env>,
    ) -> Result<Option<Rc<Object>>, RuntimeError> {
        let mut result = None;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
            if matches!(result.as_deref(), Some(Object::ReturnValue(_))) {
                return Ok(result);
            }
        }
        Ok(result)
    }

    fn eval_expression(
        &mut self,
        expression: &Expression,
        env: &Rc<Env>,
    ) -> Result<Rc<Object>, RuntimeError> {
        match expression {
            Expression::IntegerLiteral(value) => Ok(Rc::new(Object::Integer(*value))),
            Expression::StringLiteral(text) => Ok(Rc::new(Object::Str(text.clone()))),
            Expression::Boolean(value) => Ok(object::boolean(*value)),
            Expression::Identifier(name) => eval_identifier(name, env),
            Expression::Prefix(operator, right) => {
                let right = self.eval_expression(right, env)?;
                eval_prefix_expression(operator, right)
            }
            Expression::Infix(left, operator, right) => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                eval_infix_expression(operator, left, right)
            }
            Expression::If(condition, consequence, alternative) => {
                let condition = self.eval_expression(condition, env)?;
                if is_truthy(&condition) {
                    let result = self.eval_block(consequence, env)?;
                    Ok(result.unwrap_or_else(object::null))
                } else if let Some(alternative) = alternative {
                    let result = self.eval_block(alternative, env)?;
                    Ok(result.unwrap_or_else(object::null))
                } else {
                    Ok(object::null())
                }
            }
            Expression::FunctionLiteral(parameters, body) => Ok(Rc::new(Object::Function(
                parameters.clone(),
                body.clone(),
                env.clone(),
            ))),
            Expression::Call(callee, arguments) => {
                let callee = self.eval_expression(callee, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(callee, arguments)
            }
            Expression::ArrayLiteral(elements) => {
                let elements = self.eval_expressions(elements, env)?;
                Ok(Rc::new(Object::Array(elements)))
            }
            Expression::Index(target, index) => {
                let target = self.eval_expression(target, env)?;
                let index = self.eval_expression(index, env)?;
                eval_index_expression(target, index)
            }
            Expression::HashLiteral(pairs) => self.eval_hash_literal(pairs, env),
        }
    }

    /// Left to right, aborting at the first fault.
    fn eval_expressions(
        &mut self,
        expressions: &[Expression],
        env: &Rc<Env>,
    ) -> Result<Vec<Rc<Object>>, RuntimeError> {
        expressions
            .iter()
            .map(|e| self.eval_expression(e, env))
            .collect()
    }

    fn eval_hash_literal(
        &mut self,
        pairs: &[(Expression, Expression)],
        env: &Rc<Env>,
    ) -> Result<Rc<Object>, RuntimeError> {
        let mut map = HashMap::new();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = key.hash_key()?;
            let value = self.eval_expression(value_expr, env)?;
            // Later pairs overwrite earlier ones.
            map.insert(hash_key, HashPair { key, value });
        }
        Ok(Rc::new(Object::Hash(map)))
    }

    fn apply_function(
        &mut self,
        callee: Rc<Object>,
        arguments: Vec<Rc<Object>>,
    ) -> Result<Rc<Object>, RuntimeError> {
        match &*callee {
            Object::Function(parameters, body, captured) => {
                if arguments.len() != parameters.len() {
                    return Err(RuntimeError::WrongNumberOfArguments {
                        got: arguments.len(),
                        want: parameters.len(),
                    });
                }
                // The call frame encloses the *captured* environment, not
                // the caller's: lexical scoping.
                let call_env = Env::enclosed(captured);
                for (parameter, argument) in parameters.iter().zip(arguments) {
                    call_env.set(parameter, argument);
                }
                let result = self.eval_block(body, &call_env)?;
                Ok(unwrap_return_value(result))
            }
            Object::Builtin(f) => f(&mut *self.output, &arguments),
            other => Err(RuntimeError::NotAFunction(other.type_name())),
        }
    }
}

fn eval_identifier(name: &str, env: &Rc<Env>) -> Result<Rc<Object>, RuntimeError> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(f) = builtin(name) {
        return Ok(Rc::new(Object::Builtin(f)));
    }
    Err(RuntimeError::IdentifierNotFound(name.to_string()))
}

fn eval_prefix_expression(
    operator: &str,
    right: Rc<Object>,
) -> Result<Rc<Object>, RuntimeError> {
    match operator {
        "!" => Ok(eval_bang_expression(&right)),
        "-" => match &*right {
            Object::Integer(n) => Ok(Rc::new(Object::Integer(n.wrapping_neg()))),
            other => Err(RuntimeError::UnknownPrefixOperator {
                operator: operator.to_string(),
                right: other.type_name(),
            }),
        },
        _ => Err(RuntimeError::UnknownPrefixOperator {
            operator: operator.to_string(),
            right: right.type_name(),
        }),
    }
}

/// `!` negates truthiness: only `false` and `null` are falsy, so `!0` is
/// `false`.
fn eval_bang_expression(right: &Object) -> Rc<Object> {
    match right {
        Object::Boolean(b) => object::boolean(!b),
        Object::Null => object::boolean(true),
        _ => object::boolean(false),
    }
}

fn eval_infix_expression(
    operator: &str,
    left: Rc<Object>,
    right: Rc<Object>,
) -> Result<Rc<Object>, RuntimeError> {
    match (&*left, &*right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r)
        }
        // With a non-integer operand, equality falls back to object
        // identity.  Correct for the boolean and null singletons; distinct
        // string/array/hash instances compare unequal.
        _ if operator == "==" => Ok(object::boolean(Rc::ptr_eq(&left, &right))),
        _ if operator == "!=" => Ok(object::boolean(!Rc::ptr_eq(&left, &right))),
        (l, r) if l.type_name() != r.type_name() => Err(RuntimeError::TypeMismatch {
            left: l.type_name(),
            operator: operator.to_string(),
            right: r.type_name(),
        }),
        (Object::Str(l), Object::Str(r)) => eval_string_infix_expression(operator, l, r),
        (l, r) => Err(RuntimeError::UnknownInfixOperator {
            left: l.type_name(),
            operator: operator.to_string(),
            right: r.type_name(),
        }),
    }
}

fn eval_integer_infix_expression(
    operator: &str,
    left: i64,
    right: i64,
) -> Result<Rc<Object>, RuntimeError> {
    match operator {
        "+" => Ok(Rc::new(Object::Integer(left.wrapping_add(right)))),
        "-" => Ok(Rc::new(Object::Integer(left.wrapping_sub(right)))),
        "*" => Ok(Rc::new(Object::Integer(left.wrapping_mul(right)))),
        "/" => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                // wrapping: i64::MIN / -1 must not trap the host.
                Ok(Rc::new(Object::Integer(left.wrapping_div(right))))
            }
        }
        "<" => Ok(object::boolean(left < right)),
        ">" => Ok(object::boolean(left > right)),
        "==" => Ok(object::boolean(left == right)),
        "!=" => Ok(object::boolean(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: "INTEGER",
            operator: operator.to_string(),
            right: "INTEGER",
        }),
    }
}

fn eval_string_infix_expression(
    operator: &str,
    left: &str,
    right: &str,
) -> Result<Rc<Object>, RuntimeError> {
    if operator != "+" {
        return Err(RuntimeError::UnknownInfixOperator {
            left: "STRING",
            operator: operator.to_string(),
            right: "STRING",
        });
    }
    Ok(Rc::new(Object::Str(format!("{}{}", left, right))))
}

fn eval_index_expression(
    target: Rc<Object>,
    index: Rc<Object>,
) -> Result<Rc<Object>, RuntimeError> {
    match (&*target, &*index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Ok(object::null())
            } else {
                Ok(elements[*i as usize].clone())
            }
        }
        (Object::Hash(pairs), key) => {
            let hash_key = key.hash_key()?;
            Ok(pairs
                .get(&hash_key)
                .map(|pair| pair.value.clone())
                .unwrap_or_else(object::null))
        }
        (other, _) => Err(RuntimeError::IndexNotSupported(other.type_name())),
    }
}

fn is_truthy(condition: &Object) -> bool {
    match condition {
        Object::Null => false,
        Object::Boolean(b) => *b,
        _ => true,
    }
}

fn unwrap_return_value(result: Option<Rc<Object>>) -> Rc<Object> {
    match result {
        Some(obj) => match &*obj {
            Object::ReturnValue(inner) => inner.clone(),
            _ => obj.clone(),
        },
        None => object::null(),
    }
}

/// Built-in lookup.  Consulted after the environment chain misses, so user
/// bindings may shadow built-ins.
fn builtin(name: &str) -> Option<BuiltinFn> {
    match name {
        "len" => Some(builtin_len),
        "first" => Some(builtin_first),
        "last" => Some(builtin_last),
        "rest" => Some(builtin_rest),
        "push" => Some(builtin_push),
        "puts" => Some(builtin_puts),
        _ => None,
    }
}

fn builtin_len(_out: &mut dyn io::Write, args: &[Rc<Object>]) -> Result<Rc<Object>, RuntimeError> {
    if args.len() != 1 {
        return Err(RuntimeError::WrongNumberOfArguments {
            got: args.len(),
            want: 1,
        });
    }
    match &*args[0] {
        Object::Str(s) => Ok(Rc::new(Object::Integer(s.len() as i64))),
        Object::Array(elements) => Ok(Rc::new(Object::Integer(elements.len() as i64))),
        other => Err(RuntimeError::LenNotSupported(other.type_name())),
    }
}

fn builtin_first(
    _out: &mut dyn io::Write,
    args: &[Rc<Object>],
) -> Result<Rc<Object>, RuntimeError> {
    let elements = array_argument("first", args)?;
    Ok(elements.first().cloned().unwrap_or_else(object::null))
}

fn builtin_last(
    _out: &mut dyn io::Write,
    args: &[Rc<Object>],
) -> Result<Rc<Object>, RuntimeError> {
    let elements = array_argument("last", args)?;
    Ok(elements.last().cloned().unwrap_or_else(object::null))
}

/// All but the first element, as a fresh array; the argument is untouched.
fn builtin_rest(
    _out: &mut dyn io::Write,
    args: &[Rc<Object>],
) -> Result<Rc<Object>, RuntimeError> {
    let elements = array_argument("rest", args)?;
    if elements.is_empty() {
        Ok(object::null())
    } else {
        Ok(Rc::new(Object::Array(elements[1..].to_vec())))
    }
}

/// A fresh array with the value appended; the argument is untouched.
fn builtin_push(
    _out: &mut dyn io::Write,
    args: &[Rc<Object>],
) -> Result<Rc<Object>, RuntimeError> {
    if args.len() != 2 {
        return Err(RuntimeError::WrongNumberOfArguments {
            got: args.len(),
            want: 2,
        });
    }
    match &*args[0] {
        Object::Array(elements) => {
            let mut elements = elements.clone();
            elements.push(args[1].clone());
            Ok(Rc::new(Object::Array(elements)))
        }
        other => Err(RuntimeError::ArrayArgumentRequired {
            builtin: "push",
            got: other.type_name(),
        }),
    }
}

fn builtin_puts(out: &mut dyn io::Write, args: &[Rc<Object>]) -> Result<Rc<Object>, RuntimeError> {
    for arg in args {
        writeln!(out, "{}", arg)?;
    }
    Ok(object::null())
}

fn array_argument<'b>(
    builtin: &'static str,
    args: &'b [Rc<Object>],
) -> Result<&'b [Rc<Object>], RuntimeError> {
    if args.len() != 1 {
        return Err(RuntimeError::WrongNumberOfArguments {
            got: args.len(),
            want: 1,
        });
    }
    match &*args[0] {
        Object::Array(elements) => Ok(elements),
        other => Err(RuntimeError::ArrayArgumentRequired {
            builtin,
            got: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn run_with_output(input: &str) -> (Option<Rc<Object>>, String) {
        let mut output: Vec<u8> = Vec::new();
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parser errors for {:?}: {:?}",
            input,
            parser.errors()
        );
        let env = Env::new();
        let result = Evaluator::new(&mut output).eval(&program, &env);
        let output = String::from_utf8(output).expect("output is not UTF-8");
        (result, output)
    }

    fn run(input: &str) -> Option<Rc<Object>> {
        run_with_output(input).0
    }

    fn inspect(input: &str) -> String {
        match run(input) {
            Some(obj) => obj.inspect(),
            None => panic!("{:?} produced no value", input),
        }
    }

    #[test]
    fn integer_expressions() {
        let tests = vec![
            ("5", "5"),
            ("10", "10"),
            ("-5", "-5"),
            ("-10", "-10"),
            ("5 + 5 + 5 + 5 - 10", "10"),
            ("2 * 2 * 2 * 2 * 2", "32"),
            ("-50 + 100 + -50", "0"),
            ("5 * 2 + 10", "20"),
            ("5 + 2 * 10", "25"),
            ("5 + 5 * 2", "15"),
            ("20 + 2 * -10", "0"),
            ("50 / 2 * 2 + 10", "60"),
            ("2 * (5 + 10)", "30"),
            ("3 * 3 * 3 + 10", "37"),
            ("3 * (3 * 3) + 10", "37"),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50"),
            ("7 / 2", "3"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(
            inspect("9223372036854775807 + 1"),
            "-9223372036854775808"
        );
    }

    #[test]
    fn boolean_expressions() {
        let tests = vec![
            ("true", "true"),
            ("false", "false"),
            ("1 < 2", "true"),
            ("1 > 2", "false"),
            ("1 < 1", "false"),
            ("1 > 1", "false"),
            ("1 == 1", "true"),
            ("1 != 1", "false"),
            ("1 == 2", "false"),
            ("1 != 2", "true"),
            ("true == true", "true"),
            ("false == false", "true"),
            ("true == false", "false"),
            ("true != false", "true"),
            ("false != true", "true"),
            ("(1 < 2) == true", "true"),
            ("(1 < 2) == false", "false"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn bang_operator() {
        let tests = vec![
            ("!true", "false"),
            ("!false", "true"),
            ("!5", "false"),
            ("!0", "false"),
            ("!!true", "true"),
            ("!!false", "false"),
            ("!!5", "true"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn if_else_expressions() {
        let tests = vec![
            ("if (true) { 10 }", "10"),
            ("if (false) { 10 }", "null"),
            ("if (1) { 10 }", "10"),
            ("if (0) { 10 }", "10"),
            ("if (1 < 2) { 10 }", "10"),
            ("if (1 > 2) { 10 }", "null"),
            ("if (1 > 2) { 10 } else { 20 }", "20"),
            ("if (1 < 2) { 10 } else { 20 }", "10"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn return_statements() {
        let tests = vec![
            ("return 10;", "10"),
            ("return 10; 9;", "10"),
            ("return 2 * 5; 9;", "10"),
            ("9; return 2 * 5; 9;", "10"),
            (
                // `return` escapes both nested blocks.
                "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
                "10",
            ),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn error_handling() {
        let tests = vec![
            ("5 + true;", "ERROR: type mismatch: INTEGER + BOOLEAN"),
            ("5 + true; 5;", "ERROR: type mismatch: INTEGER + BOOLEAN"),
            ("-true", "ERROR: unknown operator: -BOOLEAN"),
            ("true + false;", "ERROR: unknown operator: BOOLEAN + BOOLEAN"),
            (
                "5; true + false; 5",
                "ERROR: unknown operator: BOOLEAN + BOOLEAN",
            ),
            (
                "if (10 > 1) { true + false; }",
                "ERROR: unknown operator: BOOLEAN + BOOLEAN",
            ),
            (
                "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                "ERROR: unknown operator: BOOLEAN + BOOLEAN",
            ),
            ("foobar", "ERROR: identifier not found: foobar"),
            (
                "\"Hello\" - \"World\"",
                "ERROR: unknown operator: STRING - STRING",
            ),
            (
                "{\"name\": \"Monkey\"}[fn(x) { x }];",
                "ERROR: unusable as hash key: FUNCTION",
            ),
            ("{[1]: 2}", "ERROR: unusable as hash key: ARRAY"),
            ("[1, 2, 3][\"zero\"]", "ERROR: index operator not supported: ARRAY"),
            ("5[0]", "ERROR: index operator not supported: INTEGER"),
            ("5 / 0", "ERROR: division by zero"),
            ("5(1)", "ERROR: not a function: INTEGER"),
            (
                "fn(x) { x }(1, 2)",
                "ERROR: wrong number of arguments. got=2, want=1",
            ),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn errors_abort_sibling_evaluation() {
        let (result, output) = run_with_output("puts(1); foobar + puts(2); puts(3);");
        assert_eq!(
            result.unwrap().inspect(),
            "ERROR: identifier not found: foobar"
        );
        // Only the statement before the fault printed; the right operand
        // and the following statement never ran.
        assert_eq!(output, "1\n");
    }

    #[test]
    fn let_statements() {
        let tests = vec![
            ("let a = 5; a;", "5"),
            ("let a = 5 * 5; a;", "25"),
            ("let a = 5; let b = a; b;", "5"),
            ("let a = 5; let b = a; let c = a + b + 5; c;", "15"),
            ("let x = 5; let y = 10; x + y;", "15"),
            // Rebinding in the same frame is the one observable mutation.
            ("let a = 1; let a = a + 1; a;", "2"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn let_produces_no_value() {
        assert!(run("let a = 5;").is_none());
    }

    #[test]
    fn empty_program_produces_no_value() {
        assert!(run("").is_none());
    }

    #[test]
    fn function_object_inspect() {
        assert_eq!(inspect("fn(x) { x + 2; };"), "fn(x) {\n(x + 2)\n}");
    }

    #[test]
    fn function_application() {
        let tests = vec![
            ("let identity = fn(x) { x; }; identity(5);", "5"),
            ("let identity = fn(x) { return x; }; identity(5);", "5"),
            ("let double = fn(x) { x * 2; }; double(5);", "10"),
            ("let add = fn(x, y) { x + y; }; add(5, 5);", "10"),
            (
                "let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));",
                "20",
            ),
            ("fn(x) { x; }(5)", "5"),
            ("fn() { 3; }()", "3"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn empty_function_body_returns_null() {
        assert_eq!(inspect("fn() {}()"), "null");
    }

    #[test]
    fn closures() {
        let tests = vec![
            (
                "let newAdder = fn(x) { fn(y) { x + y } };\
                 let add2 = newAdder(2);\
                 add2(3);",
                "5",
            ),
            (
                // The parameter of the outer call stays captured even after
                // the outer call has returned.
                "let newAdder = fn(x) { fn(y) { x + y } };\
                 let add10 = newAdder(10);\
                 let x = 0;\
                 add10(5);",
                "15",
            ),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn scoping_is_lexical() {
        let input = "
            let first = 10;
            let second = 10;
            let third = 10;
            let ourFunction = fn(first) {
                let second = 20;
                first + second + third;
            };
            ourFunction(20) + first + second;
        ";
        assert_eq!(inspect(input), "70");
    }

    #[test]
    fn string_literals_and_concatenation() {
        assert_eq!(inspect("\"Hello World!\""), "Hello World!");
        assert_eq!(inspect("\"Hello\" + \" \" + \"World\""), "Hello World");
    }

    #[test]
    fn string_equality_is_identity() {
        // Two distinct string instances, even with equal contents.
        assert_eq!(inspect("\"a\" == \"a\""), "false");
        assert_eq!(inspect("\"a\" != \"a\""), "true");
        // One shared instance.
        assert_eq!(inspect("let s = \"a\"; s == s"), "true");
    }

    #[test]
    fn array_literals() {
        assert_eq!(inspect("[1, 2 * 2, 3 + 3]"), "[1, 4, 6]");
        assert_eq!(inspect("[]"), "[]");
    }

    #[test]
    fn array_index_expressions() {
        let tests = vec![
            ("[1, 2, 3][0]", "1"),
            ("[1, 2, 3][1]", "2"),
            ("[1, 2, 3][2]", "3"),
            ("let i = 0; [1][i];", "1"),
            ("[1, 2, 3][1 + 1];", "3"),
            ("let myArray = [1, 2, 3]; myArray[2];", "3"),
            (
                "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
                "6",
            ),
            ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", "2"),
            ("[1, 2, 3][3]", "null"),
            ("[1, 2, 3][-1]", "null"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn builtin_len_function() {
        let tests = vec![
            ("len(\"\")", "0"),
            ("len(\"four\")", "4"),
            ("len(\"hello world\")", "11"),
            ("len([1, 2, 3])", "3"),
            ("len([])", "0"),
            ("len(1)", "ERROR: argument to len not supported, got INTEGER"),
            (
                "len(\"one\", \"two\")",
                "ERROR: wrong number of arguments. got=2, want=1",
            ),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn builtin_array_functions() {
        let tests = vec![
            ("first([1, 2, 3])", "1"),
            ("first([])", "null"),
            (
                "first(1)",
                "ERROR: argument to first must be an ARRAY, got INTEGER",
            ),
            ("last([1, 2, 3])", "3"),
            ("last([])", "null"),
            ("rest([1, 2, 3])", "[2, 3]"),
            ("rest([1])", "[]"),
            ("rest([])", "null"),
            ("push([], 1)", "[1]"),
            ("push([1], 2)", "[1, 2]"),
            (
                "push(1, 1)",
                "ERROR: argument to push must be an ARRAY, got INTEGER",
            ),
            (
                "push([1])",
                "ERROR: wrong number of arguments. got=1, want=2",
            ),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn push_and_rest_do_not_mutate() {
        assert_eq!(
            inspect("let a = [1, 2, 3]; let b = push(a, 4); len(a) + len(b)"),
            "7"
        );
        assert_eq!(inspect("let a = [1, 2]; rest(a); a;"), "[1, 2]");
    }

    #[test]
    fn builtins_can_be_shadowed() {
        assert_eq!(inspect("let len = 5; len;"), "5");
    }

    #[test]
    fn hash_literals() {
        let input = "
            let two = \"two\";
            {
                \"one\": 10 - 9,
                two: 1 + 1,
                \"thr\" + \"ee\": 6 / 2,
                4: 4,
                true: 5,
                false: 6
            }
        ";
        let result = run(input).expect("program produced no value");
        let pairs = match &*result {
            Object::Hash(pairs) => pairs,
            other => panic!("unexpected output: {:?}", other),
        };
        assert_eq!(pairs.len(), 6);

        let expected = vec![
            (Object::Str("one".to_string()), "1"),
            (Object::Str("two".to_string()), "2"),
            (Object::Str("three".to_string()), "3"),
            (Object::Integer(4), "4"),
            (Object::Boolean(true), "5"),
            (Object::Boolean(false), "6"),
        ];
        for (key, value) in expected {
            let hash_key = key.hash_key().expect("key is not hashable");
            let pair = pairs.get(&hash_key).expect("missing hash entry");
            assert_eq!(pair.value.inspect(), value);
        }
    }

    #[test]
    fn hash_index_expressions() {
        let tests = vec![
            ("{\"foo\": 5}[\"foo\"]", "5"),
            ("{\"foo\": 5}[\"bar\"]", "null"),
            ("let key = \"foo\"; {\"foo\": 5}[key]", "5"),
            ("{}[\"foo\"]", "null"),
            ("{5: 5}[5]", "5"),
            ("{true: 5}[true]", "5"),
            ("{false: 5}[false]", "5"),
            // Later duplicate keys win.
            ("{\"x\": 1, \"x\": 2}[\"x\"]", "2"),
        ];
        for (input, expected) in tests {
            assert_eq!(inspect(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn puts_writes_inspect_forms() {
        let (result, output) = run_with_output("puts(\"hello\", 1 + 2, true)");
        assert_eq!(result.unwrap().inspect(), "null");
        assert_eq!(output, "hello\n3\ntrue\n");
    }

    #[test]
    fn puts_without_arguments_prints_nothing() {
        let (result, output) = run_with_output("puts()");
        assert_eq!(result.unwrap().inspect(), "null");
        assert_eq!(output, "");
    }
}
