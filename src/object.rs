//! Runtime values and the environment chain they live in.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::rc::Rc;

use crate::ast::BlockStatement;
use crate::diag::RuntimeError;

/// A built-in function.  The writer is the evaluator's output sink; `puts`
/// is the only built-in that uses it.
pub type BuiltinFn = fn(&mut dyn io::Write, &[Rc<Object>]) -> Result<Rc<Object>, RuntimeError>;

/// A Monkey runtime value.
///
/// Values are shared by `Rc`; the `==`/`!=` fallback in the evaluator
/// compares `Rc` identity, which is why `true`, `false` and `null` must be
/// the shared instances from [`boolean`] and [`null`].
#[derive(Debug)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Str(String),
    Null,
    /// Wrapper carrying a `return` result out of nested blocks; unwrapped at
    /// the program and function-call boundaries.
    ReturnValue(Rc<Object>),
    Error(String),
    /// Parameter names, body and the environment captured at the definition
    /// site (lexical closure).
    Function(Vec<String>, BlockStatement, Rc<Env>),
    Builtin(BuiltinFn),
    Array(Vec<Rc<Object>>),
    Hash(HashMap<HashKey, HashPair>),
}

impl Object {
    /// Type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Str(_) => "STRING",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function(..) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
        }
    }

    /// The display form, as printed by the REPL and by `puts`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Derives the hash key of a hashable value.  Only integers, booleans
    /// and strings are hashable.
    pub fn hash_key(&self) -> Result<HashKey, RuntimeError> {
        let value = match self {
            Object::Integer(n) => *n as u64,
            Object::Boolean(b) => *b as u64,
            Object::Str(s) => fnv1a_64(s.as_bytes()),
            other => return Err(RuntimeError::UnusableAsHashKey(other.type_name())),
        };
        Ok(HashKey {
            kind: self.type_name(),
            value,
        })
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{}", n),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Str(s) => write!(f, "{}", s),
            Object::Null => write!(f, "null"),
            Object::ReturnValue(inner) => write!(f, "{}", inner),
            Object::Error(message) => write!(f, "ERROR: {}", message),
            Object::Function(parameters, body, _) => {
                write!(f, "fn({}) {{\n{}\n}}", parameters.join(", "), body)
            }
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::Array(elements) => {
                let rendered = elements
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", rendered)
            }
            Object::Hash(pairs) => {
                let rendered = pairs
                    .values()
                    .map(|pair| format!("{}:{}", pair.key, pair.value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", rendered)
            }
        }
    }
}

/// Internal key of a Monkey hash: the value's type tag plus a 64-bit digest.
///
/// Equal hashable values map to equal keys regardless of object identity.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct HashKey {
    kind: &'static str,
    value: u64,
}

/// One hash entry, keeping the original key object next to the value so the
/// display form can show it.
#[derive(Debug)]
pub struct HashPair {
    pub key: Rc<Object>,
    pub value: Rc<Object>,
}

const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
const FNV_PRIME: u64 = 1099511628211;

/// 64-bit FNV-1a over raw bytes.  Written out rather than pulled in so the
/// constants stay pinned for cross-implementation comparisons.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

thread_local! {
    static TRUE: Rc<Object> = Rc::new(Object::Boolean(true));
    static FALSE: Rc<Object> = Rc::new(Object::Boolean(false));
    static NULL: Rc<Object> = Rc::new(Object::Null);
}

/// The shared `true`/`false` instance, so that identity comparison
/// coincides with value comparison for booleans.
pub fn boolean(value: bool) -> Rc<Object> {
    if value {
        TRUE.with(Rc::clone)
    } else {
        FALSE.with(Rc::clone)
    }
}

/// The shared `null` instance.
pub fn null() -> Rc<Object> {
    NULL.with(Rc::clone)
}

/// One scope frame: local bindings plus an optional enclosing frame.
///
/// Lookup walks outward; writes always land in the local frame.  Function
/// application creates a frame enclosed by the callee's captured
/// environment, and closures keep their frame alive for as long as they are
/// reachable.
#[derive(Debug)]
pub struct Env {
    outer: Option<Rc<Env>>,
    bindings: RefCell<HashMap<String, Rc<Object>>>,
}

impl Env {
    /// Creates a global frame.
    pub fn new() -> Rc<Env> {
        Rc::new(Env {
            outer: None,
            bindings: RefCell::new(HashMap::new()),
        })
    }

    /// Creates a frame whose lookups fall back to `outer`.
    pub fn enclosed(outer: &Rc<Env>) -> Rc<Env> {
        Rc::new(Env {
            outer: Some(outer.clone()),
            bindings: RefCell::new(HashMap::new()),
        })
    }

    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        match self.bindings.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` locally, shadowing any outer binding and overwriting any
    /// previous local one.
    pub fn set(&self, name: &str, value: Rc<Object>) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }
}
