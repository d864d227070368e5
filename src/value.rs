use std::{any::Any, fmt, rc::Rc};

use crate::fault::{Fault, Result};

/// A single runtime datum. Every piece of data the interpreter evaluates,
/// every native-call argument, and every native-call result is one of these.
///
/// `Str` and `List` own their storage directly, so cloning a `Value` yields
/// a fully independent copy: mutating the clone is never visible through
/// the original, and vice versa.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<Value>),
    Native(NativeFunction),
    Closure(ClosureRef),
}

impl Value {
    pub const NIL: Value = Value::Nil;
    pub const TRUE: Value = Value::Bool(true);
    pub const FALSE: Value = Value::Bool(false);

    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    pub fn list(values: Vec<Value>) -> Self {
        Value::List(values)
    }

    pub fn from_bool(value: bool) -> Self {
        if value { Value::TRUE } else { Value::FALSE }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::Str(_) => "String",
            Value::List(_) => "List",
            Value::Native(_) => "NativeFunction",
            Value::Closure(_) => "Closure",
        }
    }

    pub fn as_number(&self, name: &str) -> Result<f64> {
        match self {
            Value::Number(value) => Ok(*value),
            _ => Err(Fault::Type(format!(
                "`{name}` expected Number but found {}",
                self.type_name()
            ))),
        }
    }

    pub fn as_text(&self, name: &str) -> Result<&str> {
        match self {
            Value::Str(text) => Ok(text),
            _ => Err(Fault::Type(format!(
                "`{name}` expected String but found {}",
                self.type_name()
            ))),
        }
    }

    pub fn as_list(&self, name: &str) -> Result<&[Value]> {
        match self {
            Value::List(items) => Ok(items),
            _ => Err(Fault::Type(format!(
                "`{name}` expected List but found {}",
                self.type_name()
            ))),
        }
    }

    /// Appends one element to a `List` value.
    pub fn list_push(&mut self, item: Value, name: &str) -> Result<()> {
        self.storage_mut(name)?.push(item);
        Ok(())
    }

    /// Removes the first element of a `List` value.
    pub fn list_drop_first(&mut self, name: &str) -> Result<()> {
        let items = self.storage_mut(name)?;
        if items.is_empty() {
            return Err(Fault::Index(format!("`{name}` on an empty list")));
        }
        items.remove(0);
        Ok(())
    }

    /// Removes the last element of a `List` value.
    pub fn list_drop_last(&mut self, name: &str) -> Result<()> {
        let items = self.storage_mut(name)?;
        if items.pop().is_none() {
            return Err(Fault::Index(format!("`{name}` on an empty list")));
        }
        Ok(())
    }

    /// Zero-indexed element lookup on a `List` value.
    pub fn list_get(&self, index: usize, name: &str) -> Result<&Value> {
        let items = self.as_list(name)?;
        items.get(index).ok_or_else(|| {
            Fault::Index(format!(
                "`{name}` index {index} out of range for list of length {}",
                items.len()
            ))
        })
    }

    // Mutation goes through the owning value only; the backing vector is
    // never handed out.
    fn storage_mut(&mut self, name: &str) -> Result<&mut Vec<Value>> {
        match self {
            Value::List(items) => Ok(items),
            _ => Err(Fault::Type(format!(
                "`{name}` expected List but found {}",
                self.type_name()
            ))),
        }
    }
}

/// Equality is by variant and payload: any `Nil` equals any other `Nil`,
/// numbers compare with IEEE-754 semantics (`NaN != NaN`), lists compare
/// elementwise, native functions by registered name, and closures by
/// handle identity.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => a.name == b.name,
            (Value::Closure(a), Value::Closure(b)) => a.same(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Native(fun) => write!(f, "<native fn {}>", fun.name),
            Value::Closure(_) => write!(f, "<closure>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::List(items) => f.debug_list().entries(items.iter()).finish(),
            other => write!(f, "{other}"),
        }
    }
}

pub type NativeFn = fn(&[Value]) -> Result<Value>;

/// A built-in operation implemented in Rust, invoked by name with
/// pre-evaluated arguments.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub min_arity: usize,
    pub callback: NativeFn,
}

impl NativeFunction {
    /// Validates the declared minimum arity, then runs the function body.
    /// Bodies index their argument slice directly and rely on this check
    /// having happened.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if args.len() < self.min_arity {
            return Err(Fault::Arity(format!(
                "`{}` expected at least {} argument(s) but received {}",
                self.name,
                self.min_arity,
                args.len()
            )));
        }
        (self.callback)(args)
    }
}

/// Opaque handle to compiled code plus its captured environment. The
/// interpreter owns the payload type and downcasts it back out; this core
/// only clones, compares, and prints the handle.
#[derive(Clone)]
pub struct ClosureRef(Rc<dyn Any>);

impl ClosureRef {
    pub fn new(state: impl Any) -> Self {
        Self(Rc::new(state))
    }

    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Handle identity: two references are the same closure only if they
    /// share one allocation.
    pub fn same(&self, other: &ClosureRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
