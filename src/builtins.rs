use std::io::{self, BufRead, Write};

use crate::{
    fault::{Fault, Result},
    value::{NativeFn, Value},
};

/// One row of the registration table: the bound name, the operator token the
/// compiler rewrites to this native (if any), the declared minimum arity,
/// and the function body.
pub(crate) struct BuiltinSpec {
    pub(crate) name: &'static str,
    pub(crate) operator: Option<&'static str>,
    pub(crate) min_arity: usize,
    pub(crate) run: NativeFn,
}

const fn entry(
    name: &'static str,
    operator: Option<&'static str>,
    min_arity: usize,
    run: NativeFn,
) -> BuiltinSpec {
    BuiltinSpec {
        name,
        operator,
        min_arity,
        run,
    }
}

/// The single registration site for every native function. The bridge's
/// name table, its operator-alias table, and the vocabulary's operator-token
/// lookup are all derived from this list, so they cannot drift apart.
pub(crate) const BUILTINS: &[BuiltinSpec] = &[
    entry("len", None, 1, len),
    entry("empty?", None, 1, is_empty),
    entry("firstof", None, 1, firstof),
    entry("tailof", None, 1, tailof),
    entry("headof", None, 1, headof),
    entry("nil?", None, 1, is_nil),
    entry("assert", None, 2, assert_),
    entry("toNumber", None, 1, to_number),
    entry("toString", None, 1, to_string),
    entry("at", Some("@"), 2, at),
    entry("and", None, 2, and_),
    entry("or", None, 2, or_),
    entry("mod", None, 2, modulo),
    entry("append", None, 1, append),
    entry("concat", None, 1, concat),
    entry("list", None, 0, list),
    entry("print", None, 0, print),
    entry("input", None, 0, input),
    entry("+", Some("+"), 2, add),
    entry("-", Some("-"), 2, sub),
    entry("*", Some("*"), 2, mul),
    entry("/", Some("/"), 2, div),
    entry("<", Some("<"), 2, lt),
    entry(">", Some(">"), 2, gt),
    entry("<=", Some("<="), 2, le),
    entry(">=", Some(">="), 2, ge),
    entry("=", Some("="), 2, eq),
    entry("!=", Some("!="), 2, ne),
    entry("pow", Some("^"), 2, pow),
];

fn len(args: &[Value]) -> Result<Value> {
    match &args[0] {
        Value::List(items) => Ok(Value::number(items.len() as f64)),
        Value::Str(text) => Ok(Value::number(text.chars().count() as f64)),
        other => Err(Fault::Type(format!(
            "`len` expected List or String but found {}",
            other.type_name()
        ))),
    }
}

fn is_empty(args: &[Value]) -> Result<Value> {
    let items = args[0].as_list("empty?")?;
    Ok(Value::from_bool(items.is_empty()))
}

fn firstof(args: &[Value]) -> Result<Value> {
    Ok(args[0].list_get(0, "firstof")?.clone())
}

fn tailof(args: &[Value]) -> Result<Value> {
    if args[0].as_list("tailof")?.len() < 2 {
        return Ok(Value::NIL);
    }
    let mut rest = args[0].clone();
    rest.list_drop_first("tailof")?;
    Ok(rest)
}

fn headof(args: &[Value]) -> Result<Value> {
    if args[0].as_list("headof")?.len() < 2 {
        return Ok(Value::NIL);
    }
    let mut rest = args[0].clone();
    rest.list_drop_last("headof")?;
    Ok(rest)
}

fn is_nil(args: &[Value]) -> Result<Value> {
    Ok(Value::from_bool(args[0] == Value::NIL))
}

fn assert_(args: &[Value]) -> Result<Value> {
    if args[0] == Value::FALSE {
        let message = args[1].as_text("assert")?;
        return Err(Fault::AssertionFailed(message.to_string()));
    }
    Ok(Value::NIL)
}

fn to_number(args: &[Value]) -> Result<Value> {
    let text = args[0].as_text("toNumber")?;
    let parsed: f64 = text.trim().parse().map_err(|_| {
        Fault::Conversion(format!("`toNumber` could not parse {text:?} as a number"))
    })?;
    Ok(Value::number(parsed))
}

fn to_string(args: &[Value]) -> Result<Value> {
    Ok(Value::text(args[0].to_string()))
}

fn at(args: &[Value]) -> Result<Value> {
    args[0].as_list("@")?;
    let index = args[1].as_number("@")?;
    if index < 0.0 {
        return Err(Fault::Index(format!("`@` index {index} is negative")));
    }
    Ok(args[0].list_get(index as usize, "@")?.clone())
}

// Logic operations compare against the Bool singletons: a non-Bool operand
// is simply not `true`, yielding `false` rather than a fault.
fn and_(args: &[Value]) -> Result<Value> {
    Ok(Value::from_bool(
        args[0] == Value::TRUE && args[1] == Value::TRUE,
    ))
}

fn or_(args: &[Value]) -> Result<Value> {
    Ok(Value::from_bool(
        args[0] == Value::TRUE || args[1] == Value::TRUE,
    ))
}

fn modulo(args: &[Value]) -> Result<Value> {
    // `%` on f64 is the floating remainder, matching fmod.
    arith(args, "mod", |a, b| a % b)
}

fn append(args: &[Value]) -> Result<Value> {
    args[0].as_list("append")?;
    let mut extended = args[0].clone();
    for item in &args[1..] {
        extended.list_push(item.clone(), "append")?;
    }
    Ok(extended)
}

fn concat(args: &[Value]) -> Result<Value> {
    args[0].as_list("concat")?;
    let mut joined = args[0].clone();
    for other in &args[1..] {
        for item in other.as_list("concat")? {
            joined.list_push(item.clone(), "concat")?;
        }
    }
    Ok(joined)
}

fn list(args: &[Value]) -> Result<Value> {
    Ok(Value::list(args.to_vec()))
}

fn print(args: &[Value]) -> Result<Value> {
    println!("{}", render_line(args));
    Ok(Value::NIL)
}

fn input(args: &[Value]) -> Result<Value> {
    if let Some(prompt) = args.first() {
        print!("{}", prompt.as_text("input")?);
        io::stdout().flush().ok();
    }
    let mut line = String::new();
    // A closed or failing stream behaves like end of input.
    if io::stdin().lock().read_line(&mut line).is_err() {
        line.clear();
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Value::text(line))
}

fn add(args: &[Value]) -> Result<Value> {
    match (&args[0], &args[1]) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::text(format!("{a}{b}"))),
        (a, b) => Err(Fault::Type(format!(
            "`+` expected two Numbers or two Strings but found {} and {}",
            a.type_name(),
            b.type_name()
        ))),
    }
}

fn sub(args: &[Value]) -> Result<Value> {
    arith(args, "-", |a, b| a - b)
}

fn mul(args: &[Value]) -> Result<Value> {
    arith(args, "*", |a, b| a * b)
}

fn div(args: &[Value]) -> Result<Value> {
    // Division by zero follows IEEE-754: an infinity or NaN, not a fault.
    arith(args, "/", |a, b| a / b)
}

fn pow(args: &[Value]) -> Result<Value> {
    arith(args, "pow", f64::powf)
}

fn lt(args: &[Value]) -> Result<Value> {
    ordering(args, "<", |a, b| a < b)
}

fn gt(args: &[Value]) -> Result<Value> {
    ordering(args, ">", |a, b| a > b)
}

fn le(args: &[Value]) -> Result<Value> {
    ordering(args, "<=", |a, b| a <= b)
}

fn ge(args: &[Value]) -> Result<Value> {
    ordering(args, ">=", |a, b| a >= b)
}

fn eq(args: &[Value]) -> Result<Value> {
    Ok(Value::from_bool(args[0] == args[1]))
}

fn ne(args: &[Value]) -> Result<Value> {
    Ok(Value::from_bool(args[0] != args[1]))
}

fn arith(args: &[Value], name: &str, op: fn(f64, f64) -> f64) -> Result<Value> {
    let a = args[0].as_number(name)?;
    let b = args[1].as_number(name)?;
    Ok(Value::number(op(a, b)))
}

fn ordering(args: &[Value], name: &str, op: fn(f64, f64) -> bool) -> Result<Value> {
    let a = args[0].as_number(name)?;
    let b = args[1].as_number(name)?;
    Ok(Value::from_bool(op(a, b)))
}

/// Display text of each argument, space-separated. `print` emits this plus
/// a trailing newline.
fn render_line(args: &[Value]) -> String {
    let mut line = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            line.push(' ');
        }
        line.push_str(&arg.to_string());
    }
    line
}
