use indexmap::IndexMap;

use crate::{
    builtins,
    fault::{Fault, Result},
    value::{NativeFunction, Value},
};

/// The name-keyed registry of native functions, built once at startup and
/// read-only afterwards. The interpreter resolves calls through
/// [`Registry::invoke`]; the compiler resolves operator tokens and bound
/// names through the lookup methods.
pub struct Registry {
    natives: IndexMap<&'static str, NativeFunction>,
    operators: IndexMap<&'static str, &'static str>,
    bindings: IndexMap<&'static str, Value>,
}

impl Registry {
    pub fn new() -> Self {
        let mut natives = IndexMap::new();
        let mut operators = IndexMap::new();
        let mut bindings = IndexMap::new();

        // The constant singletons come first, matching their position in
        // the global environment.
        bindings.insert("false", Value::FALSE);
        bindings.insert("true", Value::TRUE);
        bindings.insert("nil", Value::NIL);

        for spec in builtins::BUILTINS {
            let function = NativeFunction {
                name: spec.name,
                min_arity: spec.min_arity,
                callback: spec.run,
            };
            natives.insert(spec.name, function);
            bindings.insert(spec.name, Value::Native(function));
            if let Some(token) = spec.operator {
                operators.insert(token, spec.name);
            }
        }

        Self {
            natives,
            operators,
            bindings,
        }
    }

    /// Invokes a native function with already-evaluated arguments. Unknown
    /// names and arity violations fault before any function body runs.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value> {
        let function = self
            .natives
            .get(name)
            .ok_or_else(|| Fault::Type(format!("no native function named `{name}`")))?;
        function.call(args)
    }

    pub fn lookup(&self, name: &str) -> Option<&NativeFunction> {
        self.natives.get(name)
    }

    /// The native-function name an operator token rewrites to.
    pub fn operator_target(&self, token: &str) -> Option<&'static str> {
        self.operators.get(token).copied()
    }

    /// The symbols exposed into the language's global environment: the
    /// `false`/`true`/`nil` singletons followed by every native function,
    /// in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.bindings.iter().map(|(name, value)| (*name, value))
    }

    pub fn binding(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
