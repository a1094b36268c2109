use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::error::ApplyError;
use crate::target::Target;
use crate::wrapper::Wrapper;

/// Shared handle to a registered function
pub type SharedTarget = Arc<dyn Target + Send + Sync>;

/// A named entry: either something callable or a plain value
#[derive(Clone)]
pub enum Symbol {
    Function(SharedTarget),
    Value(String),
}

/// Coarse classification used for listings and error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Value,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Value => "value",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Function(_) => SymbolKind::Function,
            Symbol::Value(_) => SymbolKind::Value,
        }
    }

    /// Text held by a value symbol
    pub fn value(&self) -> Option<&str> {
        match self {
            Symbol::Function(_) => None,
            Symbol::Value(value) => Some(value),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Function(target) => f
                .debug_struct("Function")
                .field("name", &target.name())
                .field("arity", &target.arity())
                .finish(),
            Symbol::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Name-indexed table of symbols that wrappers can be applied to by name
#[derive(Default, Clone, Debug)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under its own declared name.
    /// A later registration with the same name replaces the earlier one.
    pub fn register_fn<T>(&mut self, target: T)
    where
        T: Target + Send + Sync + 'static,
    {
        let name = target.name().to_string();
        tracing::debug!(symbol = %name, arity = target.arity(), "registering function");
        self.symbols.insert(name, Symbol::Function(Arc::new(target)));
    }

    /// Register a non-callable value.
    /// Like [`SymbolTable::register_fn`], this replaces any symbol, function
    /// or value, already registered under `name`.
    pub fn register_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        tracing::debug!(symbol = %name, "registering value");
        self.symbols.insert(name, Symbol::Value(value.into()));
    }

    /// Look a symbol up by name
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Iterate symbols in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Apply `wrapper` to the symbol called `name`, announcing on `out`.
    ///
    /// Unknown names and values fail before anything is written.
    pub fn apply<W>(&self, wrapper: &Wrapper, name: &str, out: &mut W) -> Result<(), ApplyError>
    where
        W: Write + ?Sized,
    {
        let target = self.resolve(name)?;
        wrapper.apply_to(out, target.as_ref())
    }

    /// Resolve `name` to a callable target without applying anything
    pub fn resolve(&self, name: &str) -> Result<&SharedTarget, ApplyError> {
        match self.get(name) {
            None => Err(ApplyError::not_found(name)),
            Some(Symbol::Value(_)) => Err(ApplyError::not_callable(
                name,
                SymbolKind::Value.as_str(),
            )),
            Some(Symbol::Function(target)) => Ok(target),
        }
    }
}
