//! Demo functions the binaries can apply a wrapper to by name.

use herald_kernel::{target, SymbolTable, TryNamedFn, UnaryFn};

/// Prints its own name.
pub fn f() {
    println!("f");
}

/// Returns a value nobody will see once wrapped.
pub fn answer() -> u32 {
    42
}

/// Needs an argument, so applying a wrapper to it fails.
pub fn greet(who: &str) {
    println!("hello, {who}");
}

/// Always fails.
pub fn fail() -> anyhow::Result<()> {
    anyhow::bail!("fail() was asked to fail")
}

/// Register every demo symbol with the table
pub fn register_all(table: &mut SymbolTable) {
    table.register_fn(target!(f));
    table.register_fn(target!(answer));
    table.register_fn(UnaryFn::new("greet", greet));
    table.register_fn(TryNamedFn::new("fail", fail));
    table.register_value("version", env!("CARGO_PKG_VERSION"));
}

/// Build a table holding the demo symbols
pub fn symbol_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    register_all(&mut table);
    table
}
