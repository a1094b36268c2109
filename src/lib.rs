//! herald demo application
//!
//! Demo functions and the symbol table the binaries resolve names against.

pub mod functions;

pub use functions::{register_all, symbol_table};
