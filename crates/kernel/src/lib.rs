//! Core of herald: a prefix-carrying wrapper applied to named call targets.

pub mod decorator;
pub mod error;
pub mod registry;
pub mod settings;
pub mod target;
pub mod wrapper;

pub use decorator::Decorator;
pub use error::ApplyError;
pub use registry::{Symbol, SymbolKind, SymbolTable};
pub use target::{NamedFn, Target, TryNamedFn, UnaryFn};
pub use wrapper::Wrapper;
