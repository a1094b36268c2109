use std::io::{self, Write};

use crate::decorator::Decorator;
use crate::error::ApplyError;
use crate::target::Target;

/// Prefix-carrying wrapper.
///
/// Applying it to a target prints `<prefix> <name>`, then calls the target
/// with no arguments. The target's return value is never handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    prefix: String,
}

impl Wrapper {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Apply to `target`, announcing on stdout.
    pub fn apply<T: Target + ?Sized>(&self, target: &T) -> Result<(), ApplyError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.apply_to(&mut handle, target)
    }

    /// Apply to `target`, announcing on `out`.
    pub fn apply_to<W, T>(&self, out: &mut W, target: &T) -> Result<(), ApplyError>
    where
        W: Write + ?Sized,
        T: Target + ?Sized,
    {
        let name = target.name();
        tracing::debug!(prefix = %self.prefix, function = name, "applying wrapper");

        writeln!(out, "{} {}", self.prefix, name)?;
        out.flush()?;

        let expected = target.arity();
        if expected != 0 {
            return Err(ApplyError::arity(name, expected, 0));
        }

        target.invoke(&[]).map_err(ApplyError::Target)?;

        tracing::trace!(function = name, "wrapped function returned, result discarded");
        Ok(())
    }

    /// Generic call surface on stdout, see [`Wrapper::call_to`].
    pub fn call<T: Target + ?Sized>(
        &self,
        target: &T,
        extra: &[String],
    ) -> Result<(), ApplyError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.call_to(&mut handle, target, extra)
    }

    /// Generic call surface: `extra` is accepted and ignored, only `target`
    /// is forwarded to [`Wrapper::apply_to`].
    pub fn call_to<W, T>(
        &self,
        out: &mut W,
        target: &T,
        extra: &[String],
    ) -> Result<(), ApplyError>
    where
        W: Write + ?Sized,
        T: Target + ?Sized,
    {
        if !extra.is_empty() {
            tracing::debug!(ignored = extra.len(), "ignoring extra call arguments");
        }
        self.apply_to(out, target)
    }
}

impl<W, T> Decorator<(&mut W, &T)> for Wrapper
where
    W: Write + ?Sized,
    T: Target + ?Sized,
{
    type Out = Result<(), ApplyError>;

    fn decorate(&self, (out, raw): (&mut W, &T)) -> Self::Out {
        self.apply_to(out, raw)
    }
}
