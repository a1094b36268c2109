use std::borrow::Cow;

/// A named function the wrapper can be applied to.
pub trait Target {
    /// Declared identifier of the function
    fn name(&self) -> &str;

    /// Number of mandatory arguments
    fn arity(&self) -> usize {
        0
    }

    /// Run the function body with the given arguments.
    /// Any value the body produces is dropped here.
    fn invoke(&self, args: &[String]) -> anyhow::Result<()>;
}

impl<T: Target + ?Sized> Target for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn invoke(&self, args: &[String]) -> anyhow::Result<()> {
        (**self).invoke(args)
    }
}

/// Zero-argument function paired with its name.
pub struct NamedFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> NamedFn<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F, R> Target for NamedFn<F>
where
    F: Fn() -> R,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, _args: &[String]) -> anyhow::Result<()> {
        let _ = (self.f)();
        Ok(())
    }
}

/// Zero-argument function whose body can fail.
pub struct TryNamedFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> TryNamedFn<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F, R> Target for TryNamedFn<F>
where
    F: Fn() -> anyhow::Result<R>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, _args: &[String]) -> anyhow::Result<()> {
        (self.f)()?;
        Ok(())
    }
}

/// Function taking one mandatory text argument.
pub struct UnaryFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> UnaryFn<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F, R> Target for UnaryFn<F>
where
    F: Fn(&str) -> R,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        1
    }

    fn invoke(&self, args: &[String]) -> anyhow::Result<()> {
        match args {
            [arg] => {
                let _ = (self.f)(arg.as_str());
                Ok(())
            }
            _ => anyhow::bail!(
                "{}() takes 1 argument(s) but {} were given",
                self.name,
                args.len()
            ),
        }
    }
}

/// Wrap a function item in a [`NamedFn`] named after its identifier.
///
/// ```
/// fn f() {}
/// let target = herald_kernel::target!(f);
/// assert_eq!(herald_kernel::Target::name(&target), "f");
/// ```
#[macro_export]
macro_rules! target {
    ($f:ident) => {
        $crate::target::NamedFn::new(stringify!($f), $f)
    };
}
