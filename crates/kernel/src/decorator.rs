/// Something that takes a raw value and hands back its decorated form.
///
/// Applying a [`Wrapper`](crate::Wrapper) this way mirrors decoration syntax:
/// the decorated result of a function is whatever the wrapper returns, which
/// is "no value" rather than the function itself.
pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}
