/// A type that can lift a single value and sequence value-producing steps.
///
/// `Of<B>` is the same monad carrying `B` instead of `Value`. Implementations
/// must satisfy the usual laws:
///
/// * `M::unit(x).bind(f)` behaves like `f(x)`
/// * `m.bind(M::unit)` behaves like `m`
/// * `m.bind(f).bind(g)` behaves like `m.bind(|x| f(x).bind(g))`
pub trait Monad<'a>: Sized + 'a {
    type Value: 'a;
    type Of<B: 'a>: Monad<'a, Value = B>;

    fn unit(value: Self::Value) -> Self;

    fn bind<B: 'a, F>(self, f: F) -> Self::Of<B>
    where
        F: FnMut(Self::Value) -> Self::Of<B> + 'a;

    fn fmap<B: 'a, F>(self, mut f: F) -> Self::Of<B>
    where
        F: FnMut(Self::Value) -> B + 'a,
    {
        self.bind(move |x| <Self::Of<B> as Monad<'a>>::unit(f(x)))
    }
}
