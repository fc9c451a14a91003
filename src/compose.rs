//! Pure higher-order wrappers: no state, no locks, no timing.
//!
//! Each helper takes functions and returns a new closure; nothing here ever
//! fails or blocks.

/// Right-to-left composition: `compose(f, g)` is `|x| f(g(x))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

/// Left-to-right composition: `pipe(f, g)` is `|x| g(f(x))`.
pub fn pipe<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

/// Left-to-right fold of a uniform-type stage list.
///
/// An empty list yields the identity function.
pub fn pipeline<T>(stages: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |x| stages.iter().fold(x, |acc, stage| stage(acc))
}

/// Logical complement of a predicate.
pub fn negate<T>(pred: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |x| !pred(x)
}

/// Wrap `inner` with `wrapper`, which receives the wrapped function and the
/// argument and decides how (or whether) to invoke it.
pub fn wrap<F, T, R>(inner: F, wrapper: impl Fn(&F, T) -> R) -> impl Fn(T) -> R {
    move |x| wrapper(&inner, x)
}

/// Fix the first argument of a two-argument function.
pub fn partial<A: Clone, B, R>(f: impl Fn(A, B) -> R, a: A) -> impl Fn(B) -> R {
    move |b| f(a.clone(), b)
}

/// Swap the arguments of a two-argument function.
pub fn rearg<A, B, R>(f: impl Fn(A, B) -> R) -> impl Fn(B, A) -> R {
    move |b, a| f(a, b)
}

/// Adapt a two-argument function to take its arguments as a tuple.
pub fn spread<A, B, R>(f: impl Fn(A, B) -> R) -> impl Fn((A, B)) -> R {
    move |(a, b)| f(a, b)
}
