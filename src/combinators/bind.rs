//! `bind` - monadic flat-mapping over a nullable.
//!
//! `bind` sequences lookups that may each come back empty. The callable
//! returns an already wrapped container, so unlike [`fmap`](super::fmap)
//! nothing is re-wrapped and the result never nests.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! bind(&N::construct(a), f) == f(&a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! bind(&m, |x| N::construct(x.clone())) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! bind(&bind(&m, f), g) == bind(&m, |x| bind(&f(x), g))
//! ```

use super::member::Accessor;
use crate::nullable::Nullable;

/// Applies `function` to the value inside `input` and returns its result
/// as is.
///
/// - Empty input: returns an empty `M` without calling `function`.
/// - Populated input: returns `function(value)`.
///
/// `M` must be the input's own shape re-targeted to a new payload
/// (`N::Rebind<M::Value> == M`). A callable returning any other container
/// is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::bind;
///
/// fn parse(text: &String) -> Option<i32> {
///     text.parse().ok()
/// }
///
/// assert_eq!(bind(&Some(String::from("12")), parse), Some(12));
/// assert_eq!(bind(&Some(String::from("twelve")), parse), None);
/// assert_eq!(bind(&None::<String>, parse), None);
///
/// let csv = Some(String::from("a,b"));
/// assert_eq!(bind(&csv, |text| text.split(',').next()), Some("a"));
/// ```
///
/// A callable returning a different container is rejected, even when that
/// container is nullable itself:
///
/// ```compile_fail
/// use vacant::combinators::bind;
///
/// let parsed = bind(&Some("7"), |text: &&str| text.parse::<i32>());
/// ```
///
/// ```compile_fail
/// use std::marker::PhantomData;
/// use vacant::combinators::bind;
/// use vacant::nullable::OptionLike;
///
/// struct Tagged<A, Tag>(Option<A>, PhantomData<Tag>);
///
/// impl<A, Tag> OptionLike for Tagged<A, Tag> {
///     type Inner = A;
///     type Rebind<B> = Tagged<B, Tag>;
///
///     fn as_present(&self) -> Option<&A> {
///         self.0.as_ref()
///     }
///
///     fn present(value: A) -> Self {
///         Self(Some(value), PhantomData)
///     }
///
///     fn vacant() -> Self {
///         Self(None, PhantomData)
///     }
/// }
///
/// let tagged: Tagged<i32, ()> = bind(&Some(1), |n: &i32| Tagged::present(*n));
/// ```
#[inline]
pub fn bind<'a, N, M, F>(input: &'a N, function: F) -> M
where
    N: Nullable<Rebind<<M as Nullable>::Value> = M>,
    N::Value: 'a,
    M: Nullable,
    F: FnOnce(&'a N::Value) -> M,
{
    if input.is_empty() {
        trace_short_circuit!("bind", N::Value);
        return input.construct_empty::<M::Value>();
    }
    function(input.get_value())
}

/// The same as [`bind`], for a parameterless accessor that itself returns
/// a container, such as a lookup of a possibly missing related value.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::{Accessor, bind_member};
///
/// struct User {
///     manager: Option<u32>,
/// }
///
/// impl User {
///     fn manager(&self) -> Option<u32> {
///         self.manager
///     }
/// }
///
/// let user = Some(User { manager: Some(7) });
/// assert_eq!(bind_member(&user, Accessor::new(User::manager)), Some(7));
/// ```
#[inline]
pub fn bind_member<N, M>(input: &N, accessor: Accessor<N::Value, M>) -> M
where
    N: Nullable<Rebind<<M as Nullable>::Value> = M>,
    M: Nullable,
{
    bind(input, |value| accessor.call(value))
}
