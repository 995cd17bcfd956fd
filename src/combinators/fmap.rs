//! `fmap` - covariant mapping over a nullable.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fmap(&c, |x| x.clone()) == c
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fmap(&fmap(&c, f), g) == fmap(&c, |x| g(&f(x)))
//! ```

use super::member::Accessor;
use crate::nullable::Nullable;

/// Applies `function` to the value inside `input`, wrapping the result in a
/// new container of the same shape.
///
/// - Empty input: returns an empty `N::Rebind<B>` without calling `function`.
/// - Populated input: returns `N::construct(function(value))`.
///
/// `function` runs at most once. The input is only read, and the result
/// may borrow from it.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::fmap;
///
/// let name = Some(String::from("vacant"));
/// assert_eq!(fmap(&name, |s| s.len()), Some(6));
/// assert_eq!(fmap(&name, String::as_str), Some("vacant"));
///
/// let missing: Option<String> = None;
/// let length: Option<usize> = fmap(&missing, |s| s.len());
/// assert_eq!(length, None);
/// ```
///
/// The input must implement [`Nullable`]:
///
/// ```compile_fail
/// use vacant::combinators::fmap;
///
/// let lengths = fmap(&vec![String::from("a")], |s: &String| s.len());
/// ```
#[inline]
pub fn fmap<'a, N, B, F>(input: &'a N, function: F) -> N::Rebind<B>
where
    N: Nullable,
    N::Value: 'a,
    F: FnOnce(&'a N::Value) -> B,
{
    if input.is_empty() {
        trace_short_circuit!("fmap", N::Value);
        return input.construct_empty::<B>();
    }
    N::construct(function(input.get_value()))
}

/// The same as [`fmap`], for a parameterless accessor of the payload.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::{Accessor, fmap_member};
///
/// let word = Some(String::from("abc"));
/// assert_eq!(fmap_member(&word, Accessor::new(String::len)), Some(3));
/// ```
#[inline]
pub fn fmap_member<N, B>(input: &N, accessor: Accessor<N::Value, B>) -> N::Rebind<B>
where
    N: Nullable,
{
    fmap(input, |value| accessor.call(value))
}
