//! Infix and method-chaining syntax for the combinators.
//!
//! Operator traits cannot be implemented for foreign containers such as
//! [`Option`], so the infix spellings live on [`Chain`], a transparent
//! wrapper around any [`Nullable`]:
//!
//! - `chain | f` is [`fmap`]
//! - `chain >> f` is [`bind`]
//!
//! Both accept closures, plain functions, method paths, and [`Accessor`]
//! values. Closures used as operands need parentheses and annotated
//! parameters, because a closure body extends as far right as it can:
//!
//! ```rust
//! use vacant::combinators::chain;
//!
//! let parse = |text: &String| text.parse::<i32>().ok();
//! let render = |number: &i32| Some(number.to_string());
//!
//! let result = chain(Some(String::from("0"))) >> parse >> render;
//! assert_eq!(result.into_inner(), Some(String::from("0")));
//!
//! let length = chain(Some(String::from("abc"))) | (|text: &String| text.len());
//! assert_eq!(length.into_inner(), Some(3));
//! ```
//!
//! The methods [`Chain::fmap`] and [`Chain::bind`] read left to right too
//! and infer closure parameter types:
//!
//! ```rust
//! use vacant::combinators::chain;
//!
//! let result = chain(Some("42"))
//!     .bind(|text| text.parse::<i32>().ok())
//!     .fmap(|number| number + 1);
//! assert_eq!(result.into_inner(), Some(43));
//! ```

use std::ops::{BitOr, Shr};

use super::bind::{bind, bind_member};
use super::fmap::{fmap, fmap_member};
use super::member::Accessor;
use crate::nullable::Nullable;

/// A nullable value in a left-to-right combinator pipeline.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::Chain;
///
/// let wrapped = Chain::new(Some(42));
/// assert_eq!(wrapped.as_inner(), &Some(42));
/// assert_eq!(wrapped.into_inner(), Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Chain<N>(pub N);

/// Starts a pipeline from `value`.
#[inline]
pub const fn chain<N>(value: N) -> Chain<N> {
    Chain(value)
}

impl<N> Chain<N> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: N) -> Self {
        Self(value)
    }

    /// Consumes the `Chain` and returns the container.
    #[inline]
    pub fn into_inner(self) -> N {
        self.0
    }

    /// Returns a reference to the container.
    #[inline]
    pub const fn as_inner(&self) -> &N {
        &self.0
    }
}

impl<N: Nullable> Chain<N> {
    /// Returns `true` iff the wrapped container is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Method form of [`fmap`].
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Chain<N::Rebind<B>>
    where
        F: FnOnce(&N::Value) -> B,
    {
        Chain(fmap(&self.0, function))
    }

    /// Method form of [`bind`].
    #[inline]
    pub fn bind<M, F>(self, function: F) -> Chain<M>
    where
        N: Nullable<Rebind<<M as Nullable>::Value> = M>,
        M: Nullable,
        F: FnOnce(&N::Value) -> M,
    {
        Chain(bind(&self.0, function))
    }
}

impl<N> From<N> for Chain<N> {
    fn from(value: N) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// `|` : fmap
// =============================================================================

impl<N, B, F> BitOr<F> for Chain<N>
where
    N: Nullable,
    F: FnOnce(&N::Value) -> B,
{
    type Output = Chain<N::Rebind<B>>;

    #[inline]
    fn bitor(self, function: F) -> Self::Output {
        Chain(fmap(&self.0, function))
    }
}

impl<N, A, B> BitOr<Accessor<A, B>> for Chain<N>
where
    N: Nullable<Value = A>,
{
    type Output = Chain<N::Rebind<B>>;

    #[inline]
    fn bitor(self, accessor: Accessor<A, B>) -> Self::Output {
        Chain(fmap_member(&self.0, accessor))
    }
}

// =============================================================================
// `>>` : bind
// =============================================================================

impl<N, M, F> Shr<F> for Chain<N>
where
    N: Nullable<Rebind<<M as Nullable>::Value> = M>,
    M: Nullable,
    F: FnOnce(&N::Value) -> M,
{
    type Output = Chain<M>;

    #[inline]
    fn shr(self, function: F) -> Self::Output {
        Chain(bind(&self.0, function))
    }
}

impl<N, A, M> Shr<Accessor<A, M>> for Chain<N>
where
    N: Nullable<Value = A, Rebind<<M as Nullable>::Value> = M>,
    M: Nullable,
{
    type Output = Chain<M>;

    #[inline]
    fn shr(self, accessor: Accessor<A, M>) -> Self::Output {
        Chain(bind_member(&self.0, accessor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Person;

    impl Person {
        fn id_as_some(&self) -> Option<i32> {
            Some(1)
        }

        fn id_as_none(&self) -> Option<i32> {
            None
        }

        fn name(&self) -> String {
            String::from("ada")
        }
    }

    #[rstest]
    fn new_and_into_inner() {
        let wrapped = Chain::new(Some(1));
        assert_eq!(wrapped.into_inner(), Some(1));
    }

    #[rstest]
    fn from_wraps_value() {
        let wrapped: Chain<Option<i32>> = Some(2).into();
        assert_eq!(wrapped, chain(Some(2)));
    }

    #[rstest]
    #[case(Some(1), false)]
    #[case(None, true)]
    fn is_empty_delegates(#[case] input: Option<i32>, #[case] expected: bool) {
        assert_eq!(chain(input).is_empty(), expected);
    }

    #[rstest]
    fn bitor_is_fmap() {
        let increment = |n: &i32| n + 1;
        assert_eq!((chain(Some(1)) | increment).into_inner(), fmap(&Some(1), increment));
        assert_eq!((chain(None::<i32>) | increment).into_inner(), None);
    }

    #[rstest]
    fn shr_is_bind() {
        let increment_as_some = |n: &i32| Some(n + 1);
        assert_eq!((chain(Some(0)) >> increment_as_some).into_inner(), Some(1));
        assert_eq!((chain(None::<i32>) >> increment_as_some).into_inner(), None);
    }

    #[rstest]
    fn shr_accepts_method_paths() {
        assert_eq!((chain(Some(Person)) >> Person::id_as_some).into_inner(), Some(1));
        assert_eq!((chain(Some(Person)) >> Person::id_as_none).into_inner(), None);
        assert_eq!((chain(None::<Person>) >> Person::id_as_some).into_inner(), None);
    }

    #[rstest]
    fn operators_accept_accessors() {
        let id = Accessor::new(Person::id_as_some);
        let name = Accessor::new(Person::name);
        assert_eq!((chain(Some(Person)) >> id).into_inner(), Some(1));
        assert_eq!((chain(Some(Person)) | name).into_inner(), Some(String::from("ada")));
        assert_eq!((chain(None::<Person>) | name).into_inner(), None);
    }

    #[rstest]
    fn methods_chain_left_to_right() {
        let result = chain(Some(3))
            .fmap(|n| n * 2)
            .bind(|n| if *n > 5 { Some(n.to_string()) } else { None });
        assert_eq!(result.into_inner(), Some(String::from("6")));
    }
}
