//! The default nullable shape.
//!
//! Most nullable containers follow the same pattern: they can say whether
//! they hold a value, lend that value out, be built from a value, and be
//! built empty. [`OptionLike`] captures exactly that pattern, and every
//! `OptionLike` type is a [`Nullable`] through a single blanket
//! implementation, so such shapes need no further boilerplate.
//!
//! User-defined wrappers can implement it by hand or with
//! `#[derive(OptionLike)]` (feature `derive`).

use super::protocol::Nullable;

/// Containers shaped like [`Option`].
///
/// Implementing this trait is enough to use a type with every combinator in
/// this crate.
///
/// # Example
///
/// ```rust
/// use vacant::nullable::{Nullable, OptionLike};
///
/// #[derive(Debug, PartialEq)]
/// struct Maybe<A>(Option<A>);
///
/// impl<A> OptionLike for Maybe<A> {
///     type Inner = A;
///     type Rebind<B> = Maybe<B>;
///
///     fn as_present(&self) -> Option<&A> {
///         self.0.as_ref()
///     }
///
///     fn present(value: A) -> Self {
///         Self(Some(value))
///     }
///
///     fn vacant() -> Self {
///         Self(None)
///     }
/// }
///
/// let empty: Maybe<i32> = Maybe(None);
/// assert!(empty.is_empty());
/// assert_eq!(Maybe::<()>::construct(3), Maybe(Some(3)));
/// ```
///
/// # Deriving
///
/// `#[derive(OptionLike)]` (feature `derive`) needs a struct whose first
/// type parameter is the payload and which holds exactly one
/// `Option<Payload>` field. Anything else is rejected at build time:
///
/// ```compile_fail
/// use vacant::OptionLike;
///
/// #[derive(OptionLike)]
/// enum Either<A> {
///     Left(A),
///     Right,
/// }
/// ```
///
/// ```compile_fail
/// use vacant::OptionLike;
///
/// #[derive(OptionLike)]
/// struct Twice<A> {
///     first: Option<A>,
///     second: Option<A>,
/// }
/// ```
pub trait OptionLike: Sized {
    /// The payload type.
    type Inner;

    /// The same shape applied to payload `B`.
    type Rebind<B>: OptionLike<Inner = B>;

    /// Returns the held value, or `None` when empty.
    fn as_present(&self) -> Option<&Self::Inner>;

    /// Builds a populated instance.
    fn present(value: Self::Inner) -> Self;

    /// Builds an empty instance.
    fn vacant() -> Self;

    /// Builds an empty instance for payload `B`, using `self` as witness.
    ///
    /// The default ignores the witness. Shapes that hold runtime auxiliary
    /// state (a pool id, a region handle) override it to copy that state,
    /// which is what [`Nullable::construct_empty`] propagates on the empty
    /// path of every combinator.
    #[inline]
    fn vacant_like<B>(&self) -> Self::Rebind<B> {
        <Self::Rebind<B> as OptionLike>::vacant()
    }
}

impl<T: OptionLike> Nullable for T {
    type Value = T::Inner;
    type Rebind<B> = T::Rebind<B>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_present().is_none()
    }

    #[inline]
    fn get_value(&self) -> &Self::Value {
        self.as_present()
            .expect("get_value called on an empty container")
    }

    #[inline]
    fn construct<B>(value: B) -> Self::Rebind<B> {
        <T::Rebind<B> as OptionLike>::present(value)
    }

    #[inline]
    fn construct_empty<B>(&self) -> Self::Rebind<B> {
        self.vacant_like::<B>()
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> OptionLike for Option<A> {
    type Inner = A;
    type Rebind<B> = Option<B>;

    #[inline]
    fn as_present(&self) -> Option<&A> {
        self.as_ref()
    }

    #[inline]
    fn present(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn vacant() -> Self {
        None
    }
}

static_assertions::assert_impl_all!(Option<i32>: Nullable, OptionLike);
static_assertions::assert_impl_all!(Option<Box<str>>: Nullable);
static_assertions::assert_type_eq_all!(<Option<String> as Nullable>::Rebind<usize>, Option<usize>);
static_assertions::assert_type_eq_all!(<Option<i32> as Nullable>::Value, i32);
