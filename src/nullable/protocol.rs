//! The capability protocol every nullable container satisfies.
//!
//! Rust has no native Higher-Kinded Types, so "the same container shape with
//! a different payload" cannot be written as `N<_>`. The protocol emulates it
//! with a Generic Associated Type: a nullable `N` applied to payload `A`
//! names its re-targeted self as `N::Rebind<B>`. Any auxiliary type
//! parameters the shape carries (an allocator tag, a phantom marker, ...)
//! stay fixed inside `Rebind`, so they are preserved by construction.
//!
//! # Example
//!
//! ```rust
//! use vacant::nullable::Nullable;
//!
//! fn empty_like<N: Nullable>(witness: &N) -> N::Rebind<String> {
//!     witness.construct_empty()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = empty_like(&some_int);
//! assert_eq!(none_string, None);
//! ```

/// A container holding zero or one value of type [`Nullable::Value`].
///
/// At any instant an implementor is either *empty* or *populated*. The four
/// operations below are everything the combinators need; they never mutate
/// an input container, they only read it and build new ones.
///
/// Most shapes get this trait for free by implementing
/// [`OptionLike`](super::OptionLike). Shapes that do not fit that pattern
/// implement `Nullable` directly.
///
/// # Laws
///
/// 1. **Consistency**: `N::Rebind<N::Value>` is `N` itself.
/// 2. **Construct**: `N::construct(v)` is populated and `get_value` returns `v`.
/// 3. **Construct empty**: `witness.construct_empty::<B>()` is empty for any
///    `witness`, populated or not.
///
/// # Example
///
/// ```rust
/// use vacant::nullable::Nullable;
///
/// let populated: Option<i32> = <Option<()>>::construct(7);
/// assert!(!populated.is_empty());
/// assert_eq!(*populated.get_value(), 7);
/// ```
pub trait Nullable: Sized {
    /// The payload type this container is currently applied to.
    type Value;

    /// The same container shape, with the same auxiliary parameters,
    /// applied to payload `B`.
    type Rebind<B>: Nullable<Value = B>;

    /// Returns `true` iff the container holds no value.
    fn is_empty(&self) -> bool;

    /// Returns a reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty. Callers must check
    /// [`is_empty`](Nullable::is_empty) first.
    fn get_value(&self) -> &Self::Value;

    /// Builds a populated container of the same shape holding `value`.
    fn construct<B>(value: B) -> Self::Rebind<B>;

    /// Builds an empty container of the same shape for payload `B`.
    ///
    /// `self` is only a witness: shapes that carry auxiliary state at
    /// runtime copy it from here.
    fn construct_empty<B>(&self) -> Self::Rebind<B>;
}
