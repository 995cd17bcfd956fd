//! Derive macro for the vacant `OptionLike` shape.
//!
//! # Available Derive Macros
//!
//! - [`OptionLike`]: implements `vacant::nullable::OptionLike` (and so
//!   `Nullable`) for a wrapper struct around an `Option`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::marker::PhantomData;
//! use vacant::OptionLike;
//! use vacant::combinators::fmap;
//!
//! #[derive(Debug, PartialEq, OptionLike)]
//! struct Cached<A, Region> {
//!     entry: Option<A>,
//!     region: PhantomData<Region>,
//! }
//!
//! struct Eu;
//!
//! let hit: Cached<u32, Eu> = Cached { entry: Some(3), region: PhantomData };
//! let doubled: Cached<u32, Eu> = fmap(&hit, |n| n * 2);
//! assert_eq!(doubled.entry, Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod option_like;

use proc_macro::TokenStream;

/// Derive macro implementing `OptionLike` for a wrapper struct.
///
/// # Requirements
///
/// - The type must be a struct (named or tuple fields)
/// - Its first type parameter is the payload; it must not carry bounds
/// - Exactly one field has type `Option<Payload>`
/// - Every other field implements `Default` (typically `PhantomData`)
/// - Every other field whose type does not mention the payload implements
///   `Clone`
///
/// Every generic parameter after the payload is an auxiliary parameter and
/// is kept as is when the payload type changes. On the empty path of a
/// combinator, fields that do not mention the payload are cloned from the
/// input, so runtime auxiliary state survives; on the populated path every
/// non-payload field starts from `Default`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl<A, Rest> ::vacant::nullable::OptionLike for Wrapper<A, Rest> {
///     type Inner = A;
///     type Rebind<B> = Wrapper<B, Rest>;
///     fn as_present(&self) -> Option<&A> { self.value.as_ref() }
///     fn present(value: A) -> Self { Self { value: Some(value), rest: Default::default() } }
///     fn vacant() -> Self { Self { value: None, rest: Default::default() } }
///     fn vacant_like<B>(&self) -> Wrapper<B, Rest> { Wrapper { value: None, rest: self.rest.clone() } }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use vacant::OptionLike;
/// use vacant::combinators::bind;
///
/// #[derive(Debug, PartialEq, OptionLike)]
/// struct Maybe<A>(Option<A>);
///
/// let parsed: Maybe<i32> = bind(&Maybe(Some("4")), |text| Maybe(text.parse().ok()));
/// assert_eq!(parsed, Maybe(Some(4)));
/// ```
#[proc_macro_derive(OptionLike)]
pub fn derive_option_like(input: TokenStream) -> TokenStream {
    option_like::derive_option_like_impl(input)
}
