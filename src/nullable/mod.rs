//! The capability protocol for nullable containers.
//!
//! This module defines what a container must provide to be used with the
//! combinators, without providing a container of its own:
//!
//! - [`Nullable`]: the four operations (`is_empty`, `get_value`,
//!   `construct`, `construct_empty`) plus the `Rebind` type constructor
//! - [`OptionLike`]: the default shape; implementing it yields [`Nullable`]
//!
//! ## Shapes
//!
//! `Option<A>` is supported out of the box. A wrapper carrying auxiliary
//! type parameters keeps them across every mapping, because `Rebind<B>`
//! only swaps the payload:
//!
//! ```rust
//! use std::marker::PhantomData;
//! use vacant::nullable::{Nullable, OptionLike};
//!
//! struct Tagged<A, Tag> {
//!     value: Option<A>,
//!     tag: PhantomData<Tag>,
//! }
//!
//! impl<A, Tag> OptionLike for Tagged<A, Tag> {
//!     type Inner = A;
//!     type Rebind<B> = Tagged<B, Tag>;
//!
//!     fn as_present(&self) -> Option<&A> {
//!         self.value.as_ref()
//!     }
//!
//!     fn present(value: A) -> Self {
//!         Self { value: Some(value), tag: PhantomData }
//!     }
//!
//!     fn vacant() -> Self {
//!         Self { value: None, tag: PhantomData }
//!     }
//! }
//!
//! struct Celsius;
//!
//! let reading: Tagged<f64, Celsius> = Tagged::present(21.5);
//! let label: Tagged<String, Celsius> = <Tagged<f64, Celsius>>::construct(String::from("warm"));
//! assert!(!reading.is_empty());
//! assert_eq!(label.get_value(), "warm");
//! ```

mod option_like;
mod protocol;

pub use option_like::OptionLike;
pub use protocol::Nullable;
