//! # vacant
//!
//! Functional combinators over any nullable container type.
//!
//! ## Overview
//!
//! This library does not define a container of its own. It defines the
//! capability protocol a nullable type must satisfy and builds mapping on
//! top of it:
//!
//! - **Protocol**: [`Nullable`](nullable::Nullable) (emptiness test, value
//!   access, populated and empty construction) and the default
//!   [`OptionLike`](nullable::OptionLike) shape
//! - **Combinators**: `fmap` and `bind`, their member-accessor forms, and
//!   the infix syntax `|` / `>>` on [`Chain`](combinators::Chain)
//! - **Support**: `sink`, `discard`, `attempt`, `from_variant` and the
//!   unit-valued `ExecutionStatus`
//!
//! ## Feature Flags
//!
//! - `combinators`: `fmap`, `bind` and `Chain`
//! - `support`: helpers for effect-only and fallible steps
//! - `derive`: `#[derive(OptionLike)]`
//! - `tracing`: trace events when a combinator short-circuits
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "combinators")]
//! # {
//! use vacant::prelude::*;
//!
//! #[derive(Clone)]
//! struct Person {
//!     address: Option<String>,
//! }
//!
//! impl Person {
//!     fn address(&self) -> Option<String> {
//!         self.address.clone()
//!     }
//! }
//!
//! let find_person = |id: &u32| (*id == 1).then(|| Person { address: Some(String::from("Main St")) });
//!
//! let street_length = chain(Some(1_u32)) >> find_person >> Person::address | (|street: &String| street.len());
//! assert_eq!(street_length.into_inner(), Some(7));
//!
//! let missing = chain(Some(2_u32)) >> find_person >> Person::address | (|street: &String| street.len());
//! assert_eq!(missing.into_inner(), None);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use vacant::prelude::*;
/// ```
pub mod prelude {
    pub use crate::nullable::*;

    #[cfg(feature = "combinators")]
    pub use crate::combinators::*;

    #[cfg(feature = "support")]
    pub use crate::support::*;
}

pub mod nullable;

#[cfg(feature = "combinators")]
pub mod combinators;

#[cfg(feature = "support")]
pub mod support;

#[cfg(feature = "derive")]
pub use vacant_derive::OptionLike;
