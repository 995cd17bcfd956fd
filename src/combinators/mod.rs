//! Mapping and flat-mapping over any [`Nullable`](crate::nullable::Nullable).
//!
//! - [`fmap`]: `N<A>` and `A -> B` give `N<B>`; the result is re-wrapped
//! - [`bind`]: `N<A>` and `A -> N<B>` give `N<B>`; the callable's own
//!   container is returned, so nothing nests
//! - [`fmap_member`], [`bind_member`]: the same for an [`Accessor`]
//! - [`Chain`]: infix (`|`, `>>`) and method-chaining forms
//!
//! Emptiness is absorbing. Once a step yields an empty container, every
//! later callable is skipped, yet the payload type still transforms:
//!
//! ```rust
//! use vacant::combinators::{bind, fmap};
//!
//! let missing: Option<String> = None;
//! let length: Option<usize> = fmap(&missing, |text| text.len());
//! let halved: Option<usize> = bind(&length, |n| n.checked_div(2));
//! assert_eq!(halved, None);
//! ```

mod bind;
mod chain;
mod fmap;
mod member;

pub use bind::{bind, bind_member};
pub use chain::{Chain, chain};
pub use fmap::{fmap, fmap_member};
pub use member::Accessor;
