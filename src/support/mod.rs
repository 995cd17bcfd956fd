//! Helpers around the combinators.
//!
//! - [`sink`]: runs a side-effecting action inside a `bind` chain
//! - [`discard`]: turns a niladic callable into a unary one
//! - [`ExecutionStatus`], [`SUCCESS`], [`FAILURE`]: unit-valued outcomes
//! - [`attempt`], [`from_variant`]: build option-like values from fallible
//!   computations and sum types
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use vacant::combinators::chain;
//! use vacant::support::{ExecutionStatus, sink};
//!
//! let audit = RefCell::new(Vec::new());
//! let lookup = |id: &u32| if *id == 1 { Some("root") } else { None };
//!
//! let status: ExecutionStatus = chain(Some(1_u32))
//!     .bind(lookup)
//!     .bind::<ExecutionStatus, _>(sink(|| audit.borrow_mut().push("found")))
//!     .into_inner();
//!
//! assert_eq!(status, Some(()));
//! assert_eq!(*audit.borrow(), vec!["found"]);
//! ```

mod attempt;
mod sink;
mod status;

pub use attempt::{attempt, from_variant};
pub use sink::{discard, sink};
pub use status::{ExecutionStatus, FAILURE, SUCCESS};
