//! Outcome of a step that runs only for its effect.
//!
//! The unit value `()` is the payload: it carries nothing beyond presence.

/// Whether an effect-only computation succeeded.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::fmap;
/// use vacant::support::{ExecutionStatus, FAILURE, SUCCESS};
///
/// let written: ExecutionStatus = fmap(&Some("log line"), |_| ());
/// assert_eq!(written, SUCCESS);
/// assert_ne!(written, FAILURE);
/// ```
pub type ExecutionStatus = Option<()>;

/// A successful effect-only computation.
pub const SUCCESS: ExecutionStatus = Some(());

/// A failed effect-only computation.
pub const FAILURE: ExecutionStatus = None;
