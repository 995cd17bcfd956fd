//! Adapters that let niladic callables take part in a `bind` chain.

use crate::nullable::Nullable;

/// Adapts a side-effecting action into a callable usable with
/// [`bind`](crate::combinators::bind).
///
/// When the chain is populated the action runs once and the step yields a
/// populated unit container, keeping the chain alive. When the chain is
/// empty the action never runs and emptiness propagates.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use vacant::combinators::bind;
/// use vacant::support::{ExecutionStatus, sink};
///
/// let saved = Cell::new(false);
///
/// let status: ExecutionStatus = bind(&Some(1), sink(|| saved.set(true)));
/// assert_eq!(status, Some(()));
/// assert!(saved.get());
/// ```
pub fn sink<A, M, F>(action: F) -> impl FnOnce(&A) -> M
where
    F: FnOnce(),
    M: Nullable<Value = (), Rebind<()> = M>,
{
    move |_: &A| {
        action();
        M::construct(())
    }
}

/// Wraps a niladic callable into a unary one that ignores its argument.
///
/// The callable's result is returned unchanged, so a parameterless lookup
/// that returns a container can follow any step of a chain.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::bind;
/// use vacant::support::discard;
///
/// let find_default_port = || Some(8080_u16);
/// assert_eq!(bind(&Some("localhost"), discard(find_default_port)), Some(8080));
/// assert_eq!(bind(&None::<&str>, discard(find_default_port)), None);
/// ```
pub fn discard<A, R, F>(function: F) -> impl FnOnce(&A) -> R
where
    F: FnOnce() -> R,
{
    move |_: &A| function()
}
