//! Internal diagnostics for short-circuited combinators.
//!
//! Expands to nothing unless the `tracing` feature is enabled.

#[allow(unused_macros)]
macro_rules! trace_short_circuit {
    ($combinator:literal, $payload:ty) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            combinator = $combinator,
            payload = ::core::any::type_name::<$payload>(),
            "empty input, mapping function skipped"
        );
    }};
}
