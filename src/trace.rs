//! Feature-gated `tracing` hooks.
//!
//! With the `tracing` feature off these expand to nothing, so release builds
//! of the traversals carry no logging code at all.

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}

macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}
