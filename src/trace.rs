//! Optional structured events.
//!
//! With the `tracing` feature the macro forwards to the matching `tracing`
//! level; without it the invocation expands to nothing.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    (debug, $($arg:tt)+) => { ::tracing::debug!($($arg)+) };
    (trace, $($arg:tt)+) => { ::tracing::trace!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}
