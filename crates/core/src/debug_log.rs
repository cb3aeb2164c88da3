//! Diagnostics behind the `debug_logging` feature.
//! The macros expand to nothing when the feature is disabled.

#[cfg(feature = "debug_logging")]
macro_rules! log_entry {
    ($op: literal) => {
        ::tracing::trace!(op = $op, "enter")
    };
    ($op: literal, $n: expr) => {
        ::tracing::trace!(op = $op, n = $n, "enter")
    };
}

#[cfg(not(feature = "debug_logging"))]
macro_rules! log_entry {
    ($op: literal) => {};
    ($op: literal, $n: expr) => {{
        let _ = &$n;
    }};
}

#[cfg(feature = "debug_logging")]
macro_rules! log_exhausted {
    ($op: literal, $requested: expr, $visited: expr) => {
        ::tracing::debug!(
            op = $op,
            requested = $requested,
            visited = $visited,
            "sequence ended before the requested count"
        )
    };
}

#[cfg(not(feature = "debug_logging"))]
macro_rules! log_exhausted {
    ($op: literal, $requested: expr, $visited: expr) => {{
        let _ = (&$requested, &$visited);
    }};
}

#[cfg(feature = "debug_logging")]
macro_rules! log_index_overflow {
    ($op: literal, $max: expr) => {
        ::tracing::debug!(
            op = $op,
            max = $max,
            "sequence longer than the index type can count"
        )
    };
}

#[cfg(not(feature = "debug_logging"))]
macro_rules! log_index_overflow {
    ($op: literal, $max: expr) => {{
        let _ = &$max;
    }};
}

pub(crate) use log_entry;
pub(crate) use log_exhausted;
pub(crate) use log_index_overflow;
