// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Conditional logging shim: uses `tracing` when enabled, falls back to eprintln! for warnings
// and drops everything else.
//
// The fallback macros carry a `log_` prefix because a `macro_rules! warn` re-exported under its
// own name collides with the built-in `#[warn]` attribute.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, info, warn};

#[cfg_attr(feature = "tracing", allow(unused_macros))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}

#[cfg_attr(feature = "tracing", allow(unused_macros))]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if false {
            eprintln!($($arg)*);
        }
    }};
}

#[cfg_attr(feature = "tracing", allow(unused_macros))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if false {
            eprintln!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {log_debug as debug, log_info as info, log_warn as warn};
