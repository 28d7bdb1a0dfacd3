//! Logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Pointer handling fires on every mouse move, so modules on that path need
//! a way to switch their logging off without touching the global filter.
//! Each module that logs declares its own flag and the macros compile down
//! to nothing when it is `false`.
//!
//! ```rust
//! use jornada::log_info;
//!
//! const ENABLE_LOGS: bool = true;
//!
//! log_info!("signature surface opened");
//! ```
//!
//! Inside the crate the macros are imported from the root
//! (`use crate::{log_info, log_error};`).

/// Info-level logging, gated on the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging, gated on the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level logging, gated on the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}

/// Debug-level logging, gated on the calling module's `ENABLE_LOGS`.
/// Used for per-point pointer tracing where even formatting the message
/// is too much unless the module opts in.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}
