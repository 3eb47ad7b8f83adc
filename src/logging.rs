//! Unified Logging Macros for rtdb-pico
//!
//! This module provides a unified logging interface that automatically
//! selects between `log::` (USB logger) and `defmt::` based on the
//! active feature flags.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rtdb_pico::pico_log;
//!
//! pico_log!(info, "Configuration loaded");
//! pico_log!(debug, "Access mode: {}", mode);
//! pico_log!(warn, "Token ignored in test mode");
//! pico_log!(error, "Invalid reference URL");
//! ```
//!
//! # Feature Flags
//!
//! - `usb-logger` - Uses `log::` crate (for USB serial debugging)
//! - `defmt` - Uses `defmt::` (more efficient for embedded)
//! - neither - Arguments are type-checked and discarded (host builds, tests)
//!
//! Secrets must only ever be logged in their redacted form.

/// Unified logging macro - automatically selects log:: or defmt:: based on features
///
/// Format strings must stay within the `{}` / `{:?}` subset understood by both
/// backends.
#[macro_export]
#[cfg(feature = "usb-logger")]
macro_rules! pico_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(feature = "defmt", not(feature = "usb-logger")))]
macro_rules! pico_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(any(feature = "defmt", feature = "usb-logger")))]
macro_rules! pico_log {
    ($level:ident, $($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
