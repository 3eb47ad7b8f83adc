#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! Build-time WiFi and Firebase Realtime Database configuration for
//! embedded firmware.
//!
//! The raw values live in [`configuration`] as plain `&'static str`
//! constants. The rest of the crate turns them into validated, typed
//! settings so that an unusable configuration is caught at boot instead
//! of as a failed join or a `401` from the database.
//!
//! ## Example
//!
//! ```rust
//! use rtdb_pico::{AccessMode, Settings};
//!
//! let settings = Settings::builtin()?;
//! if settings.database.mode() == AccessMode::Open {
//!     // database rules must allow public read/write
//!     let _rules = AccessMode::Open.rules();
//! }
//! # Ok::<(), rtdb_pico::ConfigError>(())
//! ```

// Macro modules (must be declared before use)
#[macro_use]
pub mod logging;

pub mod auth;
pub mod configuration;
pub mod endpoint;
pub mod error;
pub mod settings;
pub mod utility;
pub mod wifi;

// Re-export commonly used types
#[doc(inline)]
pub use auth::{AccessMode, AuthToken, DatabaseAuth};
#[doc(inline)]
pub use endpoint::DatabaseUrl;
#[doc(inline)]
pub use error::{ConfigError, Result};
#[doc(inline)]
pub use settings::{DatabaseSettings, Settings};
#[doc(inline)]
pub use wifi::WifiCredentials;
