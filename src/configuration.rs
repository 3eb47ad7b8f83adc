//! # Environment Configuration
//!
//! WiFi credentials and Firebase Realtime Database reference for the firmware.
//!
//! Real values live in `src/secrets.rs`, which is kept out of version control.
//! Copy `secrets_example.rs` there and fill it in. Without that file the
//! placeholders below are compiled in, so the crate still builds.
//!
//! ## Firebase access modes
//!
//! 1. **Test mode** (no authentication): leave `AUTH_TOKEN` empty and set the
//!    database rules to allow public access. See [`AccessMode::Open`].
//! 2. **Locked mode** (with authentication): set `AUTH_TOKEN` to a database
//!    secret (Firebase console, Project settings, Service accounts, Database
//!    secrets) and require `auth != null` in the rules. See [`AccessMode::Locked`].
//!
//! Locked mode is recommended for production.
//!
//! The mode can also be pinned with `RTDB_ACCESS_MODE=open|locked` at build time,
//! in which case a token set in test mode is ignored.
//!
//! [`AccessMode::Open`]: crate::auth::AccessMode::Open
//! [`AccessMode::Locked`]: crate::auth::AccessMode::Locked

#[cfg(not(rtdb_fallback_secrets))]
#[rustfmt::skip]
#[path = "secrets.rs"]
mod secrets;

#[cfg(rtdb_fallback_secrets)]
mod secrets {
    pub const WIFI_SSID: &str = "YOUR_WIFI_SSID";
    pub const WIFI_PASSWORD: &str = "YOUR_WIFI_PASSWORD";
    pub const REFERENCE_URL: &str = "https://your-project-default-rtdb.firebaseio.com/";
    pub const AUTH_TOKEN: &str = "";
}

/// WiFi network SSID.
pub const WIFI_SSID: &str = secrets::WIFI_SSID;

/// WiFi network password (WPA2 passphrase or 64-digit hex PSK).
pub const WIFI_PASSWORD: &str = secrets::WIFI_PASSWORD;

/// Root URL of the Realtime Database, e.g. `https://<name>-default-rtdb.firebaseio.com/`.
pub const REFERENCE_URL: &str = secrets::REFERENCE_URL;

/// Database secret for locked mode. Empty selects test mode.
pub const AUTH_TOKEN: &str = secrets::AUTH_TOKEN;

/// Access mode pinned at build time through `RTDB_ACCESS_MODE`, if any.
pub const ACCESS_MODE: Option<&str> = option_env!("RTDB_ACCESS_MODE");

/// Provisioning template with the same keys, as accepted by [`Settings::parse`](crate::Settings::parse).
pub const CONFIG: &str = concat!(
    "\n# WiFi setup\n",
    "WIFI_SSID=YOUR_WIFI_SSID\n",
    "WIFI_PASSWORD=YOUR_WIFI_PASSWORD\n",
    "\n# Firebase setup\n",
    "REFERENCE_URL=https://your-project-default-rtdb.firebaseio.com/\n",
    "AUTH_TOKEN=\n",
);
