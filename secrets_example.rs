//! WiFi and Firebase secrets (kept out of VCS)
//!
//! Copy this file to `src/secrets.rs` and fill in your values before flashing.
//! `src/secrets.rs` is excluded from git via `.gitignore`.

/// WiFi SSID used for connection.
pub const WIFI_SSID: &str = "YOUR_WIFI_SSID";

/// WiFi password used for connection.
pub const WIFI_PASSWORD: &str = "YOUR_WIFI_PASSWORD";

/// Realtime Database reference URL.
pub const REFERENCE_URL: &str = "https://your-project-default-rtdb.firebaseio.com/";

/// Leave empty for test mode; set the database secret for locked mode.
pub const AUTH_TOKEN: &str = "";
