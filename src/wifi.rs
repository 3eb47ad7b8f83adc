//! WiFi station credentials.
//!
//! A thin validated view over the SSID/password pair handed to the radio's
//! join routine (e.g. `cyw43::Control::join`).

use crate::error::{ConfigError, Result};
use core::fmt;

/// Maximum SSID length in bytes (IEEE 802.11).
pub const MAX_SSID_LEN: usize = 32;

/// Shortest WPA2 passphrase.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Longest WPA2 passphrase; 64 characters is a raw hex PSK.
pub const MAX_PASSPHRASE_LEN: usize = 63;

/// Length of a raw pre-shared key written as hex digits.
pub const RAW_PSK_LEN: usize = 64;

/// Validated WiFi SSID and password.
///
/// Both are required: the firmware only joins WPA2 networks.
///
/// # Examples
///
/// ```
/// use rtdb_pico::WifiCredentials;
///
/// let wifi = WifiCredentials::new("HomeNetwork", "correct horse")?;
/// assert_eq!(wifi.ssid(), "HomeNetwork");
/// assert!(WifiCredentials::new("CoffeeShop", "").is_err());
///
/// // The password never shows up in debug output
/// assert!(!format!("{wifi:?}").contains("horse"));
/// # Ok::<(), rtdb_pico::ConfigError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials<'a> {
    ssid: &'a str,
    password: &'a str,
}

impl<'a> WifiCredentials<'a> {
    /// Validate an SSID/password pair.
    ///
    /// # Errors
    ///
    /// - SSID empty or longer than [`MAX_SSID_LEN`] bytes
    /// - password that is neither a WPA2 passphrase nor a 64-digit hex PSK
    pub fn new(ssid: &'a str, password: &'a str) -> Result<Self> {
        if ssid.is_empty() {
            return Err(ConfigError::empty_ssid());
        }
        if ssid.len() > MAX_SSID_LEN {
            return Err(ConfigError::ssid_too_long());
        }
        if !is_valid_password(password) {
            return Err(ConfigError::invalid_password());
        }

        Ok(Self { ssid, password })
    }

    /// Network name.
    #[inline]
    pub const fn ssid(&self) -> &'a str {
        self.ssid
    }

    /// Network password.
    #[inline]
    pub const fn password(&self) -> &'a str {
        self.password
    }
}

fn is_valid_password(password: &str) -> bool {
    let len = password.len();
    if len == RAW_PSK_LEN {
        return password.bytes().all(|b| b.is_ascii_hexdigit());
    }
    (MIN_PASSPHRASE_LEN..=MAX_PASSPHRASE_LEN).contains(&len)
        && password.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

impl fmt::Debug for WifiCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WifiCredentials<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "WifiCredentials {{ ssid: {=str}, password: <redacted> }}", self.ssid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passphrase() {
        let wifi = WifiCredentials::new("HomeNetwork", "gas-sensor-01").unwrap();
        assert_eq!(wifi.ssid(), "HomeNetwork");
        assert_eq!(wifi.password(), "gas-sensor-01");
    }

    #[test]
    fn test_empty_password() {
        match WifiCredentials::new("CoffeeShop", "") {
            Err(ConfigError::Credentials(e)) => assert!(e.is_invalid_password()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_empty_ssid() {
        match WifiCredentials::new("", "password123") {
            Err(ConfigError::Credentials(e)) => assert!(e.is_empty_ssid()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_ssid_length_limit() {
        let max = "a".repeat(MAX_SSID_LEN);
        assert!(WifiCredentials::new(&max, "password123").is_ok());

        let over = "a".repeat(MAX_SSID_LEN + 1);
        match WifiCredentials::new(&over, "password123") {
            Err(ConfigError::Credentials(e)) => assert!(e.is_ssid_too_long()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_passphrase_bounds() {
        assert!(WifiCredentials::new("net", "1234567").is_err());
        assert!(WifiCredentials::new("net", "12345678").is_ok());

        let longest = "x".repeat(MAX_PASSPHRASE_LEN);
        assert!(WifiCredentials::new("net", &longest).is_ok());
    }

    #[test]
    fn test_raw_psk() {
        let psk = "0123456789abcdef".repeat(4);
        assert!(WifiCredentials::new("net", &psk).is_ok());

        let not_hex = "g".repeat(RAW_PSK_LEN);
        match WifiCredentials::new("net", &not_hex) {
            Err(ConfigError::Credentials(e)) => assert!(e.is_invalid_password()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_non_printable_password() {
        assert!(WifiCredentials::new("net", "pass\tword").is_err());
        assert!(WifiCredentials::new("net", "pässwörd").is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let wifi = WifiCredentials::new("HomeNetwork", "s3cret-pass").unwrap();
        let debug = format!("{wifi:?}");
        assert!(debug.contains("HomeNetwork"));
        assert!(!debug.contains("s3cret"));
    }
}
