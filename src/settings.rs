//! Validated firmware settings.
//!
//! [`Settings`] bundles the WiFi credentials and the database reference into
//! typed values. It is built either from the compiled-in constants
//! ([`Settings::builtin`]) or from a `KEY=VALUE` text received at runtime
//! ([`Settings::parse`]), e.g. over USB serial during provisioning.

use crate::auth::{AccessMode, DatabaseAuth};
use crate::configuration;
use crate::endpoint::DatabaseUrl;
use crate::error::{ConfigError, Result};
use crate::utility::entries;
use crate::wifi::WifiCredentials;
use core::fmt;

/// Database reference and the way to authenticate against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DatabaseSettings<'a> {
    /// Root URL
    pub url: DatabaseUrl<'a>,
    /// Access mode and token
    pub auth: DatabaseAuth<'a>,
}

impl DatabaseSettings<'_> {
    /// Access mode in effect.
    #[inline]
    pub const fn mode(&self) -> AccessMode {
        self.auth.mode()
    }
}

/// Complete, validated configuration.
///
/// # Examples
///
/// ```
/// use rtdb_pico::{AccessMode, Settings};
///
/// let settings = Settings::from_parts(
///     "HomeNetwork",
///     "password123",
///     "https://demo-default-rtdb.firebaseio.com/",
///     "",
/// )?;
/// assert_eq!(settings.wifi.ssid(), "HomeNetwork");
/// assert_eq!(settings.database.mode(), AccessMode::Open);
/// # Ok::<(), rtdb_pico::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings<'a> {
    /// WiFi station credentials
    pub wifi: WifiCredentials<'a>,
    /// Realtime database
    pub database: DatabaseSettings<'a>,
}

impl<'a> Settings<'a> {
    /// Validate the four configuration values; the mode follows the token.
    pub fn from_parts(ssid: &'a str, password: &'a str, url: &'a str, token: &'a str) -> Result<Self> {
        Self::with_mode(ssid, password, url, token, None)
    }

    /// Validate the four configuration values with an optionally pinned mode.
    ///
    /// With `None` an empty token means test mode. See [`DatabaseAuth::with_mode`]
    /// for a pinned mode.
    pub fn with_mode(
        ssid: &'a str,
        password: &'a str,
        url: &'a str,
        token: &'a str,
        mode: Option<AccessMode>,
    ) -> Result<Self> {
        let wifi = WifiCredentials::new(ssid, password)?;
        let url = DatabaseUrl::parse(url)?;
        let auth = match mode {
            Some(mode) => DatabaseAuth::with_mode(mode, token)?,
            None => DatabaseAuth::from_token(token)?,
        };

        Ok(Self {
            wifi,
            database: DatabaseSettings { url, auth },
        })
    }

    /// Load settings from a `KEY=VALUE` text.
    ///
    /// Recognised keys: `WIFI_SSID` (or `WIFI_NETWORK`), `WIFI_PASSWORD`,
    /// `REFERENCE_URL`, `AUTH_TOKEN`, `ACCESS_MODE`. `WIFI_SSID`, `WIFI_PASSWORD`
    /// and `REFERENCE_URL` are required; the token defaults to empty and the
    /// mode is inferred from it unless given.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtdb_pico::{AccessMode, Settings};
    ///
    /// let text = "
    /// WIFI_SSID=HomeNetwork
    /// WIFI_PASSWORD=password123
    /// REFERENCE_URL=https://demo-default-rtdb.firebaseio.com/
    /// AUTH_TOKEN=a1B2c3D4e5F6g7H8i9J0
    /// ";
    /// let settings = Settings::parse(text)?;
    /// assert_eq!(settings.database.mode(), AccessMode::Locked);
    /// # Ok::<(), rtdb_pico::ConfigError>(())
    /// ```
    pub fn parse(text: &'a str) -> Result<Self> {
        let mut ssid = None;
        let mut password = None;
        let mut url = None;
        let mut token = None;
        let mut mode = None;

        for entry in entries(text) {
            let entry = entry?;
            let slot = match entry.key {
                "WIFI_SSID" | "WIFI_NETWORK" => &mut ssid,
                "WIFI_PASSWORD" => &mut password,
                "REFERENCE_URL" => &mut url,
                "AUTH_TOKEN" => &mut token,
                "ACCESS_MODE" => &mut mode,
                _ => return Err(ConfigError::unknown_key(entry.line)),
            };
            if slot.is_some() {
                return Err(ConfigError::duplicate_key(entry.line));
            }
            *slot = Some(entry.value);
        }

        let ssid = ssid.ok_or_else(|| ConfigError::missing_key("WIFI_SSID"))?;
        let password = password.ok_or_else(|| ConfigError::missing_key("WIFI_PASSWORD"))?;
        let url = url.ok_or_else(|| ConfigError::missing_key("REFERENCE_URL"))?;
        let mode = pinned_mode(mode)?;

        Self::with_mode(ssid, password, url, token.unwrap_or_default(), mode)
    }
}

/// Resolve an access mode name given alongside the values, if any.
pub(crate) fn pinned_mode(name: Option<&str>) -> Result<Option<AccessMode>> {
    name.map(str::parse::<AccessMode>).transpose()
}

impl Settings<'static> {
    /// Validate the compiled-in configuration.
    ///
    /// Honours `RTDB_ACCESS_MODE` if it was set at build time.
    pub fn builtin() -> Result<Self> {
        let mode = pinned_mode(configuration::ACCESS_MODE)?;
        let settings = Self::with_mode(
            configuration::WIFI_SSID,
            configuration::WIFI_PASSWORD,
            configuration::REFERENCE_URL,
            configuration::AUTH_TOKEN,
            mode,
        )?;

        pico_log!(debug, "WiFi SSID: {}", settings.wifi.ssid());
        pico_log!(debug, "Database host: {}", settings.database.url.host());
        pico_log!(debug, "Database access mode: {}", settings.database.mode());

        Ok(settings)
    }
}

impl fmt::Display for Settings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ssid={} database={} auth={}",
            self.wifi.ssid(),
            self.database.url.host(),
            self.database.auth
        )
    }
}
