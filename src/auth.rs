//! Firebase Realtime Database access modes.
//!
//! The database either runs in **test mode**, where the rules allow public
//! read/write and any configured token is inert, or in **locked mode**, where
//! the rules require `auth != null` and every request carries the database
//! secret. Which one applies is decided by the rules on the remote service;
//! this module makes the choice explicit on the firmware side so that the two
//! cannot be mixed up locally.

use crate::error::{ConfigError, Result};
use core::fmt;
use core::str::FromStr;

/// Longest token accepted. Legacy database secrets are 40 characters,
/// ID tokens are JWTs of around 1 KiB.
pub const MAX_TOKEN_LEN: usize = 1024;

/// Number of trailing token characters shown by the redacted formatters.
const VISIBLE_SUFFIX: usize = 4;

/// Shorter tokens are redacted completely.
const MIN_PARTIAL_REDACT_LEN: usize = 16;

/// Access mode configured in the database rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AccessMode {
    /// Test mode: unauthenticated read/write.
    Open,
    /// Locked mode: every request must be authenticated.
    Locked,
}

impl AccessMode {
    /// Rules document the database must carry for this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtdb_pico::AccessMode;
    ///
    /// assert!(AccessMode::Locked.rules().contains("auth != null"));
    /// ```
    pub const fn rules(self) -> &'static str {
        match self {
            AccessMode::Open => {
                r#"{
  "rules": {
    ".read": "true",
    ".write": "true"
  }
}"#
            }
            AccessMode::Locked => {
                r#"{
  "rules": {
    ".read": "auth != null",
    ".write": "auth != null"
  }
}"#
            }
        }
    }

    /// True if requests must carry a token.
    #[inline]
    pub const fn requires_token(self) -> bool {
        matches!(self, AccessMode::Locked)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Open => f.write_str("open"),
            AccessMode::Locked => f.write_str("locked"),
        }
    }
}

impl FromStr for AccessMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("open") || s.eq_ignore_ascii_case("test") {
            Ok(AccessMode::Open)
        } else if s.eq_ignore_ascii_case("locked") || s.eq_ignore_ascii_case("auth") {
            Ok(AccessMode::Locked)
        } else {
            Err(ConfigError::unknown_mode())
        }
    }
}

/// Database secret or ID token.
///
/// Formatting with `{}` or `{:?}` only reveals the last four characters, and
/// nothing at all for tokens under 16 characters. Use [`AuthToken::expose`]
/// to get the text for a request.
///
/// Tokens are limited to the base64url alphabet plus `.`, which covers
/// legacy database secrets and JWTs, so they go into a query string as is.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AuthToken<'a> {
    raw: &'a str,
}

impl<'a> AuthToken<'a> {
    /// Validate a token.
    ///
    /// # Errors
    ///
    /// - empty token
    /// - characters other than `A-Z`, `a-z`, `0-9`, `-`, `_` and `.`
    /// - longer than [`MAX_TOKEN_LEN`]
    pub fn new(raw: &'a str) -> Result<Self> {
        if raw.is_empty() {
            return Err(ConfigError::missing_token());
        }
        if raw.len() > MAX_TOKEN_LEN {
            return Err(ConfigError::token_too_long());
        }
        if !raw.bytes().all(is_token_byte) {
            return Err(ConfigError::invalid_token());
        }
        Ok(Self { raw })
    }

    /// Raw token text, e.g. for the `auth` query parameter.
    #[inline]
    pub const fn expose(&self) -> &'a str {
        self.raw
    }

    /// Last characters of the token, for logs. Empty for short tokens.
    pub fn suffix(&self) -> &'a str {
        if self.raw.len() < MIN_PARTIAL_REDACT_LEN {
            return "";
        }
        // Tokens are ASCII, so any byte offset is a char boundary.
        &self.raw[self.raw.len() - VISIBLE_SUFFIX..]
    }
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.')
}

impl fmt::Display for AuthToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "****{}", self.suffix())
    }
}

impl fmt::Debug for AuthToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(****{})", self.suffix())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AuthToken<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "****{=str}", self.suffix());
    }
}

/// How the firmware authenticates against the database.
///
/// # Examples
///
/// ```
/// use rtdb_pico::{AccessMode, DatabaseAuth};
///
/// // An empty token selects test mode
/// assert_eq!(DatabaseAuth::from_token("")?.mode(), AccessMode::Open);
///
/// let auth = DatabaseAuth::from_token("a1B2c3D4e5F6g7H8i9J0k1L2m3N4o5P6q7R8s9T0")?;
/// assert_eq!(auth.mode(), AccessMode::Locked);
/// assert_eq!(auth.to_string(), "locked (****s9T0)");
/// # Ok::<(), rtdb_pico::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DatabaseAuth<'a> {
    /// Test mode, no token sent.
    Open,
    /// Locked mode with the token to send.
    Locked(AuthToken<'a>),
}

impl<'a> DatabaseAuth<'a> {
    /// Infer the mode from the token: empty means open, anything else locked.
    pub fn from_token(token: &'a str) -> Result<Self> {
        if token.is_empty() {
            Ok(DatabaseAuth::Open)
        } else {
            AuthToken::new(token).map(DatabaseAuth::Locked)
        }
    }

    /// Use an explicitly chosen mode.
    ///
    /// In open mode a configured token is ignored, not validated.
    pub fn with_mode(mode: AccessMode, token: &'a str) -> Result<Self> {
        match mode {
            AccessMode::Open => {
                if !token.is_empty() {
                    pico_log!(warn, "auth token configured but ignored in test mode");
                }
                Ok(DatabaseAuth::Open)
            }
            AccessMode::Locked => AuthToken::new(token).map(DatabaseAuth::Locked),
        }
    }

    /// Mode this auth corresponds to.
    #[inline]
    pub const fn mode(&self) -> AccessMode {
        match self {
            DatabaseAuth::Open => AccessMode::Open,
            DatabaseAuth::Locked(_) => AccessMode::Locked,
        }
    }

    /// Token to send, if any.
    #[inline]
    pub const fn token(&self) -> Option<AuthToken<'a>> {
        match self {
            DatabaseAuth::Open => None,
            DatabaseAuth::Locked(token) => Some(*token),
        }
    }
}

impl fmt::Display for DatabaseAuth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseAuth::Open => f.write_str("open"),
            DatabaseAuth::Locked(token) => write!(f, "locked ({token})"),
        }
    }
}
