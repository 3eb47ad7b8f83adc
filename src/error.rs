//! Error types for configuration validation following M-ERRORS-CANONICAL-STRUCTS guideline.
//!
//! This module provides structured error types with backtraces (when std is enabled)
//! and helper methods for error information. Error values never carry the
//! secret text that failed validation.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for configuration operations.
pub type Result<T> = core::result::Result<T, ConfigError>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// WiFi credential error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum CredentialsErrorKind {
    EmptySsid,
    SsidTooLong,
    InvalidPassword,
}

/// Database endpoint error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum EndpointErrorKind {
    InsecureScheme,
    Malformed,
    UnknownHost,
    TooLong,
}

/// Database auth error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum AuthErrorKind {
    MissingToken,
    InvalidToken,
    TokenTooLong,
    UnknownMode,
}

/// `KEY=VALUE` loader error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum ParseErrorKind {
    MalformedLine,
    UnknownKey,
    DuplicateKey,
    MissingKey,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// Configuration error types.
///
/// This is the main error type returned by all validation operations.
/// It contains a backtrace (when std feature is enabled) and detailed
/// error information through helper methods.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// WiFi SSID/password errors
    Credentials(CredentialsError),
    /// Database reference URL errors
    Endpoint(EndpointError),
    /// Auth token and access mode errors
    Auth(AuthError),
    /// Errors from the `KEY=VALUE` loader
    Parse(ParseError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// WiFi credential error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CredentialsError {
    kind: CredentialsErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl CredentialsError {
    pub(crate) fn new(kind: CredentialsErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if the SSID was empty
    pub fn is_empty_ssid(&self) -> bool {
        matches!(self.kind, CredentialsErrorKind::EmptySsid)
    }

    /// Check if the SSID exceeded 32 bytes
    pub fn is_ssid_too_long(&self) -> bool {
        matches!(self.kind, CredentialsErrorKind::SsidTooLong)
    }

    /// Check if the password is neither a passphrase nor a raw PSK
    pub fn is_invalid_password(&self) -> bool {
        matches!(self.kind, CredentialsErrorKind::InvalidPassword)
    }
}

/// Endpoint error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointError {
    kind: EndpointErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl EndpointError {
    pub(crate) fn new(kind: EndpointErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if the URL does not use `https://`
    pub fn is_insecure_scheme(&self) -> bool {
        matches!(self.kind, EndpointErrorKind::InsecureScheme)
    }

    /// Check if the URL could not be parsed
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, EndpointErrorKind::Malformed)
    }

    /// Check if the host is not a realtime database host
    pub fn is_unknown_host(&self) -> bool {
        matches!(self.kind, EndpointErrorKind::UnknownHost)
    }

    /// Check if a formatted URL did not fit its buffer
    pub fn is_too_long(&self) -> bool {
        matches!(self.kind, EndpointErrorKind::TooLong)
    }
}

/// Auth error with optional backtrace
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AuthError {
    kind: AuthErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl AuthError {
    pub(crate) fn new(kind: AuthErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if locked mode was selected without a token
    pub fn is_missing_token(&self) -> bool {
        matches!(self.kind, AuthErrorKind::MissingToken)
    }

    /// Check if the token contains characters outside the base64url alphabet and `.`
    pub fn is_invalid_token(&self) -> bool {
        matches!(self.kind, AuthErrorKind::InvalidToken)
    }

    /// Check if the token exceeded the maximum length
    pub fn is_token_too_long(&self) -> bool {
        matches!(self.kind, AuthErrorKind::TokenTooLong)
    }

    /// Check if an access mode name was not recognised
    pub fn is_unknown_mode(&self) -> bool {
        matches!(self.kind, AuthErrorKind::UnknownMode)
    }
}

/// Loader error with the 1-based line it occurred on, or the key that was missing
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    kind: ParseErrorKind,
    line: usize,
    key: Option<&'static str>,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            key: None,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Line the error refers to; 0 for a key missing from the whole text.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Required key that was absent, for [`is_missing_key`](Self::is_missing_key) errors.
    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    /// Check if a line had no `=`
    pub fn is_malformed_line(&self) -> bool {
        matches!(self.kind, ParseErrorKind::MalformedLine)
    }

    /// Check if a key was not recognised
    pub fn is_unknown_key(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnknownKey)
    }

    /// Check if a key appeared twice
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.kind, ParseErrorKind::DuplicateKey)
    }

    /// Check if a required key was absent
    pub fn is_missing_key(&self) -> bool {
        matches!(self.kind, ParseErrorKind::MissingKey)
    }
}

// =============================================================================
// Convenience Constructors for ConfigError
// =============================================================================

impl ConfigError {
    // Credentials errors
    pub(crate) fn empty_ssid() -> Self {
        Self::Credentials(CredentialsError::new(CredentialsErrorKind::EmptySsid))
    }

    pub(crate) fn ssid_too_long() -> Self {
        Self::Credentials(CredentialsError::new(CredentialsErrorKind::SsidTooLong))
    }

    pub(crate) fn invalid_password() -> Self {
        Self::Credentials(CredentialsError::new(CredentialsErrorKind::InvalidPassword))
    }

    // Endpoint errors
    pub(crate) fn insecure_scheme() -> Self {
        Self::Endpoint(EndpointError::new(EndpointErrorKind::InsecureScheme))
    }

    pub(crate) fn malformed_url() -> Self {
        Self::Endpoint(EndpointError::new(EndpointErrorKind::Malformed))
    }

    pub(crate) fn unknown_host() -> Self {
        Self::Endpoint(EndpointError::new(EndpointErrorKind::UnknownHost))
    }

    pub(crate) fn url_too_long() -> Self {
        Self::Endpoint(EndpointError::new(EndpointErrorKind::TooLong))
    }

    // Auth errors
    pub(crate) fn missing_token() -> Self {
        Self::Auth(AuthError::new(AuthErrorKind::MissingToken))
    }

    pub(crate) fn invalid_token() -> Self {
        Self::Auth(AuthError::new(AuthErrorKind::InvalidToken))
    }

    pub(crate) fn token_too_long() -> Self {
        Self::Auth(AuthError::new(AuthErrorKind::TokenTooLong))
    }

    pub(crate) fn unknown_mode() -> Self {
        Self::Auth(AuthError::new(AuthErrorKind::UnknownMode))
    }

    // Loader errors
    pub(crate) fn malformed_line(line: usize) -> Self {
        Self::Parse(ParseError::new(ParseErrorKind::MalformedLine, line))
    }

    pub(crate) fn unknown_key(line: usize) -> Self {
        Self::Parse(ParseError::new(ParseErrorKind::UnknownKey, line))
    }

    pub(crate) fn duplicate_key(line: usize) -> Self {
        Self::Parse(ParseError::new(ParseErrorKind::DuplicateKey, line))
    }

    pub(crate) fn missing_key(key: &'static str) -> Self {
        let mut err = ParseError::new(ParseErrorKind::MissingKey, 0);
        err.key = Some(key);
        Self::Parse(err)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Credentials(e) => write!(f, "WiFi credentials error: {:?}", e.kind),
            ConfigError::Endpoint(e) => write!(f, "Database URL error: {:?}", e.kind),
            ConfigError::Auth(e) => write!(f, "Database auth error: {:?}", e.kind),
            ConfigError::Parse(e) => match e.key {
                Some(key) => write!(f, "Config error: {:?} {}", e.kind, key),
                None => write!(f, "Config error on line {}: {:?}", e.line, e.kind),
            },
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_match_kind() {
        let ConfigError::Credentials(e) = ConfigError::empty_ssid() else {
            panic!("expected credentials error");
        };
        assert!(e.is_empty_ssid());
        assert!(!e.is_ssid_too_long());

        let ConfigError::Auth(e) = ConfigError::missing_token() else {
            panic!("expected auth error");
        };
        assert!(e.is_missing_token());
        assert!(!e.is_invalid_token());
    }

    #[test]
    fn test_missing_key_has_no_line() {
        let err = ConfigError::missing_key("REFERENCE_URL");
        assert_eq!(format!("{err}"), "Config error: MissingKey REFERENCE_URL");

        let ConfigError::Parse(e) = err else {
            panic!("expected parse error");
        };
        assert!(e.is_missing_key());
        assert_eq!(e.key(), Some("REFERENCE_URL"));
        assert_eq!(e.line(), 0);
    }

    #[test]
    fn test_display_includes_line() {
        let err = ConfigError::unknown_key(7);
        assert_eq!(format!("{err}"), "Config error on line 7: UnknownKey");

        let ConfigError::Parse(e) = err else {
            panic!("expected parse error");
        };
        assert_eq!(e.key(), None);
    }

    #[test]
    fn test_display_endpoint() {
        let err = ConfigError::insecure_scheme();
        assert_eq!(format!("{err}"), "Database URL error: InsecureScheme");
    }
}
