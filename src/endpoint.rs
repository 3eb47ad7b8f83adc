//! Firebase Realtime Database reference URL.
//!
//! A database is addressed by a single root URL:
//! - `https://<namespace>.firebaseio.com/` (us-central1)
//! - `https://<namespace>.<region>.firebasedatabase.app/` (other regions)
//!
//! Only the root is accepted as a reference; resource paths are appended
//! per request with [`DatabaseUrl::resource_url`].

use crate::auth::DatabaseAuth;
use crate::error::{ConfigError, Result};
use core::fmt::{self, Write};

/// Host suffix of databases in the default region.
pub const LEGACY_HOST_SUFFIX: &str = ".firebaseio.com";

/// Host suffix of regional databases.
pub const REGIONAL_HOST_SUFFIX: &str = ".firebasedatabase.app";

const SCHEME: &str = "https://";

/// Validated root URL of a realtime database.
///
/// # Examples
///
/// ```
/// use rtdb_pico::DatabaseUrl;
///
/// let url = DatabaseUrl::parse("https://my-app-default-rtdb.europe-west1.firebasedatabase.app/")?;
/// assert_eq!(url.namespace(), "my-app-default-rtdb");
/// assert_eq!(url.region(), Some("europe-west1"));
///
/// assert!(DatabaseUrl::parse("http://my-app.firebaseio.com/").is_err());
/// # Ok::<(), rtdb_pico::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DatabaseUrl<'a> {
    raw: &'a str,
    host: &'a str,
}

impl<'a> DatabaseUrl<'a> {
    /// Parse and validate a reference URL.
    ///
    /// # Errors
    ///
    /// - scheme other than `https`
    /// - userinfo, port, query, fragment or a non-root path
    /// - host labels that are empty or start or end with `-`
    /// - host other than `<name>.firebaseio.com` / `<name>.<region>.firebasedatabase.app`
    pub fn parse(raw: &'a str) -> Result<Self> {
        let Some(rest) = strip_prefix_ignore_case(raw, SCHEME) else {
            return Err(if raw.contains("://") {
                ConfigError::insecure_scheme()
            } else {
                ConfigError::malformed_url()
            });
        };

        let (host, path) = match rest.split_once('/') {
            Some((host, path)) => (host, Some(path)),
            None => (rest, None),
        };
        if path.is_some_and(|p| !p.is_empty()) {
            return Err(ConfigError::malformed_url());
        }
        if !is_valid_host(host) {
            return Err(ConfigError::malformed_url());
        }
        if !is_database_host(host) {
            return Err(ConfigError::unknown_host());
        }

        Ok(Self { raw, host })
    }

    /// URL as configured.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Host name, e.g. `my-app-default-rtdb.firebaseio.com`.
    #[inline]
    pub const fn host(&self) -> &'a str {
        self.host
    }

    /// Database name, the first host label.
    pub fn namespace(&self) -> &'a str {
        self.host.split('.').next().unwrap_or(self.host)
    }

    /// Region of a `firebasedatabase.app` database.
    ///
    /// `None` for `firebaseio.com` hosts, which live in us-central1.
    pub fn region(&self) -> Option<&'a str> {
        let stem = strip_suffix_ignore_case(self.host, REGIONAL_HOST_SUFFIX)?;
        stem.split_once('.').map(|(_, region)| region)
    }

    /// Build the REST URL of a node, `https://<host>/<path>.json`.
    ///
    /// In locked mode the token is appended as the `auth` query parameter.
    /// Leading and trailing `/` in `path` are ignored; an empty path is the root.
    /// Keys may hold any UTF-8; bytes outside the URL path set, `%` included,
    /// are percent-encoded.
    ///
    /// # Errors
    ///
    /// - an empty key, e.g. `a//b`
    /// - a key with a character not allowed in database keys
    /// - the URL does not fit in `N` bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use rtdb_pico::{DatabaseAuth, DatabaseUrl};
    ///
    /// let url = DatabaseUrl::parse("https://demo-default-rtdb.firebaseio.com/")?;
    /// let node = url.resource_url::<96>("/sensors/gas/", DatabaseAuth::Open)?;
    /// assert_eq!(node.as_str(), "https://demo-default-rtdb.firebaseio.com/sensors/gas.json");
    /// # Ok::<(), rtdb_pico::ConfigError>(())
    /// ```
    pub fn resource_url<const N: usize>(
        &self,
        path: &str,
        auth: DatabaseAuth<'_>,
    ) -> Result<heapless::String<N>> {
        let path = path.trim_matches('/');
        if !is_valid_path(path) {
            return Err(ConfigError::malformed_url());
        }

        let mut url = heapless::String::<N>::new();
        write!(url, "{SCHEME}{}/{}.json", self.host, Encoded(path))
            .map_err(|fmt::Error| ConfigError::url_too_long())?;
        if let Some(token) = auth.token() {
            write!(url, "?auth={}", token.expose()).map_err(|fmt::Error| ConfigError::url_too_long())?;
        }
        Ok(url)
    }
}

impl fmt::Display for DatabaseUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Path written with bytes outside the path-safe set percent-encoded.
struct Encoded<'a>(&'a str);

impl fmt::Display for Encoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.bytes() {
            if is_path_byte(b) {
                f.write_char(char::from(b))?;
            } else {
                write!(f, "%{b:02X}")?;
            }
        }
        Ok(())
    }
}

fn is_valid_host(host: &str) -> bool {
    !host.is_empty() && host.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

// `<name>.firebaseio.com` or `<name>.<region>.firebasedatabase.app`
fn is_database_host(host: &str) -> bool {
    let labels = |suffix: &str| {
        strip_suffix_ignore_case(host, suffix)
            .filter(|stem| !stem.is_empty())
            .map(|stem| stem.split('.').count())
    };
    labels(LEGACY_HOST_SUFFIX) == Some(1) || labels(REGIONAL_HOST_SUFFIX) == Some(2)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let (head, rest) = s.split_at_checked(prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then_some(rest)
}

fn strip_suffix_ignore_case<'a>(host: &'a str, suffix: &str) -> Option<&'a str> {
    let split = host.len().checked_sub(suffix.len())?;
    let (stem, tail) = host.split_at_checked(split)?;
    tail.eq_ignore_ascii_case(suffix).then_some(stem)
}

fn is_valid_path(path: &str) -> bool {
    path.is_empty() || path.split('/').all(|key| !key.is_empty() && !key.chars().any(is_forbidden_key_char))
}

fn is_forbidden_key_char(c: char) -> bool {
    c.is_whitespace() || c.is_control() || matches!(c, '.' | '$' | '#' | '[' | ']' | '?' | '&')
}

// Unreserved and sub-delimiter bytes that may stay literal in a URL path.
fn is_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'/' | b'-' | b'_' | b'~' | b'!' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=' | b':' | b'@'
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthToken;

    #[test]
    fn test_parse_legacy_host() {
        let url = DatabaseUrl::parse("https://gas-monitor-default-rtdb.firebaseio.com/").unwrap();
        assert_eq!(url.host(), "gas-monitor-default-rtdb.firebaseio.com");
        assert_eq!(url.namespace(), "gas-monitor-default-rtdb");
        assert_eq!(url.region(), None);
        assert_eq!(url.as_str(), "https://gas-monitor-default-rtdb.firebaseio.com/");
    }

    #[test]
    fn test_parse_without_trailing_slash() {
        let url = DatabaseUrl::parse("https://demo.firebaseio.com").unwrap();
        assert_eq!(url.host(), "demo.firebaseio.com");
    }

    #[test]
    fn test_parse_regional_host() {
        let url = DatabaseUrl::parse("https://demo-default-rtdb.asia-southeast1.firebasedatabase.app/")
            .unwrap();
        assert_eq!(url.namespace(), "demo-default-rtdb");
        assert_eq!(url.region(), Some("asia-southeast1"));
    }

    #[test]
    fn test_parse_case_insensitive() {
        let url = DatabaseUrl::parse("HTTPS://Demo.FirebaseIO.com/").unwrap();
        assert_eq!(url.namespace(), "Demo");
    }

    #[test]
    fn test_insecure_scheme() {
        for raw in [
            "http://demo.firebaseio.com/",
            "wss://demo.firebaseio.com/",
            "ftp://demo.firebaseio.com/",
        ] {
            match DatabaseUrl::parse(raw) {
                Err(ConfigError::Endpoint(e)) => assert!(e.is_insecure_scheme(), "{raw}"),
                other => panic!("unexpected for {raw}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed() {
        for raw in [
            "",
            "demo.firebaseio.com",
            "https://",
            "https:///",
            "https://demo.firebaseio.com/users",
            "https://demo.firebaseio.com:443/",
            "https://user@demo.firebaseio.com/",
            "https://demo.firebaseio.com?ns=demo",
            "https://demo..firebaseio.com/",
            "https://-demo.firebaseio.com/",
            "https://demo-.firebaseio.com/",
            "https://demo.-eu-.firebasedatabase.app/",
        ] {
            match DatabaseUrl::parse(raw) {
                Err(ConfigError::Endpoint(e)) => assert!(e.is_malformed(), "{raw}"),
                other => panic!("unexpected for {raw}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_host() {
        for raw in [
            "https://example.com/",
            "https://firebaseio.com/",
            "https://demo.firebaseio.com.evil.net/",
            "https://demo.firebasedatabase.app/",
            "https://demo.europe-west1.extra.firebasedatabase.app/",
            "https://a.demo.firebaseio.com/",
        ] {
            match DatabaseUrl::parse(raw) {
                Err(ConfigError::Endpoint(e)) => assert!(e.is_unknown_host(), "{raw}"),
                other => panic!("unexpected for {raw}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_resource_url_open() {
        let url = DatabaseUrl::parse("https://demo.firebaseio.com/").unwrap();
        let node = url.resource_url::<64>("readings/latest", DatabaseAuth::Open).unwrap();
        assert_eq!(node.as_str(), "https://demo.firebaseio.com/readings/latest.json");

        let root = url.resource_url::<64>("", DatabaseAuth::Open).unwrap();
        assert_eq!(root.as_str(), "https://demo.firebaseio.com/.json");
    }

    #[test]
    fn test_resource_url_locked() {
        let url = DatabaseUrl::parse("https://demo.firebaseio.com/").unwrap();
        let auth = DatabaseAuth::Locked(AuthToken::new("s3cr3t").unwrap());
        let node = url.resource_url::<64>("/gas", auth).unwrap();
        assert_eq!(node.as_str(), "https://demo.firebaseio.com/gas.json?auth=s3cr3t");
    }

    #[test]
    fn test_resource_url_rejects_invalid_keys() {
        let url = DatabaseUrl::parse("https://demo.firebaseio.com/").unwrap();
        for path in [
            "a.b",
            "a$b",
            "a#b",
            "list[0]",
            "a b",
            "x?print=pretty",
            "a&b",
            "tab\there",
            "nbsp\u{a0}key",
            "a//b",
            "readings///latest",
        ] {
            match url.resource_url::<64>(path, DatabaseAuth::Open) {
                Err(ConfigError::Endpoint(e)) => assert!(e.is_malformed(), "{path}"),
                other => panic!("unexpected for {path}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_resource_url_encodes_keys() {
        let url = DatabaseUrl::parse("https://demo.firebaseio.com/").unwrap();

        let node = url.resource_url::<64>("capteurs/température", DatabaseAuth::Open).unwrap();
        assert_eq!(node.as_str(), "https://demo.firebaseio.com/capteurs/temp%C3%A9rature.json");

        let node = url.resource_url::<64>("a%2", DatabaseAuth::Open).unwrap();
        assert_eq!(node.as_str(), "https://demo.firebaseio.com/a%252.json");

        let node = url.resource_url::<64>("users/a+b=c:d@e", DatabaseAuth::Open).unwrap();
        assert_eq!(node.as_str(), "https://demo.firebaseio.com/users/a+b=c:d@e.json");

        let node = url.resource_url::<64>("say\"hi\"", DatabaseAuth::Open).unwrap();
        assert_eq!(node.as_str(), "https://demo.firebaseio.com/say%22hi%22.json");
    }

    #[test]
    fn test_resource_url_too_long() {
        let url = DatabaseUrl::parse("https://demo.firebaseio.com/").unwrap();
        match url.resource_url::<16>("readings", DatabaseAuth::Open) {
            Err(ConfigError::Endpoint(e)) => assert!(e.is_too_long()),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
