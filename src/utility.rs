//! Utility functions for `KEY=VALUE` configuration parsing
//!
//! The format is the one used by [`CONFIG`](crate::configuration::CONFIG):
//! one `KEY=VALUE` pair per line, blank lines and `#` / `//` comments ignored,
//! values trimmed and optionally wrapped in double quotes.

use crate::error::{ConfigError, Result};

/// One `KEY=VALUE` pair and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Entry<'a> {
    /// 1-based line number
    pub line: usize,
    /// Key, trimmed
    pub key: &'a str,
    /// Value, trimmed and unquoted
    pub value: &'a str,
}

/// Iterate the entries of a configuration text.
///
/// Lines without `=` yield an error carrying their line number.
///
/// # Examples
///
/// ```
/// use rtdb_pico::utility::entries;
///
/// let text = "# WiFi\nWIFI_SSID=\"Home Network\"\n";
/// let entry = entries(text).next().unwrap()?;
/// assert_eq!((entry.line, entry.key, entry.value), (2, "WIFI_SSID", "Home Network"));
/// # Ok::<(), rtdb_pico::ConfigError>(())
/// ```
pub fn entries(text: &str) -> impl Iterator<Item = Result<Entry<'_>>> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            return None;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Some(Err(ConfigError::malformed_line(line_no)));
        };
        Some(Ok(Entry {
            line: line_no,
            key: key.trim(),
            value: unquote(value.trim()),
        }))
    })
}

/// Extracts the first value for `key`, skipping malformed lines.
///
/// # Returns
/// * `Option<&str>` - Value, `None` if the key is absent
pub fn get_value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    entries(text)
        .filter_map(core::result::Result::ok)
        .find(|entry| entry.key == key)
        .map(|entry| entry.value)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
