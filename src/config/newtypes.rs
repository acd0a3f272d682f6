//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API host, with an optional port.
///
/// The host is the authority part of the target URL. It must not carry a
/// scheme, path, or whitespace.
///
/// # Example
///
/// ```rust
/// use cellar_client::Host;
///
/// let host = Host::new("cellar.example.com:8080").unwrap();
/// assert_eq!(host.as_ref(), "cellar.example.com:8080");
/// assert_eq!(host.host_name(), "cellar.example.com");
/// assert_eq!(host.port(), Some(8080));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    /// Creates a new validated host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] if the host is empty, or
    /// [`ConfigError::InvalidHost`] if it contains a scheme, path, whitespace,
    /// or a non-numeric port.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        let host = host.trim();

        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let invalid = || ConfigError::InvalidHost {
            host: host.to_string(),
        };

        if host.contains("://") || host.contains(['/', '?', '#', '@']) {
            return Err(invalid());
        }
        if host.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        // Bracketed IPv6 literals keep their colons inside the brackets
        let port_part = if host.starts_with('[') {
            let close = host.find(']').ok_or_else(invalid)?;
            match &host[close + 1..] {
                "" => None,
                rest => Some(rest.strip_prefix(':').ok_or_else(invalid)?),
            }
        } else {
            host.split_once(':').map(|(_, port)| port)
        };

        if let Some(port) = port_part {
            if port.parse::<u16>().is_err() {
                return Err(invalid());
            }
        }

        Ok(Self(host.to_string()))
    }

    /// Returns the host name without the port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        let host = self.0.as_str();
        if host.starts_with('[') {
            return host.find(']').map_or(host, |close| &host[..=close]);
        }
        host.split_once(':').map_or(host, |(name, _)| name)
    }

    /// Returns the explicit port, if one was given.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        let name_len = self.host_name().len();
        self.0[name_len..]
            .strip_prefix(':')
            .and_then(|port| port.parse().ok())
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// The URL scheme used to reach the API.
///
/// Parsing is case-insensitive. When no scheme is configured, requests
/// use [`Scheme::Http`].
///
/// # Example
///
/// ```rust
/// use cellar_client::Scheme;
///
/// let scheme: Scheme = "HTTPS".parse().unwrap();
/// assert_eq!(scheme, Scheme::Https);
/// assert_eq!(scheme.as_str(), "https");
/// assert_eq!(Scheme::default(), Scheme::Http);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Unencrypted HTTP.
    #[default]
    Http,
    /// HTTP over TLS.
    Https,
}

impl Scheme {
    /// Creates a scheme from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScheme`] for anything other than
    /// `http` or `https`.
    pub fn new(scheme: impl AsRef<str>) -> Result<Self, ConfigError> {
        let scheme = scheme.as_ref().trim();
        if scheme.eq_ignore_ascii_case("http") {
            Ok(Self::Http)
        } else if scheme.eq_ignore_ascii_case("https") {
            Ok(Self::Https)
        } else {
            Err(ConfigError::InvalidScheme {
                scheme: scheme.to_string(),
            })
        }
    }

    /// Returns the lowercase scheme string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl std::str::FromStr for Scheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Scheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Scheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
