//! URL helpers.

use serde::{Deserialize, Serialize};

/// Prefix `http://` unless the address is blank or already starts with `http`.
///
/// Useful for user-submitted addresses. Blank input is returned as is.
pub fn urlify(addr: &str) -> String {
    if addr.trim().is_empty() || addr.starts_with("http") {
        addr.to_string()
    } else {
        format!("http://{}", addr)
    }
}

/// Request metadata needed to build absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Scheme with separator, e.g. `https://`
    pub protocol: String,
    /// Host, with the port when it is not the default one
    pub host_with_port: String,
}

impl RequestInfo {
    pub fn new(protocol: impl Into<String>, host_with_port: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host_with_port: host_with_port.into(),
        }
    }

    /// e.g. `http://localhost:3000`
    pub fn base_url(&self) -> String {
        format!("{}{}", self.protocol, self.host_with_port)
    }

    /// Absolute URL of an image. Bare file names live under `/images/`.
    pub fn image_url(&self, source: &str) -> String {
        if source.contains("://") {
            return source.to_string();
        }
        if source.starts_with('/') {
            format!("{}{}", self.base_url(), source)
        } else {
            format!("{}/images/{}", self.base_url(), source)
        }
    }
}
