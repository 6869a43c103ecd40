//
//  clumio-sdk
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Host Configuration Module
//!
//! Helpers for turning the configured hostname into the base URL every
//! request is rooted at.
//!
//! ## Usage
//!
//! ```rust
//! use clumio_sdk::config::{base_url, normalize_host, DEFAULT_HOSTNAME};
//!
//! assert_eq!(normalize_host(" US-WEST-2.api.clumio.com/ "), DEFAULT_HOSTNAME);
//!
//! let url = base_url("http://127.0.0.1:8080").unwrap();
//! assert_eq!(url.as_str(), "http://127.0.0.1:8080/");
//! ```

use url::Url;

use crate::api::common::{ClumioError, Result};

/// The hostname used when none is configured.
pub const DEFAULT_HOSTNAME: &str = "us-west-2.api.clumio.com";

/// Regional API hostnames.
pub const REGIONAL_HOSTNAMES: &[&str] = &[
    "us-west-2.api.clumio.com",
    "us-east-1.api.clumio.com",
    "ca-central-1.ca.api.clumio.com",
    "eu-central-1.de.api.clumio.com",
];

/// Trims whitespace and trailing slashes; bare hostnames are lowercased.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        host.to_lowercase()
    }
}

/// Resolves a hostname into a base URL.
///
/// A bare hostname is addressed over HTTPS. A value that already carries a
/// scheme is used as given, which is how fixtures and proxies with path
/// prefixes are configured. The returned URL always ends in `/`.
pub fn base_url(hostname: &str) -> Result<Url> {
    let host = normalize_host(hostname);
    if host.is_empty() {
        return Err(ClumioError::configuration("hostname must not be empty"));
    }

    let raw = if host.contains("://") {
        host
    } else {
        format!("https://{host}")
    };

    let mut url = Url::parse(&raw)
        .map_err(|e| ClumioError::configuration(format!("invalid hostname `{hostname}`: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(ClumioError::configuration(format!(
            "hostname `{hostname}` cannot be used as a base URL"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_hosts_resolve_to_https() {
        for host in REGIONAL_HOSTNAMES {
            let url = base_url(host).unwrap();
            assert_eq!(url.scheme(), "https");
            assert_eq!(url.host_str(), Some(*host));
        }
    }

    #[test]
    fn test_path_prefix_gains_trailing_slash() {
        let url = base_url("http://localhost:9000/clumio").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/clumio/");
    }

    #[test]
    fn test_empty_hostname_is_rejected() {
        assert!(base_url("  ").is_err());
    }
}
