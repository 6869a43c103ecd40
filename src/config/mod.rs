//
//  clumio-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Construction-time settings shared by every controller: API host, bearer
//! token, organizational-unit context, custom headers, the response mode, the
//! pagination retry policy, and the shared HTTP client handle.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clumio_sdk::config::Config;
//!
//! // Token from CLUMIO_API_TOKEN, default region.
//! let config = Config::builder().build()?;
//!
//! // Everything explicit.
//! let config = Config::builder()
//!     .api_token("my-token")
//!     .hostname("eu-central-1.de.api.clumio.com")
//!     .organizational_unit_context("9c2934fc-ff4d-11e9-8e11-76706df7fe01")
//!     .custom_header("x-request-source", "nightly-audit")
//!     .raw_response(true)
//!     .build()?;
//! # Ok::<(), clumio_sdk::ClumioError>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: TOML profile file
//! - [`hosts`]: Hostname and base URL helpers

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::api::common::{ClumioError, Result};
use crate::api::HttpClient;

/// Environment variable consulted when no token is given explicitly.
pub const API_TOKEN_ENV: &str = "CLUMIO_API_TOKEN";

/// Which result shape operations return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Only the decoded model.
    #[default]
    Parsed,

    /// The raw HTTP response alongside the decoded model.
    WithRaw,
}

/// Bounded exponential backoff for connection failures during pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per page, including the first.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = self.multiplier.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }
}

/// Client configuration. Immutable once built.
pub struct Config {
    hostname: String,
    api_token: String,
    organizational_unit_context: String,
    custom_headers: HeaderMap,
    raw_response: bool,
    retry: RetryPolicy,
    timeout: Option<Duration>,
    client: OnceCell<Arc<HttpClient>>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("hostname", &self.hostname)
            .field("api_token", &"<redacted>")
            .field("organizational_unit_context", &self.organizational_unit_context)
            .field("custom_headers", &self.custom_headers)
            .field("raw_response", &self.raw_response)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn organizational_unit_context(&self) -> &str {
        &self.organizational_unit_context
    }

    pub fn custom_headers(&self) -> &HeaderMap {
        &self.custom_headers
    }

    pub fn raw_response(&self) -> bool {
        self.raw_response
    }

    pub fn response_mode(&self) -> ResponseMode {
        if self.raw_response {
            ResponseMode::WithRaw
        } else {
            ResponseMode::Parsed
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// The shared HTTP client: the injected one, or a default client built
    /// on first use and reused afterwards.
    pub fn http_client(&self) -> Result<Arc<HttpClient>> {
        self.client
            .get_or_try_init(|| {
                tracing::debug!(hostname = %self.hostname, "constructing default HTTP client");
                HttpClient::new(&self.hostname, &self.api_token, self.timeout).map(Arc::new)
            })
            .cloned()
    }
}

/// Builder for [`Config`].
#[derive(Default)]
pub struct ConfigBuilder {
    hostname: Option<String>,
    api_token: Option<String>,
    organizational_unit_context: Option<String>,
    custom_headers: Vec<(String, String)>,
    raw_response: bool,
    retry: Option<RetryPolicy>,
    timeout: Option<Duration>,
    client: Option<Arc<HttpClient>>,
}

impl ConfigBuilder {
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn organizational_unit_context(mut self, context: impl Into<String>) -> Self {
        self.organizational_unit_context = Some(context.into());
        self
    }

    /// Adds a header sent on every request; it overrides any default header
    /// of the same name.
    pub fn custom_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    pub fn raw_response(mut self, raw: bool) -> Self {
        self.raw_response = raw;
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Request timeout for the default client. Ignored when a client is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn http_client(self, client: HttpClient) -> Self {
        self.shared_http_client(Arc::new(client))
    }

    pub fn shared_http_client(mut self, client: Arc<HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the configuration, reading the token from `CLUMIO_API_TOKEN`
    /// when none was given.
    pub fn build(self) -> Result<Config> {
        self.build_with_env(|key| std::env::var(key).ok())
    }

    /// Like [`build`](Self::build) with a custom environment lookup.
    pub fn build_with_env(self, env: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let api_token = self
            .api_token
            .filter(|token| !token.trim().is_empty())
            .or_else(|| env(API_TOKEN_ENV).filter(|token| !token.trim().is_empty()))
            .ok_or_else(|| {
                ClumioError::configuration(format!(
                    "an API token is required: pass one explicitly or set {API_TOKEN_ENV}"
                ))
            })?;

        let hostname = normalize_host(self.hostname.as_deref().unwrap_or(DEFAULT_HOSTNAME));
        base_url(&hostname)?;

        let organizational_unit_context = self.organizational_unit_context.unwrap_or_default();
        HeaderValue::from_str(&organizational_unit_context).map_err(|_| {
            ClumioError::configuration("organizational unit context is not a valid header value")
        })?;

        let mut custom_headers = HeaderMap::new();
        for (name, value) in self.custom_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                ClumioError::configuration(format!("invalid custom header name `{name}`"))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|_| {
                ClumioError::configuration(format!("invalid value for custom header `{name}`"))
            })?;
            custom_headers.insert(header_name, header_value);
        }

        let client = match self.client {
            Some(client) => OnceCell::with_value(client),
            None => OnceCell::new(),
        };

        Ok(Config {
            hostname,
            api_token,
            organizational_unit_context,
            custom_headers,
            raw_response: self.raw_response,
            retry: self.retry.unwrap_or_default(),
            timeout: self.timeout,
            client,
        })
    }
}
