//
//  clumio-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Clumio API
//!
//! This module provides the thin transport handle every controller shares.
//! It binds a `reqwest` client to a base URL and a bearer token; everything
//! above it (headers, status handling, decoding) lives in the executor.
//!
//! ## Features
//!
//! - Bearer authentication on every request
//! - Base URL resolution from a bare hostname or a full URL
//! - Custom `reqwest::Client` injection (proxies, custom TLS, timeouts)
//! - Custom User-Agent header

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use super::common::{ClumioError, Result};
use crate::config::base_url;

/// The shared transport handle.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections
/// internally, so every controller built from one configuration reuses them.
///
/// ```rust,no_run
/// use clumio_sdk::api::HttpClient;
///
/// let proxied = reqwest::Client::builder()
///     .proxy(reqwest::Proxy::all("http://proxy.internal:3128")?)
///     .build()?;
/// let client = HttpClient::with_client(proxied, "us-east-1.api.clumio.com", "token")?;
/// assert_eq!(client.base_url().as_str(), "https://us-east-1.api.clumio.com/");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// The underlying HTTP client
    http: Client,
    /// Scheme, host and optional path prefix every request is rooted at
    base_url: Url,
    /// Bearer token sent on every request
    token: String,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a client with the SDK's default `reqwest` settings.
    pub fn new(hostname: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!("clumio-rust-sdk/{}", crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClumioError::configuration(format!("could not build HTTP client: {e}")))?;

        Self::with_client(http, hostname, token)
    }

    /// Wraps a caller-built `reqwest::Client`.
    pub fn with_client(http: Client, hostname: &str, token: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: base_url(hostname)?,
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Starts a request to an absolute URL with authentication attached.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url).bearer_auth(&self.token)
    }
}

/// An HTTP response as received, before any model decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Parses the body as untyped JSON; an empty body is `null`.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        if self.is_empty() {
            Ok(serde_json::Value::Null)
        } else {
            serde_json::from_str(&self.body)
        }
    }
}
