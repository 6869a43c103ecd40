//
//  clumio-sdk
//  api/operation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Operation Descriptors
//!
//! Every vendor operation is described once, as a `'static` [`Operation`]
//! value: verb, path template, accept-header resource and version, the query
//! parameters it understands, its success status codes, and how it pages.
//! Controllers turn typed arguments into a [`Request`] built from one of these
//! descriptors and hand it to the shared executor.
//!
//! ## Path templates
//!
//! Templates use `{name}` placeholders, one per path segment:
//!
//! ```rust
//! use clumio_sdk::api::operation::render_path;
//!
//! let segments = render_path("/tasks/{task_id}", &[("task_id", "42".to_string())]).unwrap();
//! assert_eq!(segments, vec!["tasks".to_string(), "42".to_string()]);
//! ```
//!
//! Values are percent-encoded when the segments are pushed onto the URL, so
//! a binding such as `a/b c` stays a single segment.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::common::{ClumioError, Result};

/// How a list operation advances from one page to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStyle {
    /// The operation is not paginated.
    None,

    /// The next `start` is the `start` query parameter of the `_next` link.
    Cursor,

    /// The next `start` is the previous integer `start` plus one (1-indexed).
    Legacy,
}

/// Static description of one vendor REST operation.
#[derive(Debug)]
pub struct Operation {
    /// Operation name used in error reasons and logs (e.g. `list_tasks`).
    pub name: &'static str,
    pub method: Method,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    /// Resource name used in the accept header.
    pub resource: &'static str,
    /// Resource version used in the accept header (e.g. `v1`).
    pub version: &'static str,
    /// Query parameter names this operation accepts.
    pub query: &'static [&'static str],
    /// Status codes treated as success.
    pub success: &'static [u16],
    pub pages: PageStyle,
}

impl Operation {
    /// Accept header value: `application/api.clumio.<resource>=<version>+json`.
    pub fn accept(&self) -> String {
        format!("application/api.clumio.{}={}+json", self.resource, self.version)
    }

    pub fn is_success(&self, status: u16) -> bool {
        self.success.contains(&status)
    }

    pub fn accepts_query(&self, name: &str) -> bool {
        self.query.contains(&name)
    }
}

/// Query parameters of one request.
///
/// `None` values are never recorded, so the server applies its own default
/// instead of receiving an empty or `"None"` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name=value` when `value` is `Some`.
    pub fn with<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.set(name, value.to_string());
        }
        self
    }

    /// Sets `name`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: String) {
        match self.pairs.iter_mut().find(|(key, _)| key == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Query parameters shared by most list and read operations.
///
/// Fields a given operation does not declare are not sent.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor or 1-indexed page number; normally left to the paginator.
    pub start: Option<String>,
    /// JSON filter expression, e.g. `{"status": {"$eq": "completed"}}`.
    pub filter: Option<String>,
    /// Comma-separated related resources to sideload into `_embedded`.
    pub embed: Option<String>,
    /// Sort expression, e.g. `-start_timestamp`.
    pub sort: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn embed(mut self, embed: impl Into<String>) -> Self {
        self.embed = Some(embed.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn into_query(self) -> Query {
        Query::new()
            .with("limit", self.limit)
            .with("start", self.start)
            .with("filter", self.filter)
            .with("embed", self.embed)
            .with("sort", self.sort)
    }
}

/// One concrete call of an [`Operation`]: path bindings, query and body.
#[derive(Debug, Clone)]
pub struct Request {
    pub operation: &'static Operation,
    path_params: Vec<(&'static str, String)>,
    query: Query,
    body: Option<Value>,
}

impl Request {
    pub fn new(operation: &'static Operation) -> Self {
        Self {
            operation,
            path_params: Vec::new(),
            query: Query::new(),
            body: None,
        }
    }

    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Keeps only the parameters the operation declares.
    pub fn query(mut self, query: Query) -> Self {
        for (name, value) in query.iter() {
            if self.operation.accepts_query(name) {
                self.query.set(name, value.to_string());
            } else {
                tracing::debug!(
                    operation = self.operation.name,
                    parameter = name,
                    "dropping undeclared query parameter"
                );
            }
        }
        self
    }

    /// Serializes `body` as the JSON payload. `None` sends no payload at all.
    pub fn body<B: Serialize>(mut self, body: Option<&B>) -> Result<Self> {
        self.body = match body {
            Some(body) => Some(
                serde_json::to_value(body)
                    .map_err(|e| ClumioError::invalid_request(self.operation.name, e.to_string()))?,
            ),
            None => None,
        };
        Ok(self)
    }

    /// Uses an already-built JSON payload.
    pub fn json(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }

    pub fn query_params(&self) -> &Query {
        &self.query
    }

    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns a copy of this request with `start` replaced.
    pub fn with_start(&self, start: &str) -> Self {
        let mut next = self.clone();
        next.query.set("start", start.to_string());
        next
    }

    /// Instantiates the path template and query onto `base`.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let segments = render_path(self.operation.path, &self.path_params)
            .map_err(|message| ClumioError::invalid_request(self.operation.name, message))?;

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClumioError::invalid_request(
                    self.operation.name,
                    format!("base URL {base} cannot carry a path"),
                )
            })?
            .pop_if_empty()
            .extend(segments);

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in self.query.iter() {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

/// Splits `template` into decoded path segments, substituting `{name}`
/// placeholders from `params`.
pub fn render_path(
    template: &str,
    params: &[(&str, String)],
) -> std::result::Result<Vec<String>, String> {
    template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            match segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                Some(name) => params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.clone())
                    .ok_or_else(|| format!("missing path parameter `{name}`")),
                None => Ok(segment.to_string()),
            }
        })
        .collect()
}
