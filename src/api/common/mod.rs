//
//  clumio-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types for every Clumio resource
//!
//! This module provides the types shared by every controller: the single
//! error type raised across the client surface, HAL-style navigation links,
//! and the generic list envelope returned by list operations.
//!
//! # Overview
//!
//! - [`ClumioError`] - The one error type returned by every operation
//! - [`ErrorPayload`] - What went wrong, for callers that need to branch
//! - [`Link`] / [`ListLinks`] - The `_links` navigation section
//! - [`ListResponse`] / [`PageStart`] - The `_embedded.items` list envelope
//! - Pagination types (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use clumio_sdk::api::common::{ClumioError, ErrorPayload};
//!
//! fn describe(err: &ClumioError) -> String {
//!     match &err.errors {
//!         ErrorPayload::Response { status: 403, .. } => "permission denied".into(),
//!         ErrorPayload::Connection { .. } => "network trouble".into(),
//!         _ => err.to_string(),
//!     }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Result alias used by every fallible library call.
pub type Result<T, E = ClumioError> = std::result::Result<T, E>;

/// The uniform failure raised by every operation.
///
/// `reason` names the failing operation (and request URL when one exists);
/// `errors` carries the structured detail. Callers distinguish failure causes
/// by matching on `errors`, never by catching different error types.
#[derive(Error, Debug)]
#[error("{reason}: {errors}")]
pub struct ClumioError {
    /// Human-readable description of which operation failed.
    pub reason: String,

    /// Structured detail of the failure.
    pub errors: ErrorPayload,
}

/// Detail carried by a [`ClumioError`].
#[derive(Debug)]
pub enum ErrorPayload {
    /// The configuration could not be built (missing credential, bad header).
    Configuration(String),

    /// A request could not be assembled (unbound path parameter, bad body).
    InvalidRequest(String),

    /// The request never produced an HTTP response.
    Connection {
        /// Transport error message.
        message: String,
        /// Whether the failure is a connect/timeout error worth retrying.
        retryable: bool,
    },

    /// Non-success status with a JSON body, kept verbatim.
    Response {
        /// HTTP status code.
        status: u16,
        /// The vendor's error body.
        body: Value,
    },

    /// Non-success status whose body is not JSON.
    RawResponse {
        /// HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A pagination link was malformed or did not advance.
    Protocol {
        /// What was wrong with the link.
        message: String,
        /// The offending link, if any.
        link: Option<String>,
    },

    /// A success response could not be decoded into the declared model.
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// Deserializer message.
        message: String,
        /// The raw response body.
        body: String,
    },
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(message) => write!(f, "configuration error: {message}"),
            Self::InvalidRequest(message) => write!(f, "invalid request: {message}"),
            Self::Connection { message, .. } => write!(f, "connection error: {message}"),
            Self::Response { status, body } => {
                let rendered = serde_json::to_string(body).unwrap_or_else(|_| format!("{body:?}"));
                write!(f, "HTTP {status}: {rendered}")
            }
            Self::RawResponse { status, body } => write!(f, "HTTP {status}: {body}"),
            Self::Protocol { message, link } => match link {
                Some(link) => write!(f, "malformed pagination link ({message}): {link}"),
                None => write!(f, "malformed pagination link ({message})"),
            },
            Self::Decode {
                status, message, ..
            } => write!(f, "could not decode HTTP {status} response: {message}"),
        }
    }
}

impl ClumioError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self {
            reason: "Invalid client configuration".to_string(),
            errors: ErrorPayload::Configuration(message.into()),
        }
    }

    pub fn invalid_request(operation: &str, message: impl Into<String>) -> Self {
        Self {
            reason: format!("Error occurred while building {operation}"),
            errors: ErrorPayload::InvalidRequest(message.into()),
        }
    }

    /// Wraps a transport failure raised before any response arrived.
    pub fn transport(operation: &str, url: &str, err: reqwest::Error) -> Self {
        Self {
            reason: format!("Error occurred while executing {operation} ({url})"),
            errors: ErrorPayload::Connection {
                retryable: err.is_connect() || err.is_timeout(),
                message: err.to_string(),
            },
        }
    }

    /// Wraps a non-success response, keeping a JSON body verbatim when it parses.
    pub fn response(operation: &str, url: &str, status: u16, body: &str) -> Self {
        let errors = match serde_json::from_str::<Value>(body) {
            Ok(json) => ErrorPayload::Response { status, body: json },
            Err(_) => ErrorPayload::RawResponse {
                status,
                body: body.to_string(),
            },
        };

        Self {
            reason: format!("Error occurred while executing {operation} ({url})"),
            errors,
        }
    }

    pub fn protocol(operation: &str, message: impl Into<String>, link: Option<&str>) -> Self {
        Self {
            reason: format!("Error occurred while paginating {operation}"),
            errors: ErrorPayload::Protocol {
                message: message.into(),
                link: link.map(str::to_string),
            },
        }
    }

    pub fn decode(operation: &str, status: u16, err: serde_json::Error, body: &str) -> Self {
        Self {
            reason: format!("Error occurred while decoding {operation}"),
            errors: ErrorPayload::Decode {
                status,
                message: err.to_string(),
                body: body.to_string(),
            },
        }
    }

    /// HTTP status of the failed call, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match &self.errors {
            ErrorPayload::Response { status, .. }
            | ErrorPayload::RawResponse { status, .. }
            | ErrorPayload::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if no HTTP response was obtained.
    pub fn is_connection(&self) -> bool {
        matches!(self.errors, ErrorPayload::Connection { .. })
    }

    /// Returns `true` for connect and timeout failures only.
    ///
    /// Application errors are never retryable, whatever their status.
    pub fn is_retryable(&self) -> bool {
        matches!(self.errors, ErrorPayload::Connection { retryable: true, .. })
    }

    /// Extracts the vendor's human-readable message from a structured body.
    ///
    /// Clumio returns errors in the format:
    /// ```json
    /// {"errors": [{"error_code": 15001, "error_message": "Human readable message"}]}
    /// ```
    ///
    /// Older endpoints and gateways answer with `{"message": "..."}` or
    /// `{"error": {"message": "..."}}`; both are recognized as well.
    pub fn vendor_message(&self) -> Option<String> {
        let body = match &self.errors {
            ErrorPayload::Response { body, .. } => body,
            _ => return None,
        };

        let first_error = body
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first());

        if let Some(message) = first_error
            .and_then(|e| e.get("error_message").or_else(|| e.get("message")))
            .and_then(|m| m.as_str())
        {
            return Some(message.to_string());
        }

        if let Some(message) = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return Some(message.to_string());
        }

        body.get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }
}

/// A single HAL link from a `_links` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

/// Navigation section of a list response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLinks {
    #[serde(default, rename = "_first", skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,

    #[serde(default, rename = "_last", skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,

    #[serde(default, rename = "_next", skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,

    #[serde(default, rename = "_prev", skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,

    #[serde(default, rename = "_self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
}

/// Navigation section of a single-resource response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(default, rename = "_self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,

    #[serde(default, rename = "read-task", skip_serializing_if = "Option::is_none")]
    pub read_task: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// The `start` a list page reports: an opaque token on cursor-paged
/// resources, a 1-indexed page number on legacy ones. Kept in the shape the
/// server sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageStart {
    Number(u64),
    Token(String),
}

impl fmt::Display for PageStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Token(token) => f.write_str(token),
        }
    }
}

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Items::default", rename = "_embedded")]
    pub embedded: Items<T>,

    #[serde(default, rename = "_links")]
    pub links: ListLinks,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_applied: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<PageStart>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages_count: Option<u64>,
}

impl<T> ListResponse<T> {
    pub fn items(&self) -> &[T] {
        &self.embedded.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.embedded.items
    }

    pub fn has_next(&self) -> bool {
        self.next_url().is_some()
    }

    pub fn next_url(&self) -> Option<&str> {
        self.links
            .next
            .as_ref()
            .map(|link| link.href.as_str())
            .filter(|href| !href.is_empty())
    }
}

/// Body of a `202 Accepted` answer: the task to poll for completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskReference {
    pub task_id: String,

    #[serde(default, rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_error_keeps_json_body_verbatim() {
        let body = r#"{"errors":[{"error_code":403,"error_message":"Forbidden for this OU"}]}"#;
        let err = ClumioError::response("read_task", "https://x/tasks/1", 403, body);

        match &err.errors {
            ErrorPayload::Response { status, body } => {
                assert_eq!(*status, 403);
                assert_eq!(
                    body,
                    &json!({"errors": [{"error_code": 403, "error_message": "Forbidden for this OU"}]})
                );
            }
            other => panic!("unexpected payload: {other:?}"),
        }
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.vendor_message().as_deref(), Some("Forbidden for this OU"));
        assert!(err.reason.contains("read_task"));
        assert!(err.reason.contains("https://x/tasks/1"));
    }

    #[test]
    fn test_page_start_keeps_its_shape() {
        let body = json!({"start": 3, "_embedded": {"items": []}});
        let page: ListResponse<Value> = serde_json::from_value(body).unwrap();
        assert_eq!(page.start, Some(PageStart::Number(3)));
        assert_eq!(page.start.as_ref().unwrap().to_string(), "3");
        assert_eq!(serde_json::to_value(&page).unwrap()["start"], json!(3));

        let page: ListResponse<Value> = serde_json::from_value(json!({"start": "abc"})).unwrap();
        assert_eq!(page.start, Some(PageStart::Token("abc".into())));
        assert_eq!(serde_json::to_value(&page).unwrap()["start"], json!("abc"));
        assert!(page.items().is_empty());
    }

    #[test]
    fn test_list_page_needs_no_default_model() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Thing {
            id: String,
        }

        let page: ListResponse<Thing> = serde_json::from_value(json!({"_links": {}})).unwrap();
        assert!(page.items().is_empty());

        let page: ListResponse<Thing> =
            serde_json::from_value(json!({"_embedded": {"items": [{"id": "a"}]}})).unwrap();
        assert_eq!(page.into_items(), vec![Thing { id: "a".into() }]);
    }

    #[test]
    fn test_response_error_falls_back_to_raw_body() {
        let err = ClumioError::response("list_tasks", "https://x/tasks", 502, "<html>bad gateway</html>");
        assert!(matches!(
            err.errors,
            ErrorPayload::RawResponse { status: 502, .. }
        ));
        assert!(err.vendor_message().is_none());
        assert!(err.to_string().contains("<html>bad gateway</html>"));
    }

    #[test]
    fn test_vendor_message_variants() {
        let simple = ClumioError::response("op", "u", 400, r#"{"message": "plain"}"#);
        assert_eq!(simple.vendor_message().as_deref(), Some("plain"));

        let nested = ClumioError::response("op", "u", 400, r#"{"error": {"message": "nested"}}"#);
        assert_eq!(nested.vendor_message().as_deref(), Some("nested"));
    }

    #[test]
    fn test_only_connection_errors_are_retryable() {
        let err = ClumioError::response("op", "u", 503, "{}");
        assert!(!err.is_retryable());
        assert!(!err.is_connection());

        let conn = ClumioError {
            reason: "r".into(),
            errors: ErrorPayload::Connection {
                message: "refused".into(),
                retryable: true,
            },
        };
        assert!(conn.is_retryable());
        assert!(conn.is_connection());
        assert_eq!(conn.status(), None);
    }

    #[test]
    fn test_list_response_next_url_ignores_empty_href() {
        let page: ListResponse<Value> = serde_json::from_value(json!({
            "_embedded": {"items": [1, 2]},
            "_links": {"_next": {"href": ""}}
        }))
        .unwrap();
        assert_eq!(page.items().len(), 2);
        assert!(!page.has_next());
    }
}
