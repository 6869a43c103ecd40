//
//  clumio-sdk
//  api/executor.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Request Executor
//!
//! The one place where a [`Request`] becomes an HTTP round trip. Every
//! controller owns an [`Executor`] built from the shared [`Config`]; it
//! attaches the common header set, sends exactly one request, checks the
//! status against the operation's success codes, and decodes the body.
//!
//! ## Headers
//!
//! | Header | Value |
//! |--------|-------|
//! | `accept` | `application/api.clumio.<resource>=<version>+json` |
//! | `x-clumio-organizationalunit-context` | configured OU context |
//! | `x-clumio-api-client` | `clumio-rust-sdk` |
//! | `x-clumio-api-client-version` | `clumio-rust-sdk:<version>` |
//!
//! Custom headers from the configuration are merged last and win on
//! collision.
//!
//! ## Result shapes
//!
//! Operations return [`Response<T>`], whose variant is fixed by the
//! configuration's [`ResponseMode`]. Operations answering either `200` with a
//! final result or `202` with a task return [`Outcome<S, A>`].

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

use super::client::{HttpClient, RawResponse};
use super::common::{ClumioError, Result};
use super::operation::Request;
use crate::config::{Config, ResponseMode, RetryPolicy};

pub const ORGANIZATIONAL_UNIT_HEADER: &str = "x-clumio-organizationalunit-context";
pub const CLIENT_HEADER: &str = "x-clumio-api-client";
pub const CLIENT_VERSION_HEADER: &str = "x-clumio-api-client-version";
pub const SDK_NAME: &str = "clumio-rust-sdk";

/// Result of an operation in the configured [`ResponseMode`].
#[derive(Debug, Clone)]
pub enum Response<T> {
    /// Parsed-only mode.
    Parsed(T),

    /// Raw mode: the HTTP response, plus the model when it decoded.
    Raw {
        raw: RawResponse,
        parsed: Option<T>,
    },
}

impl<T> Response<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw { parsed, .. } => parsed.as_ref(),
        }
    }

    pub fn into_parsed(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw { parsed, .. } => parsed,
        }
    }

    pub fn raw(&self) -> Option<&RawResponse> {
        match self {
            Self::Parsed(_) => None,
            Self::Raw { raw, .. } => Some(raw),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        match self {
            Self::Parsed(value) => Response::Parsed(f(value)),
            Self::Raw { raw, parsed } => Response::Raw {
                raw,
                parsed: parsed.map(f),
            },
        }
    }
}

/// Body of an operation that either completes synchronously (`200`) or
/// queues a task (`202`).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<S, A> {
    Completed(S),
    Queued(A),
}

impl<S, A> Outcome<S, A> {
    pub fn is_queued(&self) -> bool {
        matches!(self, Self::Queued(_))
    }

    pub fn completed(self) -> Option<S> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Queued(_) => None,
        }
    }

    pub fn queued(self) -> Option<A> {
        match self {
            Self::Completed(_) => None,
            Self::Queued(value) => Some(value),
        }
    }
}

/// Sends requests for one controller.
///
/// Cloning is cheap: the configuration is borrowed and the client is shared.
#[derive(Debug, Clone)]
pub struct Executor<'a> {
    config: &'a Config,
    http: Arc<HttpClient>,
}

impl<'a> Executor<'a> {
    /// Resolves the shared client from `config`, building it on first use.
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            http: config.http_client()?,
        })
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    pub fn response_mode(&self) -> ResponseMode {
        self.config.response_mode()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.config.retry_policy()
    }

    /// Base headers for `request`, with custom headers merged on top.
    pub fn headers(&self, request: &Request) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let accept = HeaderValue::from_str(&request.operation.accept()).map_err(|_| {
            ClumioError::invalid_request(request.operation.name, "invalid accept header")
        })?;
        headers.insert(ACCEPT, accept);

        let context = HeaderValue::from_str(self.config.organizational_unit_context())
            .map_err(|_| ClumioError::configuration("invalid organizational unit context"))?;
        headers.insert(HeaderName::from_static(ORGANIZATIONAL_UNIT_HEADER), context);

        headers.insert(
            HeaderName::from_static(CLIENT_HEADER),
            HeaderValue::from_static(SDK_NAME),
        );

        let version = HeaderValue::from_str(&format!("{SDK_NAME}:{}", crate::VERSION))
            .map_err(|_| ClumioError::configuration("invalid client version header"))?;
        headers.insert(HeaderName::from_static(CLIENT_VERSION_HEADER), version);

        for (name, value) in self.config.custom_headers() {
            headers.insert(name.clone(), value.clone());
        }

        Ok(headers)
    }

    /// Performs exactly one HTTP round trip.
    ///
    /// Statuses outside the operation's success codes and transport failures
    /// both come back as [`ClumioError`].
    pub async fn dispatch(&self, request: &Request) -> Result<RawResponse> {
        let operation = request.operation;
        let url = request.url(self.http.base_url())?;
        let headers = self.headers(request)?;

        tracing::debug!(
            operation = operation.name,
            method = %operation.method,
            url = %url,
            "sending request"
        );

        let mut builder = self
            .http
            .request(operation.method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = request.json_body() {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClumioError::transport(operation.name, url.as_str(), e))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ClumioError::transport(operation.name, url.as_str(), e))?;

        tracing::debug!(operation = operation.name, status, "received response");

        if !operation.is_success(status) {
            return Err(ClumioError::response(operation.name, url.as_str(), status, &body));
        }

        Ok(RawResponse {
            status,
            url,
            headers,
            body,
        })
    }

    /// Sends `request` and decodes every success status into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<Response<T>> {
        let raw = self.dispatch(&request).await?;
        self.finish(request.operation.name, raw, |raw| decode(request.operation.name, raw))
    }

    /// Sends `request` and picks the model by status: `200` decodes into `S`,
    /// `202` into `A`.
    pub async fn send_accepted<S, A>(&self, request: Request) -> Result<Response<Outcome<S, A>>>
    where
        S: DeserializeOwned,
        A: DeserializeOwned,
    {
        let name = request.operation.name;
        let raw = self.dispatch(&request).await?;
        self.finish(name, raw, |raw| match raw.status {
            200 => decode(name, raw).map(Outcome::Completed),
            202 => decode(name, raw).map(Outcome::Queued),
            other => Err(ClumioError::response(name, raw.url.as_str(), other, &raw.body)),
        })
    }

    /// Shapes a successful response according to the response mode.
    ///
    /// In raw mode an undecodable body leaves `parsed` empty instead of
    /// failing, since the caller still holds the raw response.
    pub fn finish<T>(
        &self,
        operation: &str,
        raw: RawResponse,
        decode: impl FnOnce(&RawResponse) -> Result<T>,
    ) -> Result<Response<T>> {
        match self.response_mode() {
            ResponseMode::Parsed => decode(&raw).map(Response::Parsed),
            ResponseMode::WithRaw => {
                let parsed = match decode(&raw) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        tracing::warn!(operation, error = %err, "returning raw response without model");
                        None
                    }
                };
                Ok(Response::Raw { raw, parsed })
            }
        }
    }
}

/// Decodes a success body into `T`; an empty body decodes as `null`.
pub fn decode<T: DeserializeOwned>(operation: &str, raw: &RawResponse) -> Result<T> {
    let result = if raw.is_empty() {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_str(&raw.body)
    };
    result.map_err(|e| ClumioError::decode(operation, raw.status, e, &raw.body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{ErrorPayload, TaskReference};
    use crate::api::operation::{ListParams, Operation, PageStyle};
    use mockito::Matcher;
    use reqwest::Method;
    use serde::Deserialize;
    use serde_json::json;

    static READ_WIDGET: Operation = Operation {
        name: "read_widget",
        method: Method::GET,
        path: "/widgets/{widget_id}",
        resource: "widgets",
        version: "v1",
        query: &["embed", "limit"],
        success: &[200],
        pages: PageStyle::None,
    };

    static UPDATE_WIDGET: Operation = Operation {
        name: "update_widget",
        method: Method::PUT,
        path: "/widgets/{widget_id}",
        resource: "widgets",
        version: "v1",
        query: &[],
        success: &[200, 202],
        pages: PageStyle::None,
    };

    static DELETE_WIDGET: Operation = Operation {
        name: "delete_widget",
        method: Method::DELETE,
        path: "/widgets/{widget_id}",
        resource: "widgets",
        version: "v1",
        query: &[],
        success: &[200, 204],
        pages: PageStyle::None,
    };

    #[derive(Debug, Deserialize, PartialEq)]
    struct Widget {
        id: String,
    }

    fn config(url: &str, raw: bool) -> Config {
        Config::builder()
            .api_token("secret")
            .hostname(url)
            .organizational_unit_context("ou-7")
            .raw_response(raw)
            .build_with_env(|_| None)
            .unwrap()
    }

    #[tokio::test]
    async fn test_send_attaches_headers_and_decodes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/widgets/w-1")
            .match_header("accept", "application/api.clumio.widgets=v1+json")
            .match_header("authorization", "Bearer secret")
            .match_header(ORGANIZATIONAL_UNIT_HEADER, "ou-7")
            .match_header(CLIENT_HEADER, SDK_NAME)
            .match_header(
                CLIENT_VERSION_HEADER,
                format!("{SDK_NAME}:{}", crate::VERSION).as_str(),
            )
            .match_query(Matcher::Exact("limit=5".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "w-1", "extra": true}"#)
            .create_async()
            .await;

        let config = config(&server.url(), false);
        let executor = Executor::new(&config).unwrap();
        let request = Request::new(&READ_WIDGET)
            .path_param("widget_id", "w-1")
            .query(ListParams::new().limit(5).into_query());

        let response = executor.send::<Widget>(request).await.unwrap();
        assert!(response.raw().is_none());
        assert_eq!(response.into_parsed(), Some(Widget { id: "w-1".into() }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_custom_headers_override_defaults() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/widgets/w-1")
            .match_header("accept", "application/json")
            .match_header("x-trace", "abc")
            .with_status(200)
            .with_body(r#"{"id": "w-1"}"#)
            .create_async()
            .await;

        let config = Config::builder()
            .api_token("secret")
            .hostname(server.url())
            .custom_header("Accept", "application/json")
            .custom_header("x-trace", "abc")
            .build_with_env(|_| None)
            .unwrap();
        let executor = Executor::new(&config).unwrap();

        executor
            .send::<Widget>(Request::new(&READ_WIDGET).path_param("widget_id", "w-1"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forbidden_body_is_carried_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({"errors": [{"error_code": 3001, "error_message": "Access denied"}]});
        server
            .mock("GET", "/widgets/w-1")
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let config = config(&server.url(), false);
        let executor = Executor::new(&config).unwrap();
        let err = executor
            .send::<Widget>(Request::new(&READ_WIDGET).path_param("widget_id", "w-1"))
            .await
            .unwrap_err();

        assert!(err.reason.contains("read_widget"));
        assert!(err.reason.contains("/widgets/w-1"));
        match err.errors {
            ErrorPayload::Response { status, body: got } => {
                assert_eq!(status, 403);
                assert_eq!(got, body);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_selects_model() {
        let mut server = mockito::Server::new_async().await;
        let config = config(&server.url(), false);
        let executor = Executor::new(&config).unwrap();
        let request = || {
            Request::new(&UPDATE_WIDGET)
                .path_param("widget_id", "w-1")
                .json(Some(json!({"name": "new"})))
        };

        let sync = server
            .mock("PUT", "/widgets/w-1")
            .match_body(Matcher::Json(json!({"name": "new"})))
            .with_status(200)
            .with_body(r#"{"id": "w-1"}"#)
            .create_async()
            .await;
        let outcome = executor
            .send_accepted::<Widget, TaskReference>(request())
            .await
            .unwrap()
            .into_parsed()
            .unwrap();
        assert_eq!(outcome, Outcome::Completed(Widget { id: "w-1".into() }));
        sync.remove_async().await;

        server
            .mock("PUT", "/widgets/w-1")
            .with_status(202)
            .with_body(r#"{"task_id": "t-9"}"#)
            .create_async()
            .await;
        let outcome = executor
            .send_accepted::<Widget, TaskReference>(request())
            .await
            .unwrap()
            .into_parsed()
            .unwrap();
        assert_eq!(outcome.queued().unwrap().task_id, "t-9");
    }

    #[tokio::test]
    async fn test_undeclared_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/widgets/w-1")
            .with_status(201)
            .with_body(r#"{"id": "w-1"}"#)
            .create_async()
            .await;

        let config = config(&server.url(), false);
        let executor = Executor::new(&config).unwrap();
        let err = executor
            .send_accepted::<Widget, TaskReference>(
                Request::new(&UPDATE_WIDGET).path_param("widget_id", "w-1"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[tokio::test]
    async fn test_absent_body_sends_no_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/widgets/w-1")
            .match_body(Matcher::Exact(String::new()))
            .with_status(204)
            .create_async()
            .await;

        let config = config(&server.url(), false);
        let executor = Executor::new(&config).unwrap();
        let response = executor
            .send::<()>(
                Request::new(&DELETE_WIDGET)
                    .path_param("widget_id", "w-1")
                    .body::<serde_json::Value>(None)
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.into_parsed(), Some(()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_raw_mode_returns_response_and_model() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/widgets/w-1")
            .with_status(200)
            .with_header("x-request-id", "r-1")
            .with_body(r#"{"unexpected": 1}"#)
            .create_async()
            .await;

        let config = config(&server.url(), true);
        let executor = Executor::new(&config).unwrap();
        let response = executor
            .send::<Widget>(Request::new(&READ_WIDGET).path_param("widget_id", "w-1"))
            .await
            .unwrap();

        let raw = response.raw().unwrap();
        assert_eq!(raw.status, 200);
        assert_eq!(raw.headers.get("x-request-id").unwrap(), "r-1");
        assert!(response.parsed().is_none());
    }

    #[tokio::test]
    async fn test_parsed_mode_decode_failure_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/widgets/w-1")
            .with_status(200)
            .with_body(r#"{"unexpected": 1}"#)
            .create_async()
            .await;

        let config = config(&server.url(), false);
        let executor = Executor::new(&config).unwrap();
        let err = executor
            .send::<Widget>(Request::new(&READ_WIDGET).path_param("widget_id", "w-1"))
            .await
            .unwrap_err();
        assert!(matches!(err.errors, ErrorPayload::Decode { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_connection_failure_is_wrapped() {
        let config = config("http://127.0.0.1:1", false);
        let executor = Executor::new(&config).unwrap();
        let err = executor
            .send::<Widget>(Request::new(&READ_WIDGET).path_param("widget_id", "w-1"))
            .await
            .unwrap_err();
        assert!(err.is_connection());
        assert!(err.is_retryable());
        assert!(err.reason.contains("read_widget"));
    }
}
