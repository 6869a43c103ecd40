//
//  clumio-sdk
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pagination for Clumio list operations
//!
//! List operations answer one page at a time and describe the following page
//! in `_links._next`. [`Paginator`] drives a list operation across pages,
//! one request per page, strictly in order.
//!
//! # Cursor vs Legacy
//!
//! | Style | Next `start` |
//! |-------|--------------|
//! | [`PageStyle::Cursor`] | the `start` query parameter of `_links._next.href` |
//! | [`PageStyle::Legacy`] | previous `start` + 1 (pages are 1-indexed) |
//!
//! Which style an operation uses is fixed by its [`Operation`] descriptor.
//! Both styles stop when a page has no `_next` link.
//!
//! # Example
//!
//! ```rust,no_run
//! use clumio_sdk::api::resources::Tasks;
//! use clumio_sdk::api::ListParams;
//! use clumio_sdk::Config;
//!
//! # async fn example() -> Result<(), clumio_sdk::ClumioError> {
//! let config = Config::builder().build()?;
//! let tasks = Tasks::new(&config)?;
//!
//! let mut pages = tasks.list_all(ListParams::new().limit(100));
//! while let Some(page) = pages.next_page().await? {
//!     for task in page.parsed().map(|p| p.items()).unwrap_or_default() {
//!         println!("{} {}", task.id, task.status);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Retries
//!
//! A page fetch that fails before any HTTP response arrives (connection
//! refused, timeout) is retried with exponential backoff per the
//! configuration's [`RetryPolicy`](crate::config::RetryPolicy). Error
//! statuses are never retried.
//!
//! [`Operation`]: crate::api::operation::Operation

use std::future::Future;
use std::marker::PhantomData;

use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::{ClumioError, Result};
use crate::api::client::RawResponse;
use crate::api::executor::{decode, Executor, Response};
use crate::api::operation::{PageStyle, Request};
use crate::config::{ResponseMode, RetryPolicy};

#[derive(Debug)]
enum PageState {
    /// Nothing fetched yet.
    First,
    /// The next request carries this `start`.
    Next(String),
    /// The last page yielded had an unusable next link; reported on the
    /// following advance.
    Failed(ClumioError),
    Done,
}

/// A forward-only sequence of pages from one list operation.
///
/// Each call to [`next_page`](Self::next_page) performs one awaited round
/// trip; page N+1 is requested only after page N has been parsed. A page is
/// always yielded before its next link is judged, so a malformed link
/// surfaces as an error on the following call. After the last page, or after
/// any error, the sequence is exhausted. Create a new paginator to start
/// again from the beginning.
#[derive(Debug)]
pub struct Paginator<'a, T> {
    executor: Executor<'a>,
    request: Request,
    style: PageStyle,
    state: PageState,
    pages: usize,
    _model: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
    pub fn new(executor: Executor<'a>, request: Request) -> Self {
        let style = request.operation.pages;
        Self {
            executor,
            request,
            style,
            state: PageState::First,
            pages: 0,
            _model: PhantomData,
        }
    }

    /// Number of pages yielded so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, PageState::Done)
    }

    /// Fetches the next page, or `None` once the sequence is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Response<T>>> {
        let request = match std::mem::replace(&mut self.state, PageState::Done) {
            PageState::Done => return Ok(None),
            PageState::Failed(err) => return Err(err),
            PageState::First => self.request.clone(),
            PageState::Next(start) => self.request.with_start(&start),
        };

        let (page, next) = self.fetch(&request).await?;
        self.pages += 1;
        self.state = next;
        Ok(Some(page))
    }

    /// Walks every remaining page.
    pub async fn collect_pages(mut self) -> Result<Vec<Response<T>>> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await? {
            pages.push(page);
        }
        Ok(pages)
    }

    /// Adapts the paginator into a `Stream` of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<Response<T>>> + 'a
    where
        T: 'a,
    {
        stream::try_unfold(self, |mut pages| async move {
            Ok::<_, ClumioError>(pages.next_page().await?.map(|page| (page, pages)))
        })
    }

    async fn fetch(&self, request: &Request) -> Result<(Response<T>, PageState)> {
        let operation = request.operation.name;
        let executor = &self.executor;
        let raw = with_retry(executor.retry_policy(), operation, move || {
            executor.dispatch(request)
        })
        .await?;

        let current = request.query_params().get("start");
        let next = match raw.json() {
            Ok(body) => {
                let base = self.executor.http().base_url();
                match next_start(self.style, operation, &body, current, base) {
                    Ok(Some(start)) => PageState::Next(start),
                    Ok(None) => PageState::Done,
                    Err(err) => PageState::Failed(err),
                }
            }
            Err(e) => match self.executor.response_mode() {
                ResponseMode::Parsed => {
                    return Err(ClumioError::decode(operation, raw.status, e, &raw.body));
                }
                // No links to follow; the raw page is still handed back.
                ResponseMode::WithRaw => PageState::Done,
            },
        };

        tracing::debug!(
            operation,
            page = self.pages + 1,
            start = current.unwrap_or("<default>"),
            next = ?next,
            "fetched page"
        );

        let page = self
            .executor
            .finish(operation, raw, |raw| decode(operation, raw))?;
        Ok((page, next))
    }
}

/// Runs `attempt`, repeating retryable failures up to `policy.max_attempts`
/// tries in total.
async fn with_retry<R, F, Fut>(policy: RetryPolicy, operation: &str, mut attempt: F) -> Result<R>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R>>,
{
    let mut tries = 1;
    loop {
        match attempt().await {
            Err(err) if err.is_retryable() && tries < policy.max_attempts => {
                let delay = policy.backoff(tries);
                tracing::warn!(
                    operation,
                    attempt = tries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "connection failed, retrying page"
                );
                tokio::time::sleep(delay).await;
                tries += 1;
            }
            result => return result,
        }
    }
}

/// Derives the `start` of the page after `body`.
///
/// Returns `None` when the page has no (or an empty) `_links._next.href`.
pub fn next_start(
    style: PageStyle,
    operation: &str,
    body: &Value,
    current: Option<&str>,
    base: &Url,
) -> Result<Option<String>> {
    let href = match body
        .pointer("/_links/_next/href")
        .and_then(Value::as_str)
        .filter(|href| !href.is_empty())
    {
        Some(href) => href,
        None => return Ok(None),
    };

    match style {
        PageStyle::None => Ok(None),
        PageStyle::Cursor => {
            let url = base.join(href).map_err(|e| {
                ClumioError::protocol(operation, format!("unparseable next link: {e}"), Some(href))
            })?;
            let start = url
                .query_pairs()
                .find(|(name, _)| name == "start")
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    ClumioError::protocol(operation, "next link has no start parameter", Some(href))
                })?;

            if current == Some(start.as_str()) {
                return Err(ClumioError::protocol(
                    operation,
                    "next link repeats the current start",
                    Some(href),
                ));
            }
            Ok(Some(start))
        }
        PageStyle::Legacy => {
            let previous = match current {
                Some(value) => value.parse::<u64>().map_err(|_| {
                    ClumioError::protocol(
                        operation,
                        format!("page start `{value}` is not an integer"),
                        Some(href),
                    )
                })?,
                None => 1,
            };
            Ok(Some((previous + 1).to_string()))
        }
    }
}
