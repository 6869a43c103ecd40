//
//  clumio-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the request pipeline shared by every Clumio resource
//! and the typed controllers built on top of it.
//!
//! ## Architecture
//!
//! - [`client`]: Transport handle (bearer token + base URL over `reqwest`)
//! - [`operation`]: Static operation descriptors and per-call requests
//! - [`executor`]: Header assembly, one round trip, status-based decoding
//! - [`common`]: The uniform error type, links, list envelopes, pagination
//! - [`resources`]: One controller per vendor resource, plus the catalog
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clumio_sdk::api::resources::AwsConnections;
//! use clumio_sdk::Config;
//!
//! # async fn example() -> Result<(), clumio_sdk::ClumioError> {
//! let config = Config::builder().api_token("token").build()?;
//! let connections = AwsConnections::new(&config)?;
//!
//! let connection = connections.read("c0a8d5a6").await?;
//! if let Some(connection) = connection.parsed() {
//!     println!("{} in {}", connection.account_native_id, connection.aws_region);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ClumioError`] on failure. Inspect its
//! `errors` payload to tell configuration, connection, HTTP status,
//! pagination protocol and decode failures apart.

pub mod client;

pub mod common;

pub mod executor;

pub mod operation;

pub mod resources;

pub use client::{HttpClient, RawResponse};
pub use common::{ClumioError, ErrorPayload, ListResponse, PageStart, Paginator, TaskReference};
pub use executor::{Executor, Outcome, Response};
pub use operation::{ListParams, Operation, PageStyle, Query, Request};
