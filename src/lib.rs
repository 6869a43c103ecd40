//
//  clumio-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Clumio SDK
//!
//! A typed client for the Clumio cloud backup and restore REST API.
//!
//! ## Overview
//!
//! Every vendor operation is a `'static` descriptor run through one shared
//! pipeline: a configuration object carries the host, token, organizational
//! unit context and custom headers; an executor turns a request into exactly
//! one HTTP round trip; list operations are walked page by page by a
//! paginator. Failures of every kind surface as a single [`ClumioError`].
//!
//! ## Features
//!
//! - **Typed Controllers**: One controller per resource (tasks, policies,
//!   backups, restores, organizational units, users, audit trails)
//! - **Pagination**: Cursor and legacy (page-number) styles behind one API
//! - **Response Modes**: Parsed models, or the raw response plus the model
//! - **Profiles**: Connection settings from a TOML configuration file
//!
//! ## Module Structure
//!
//! - [`api`]: Request pipeline, error type, pagination and resource controllers
//! - [`config`]: Configuration builder, host resolution, profile files
//! - [`cli`]: The `clumio` command-line companion
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use clumio_sdk::api::resources::Tasks;
//! use clumio_sdk::Config;
//!
//! # async fn example() -> Result<(), clumio_sdk::ClumioError> {
//! // Token from CLUMIO_API_TOKEN, default us-west-2 host
//! let config = Config::builder().organizational_unit_context("ou-1").build()?;
//!
//! let task = Tasks::new(&config)?.read("12345").await?;
//! println!("{:?}", task.parsed().map(|t| &t.status));
//! # Ok(())
//! # }
//! ```

/// HTTP pipeline and resource controllers.
///
/// Controllers borrow a [`Config`] and share its HTTP client, so building
/// many controllers from one configuration reuses the same connection pool.
pub mod api;

/// Configuration for API access.
///
/// Holds the host, token, organizational unit context, custom headers and
/// response mode. Profiles are read from a platform-specific location:
/// - Linux: `~/.config/clumio/config.toml`
/// - macOS: `~/Library/Application Support/clumio/config.toml`
/// - Windows: `%APPDATA%\clumio\config\config.toml`
pub mod config;

/// Command-line interface definitions.
pub mod cli;

/// Output formatting for the command-line interface.
pub mod output;

pub use api::ClumioError;

pub use cli::Cli;

pub use config::Config;

/// Client version, sent in the `x-clumio-api-client-version` header.
///
/// ```rust
/// use clumio_sdk::VERSION;
///
/// assert!(!VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// Covers HTTP error statuses, connection failures and decode failures.
    pub const ERROR: i32 = 1;

    /// Missing or invalid configuration (no token, bad host, bad header).
    pub const CONFIG_ERROR: i32 = 3;
}
