//
//  clumio-sdk
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod call;
mod ops;

pub use call::CallCommand;
pub use ops::OpsCommand;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigBuilder, ConfigFile};

/// Clumio CLI - Call the Clumio REST API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "clumio",
    version,
    about = "Call the Clumio REST API from the command line",
    long_about = "clumio executes any operation of the Clumio REST API by name.\n\n\
                  Credentials come from --profile, CLUMIO_API_TOKEN, or both.",
    propagate_version = true,
    after_help = "Use 'clumio ops' to list the available operations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Profile from the configuration file
    #[arg(long, global = true, env = "CLUMIO_PROFILE")]
    pub profile: Option<String>,

    /// API host, e.g. us-east-1.api.clumio.com or http://localhost:8080
    #[arg(long, global = true, env = "CLUMIO_HOSTNAME")]
    pub hostname: Option<String>,

    /// Organizational unit context for every request
    #[arg(long = "ou", global = true)]
    pub organizational_unit: Option<String>,

    /// Extra request header as NAME:VALUE (repeatable)
    #[arg(long, short = 'H', global = true, action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Also print the response status and headers
    #[arg(long, global = true)]
    pub raw: bool,
}

impl GlobalOptions {
    /// Profile settings first, then command-line overrides.
    pub fn config(&self) -> Result<Config> {
        let mut builder = Config::builder();

        if let Some(name) = &self.profile {
            let file = ConfigFile::load()?;
            let profile = file
                .profile(name)
                .with_context(|| format!("profile `{name}` not found in {}", config_path()))?;
            builder = profile.apply(builder);
        }

        builder = self.apply(builder)?;
        Ok(builder.build()?)
    }

    fn apply(&self, mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
        if let Some(hostname) = &self.hostname {
            builder = builder.hostname(hostname);
        }
        if let Some(ou) = &self.organizational_unit {
            builder = builder.organizational_unit_context(ou);
        }
        if self.raw {
            builder = builder.raw_response(true);
        }
        for header in &self.header {
            let (name, value) = parse_header(header)?;
            builder = builder.custom_header(name, value);
        }
        Ok(builder)
    }
}

fn config_path() -> String {
    ConfigFile::path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| "the configuration file".to_string())
}

/// Splits `Name: Value`.
pub(crate) fn parse_header(header: &str) -> Result<(&str, &str)> {
    match header.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => bail!("Invalid header format: {header}. Expected 'Name: Value'"),
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the operations this client can call
    Ops(OpsCommand),

    /// Call an operation by name
    Call(CallCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header("X-Trace: abc").unwrap(), ("X-Trace", "abc"));
        assert_eq!(parse_header("x-url:http://a:1").unwrap(), ("x-url", "http://a:1"));
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn test_cli_parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "clumio",
            "call",
            "read_task",
            "-p",
            "task_id=1",
            "--ou",
            "ou-1",
            "-H",
            "x-a: b",
            "--raw",
        ])
        .unwrap();
        assert_eq!(cli.global.organizational_unit.as_deref(), Some("ou-1"));
        assert_eq!(cli.global.header, vec!["x-a: b".to_string()]);
        assert!(cli.global.raw);
        assert!(matches!(cli.command, Commands::Call(_)));
    }

    #[test]
    fn test_command_line_overrides_apply() {
        let options = GlobalOptions {
            hostname: Some("http://127.0.0.1:9".into()),
            organizational_unit: Some("ou-2".into()),
            header: vec!["x-trace: 1".into()],
            raw: true,
            ..Default::default()
        };
        let config = options
            .apply(Config::builder().api_token("t"))
            .unwrap()
            .build_with_env(|_| None)
            .unwrap();
        assert_eq!(config.hostname(), "http://127.0.0.1:9");
        assert_eq!(config.organizational_unit_context(), "ou-2");
        assert!(config.raw_response());
        assert_eq!(config.custom_headers().get("x-trace").unwrap(), "1");
    }
}
