//
//  clumio-sdk
//  cli/call.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Generic operation call command
//!
//! Executes any operation from the catalog by name, through the same
//! executor and paginator the typed controllers use. Responses are printed
//! as untyped JSON, so fields this client does not model are still shown.
//!
//! ## Examples
//!
//! ```bash
//! # Read one task
//! clumio call read_task -p task_id=12345
//!
//! # Abort it
//! clumio call update_task -p task_id=12345 --body '{"status": "aborted"}'
//!
//! # Every protected EBS volume, one page per line
//! clumio call list_aws_ebs_volumes -q 'filter={"protection_status":{"$eq":"protected"}}' --all
//!
//! # Body from a file, with status and headers
//! clumio --raw call create_policy_definition --body @policy.json
//! ```

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;

use crate::api::common::Paginator;
use crate::api::executor::{Executor, Response};
use crate::api::operation::{Operation, PageStyle, Query, Request};
use crate::api::resources::find_operation;
use crate::output::json::{write_json, write_json_line};
use crate::output::write_field;

use super::GlobalOptions;

/// Call an operation by name
#[derive(Args, Debug)]
pub struct CallCommand {
    /// Operation name, e.g. list_tasks (see 'clumio ops')
    pub operation: String,

    /// Path parameter as NAME=VALUE (repeatable)
    #[arg(long = "path", short = 'p', action = clap::ArgAction::Append)]
    pub path_params: Vec<String>,

    /// Query parameter as NAME=VALUE (repeatable)
    #[arg(long = "query", short = 'q', action = clap::ArgAction::Append)]
    pub query_params: Vec<String>,

    /// JSON request body, @FILE to read it from a file, or - for stdin
    #[arg(long)]
    pub body: Option<String>,

    /// Walk every page of a list operation, printing one JSON page per line
    #[arg(long)]
    pub all: bool,
}

impl CallCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let operation = find_operation(&self.operation).with_context(|| {
            format!(
                "Unknown operation `{}`. Run 'clumio ops' to list operations.",
                self.operation
            )
        })?;
        if self.all && operation.pages == PageStyle::None {
            bail!("`{}` is not a paginated operation", operation.name);
        }
        let request = self.build_request(operation)?;

        let config = global.config()?;
        let executor = Executor::new(&config)?;

        if self.all {
            let mut pages = Paginator::<Value>::new(executor, request);
            while let Some(page) = pages.next_page().await? {
                print_response(&page, true)?;
            }
            tracing::debug!(pages = pages.pages_fetched(), "pagination finished");
            return Ok(());
        }

        let response = executor.send::<Value>(request).await?;
        print_response(&response, false)
    }

    fn build_request(&self, operation: &'static Operation) -> Result<Request> {
        let mut request = Request::new(operation);
        let expected: Vec<&'static str> = placeholders(operation.path).collect();

        let mut bound = Vec::new();
        for param in &self.path_params {
            let (name, value) = parse_pair(param)?;
            let Some(placeholder) = expected.iter().copied().find(|p| *p == name) else {
                bail!(
                    "`{}` has no path parameter `{name}` (path: {})",
                    operation.name,
                    operation.path
                );
            };
            request = request.path_param(placeholder, value);
            bound.push(placeholder);
        }
        if let Some(missing) = expected.iter().find(|p| !bound.contains(p)) {
            bail!("Missing path parameter `{missing}`. Pass it with -p {missing}=VALUE");
        }

        let mut query = Query::new();
        for param in &self.query_params {
            let (name, value) = parse_pair(param)?;
            if !operation.accepts_query(name) {
                bail!(
                    "`{}` does not accept query parameter `{name}` (accepted: {})",
                    operation.name,
                    operation.query.join(", ")
                );
            }
            query.set(name, value.to_string());
        }

        Ok(request.query(query).json(self.read_body()?))
    }

    fn read_body(&self) -> Result<Option<Value>> {
        let Some(body) = &self.body else {
            return Ok(None);
        };

        let content = if body == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else if let Some(path) = body.strip_prefix('@') {
            fs::read_to_string(path).with_context(|| format!("Failed to read body from {path}"))?
        } else {
            body.clone()
        };

        let value = serde_json::from_str(&content).context("Request body is not valid JSON")?;
        Ok(Some(value))
    }
}

/// `{name}` placeholders of a path template, in order.
fn placeholders(template: &'static str) -> impl Iterator<Item = &'static str> {
    template
        .split('/')
        .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
}

fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("Invalid parameter format: {pair}. Expected NAME=VALUE"),
    }
}

fn print_response(response: &Response<Value>, line: bool) -> Result<()> {
    if let Some(raw) = response.raw() {
        write_field("status", &raw.status.to_string());
        for (name, value) in &raw.headers {
            write_field(name.as_str(), value.to_str().unwrap_or("<binary>"));
        }
    }

    match response.parsed() {
        Some(Value::Null) => Ok(()),
        Some(value) if line => write_json_line(value),
        Some(value) => write_json(value),
        None => {
            if let Some(raw) = response.raw() {
                println!("{}", raw.body);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn command(operation: &str) -> CallCommand {
        CallCommand {
            operation: operation.to_string(),
            path_params: Vec::new(),
            query_params: Vec::new(),
            body: None,
            all: false,
        }
    }

    #[test]
    fn test_placeholders() {
        let names: Vec<_> = placeholders("/things/{thing_id}/parts/{part_id}").collect();
        assert_eq!(names, vec!["thing_id", "part_id"]);
    }

    #[test]
    fn test_build_request_binds_path_and_query() {
        let mut cmd = command("read_policy_definition");
        cmd.path_params.push("policy_id=p 1".into());
        cmd.query_params.push("embed=read-policy-protection-info".into());

        let operation = find_operation("read_policy_definition").unwrap();
        let request = cmd.build_request(operation).unwrap();
        let url = request
            .url(&url::Url::parse("https://us-west-2.api.clumio.com/").unwrap())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://us-west-2.api.clumio.com/policies/definitions/p%201?embed=read-policy-protection-info"
        );
    }

    #[test]
    fn test_build_request_rejects_unknown_names() {
        let operation = find_operation("read_task").unwrap();

        let mut cmd = command("read_task");
        cmd.path_params.push("id=1".into());
        assert!(cmd.build_request(operation).is_err());

        let cmd = command("read_task");
        let err = cmd.build_request(operation).unwrap_err();
        assert!(err.to_string().contains("task_id"));

        let mut cmd = command("read_task");
        cmd.path_params.push("task_id=1".into());
        cmd.query_params.push("limit=5".into());
        assert!(cmd.build_request(operation).is_err());
    }

    #[test]
    fn test_body_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"status": "aborted"}}"#).unwrap();

        let mut cmd = command("update_task");
        cmd.body = Some(format!("@{}", file.path().display()));
        assert_eq!(cmd.read_body().unwrap(), Some(json!({"status": "aborted"})));

        cmd.body = Some("{not json".into());
        assert!(cmd.read_body().is_err());
    }
}
