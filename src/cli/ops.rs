//
//  clumio-sdk
//  cli/ops.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::api::resources::OPERATIONS;
use crate::output::json::write_json;
use crate::output::table::{format_paging, operations_table};

use super::GlobalOptions;

/// List the operations this client can call
#[derive(Args, Debug)]
pub struct OpsCommand {
    /// Only operations whose name contains this text
    pub filter: Option<String>,

    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl OpsCommand {
    pub async fn run(&self, _global: &GlobalOptions) -> Result<()> {
        let operations = OPERATIONS
            .iter()
            .copied()
            .filter(|op| match &self.filter {
                Some(filter) => op.name.contains(filter.as_str()),
                None => true,
            });

        if self.json {
            let rows: Vec<_> = operations
                .map(|op| {
                    json!({
                        "name": op.name,
                        "method": op.method.as_str(),
                        "path": op.path,
                        "accept": op.accept(),
                        "query": op.query,
                        "success": op.success,
                        "paging": format_paging(op.pages),
                    })
                })
                .collect();
            return write_json(&rows);
        }

        println!("{}", operations_table(operations, console::colors_enabled()));
        Ok(())
    }
}
