//
//  clumio-sdk
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Table Output
//!
//! Human-readable tables for the `clumio` binary, rendered with
//! `comfy_table`. Header cells are colored when the terminal supports it.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::api::operation::{Operation, PageStyle};

/// A table with the UTF-8 preset that wraps to the terminal width.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder over [`create_table`].
///
/// ```rust
/// use clumio_sdk::output::table::TableBuilder;
///
/// let table = TableBuilder::new()
///     .color(false)
///     .headers(["Operation", "Method"])
///     .row(["list_tasks", "GET"])
///     .build();
/// assert!(table.to_string().contains("list_tasks"));
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the operation catalog, one row per operation.
pub fn operations_table<'o>(
    operations: impl IntoIterator<Item = &'o Operation>,
    color: bool,
) -> Table {
    let mut builder = TableBuilder::new().color(color).headers([
        "Operation",
        "Method",
        "Path",
        "Accept",
        "Success",
        "Paging",
    ]);

    for operation in operations {
        let success = operation
            .success
            .iter()
            .map(|code| format_status(*code, color))
            .collect::<Vec<_>>()
            .join(", ");
        builder = builder.row([
            operation.name.to_string(),
            operation.method.to_string(),
            operation.path.to_string(),
            format!("{}={}", operation.resource, operation.version),
            success,
            format_paging(operation.pages).to_string(),
        ]);
    }

    builder.build()
}

/// `202` is highlighted since it means the work is queued as a task.
pub fn format_status(status: u16, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    match status {
        202 => style(status).yellow().to_string(),
        200..=299 => style(status).green().to_string(),
        _ => style(status).red().to_string(),
    }
}

pub fn format_paging(pages: PageStyle) -> &'static str {
    match pages {
        PageStyle::None => "-",
        PageStyle::Cursor => "cursor",
        PageStyle::Legacy => "legacy",
    }
}
