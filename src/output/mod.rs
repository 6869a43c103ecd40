//
//  clumio-sdk
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Terminal output for the `clumio` binary.
//!
//! - [`json`]: Pretty and line-delimited JSON
//! - [`table`]: Table formatting utilities using `comfy_table`
//!
//! Results go to stdout; diagnostics go to stderr so JSON output stays
//! pipeable.

pub mod json;
pub mod table;

use console::style;

/// Writes `error: <msg>` to stderr, red when the terminal supports it.
pub fn write_error(msg: &str) {
    if console::colors_enabled_stderr() {
        eprintln!("{} {}", style("error:").red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Writes a dimmed `name: value` line to stderr.
pub fn write_field(name: &str, value: &str) {
    if console::colors_enabled_stderr() {
        eprintln!("{} {}", style(format!("{name}:")).dim(), value);
    } else {
        eprintln!("{}: {}", name, value);
    }
}
