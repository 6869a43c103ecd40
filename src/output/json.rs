//
//  clumio-sdk
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! | Function | Description | Use Case |
//! |----------|-------------|----------|
//! | [`write_json`] | Pretty-printed JSON | Single responses |
//! | [`write_json_line`] | One compact JSON document per line | Paginated walks |
//!
//! Both have `_to` variants writing to any [`Write`] destination.

use serde::Serialize;
use std::io::{self, Write};

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json_to(&mut io::stdout().lock(), value)
}

pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes a value as a single compact line to stdout (JSON Lines).
pub fn write_json_line<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json_line_to(&mut io::stdout().lock(), value)
}

pub fn write_json_line_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_lines_are_compact() {
        let mut buffer = Vec::new();
        write_json_line_to(&mut buffer, &json!({"page": 1})).unwrap();
        write_json_line_to(&mut buffer, &json!({"page": 2})).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\"page\":1}\n{\"page\":2}\n");
    }

    #[test]
    fn test_pretty_output_ends_with_newline() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"id": "t-1"})).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.ends_with("}\n"));
    }
}
