// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared JSON printing for command output.

use anyhow::Result;
use serde::Serialize;

/// Print a value as JSON on stdout, pretty unless `compact` is set.
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    println!("{}", to_json_string(value, compact)?);
    Ok(())
}

/// Schema version stamped into `json2` envelopes.
pub const JSON2_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Serialize)]
pub struct Json2Meta {
    pub schema_version: &'static str,
    pub command: &'static str,
}

/// Structured output for agents: `{"meta": {...}, "result": ...}`.
#[derive(Debug, Serialize)]
pub struct Json2Payload<T: Serialize> {
    pub meta: Json2Meta,
    pub result: T,
}

impl<T: Serialize> Json2Payload<T> {
    pub fn new(command: &'static str, result: T) -> Self {
        Self {
            meta: Json2Meta {
                schema_version: JSON2_SCHEMA_VERSION,
                command,
            },
            result,
        }
    }
}

pub fn to_json_string<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}
