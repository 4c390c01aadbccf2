//! `arrowflip convert` command implementation.

use super::{fail, print_json};
use arrowflip_core::version::REPORT_SCHEMA_VERSION;
use arrowflip_core::{BodyForm, Config, Conversion, Converter, Layout};
use miette::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ConvertReport<'a> {
    schema_version: u32,
    changed: bool,
    from: Option<BodyForm>,
    to: Option<BodyForm>,
    layout: Option<Layout>,
    output: &'a str,
}

impl<'a> ConvertReport<'a> {
    fn new(conversion: &'a Conversion) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            changed: conversion.changed(),
            from: conversion.from,
            to: conversion.to(),
            layout: conversion.layout,
            output: &conversion.output,
        }
    }
}

/// Run the convert command.
pub fn run(config: &Config, source: &str, json: bool) -> Result<()> {
    tracing::debug!(bytes = source.len(), "converting fragment");

    let converter = Converter::with_options(source, config.options.clone());
    let conversion = match converter.conversion() {
        Ok(conversion) => conversion,
        Err(err) => return fail(err, json),
    };

    match conversion.from {
        Some(from) => tracing::debug!(
            from = from.as_str(),
            to = from.opposite().as_str(),
            layout = ?conversion.layout,
            "converted arrow function body"
        ),
        None => tracing::debug!("no arrow function body found; output is the input"),
    }

    if json {
        print_json(&ConvertReport::new(&conversion))
    } else {
        print_text(&conversion.output)
    }
}

fn print_text(output: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let write = if output.ends_with('\n') {
        out.write_all(output.as_bytes())
    } else {
        writeln!(out, "{output}")
    };
    write.map_err(|e| miette::miette!("Failed to write output: {}", e))
}
