//! `arrowflip detect` command implementation.

use super::{fail, print_json};
use arrowflip_core::version::REPORT_SCHEMA_VERSION;
use arrowflip_core::{BodyForm, Converter};
use miette::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DetectReport {
    schema_version: u32,
    form: Option<BodyForm>,
}

/// Run the detect command.
pub fn run(source: &str, json: bool) -> Result<()> {
    let form = match Converter::new(source).form() {
        Ok(form) => form,
        Err(err) => return fail(err, json),
    };

    tracing::debug!(form = ?form, "detected body form");

    if json {
        print_json(&DetectReport {
            schema_version: REPORT_SCHEMA_VERSION,
            form,
        })
    } else {
        println!("{}", form.map_or("none", |f| f.as_str()));
        Ok(())
    }
}
