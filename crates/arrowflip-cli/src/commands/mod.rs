pub mod convert;
pub mod detect;
pub mod version;

use arrowflip_core::version::REPORT_SCHEMA_VERSION;
use arrowflip_core::ConvertError;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

/// Exit code for fragments the converter rejects.
pub const EXIT_VALIDATION_ERROR: i32 = 2;

#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    schema_version: u32,
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

/// Report a rejected fragment.
///
/// In JSON mode this prints one error object and exits with
/// [`EXIT_VALIDATION_ERROR`]; otherwise the error is returned for miette.
fn fail(err: ConvertError, json: bool) -> Result<()> {
    tracing::debug!(code = err.code(), "fragment rejected");

    if !json {
        return Err(err).into_diagnostic();
    }

    print_json(&ErrorReport {
        schema_version: REPORT_SCHEMA_VERSION,
        error: ErrorBody {
            code: err.code(),
            message: err.to_string(),
        },
    })?;
    std::process::exit(EXIT_VALIDATION_ERROR);
}
