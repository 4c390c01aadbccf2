#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::return_self_not_must_use)]

//! Core of arrowflip: converts a JavaScript arrow function between block
//! body (`=> { return x; }`) and expression body (`=> (x)`) form.
//!
//! This crate has no logging dependency; the CLI owns logging.

pub mod config;
pub mod convert;
pub mod error;
pub mod version;

pub use config::{Config, ConvertOptions};
pub use convert::{convert, BodyForm, Conversion, Converter, Layout, Regions};
pub use error::{ConvertError, Error};
pub use version::VERSION;
