//! Listing output
//!
//! - `config` - Output configuration types
//! - `render` - Entry line rendering (long and compact)
//! - `streaming` - Text formatter writing to stdout/stderr as sections arrive
//! - `json` - JSON formatter

mod config;
mod json;
mod render;
mod streaming;

pub use config::OutputConfig;
pub use json::{JsonFormatter, JsonSection};
pub use render::{TIME_FORMAT, long_prefix, render};
pub use streaming::ListingFormatter;
