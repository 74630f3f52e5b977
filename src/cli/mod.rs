//! CLI module
//!
//! Command-line interface for decoding union fields.
//!
//! # Commands
//!
//! - `decode` - Decode a union field value
//! - `validate` - Check a value against a union field
//! - `record` - Decode a whole record
//! - `fields` - List union fields
//! - `schema` - Show a JSON Schema

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
