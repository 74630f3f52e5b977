//! CLI runner - executes commands

use crate::catalog::{load_catalog, Catalog};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result, ResultExt};
use crate::path;
use crate::registry::{find_field, find_record, FieldDecoder, BUILTIN_FIELDS};
use serde_json::{json, Value};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    ///
    /// Returns a failure exit code when `validate` finds the value invalid.
    pub fn run(&self) -> Result<ExitCode> {
        match &self.cli.command {
            Commands::Decode {
                field,
                input,
                path,
                each,
            } => {
                let raw = read_input(input.as_deref(), path.as_deref())?;
                for msg in self.decode(field, &raw, *each)? {
                    self.output_message(&msg);
                }
                Ok(ExitCode::SUCCESS)
            }
            Commands::Validate { field, input, path } => {
                let raw = read_input(input.as_deref(), path.as_deref())?;
                let msg = self.validate(field, &raw)?;
                self.output_message(&msg);
                if msg["status"] == "VALID" {
                    Ok(ExitCode::SUCCESS)
                } else {
                    Ok(ExitCode::FAILURE)
                }
            }
            Commands::Record {
                record,
                input,
                path,
            } => {
                let raw = read_input(input.as_deref(), path.as_deref())?;
                self.output_message(&Self::record(record, &raw)?);
                Ok(ExitCode::SUCCESS)
            }
            Commands::Fields => {
                self.output_message(&self.fields()?);
                Ok(ExitCode::SUCCESS)
            }
            Commands::Schema { name } => {
                self.output_message(&self.schema(name)?);
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Load the union catalog, empty when none is configured
    fn load_catalog(&self) -> Result<Catalog> {
        match &self.cli.catalog {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::default()),
        }
    }

    /// Run `f` with the decoder for `field`, catalog definitions first
    fn with_decoder<T>(
        &self,
        field: &str,
        f: impl FnOnce(&dyn FieldDecoder) -> Result<T>,
    ) -> Result<T> {
        let catalog = self.load_catalog()?;
        let decoder: &dyn FieldDecoder = if let Some(def) = catalog.get(field) {
            debug!(field, "Using catalog definition");
            def
        } else if let Some(builtin) = find_field(field) {
            builtin
        } else {
            return Err(Error::UnknownField {
                field: field.to_string(),
            });
        };
        f(decoder)
    }

    /// Decode a field value, or each element of an array value
    fn decode(&self, field: &str, raw: &Value, each: bool) -> Result<Vec<Value>> {
        self.with_decoder(field, |decoder| {
            let values = match raw {
                Value::Array(items) if each => items.as_slice(),
                other => std::slice::from_ref(other),
            };

            let messages = values
                .iter()
                .map(|value| {
                    let resolved = decoder.resolve(value)?;
                    Ok(json!({
                        "type": "DECODED",
                        "field": decoder.field(),
                        "alternative": resolved.alternative,
                        "value": resolved.value
                    }))
                })
                .collect::<Result<Vec<_>>>()?;

            info!(field, decoded = messages.len(), "Decoded union values");
            Ok(messages)
        })
    }

    /// Validate a field value; data errors become an INVALID message
    fn validate(&self, field: &str, raw: &Value) -> Result<Value> {
        self.with_decoder(field, |decoder| match decoder.resolve(raw) {
            Ok(resolved) => Ok(json!({
                "type": "VALIDATION",
                "field": decoder.field(),
                "status": "VALID",
                "alternative": resolved.alternative
            })),
            Err(e) if e.is_decode_failure() => Ok(json!({
                "type": "VALIDATION",
                "field": decoder.field(),
                "status": "INVALID",
                "message": e.to_string()
            })),
            Err(e) => Err(e),
        })
    }

    /// Decode a whole record
    fn record(name: &str, raw: &Value) -> Result<Value> {
        let record = find_record(name)?;
        Ok(json!({
            "type": "RECORD",
            "record": record.schema.name,
            "value": record.decode(raw)?
        }))
    }

    /// List built-in and catalog union fields
    fn fields(&self) -> Result<Value> {
        let catalog = self.load_catalog()?;

        let fields: Vec<Value> = BUILTIN_FIELDS
            .iter()
            .filter(|builtin| catalog.get(builtin.field).is_none())
            .map(|builtin| describe(builtin, "builtin"))
            .chain(catalog.unions.iter().map(|def| describe(def, "catalog")))
            .collect();

        Ok(json!({
            "type": "FIELDS",
            "fields": fields
        }))
    }

    /// JSON Schema of a union field, falling back to a record type
    fn schema(&self, name: &str) -> Result<Value> {
        let schema = match self.with_decoder(name, |decoder| Ok(decoder.json_schema())) {
            Ok(schema) => schema,
            Err(Error::UnknownField { .. }) => find_record(name)
                .map_err(|_| Error::UnknownField {
                    field: name.to_string(),
                })?
                .schema
                .to_json_schema(),
            Err(e) => return Err(e),
        };

        Ok(json!({
            "type": "SCHEMA",
            "name": name,
            "schema": schema.to_json()
        }))
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Listing entry for one union field
fn describe(decoder: &dyn FieldDecoder, source: &str) -> Value {
    json!({
        "field": decoder.field(),
        "source": source,
        "alternatives": decoder.alternative_labels()
    })
}

/// Read JSON from a file or stdin and select `path` inside it
fn read_input(input: Option<&Path>, path: Option<&str>) -> Result<Value> {
    let text = match input {
        Some(file) => fs::read_to_string(file)
            .with_context(|| format!("Failed to read input '{}'", file.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let raw: Value = serde_json::from_str(&text)?;
    match path {
        Some(path) => path::extract(&raw, path),
        None => Ok(raw),
    }
}
