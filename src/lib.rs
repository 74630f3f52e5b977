// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Ledgerlink Models
//!
//! Typed models for an accounting-integration API, built around a decoder
//! for fields that arrive either as a bare identifier or as an expanded
//! object with no discriminant.
//!
//! ## Features
//!
//! - **Union Fields**: Ordered first-match decoding with a single error naming the field
//! - **Record Codec**: Shape-checked records that keep undeclared keys
//! - **Enum Tables**: Closed wire-code sets with strict parsing
//! - **Union Catalog**: Extra union fields declared in YAML at runtime
//! - **JSON Schema**: Draft-07 export of every union and record
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ledgerlink_models::{AccountingPeriodRef, JournalEntry, Record};
//! use serde_json::json;
//!
//! let period: AccountingPeriodRef = ledgerlink_models::union::decode(&json!("ap_1"))?;
//! assert_eq!(period.as_id(), Some("ap_1"));
//!
//! let entry = JournalEntry::from_json(&json!({
//!     "memo": "Accrual",
//!     "accounting_period": {"start_date": "2024-01-01", "end_date": "2024-01-31"}
//! }))?;
//! assert!(entry.accounting_period.unwrap().is_expanded());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │          Models (records, enums, union fields)           │
//! └──────────────────────────────────────────────────────────┘
//!                │                          │
//! ┌──────────────┴──────────┐   ┌───────────┴──────────────┐
//! │  Union decoder          │   │  Record codec            │
//! │  first-match over       │◄──┤  shape check, serde,     │
//! │  ordered alternatives   │   │  additional properties   │
//! └──────────────┬──────────┘   └───────────┬──────────────┘
//!                │                          │
//! ┌──────────────┴──────────────────────────┴──────────────┐
//! │  Schema tables  │  Catalog (YAML)  │  Registry  │ CLI  │
//! └────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Record field tables and JSON Schema export
pub mod schema;

/// Polymorphic field decoder
pub mod union;

/// Accounting records, enums and union fields
pub mod models;

/// Built-in fields and records by wire name
pub mod registry;

/// Runtime union definitions (YAML)
pub mod catalog;

/// Value selection inside API responses
pub mod path;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use catalog::{load_catalog, load_catalog_from_str, Catalog};
pub use models::*;
pub use registry::{FieldDecoder, Resolved};
pub use union::{Alternative, UnionField};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
