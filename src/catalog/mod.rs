//! Union catalog module
//!
//! Union fields defined in YAML at runtime and decoded by the same
//! first-match engine as the typed unions.
//!
//! # Format
//!
//! ```yaml
//! unions:
//!   - field: accounting_period
//!     alternatives:
//!       - scalar: string
//!       - record:
//!           name: AccountingPeriod
//!           fields:
//!             - { name: start_date, type: string, required: true }
//!             - { name: end_date, type: string, required: true }
//! ```

mod loader;
mod types;

pub use loader::{load_catalog, load_catalog_from_str};
pub use types::{AlternativeDef, Catalog, DecodedValue, FieldDef, RecordDef, UnionDef};
