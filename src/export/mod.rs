//! Snapshot export
//!
//! Point-in-time exports of a budget snapshot in spreadsheet-compatible
//! CSV and machine/human-readable JSON and YAML. Exporting hands data to a
//! writer; it is not persistence of the live aggregate.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_categories_csv, export_expenses_csv, export_incomes_csv};
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
