//! Data module - spreadsheet loading and column typing

mod loader;
pub mod schema;
mod table;

pub use loader::SpreadsheetLoader;
pub use schema::{ColumnKind, ColumnPartition};
pub use table::{PreviewTable, Table};
