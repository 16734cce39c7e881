//! sensor-io - Loading delimited sensor datasets
//!
//! Reads semicolon-delimited accelerometer/gyroscope exports into an
//! in-memory [`Table`]:
//!
//! - **Parsing**: configurable delimiter, decimal marker and missing tokens
//! - **Malformed rows**: rows with extra fields are warned about and
//!   skipped, short rows are padded with missing values
//! - **Coercion**: designated columns become numeric, unparseable entries
//!   become missing
//!
//! # Design
//!
//! Columns store `Option<T>` per row so that "missing" is explicit in the
//! type. The table is built once and is read-only afterwards.

pub mod csv_reader;
pub mod reader;
pub mod schema;
pub mod table;

pub use csv_reader::CsvReader;
pub use reader::*;
pub use schema::*;
pub use table::Table;
