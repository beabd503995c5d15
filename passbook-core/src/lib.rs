//! passbook-core: record types, numeric normalization and the output schema

pub mod numeric;
pub mod record;
pub mod schema;

pub use numeric::normalize;
pub use record::{Bucket, ResultSet, TransactionRecord};
pub use schema::{COLUMNS, columns_match, read_reference_columns};
