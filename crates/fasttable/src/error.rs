//! Error types for fasttable

use thiserror::Error;

/// Error type for table operations
#[derive(Debug, Error)]
pub enum TableError {
	/// Column derivation requires at least one row
	#[error("cannot derive columns from an empty row set")]
	NoRows,
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
