use thiserror::Error;

/// Errors raised while assembling a [`Catalog`](crate::Catalog).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// Two options share the same identifying value.
	#[error("option value '{value}' appears more than once in the catalog")]
	DuplicateValue { value: String },
}
