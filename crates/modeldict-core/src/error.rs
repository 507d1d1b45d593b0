//! Attribute resolution errors
//!
//! These are raised by [`Record`](crate::Record) implementations, i.e. by the
//! data-access side. The serializer downgrades `AttributeAbsent` on
//! single-valued relations to `null` and passes everything else through.

use thiserror::Error;

/// Boxed error coming from the data-access layer
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while reading an attribute off a record
#[derive(Debug, Error)]
pub enum ResolveError {
	/// The record does not currently expose the attribute (never loaded,
	/// deferred, or no related row exists for a reverse accessor).
	#[error("{model} has no attribute '{field}'")]
	AttributeAbsent {
		/// Model label
		model: String,
		/// Attribute name
		field: String,
	},

	/// Failure in the data-access layer while resolving the attribute
	#[error(transparent)]
	Upstream(BoxError),
}

impl ResolveError {
	pub fn absent(model: impl Into<String>, field: impl Into<String>) -> Self {
		Self::AttributeAbsent {
			model: model.into(),
			field: field.into(),
		}
	}

	pub fn upstream<E>(error: E) -> Self
	where
		E: Into<BoxError>,
	{
		Self::Upstream(error.into())
	}

	pub fn is_absent(&self) -> bool {
		matches!(self, Self::AttributeAbsent { .. })
	}
}

/// Result type alias for attribute resolution
pub type ResolveResult<T> = Result<T, ResolveError>;
