//! Serializer errors

use modeldict_core::ResolveError;
use thiserror::Error;

/// Errors that can occur while serializing records
///
/// Missing single relations and cycles are not errors; they are rendered as
/// `null` and as an omitted field respectively.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerializeError {
	/// Attribute resolution failed in the data-access layer
	#[error(transparent)]
	Resolve(#[from] ResolveError),

	/// Nesting went deeper than the configured bound
	#[error("Maximum depth exceeded: depth={depth}, max={max_depth}")]
	MaxDepthExceeded { depth: usize, max_depth: usize },

	/// Rendering the serialized value as JSON text failed
	#[error("JSON encoding error: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Result type alias for serializer operations
pub type SerializeResult<T> = Result<T, SerializeError>;
