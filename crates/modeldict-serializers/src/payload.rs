//! Top-level payload serialization
//!
//! Handlers may return a single record, a collection of records, or a value
//! that is already JSON. [`serialize_payload`] turns any of them into a
//! [`serde_json::Value`].

use crate::ancestry::Ancestry;
use crate::error::SerializeResult;
use crate::serializer::{DEFAULT_SERIALIZER, RecordSerializer};
use modeldict_core::{Record, RecordRef};
use serde_json::Value;

/// A value returned by a handler, before encoding
#[derive(Debug, Clone)]
pub enum Payload {
	/// A single model instance
	Record(RecordRef),
	/// An ordered collection of model instances
	Collection(Vec<RecordRef>),
	/// Anything else, passed through unchanged
	Plain(Value),
}

impl From<RecordRef> for Payload {
	fn from(record: RecordRef) -> Self {
		Self::Record(record)
	}
}

impl From<Vec<RecordRef>> for Payload {
	fn from(records: Vec<RecordRef>) -> Self {
		Self::Collection(records)
	}
}

impl From<Value> for Payload {
	fn from(value: Value) -> Self {
		Self::Plain(value)
	}
}

impl RecordSerializer {
	/// Serialize a payload into a JSON value
	///
	/// # Examples
	///
	/// ```
	/// use modeldict_serializers::{Payload, RecordSerializer};
	/// use serde_json::json;
	///
	/// let out = RecordSerializer::new()
	///     .serialize_payload(&Payload::from(json!({"detail": "ok"})))
	///     .unwrap();
	/// assert_eq!(out, json!({"detail": "ok"}));
	/// ```
	pub fn serialize_payload(&self, payload: &Payload) -> SerializeResult<Value> {
		match payload {
			Payload::Record(record) => {
				tracing::debug!(model = record.meta().label, "serializing record payload");
				self.serialize_record(&**record, &Ancestry::new())
					.map(Value::Object)
			}
			Payload::Collection(records) => self
				.serialize_collection(records, &Ancestry::new())
				.map(Value::Array),
			Payload::Plain(value) => Ok(value.clone()),
		}
	}

	/// Serialize a payload and encode it as JSON text
	pub fn render_json(&self, payload: &Payload) -> SerializeResult<String> {
		let value = self.serialize_payload(payload)?;
		Ok(serde_json::to_string(&value)?)
	}
}

/// Serialize a payload with the default settings
pub fn serialize_payload(payload: &Payload) -> SerializeResult<Value> {
	DEFAULT_SERIALIZER.serialize_payload(payload)
}
