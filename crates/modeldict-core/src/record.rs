//! The record abstraction read by the serializer

use crate::error::ResolveResult;
use crate::field::ModelMeta;
use crate::prefetch::PrefetchCache;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a record
pub type RecordRef = Arc<dyn Record>;

/// A materialized model instance
///
/// Implementations are owned by the data-access layer; the serializer only
/// reads through this trait. Related records are handed out as shared
/// [`RecordRef`]s so that cycle detection can compare them by identity.
pub trait Record: Send + Sync {
	/// Static metadata of the record's type
	fn meta(&self) -> &'static ModelMeta;

	/// Whether the record currently exposes an attribute with this name
	fn has_attribute(&self, name: &str) -> bool;

	/// Read a scalar attribute
	///
	/// Values are passed through to the output untouched.
	fn value(&self, field: &str) -> ResolveResult<Value>;

	/// Read a single-valued relation
	///
	/// `Ok(None)` means the relation is loaded and empty. An unloaded
	/// relation is reported as [`ResolveError::AttributeAbsent`].
	///
	/// [`ResolveError::AttributeAbsent`]: crate::ResolveError::AttributeAbsent
	fn related(&self, field: &str) -> ResolveResult<Option<RecordRef>>;

	/// Eagerly materialized multi-valued relations, if any were loaded
	fn prefetched(&self) -> Option<Arc<PrefetchCache>>;
}

/// Reference identity of a record
///
/// Two handles share an identity only if they point at the same allocation;
/// two distinct records with equal field values are different identities.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
	/// Identity of the given record
	///
	/// # Examples
	///
	/// ```
	/// use modeldict_core::{FieldDescriptor, Instance, ModelMeta, RecordId};
	///
	/// static GOAL: ModelMeta = ModelMeta::new("someapp.Goal", &[FieldDescriptor::value("name")]);
	///
	/// let a = Instance::new(&GOAL).with_value("name", "Learn").into_ref();
	/// let b = Instance::new(&GOAL).with_value("name", "Learn").into_ref();
	///
	/// assert_eq!(RecordId::of(&*a), RecordId::of(&*a.clone()));
	/// assert_ne!(RecordId::of(&*a), RecordId::of(&*b));
	/// ```
	pub fn of(record: &dyn Record) -> Self {
		Self(record as *const dyn Record as *const () as usize)
	}
}

impl fmt::Debug for RecordId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RecordId(0x{:x})", self.0)
	}
}

impl fmt::Debug for dyn Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Record")
			.field("model", &self.meta().label)
			.field("id", &RecordId::of(self))
			.finish()
	}
}
