//! Dynamic record implementation
//!
//! [`Instance`] stores attribute values by name against a static
//! [`ModelMeta`]. Relations are set after construction, which is what makes
//! it possible to link bidirectional graphs (a todo pointing at its goal and
//! the goal's prefetched todos pointing back).

use crate::error::{ResolveError, ResolveResult};
use crate::field::ModelMeta;
use crate::prefetch::PrefetchCache;
use crate::record::{Record, RecordId, RecordRef};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

#[derive(Default)]
struct InstanceState {
	values: IndexMap<String, Value>,
	related: IndexMap<String, Option<RecordRef>>,
	prefetched: Option<Arc<PrefetchCache>>,
}

/// A record whose attributes are stored by name
///
/// An attribute that was never set is absent: reading it reports
/// [`ResolveError::AttributeAbsent`]. Setting a relation to `None` marks it
/// as loaded with no related record.
///
/// # Examples
///
/// ```
/// use modeldict_core::{FieldDescriptor, Instance, ModelMeta, Record};
///
/// static GOAL: ModelMeta = ModelMeta::new("someapp.Goal", &[FieldDescriptor::value("name")]);
/// static TODO: ModelMeta = ModelMeta::new("someapp.Todo", &[
///     FieldDescriptor::value("title"),
///     FieldDescriptor::foreign_key("goal"),
/// ]);
///
/// let goal = Instance::new(&GOAL).with_value("name", "Learn foreign languages").into_ref();
/// let todo = Instance::new(&TODO).with_value("title", "Study italian").into_ref();
///
/// assert!(todo.related("goal").unwrap_err().is_absent());
///
/// todo.set_related("goal", Some(goal));
/// assert!(todo.related("goal").unwrap().is_some());
/// ```
pub struct Instance {
	meta: &'static ModelMeta,
	state: RwLock<InstanceState>,
}

impl Instance {
	pub fn new(meta: &'static ModelMeta) -> Self {
		Self {
			meta,
			state: RwLock::new(InstanceState::default()),
		}
	}

	/// Set a scalar attribute while building
	pub fn with_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.state.get_mut().values.insert(field.into(), value.into());
		self
	}

	/// Set a single-valued relation while building
	pub fn with_related(mut self, field: impl Into<String>, related: Option<RecordRef>) -> Self {
		self.state.get_mut().related.insert(field.into(), related);
		self
	}

	/// Share the instance so it can take part in relations
	pub fn into_ref(self) -> Arc<Self> {
		Arc::new(self)
	}

	pub fn set_value(&self, field: impl Into<String>, value: impl Into<Value>) {
		self.state.write().values.insert(field.into(), value.into());
	}

	/// Set a single-valued relation; `None` means loaded and empty
	pub fn set_related(&self, field: impl Into<String>, related: Option<RecordRef>) {
		self.state.write().related.insert(field.into(), related);
	}

	/// Forget an attribute so that it reads as absent again
	pub fn unset(&self, field: &str) {
		let mut state = self.state.write();
		state.values.shift_remove(field);
		state.related.shift_remove(field);
	}

	/// Materialize a multi-valued relation
	///
	/// Loading the same relation twice replaces the earlier members but keeps
	/// its position in the cache.
	pub fn prefetch(&self, relation: impl Into<String>, items: Vec<RecordRef>) {
		let mut state = self.state.write();
		let cache = state.prefetched.get_or_insert_with(Default::default);
		Arc::make_mut(cache).insert(relation, items);
	}

	/// Drop every materialized relation
	pub fn clear_prefetched(&self) {
		self.state.write().prefetched = None;
	}
}

impl Record for Instance {
	fn meta(&self) -> &'static ModelMeta {
		self.meta
	}

	fn has_attribute(&self, name: &str) -> bool {
		let state = self.state.read();
		state.values.contains_key(name)
			|| state.related.contains_key(name)
			|| self.meta.has_manager(name)
	}

	fn value(&self, field: &str) -> ResolveResult<Value> {
		self.state
			.read()
			.values
			.get(field)
			.cloned()
			.ok_or_else(|| ResolveError::absent(self.meta.label, field))
	}

	fn related(&self, field: &str) -> ResolveResult<Option<RecordRef>> {
		self.state
			.read()
			.related
			.get(field)
			.cloned()
			.ok_or_else(|| ResolveError::absent(self.meta.label, field))
	}

	fn prefetched(&self) -> Option<Arc<PrefetchCache>> {
		self.state.read().prefetched.clone()
	}
}

impl fmt::Debug for Instance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.read();
		f.debug_struct("Instance")
			.field("model", &self.meta.label)
			.field("id", &RecordId::of(self))
			.field("values", &state.values)
			.field(
				"related",
				&state
					.related
					.iter()
					.map(|(name, r)| (name, r.as_deref().map(RecordId::of)))
					.collect::<Vec<_>>(),
			)
			.field("prefetched", &state.prefetched)
			.finish()
	}
}
