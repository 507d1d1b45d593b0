//! Materialized multi-valued relations
//!
//! Multi-valued relations are only ever rendered from this cache. A relation
//! name that is missing from the cache was not loaded; a name mapped to an
//! empty list was loaded and has no members.

use crate::error::ResolveResult;
use crate::instance::Instance;
use crate::record::{Record, RecordRef};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered store of eagerly loaded relations, keyed by relation name
#[derive(Clone, Default)]
pub struct PrefetchCache {
	relations: IndexMap<String, Vec<RecordRef>>,
}

impl PrefetchCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store the materialized members of a relation, replacing any previous load
	pub fn insert(&mut self, relation: impl Into<String>, items: Vec<RecordRef>) {
		self.relations.insert(relation.into(), items);
	}

	/// Members of a loaded relation, or `None` if it was never loaded
	pub fn get(&self, relation: &str) -> Option<&[RecordRef]> {
		self.relations.get(relation).map(Vec::as_slice)
	}

	pub fn contains(&self, relation: &str) -> bool {
		self.relations.contains_key(relation)
	}

	/// Loaded relations in load order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[RecordRef])> {
		self.relations
			.iter()
			.map(|(name, items)| (name.as_str(), items.as_slice()))
	}

	pub fn relation_names(&self) -> impl Iterator<Item = &str> {
		self.relations.keys().map(String::as_str)
	}

	/// Number of loaded relations
	pub fn len(&self) -> usize {
		self.relations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.relations.is_empty()
	}
}

impl fmt::Debug for PrefetchCache {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.relations.iter().map(|(name, items)| (name, items.len())))
			.finish()
	}
}

/// Bulk-load one relation for every instance in a collection
///
/// `loader` is called once per instance and its result is stored under
/// `relation`. The first loader failure is returned unchanged; instances
/// processed before the failure keep their freshly loaded relation.
///
/// # Examples
///
/// ```
/// use modeldict_core::{prefetch_related, FieldDescriptor, Instance, ModelMeta, Record, RecordRef};
///
/// static TODO: ModelMeta = ModelMeta::new("someapp.Todo", &[
///     FieldDescriptor::value("title"),
///     FieldDescriptor::reverse_many_to_many("tag"),
/// ]);
///
/// let todos = vec![Instance::new(&TODO).with_value("title", "Wash the dishes").into_ref()];
/// prefetch_related(&todos, "tag", |_todo| Ok(Vec::<RecordRef>::new())).unwrap();
///
/// let cache = todos[0].prefetched().unwrap();
/// assert!(cache.contains("tag"));
/// assert!(cache.get("tag").unwrap().is_empty());
/// ```
pub fn prefetch_related<F>(
	instances: &[Arc<Instance>],
	relation: &str,
	mut loader: F,
) -> ResolveResult<()>
where
	F: FnMut(&Instance) -> ResolveResult<Vec<RecordRef>>,
{
	for instance in instances {
		let items = loader(instance.as_ref())?;
		tracing::trace!(
			model = instance.meta().label,
			relation,
			count = items.len(),
			"materialized relation"
		);
		instance.prefetch(relation, items);
	}
	Ok(())
}
