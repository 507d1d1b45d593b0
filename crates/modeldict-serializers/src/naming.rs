//! Output names for materialized relations
//!
//! A materialized relation is keyed by its relation name, which is not always
//! the name callers expect in the output. Forward many-to-many fields are
//! exposed under their own name (`todos`), while reverse relations are
//! exposed under the conventional `<name>_set` accessor (`tag_set`).

use modeldict_conf::{DEFAULT_REVERSE_SUFFIX, SerializerSettings};
use modeldict_core::Record;
use std::collections::HashMap;

/// Resolves the output key of a materialized relation
///
/// Resolution order:
///
/// 1. an explicit name registered for the record's model label
/// 2. the relation name itself, if the record exposes an attribute of that name
/// 3. the relation name followed by the suffix (`_set` by default)
///
/// # Examples
///
/// ```
/// use modeldict_core::{FieldDescriptor, Instance, ModelMeta};
/// use modeldict_serializers::ReverseNameResolver;
///
/// static TAG: ModelMeta = ModelMeta::new("someapp.Tag", &[FieldDescriptor::many_to_many("todos")]);
/// static TODO: ModelMeta = ModelMeta::new("someapp.Todo", &[FieldDescriptor::reverse_many_to_many("tag")]);
///
/// let resolver = ReverseNameResolver::default();
/// let tag = Instance::new(&TAG);
/// let todo = Instance::new(&TODO);
///
/// assert_eq!(resolver.resolve(&tag, "todos"), "todos");
/// assert_eq!(resolver.resolve(&todo, "tag"), "tag_set");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseNameResolver {
	suffix: String,
	overrides: HashMap<String, HashMap<String, String>>,
}

impl Default for ReverseNameResolver {
	fn default() -> Self {
		Self {
			suffix: DEFAULT_REVERSE_SUFFIX.to_string(),
			overrides: HashMap::new(),
		}
	}
}

impl ReverseNameResolver {
	pub fn new(suffix: impl Into<String>) -> Self {
		Self {
			suffix: suffix.into(),
			overrides: HashMap::new(),
		}
	}

	pub fn from_settings(settings: &SerializerSettings) -> Self {
		Self {
			suffix: settings.reverse_suffix.clone(),
			overrides: settings.display_names.clone(),
		}
	}

	/// Register an explicit output name for `relation` on `model`
	pub fn with_override(
		mut self,
		model: impl Into<String>,
		relation: impl Into<String>,
		name: impl Into<String>,
	) -> Self {
		self.overrides
			.entry(model.into())
			.or_default()
			.insert(relation.into(), name.into());
		self
	}

	pub fn suffix(&self) -> &str {
		&self.suffix
	}

	/// Output key for the materialized relation `relation` of `record`
	pub fn resolve(&self, record: &dyn Record, relation: &str) -> String {
		if let Some(name) = self
			.overrides
			.get(record.meta().label)
			.and_then(|names| names.get(relation))
		{
			return name.clone();
		}
		if record.has_attribute(relation) {
			relation.to_string()
		} else {
			format!("{relation}{}", self.suffix)
		}
	}
}
