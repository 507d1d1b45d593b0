//! Recursive record serializer
//!
//! Walks a record's declared fields in order and renders each one according
//! to its category:
//!
//! - scalar fields are copied verbatim
//! - single relations become nested maps, `null` when absent or empty
//! - multi relations become lists of nested maps, but only when they were
//!   materialized into the record's prefetch cache
//!
//! A related record that is already on the current path is not rendered
//! again, which is what stops bidirectional relations from recursing forever.

use crate::ancestry::Ancestry;
use crate::error::{SerializeError, SerializeResult};
use crate::naming::ReverseNameResolver;
use modeldict_conf::SerializerSettings;
use modeldict_core::{FieldDescriptor, Record, RecordRef, RelationCategory, ResolveError, classify};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

/// Serialized form of one record
pub type RecordMap = Map<String, Value>;

/// Converts records into JSON-ready maps
///
/// # Examples
///
/// ```
/// use modeldict_core::{FieldDescriptor, Instance, ModelMeta};
/// use modeldict_serializers::{Ancestry, RecordSerializer};
/// use serde_json::json;
///
/// static GOAL: ModelMeta = ModelMeta::new("someapp.Goal", &[
///     FieldDescriptor::value("id"),
///     FieldDescriptor::value("name"),
/// ]);
///
/// let goal = Instance::new(&GOAL)
///     .with_value("id", 1)
///     .with_value("name", "Learn foreign languages");
///
/// let out = RecordSerializer::new().serialize_record(&goal, &Ancestry::new()).unwrap();
/// assert_eq!(json!(out), json!({"id": 1, "name": "Learn foreign languages"}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordSerializer {
	naming: ReverseNameResolver,
	max_depth: Option<usize>,
}

impl RecordSerializer {
	/// Serializer with default settings (`_set` suffix, unbounded depth)
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_settings(settings: &SerializerSettings) -> Self {
		Self {
			naming: ReverseNameResolver::from_settings(settings),
			max_depth: settings.max_depth,
		}
	}

	/// Replace the display-name resolver
	pub fn with_naming(mut self, naming: ReverseNameResolver) -> Self {
		self.naming = naming;
		self
	}

	/// Bound the nesting depth
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = Some(max_depth);
		self
	}

	pub fn naming(&self) -> &ReverseNameResolver {
		&self.naming
	}

	pub fn max_depth(&self) -> Option<usize> {
		self.max_depth
	}

	/// Serialize one record
	///
	/// `ancestry` holds the records already being serialized above this one
	/// (empty for a top-level record).
	pub fn serialize_record(
		&self,
		record: &dyn Record,
		ancestry: &Ancestry,
	) -> SerializeResult<RecordMap> {
		self.check_depth(ancestry)?;

		let meta = record.meta();
		// Every multi-valued field renders the same cache, so it is rendered
		// once, at the first multi-valued field.
		let multi_anchor = meta.multi_fields().next().map(|f| f.name);

		let mut out = Map::new();
		for field in meta.fields {
			match classify(field) {
				RelationCategory::Scalar => out.extend(self.serialize_value_field(record, field)?),
				RelationCategory::Single => {
					out.extend(self.serialize_single(record, field, ancestry)?)
				}
				RelationCategory::Multi if multi_anchor == Some(field.name) => {
					out.extend(self.serialize_multi(record, ancestry)?);
				}
				RelationCategory::Multi => {}
			}
		}
		Ok(out)
	}

	/// Serialize a scalar field: `{name: value}`, value passed through untouched
	pub fn serialize_value_field(
		&self,
		record: &dyn Record,
		field: &FieldDescriptor,
	) -> SerializeResult<RecordMap> {
		let value = record.value(field.name)?;
		Ok(single_entry(field.name, value))
	}

	/// Serialize a single-valued relation
	///
	/// Returns `{name: null}` when the relation is absent or empty, `{}` when
	/// the related record is already on the path, and `{name: {...}}`
	/// otherwise.
	pub fn serialize_single(
		&self,
		record: &dyn Record,
		field: &FieldDescriptor,
		ancestry: &Ancestry,
	) -> SerializeResult<RecordMap> {
		if !record.has_attribute(field.name) {
			return Ok(single_entry(field.name, Value::Null));
		}
		let related = match record.related(field.name) {
			Ok(Some(related)) => related,
			Ok(None) | Err(ResolveError::AttributeAbsent { .. }) => {
				return Ok(single_entry(field.name, Value::Null));
			}
			Err(err) => return Err(err.into()),
		};

		let path = ancestry.descend(record);
		if path.contains(&*related) {
			tracing::trace!(
				model = record.meta().label,
				field = field.name,
				path = ?path.ids(),
				"cycle suppressed"
			);
			return Ok(Map::new());
		}

		let nested = self.serialize_record(&*related, &path)?;
		Ok(single_entry(field.name, Value::Object(nested)))
	}

	/// Serialize every materialized multi-valued relation of `record`
	///
	/// Relations that were not materialized produce no entry. A materialized
	/// but empty relation produces `[]`. Members that are already on the path
	/// are left out; a relation whose members are all on the path is omitted.
	pub fn serialize_multi(
		&self,
		record: &dyn Record,
		ancestry: &Ancestry,
	) -> SerializeResult<RecordMap> {
		let Some(cache) = record.prefetched() else {
			tracing::trace!(
				model = record.meta().label,
				"no materialized relations, skipping"
			);
			return Ok(Map::new());
		};

		let path = ancestry.descend(record);
		let mut out = Map::new();
		for (relation, items) in cache.iter() {
			let name = self.naming.resolve(record, relation);
			if items.is_empty() {
				out.insert(name, Value::Array(Vec::new()));
				continue;
			}

			let members: Vec<&RecordRef> = items
				.iter()
				.filter(|item| !path.contains(&***item))
				.collect();
			if members.is_empty() {
				tracing::trace!(
					model = record.meta().label,
					relation,
					"every member closes a cycle, omitting"
				);
				continue;
			}

			let values = members
				.into_iter()
				.map(|item| self.serialize_record(&**item, &path).map(Value::Object))
				.collect::<SerializeResult<Vec<_>>>()?;
			out.insert(name, Value::Array(values));
		}
		Ok(out)
	}

	/// Serialize a collection of records, preserving order
	///
	/// Every item is serialized against the same `ancestry`.
	pub fn serialize_collection(
		&self,
		items: &[RecordRef],
		ancestry: &Ancestry,
	) -> SerializeResult<Vec<Value>> {
		tracing::debug!(count = items.len(), depth = ancestry.depth(), "serializing collection");
		items
			.iter()
			.map(|item| self.serialize_record(&**item, ancestry).map(Value::Object))
			.collect()
	}

	fn check_depth(&self, ancestry: &Ancestry) -> SerializeResult<()> {
		match self.max_depth {
			Some(max_depth) if ancestry.depth() > max_depth => {
				Err(SerializeError::MaxDepthExceeded {
					depth: ancestry.depth(),
					max_depth,
				})
			}
			_ => Ok(()),
		}
	}
}

pub(crate) static DEFAULT_SERIALIZER: Lazy<RecordSerializer> = Lazy::new(RecordSerializer::new);

/// Serialize a top-level record with the default settings
pub fn serialize_record(record: &dyn Record) -> SerializeResult<RecordMap> {
	DEFAULT_SERIALIZER.serialize_record(record, &Ancestry::new())
}

/// Serialize a collection of top-level records with the default settings
pub fn serialize_collection(items: &[RecordRef]) -> SerializeResult<Vec<Value>> {
	DEFAULT_SERIALIZER.serialize_collection(items, &Ancestry::new())
}

fn single_entry(name: &str, value: Value) -> RecordMap {
	let mut map = Map::with_capacity(1);
	map.insert(name.to_string(), value);
	map
}
