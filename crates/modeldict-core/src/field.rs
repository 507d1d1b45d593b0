//! Field metadata and relationship classification
//!
//! Every record type declares an ordered, static list of field descriptors.
//! The serializer never inspects runtime values to decide how a field is
//! rendered; it only looks at the declared [`FieldKind`].

use serde::Serialize;

/// Suffix of the accessor through which a reverse multi-valued relation is reached
pub const REVERSE_ACCESSOR_SUFFIX: &str = "_set";

/// Declared kind of a model field
///
/// Forward kinds are fields declared on the model itself. Reverse kinds are
/// accessors that exist because another model points at this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	/// Plain column value (text, number, date, JSON, ...)
	Value,
	/// Forward many-to-one reference
	ForeignKey,
	/// Forward one-to-one reference
	OneToOne,
	/// Reverse side of a one-to-one reference
	ReverseOneToOne,
	/// Forward many-to-many relation
	ManyToMany,
	/// Reverse side of a many-to-many relation
	ReverseManyToMany,
	/// Reverse side of a foreign key (one-to-many)
	ReverseForeignKey,
}

/// How a field is rendered by the serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCategory {
	/// Value copied verbatim
	Scalar,
	/// At most one related record, rendered as a nested map
	Single,
	/// A collection of related records, rendered as a list of maps
	Multi,
}

impl FieldKind {
	/// Classify this kind into a rendering category
	///
	/// # Examples
	///
	/// ```
	/// use modeldict_core::field::{FieldKind, RelationCategory};
	///
	/// assert_eq!(FieldKind::ForeignKey.category(), RelationCategory::Single);
	/// assert_eq!(FieldKind::ReverseOneToOne.category(), RelationCategory::Single);
	/// assert_eq!(FieldKind::ReverseForeignKey.category(), RelationCategory::Multi);
	/// assert_eq!(FieldKind::Value.category(), RelationCategory::Scalar);
	/// ```
	pub const fn category(self) -> RelationCategory {
		match self {
			FieldKind::ForeignKey | FieldKind::OneToOne | FieldKind::ReverseOneToOne => {
				RelationCategory::Single
			}
			FieldKind::ManyToMany | FieldKind::ReverseManyToMany | FieldKind::ReverseForeignKey => {
				RelationCategory::Multi
			}
			FieldKind::Value => RelationCategory::Scalar,
		}
	}

	/// Whether the field is declared on the model itself
	pub const fn is_forward(self) -> bool {
		!self.is_reverse()
	}

	/// Whether the field only exists because another model points here
	pub const fn is_reverse(self) -> bool {
		matches!(
			self,
			FieldKind::ReverseOneToOne | FieldKind::ReverseManyToMany | FieldKind::ReverseForeignKey
		)
	}
}

/// Metadata for one declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
	/// Field name, used as the output key
	pub name: &'static str,
	/// Declared relationship kind
	pub kind: FieldKind,
}

impl FieldDescriptor {
	pub const fn new(name: &'static str, kind: FieldKind) -> Self {
		Self { name, kind }
	}

	pub const fn value(name: &'static str) -> Self {
		Self::new(name, FieldKind::Value)
	}

	pub const fn foreign_key(name: &'static str) -> Self {
		Self::new(name, FieldKind::ForeignKey)
	}

	pub const fn one_to_one(name: &'static str) -> Self {
		Self::new(name, FieldKind::OneToOne)
	}

	pub const fn reverse_one_to_one(name: &'static str) -> Self {
		Self::new(name, FieldKind::ReverseOneToOne)
	}

	pub const fn many_to_many(name: &'static str) -> Self {
		Self::new(name, FieldKind::ManyToMany)
	}

	pub const fn reverse_many_to_many(name: &'static str) -> Self {
		Self::new(name, FieldKind::ReverseManyToMany)
	}

	pub const fn reverse_foreign_key(name: &'static str) -> Self {
		Self::new(name, FieldKind::ReverseForeignKey)
	}

	/// Rendering category of this field
	pub const fn category(&self) -> RelationCategory {
		self.kind.category()
	}
}

/// Classify a field descriptor
///
/// Classification is structural: the declared kind alone decides the
/// category, never the value currently stored on a record.
pub const fn classify(field: &FieldDescriptor) -> RelationCategory {
	field.kind.category()
}

/// Static description of a model type
///
/// # Examples
///
/// ```
/// use modeldict_core::field::{FieldDescriptor, ModelMeta};
///
/// static GOAL: ModelMeta = ModelMeta::new(
///     "someapp.Goal",
///     &[
///         FieldDescriptor::reverse_foreign_key("todo"),
///         FieldDescriptor::value("id"),
///         FieldDescriptor::value("name"),
///     ],
/// );
///
/// assert_eq!(GOAL.model_name(), "Goal");
/// assert!(GOAL.field("name").is_some());
/// assert!(GOAL.has_manager("todo_set"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelMeta {
	/// Qualified model label (e.g., "someapp.Todo")
	pub label: &'static str,
	/// Declared fields, in declaration order
	pub fields: &'static [FieldDescriptor],
}

impl ModelMeta {
	pub const fn new(label: &'static str, fields: &'static [FieldDescriptor]) -> Self {
		Self { label, fields }
	}

	/// Model name without the app label
	pub fn model_name(&self) -> &'static str {
		self.label.rsplit('.').next().unwrap_or(self.label)
	}

	/// Look up a declared field by name
	pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Fields rendered through the multi-relation path
	pub fn multi_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
		self.fields
			.iter()
			.filter(|f| f.category() == RelationCategory::Multi)
	}

	/// Whether instances expose a multi-valued manager under `name`
	///
	/// Forward many-to-many fields are reached by their own name, reverse
	/// multi-valued relations by `<name>_set`.
	pub fn has_manager(&self, name: &str) -> bool {
		let reverse_base = name.strip_suffix(REVERSE_ACCESSOR_SUFFIX);
		self.multi_fields().any(|f| {
			(f.kind.is_forward() && f.name == name)
				|| (f.kind.is_reverse() && reverse_base == Some(f.name))
		})
	}
}
