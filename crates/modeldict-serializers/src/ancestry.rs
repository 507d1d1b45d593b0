//! Cycle detection along the current recursion path
//!
//! An [`Ancestry`] lists the records already being serialized between the
//! root and the current record. Descending produces a new value; the parent's
//! ancestry is left untouched, so siblings never observe each other's visits.

use modeldict_core::{Record, RecordId};

/// Identities of the records on the current recursion path, root first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ancestry {
	path: Vec<RecordId>,
}

impl Ancestry {
	/// An empty ancestry, used for top-level records
	///
	/// # Examples
	///
	/// ```
	/// use modeldict_serializers::Ancestry;
	///
	/// let ancestry = Ancestry::new();
	/// assert_eq!(ancestry.depth(), 0);
	/// assert!(ancestry.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Build an ancestry from records the caller is already serializing
	pub fn from_records<'a, I>(records: I) -> Self
	where
		I: IntoIterator<Item = &'a dyn Record>,
	{
		Self {
			path: records.into_iter().map(RecordId::of).collect(),
		}
	}

	/// Ancestry for the children of `record`
	///
	/// # Examples
	///
	/// ```
	/// use modeldict_core::{FieldDescriptor, Instance, ModelMeta};
	/// use modeldict_serializers::Ancestry;
	///
	/// static GOAL: ModelMeta = ModelMeta::new("someapp.Goal", &[FieldDescriptor::value("name")]);
	///
	/// let goal = Instance::new(&GOAL).into_ref();
	/// let root = Ancestry::new();
	/// let child = root.descend(&*goal);
	///
	/// // The parent ancestry is untouched
	/// assert!(!root.contains(&*goal));
	/// assert!(child.contains(&*goal));
	/// assert_eq!(child.depth(), 1);
	/// ```
	pub fn descend(&self, record: &dyn Record) -> Self {
		let mut path = Vec::with_capacity(self.path.len() + 1);
		path.extend_from_slice(&self.path);
		path.push(RecordId::of(record));
		Self { path }
	}

	/// Whether `record` is already on the path (compared by identity)
	pub fn contains(&self, record: &dyn Record) -> bool {
		let id = RecordId::of(record);
		self.path.contains(&id)
	}

	/// Number of records on the path
	pub fn depth(&self) -> usize {
		self.path.len()
	}

	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Identities on the path, root first
	pub fn ids(&self) -> &[RecordId] {
		&self.path
	}
}
