//! # modeldict-core
//!
//! Record and field metadata types read by the modeldict serializer.
//!
//! ## Overview
//!
//! - [`Record`]: read-only view of a materialized model instance
//! - [`ModelMeta`] / [`FieldDescriptor`]: static per-type field lists
//! - [`classify`]: maps a field to scalar, single-related or multi-related
//! - [`PrefetchCache`]: eagerly loaded multi-valued relations
//! - [`Instance`]: a dynamic [`Record`] backed by named attribute slots
//!
//! ## Example
//!
//! ```
//! use modeldict_core::{FieldDescriptor, Instance, ModelMeta, Record, RelationCategory, classify};
//!
//! static TODO: ModelMeta = ModelMeta::new(
//!     "someapp.Todo",
//!     &[
//!         FieldDescriptor::value("id"),
//!         FieldDescriptor::value("title"),
//!         FieldDescriptor::foreign_key("goal"),
//!         FieldDescriptor::reverse_many_to_many("tag"),
//!     ],
//! );
//!
//! let categories: Vec<_> = TODO.fields.iter().map(classify).collect();
//! assert_eq!(
//!     categories,
//!     vec![
//!         RelationCategory::Scalar,
//!         RelationCategory::Scalar,
//!         RelationCategory::Single,
//!         RelationCategory::Multi,
//!     ]
//! );
//!
//! let todo = Instance::new(&TODO).with_value("title", "Study french");
//! assert_eq!(todo.meta().model_name(), "Todo");
//! ```

pub mod error;
pub mod field;
pub mod instance;
pub mod prefetch;
pub mod record;

pub use error::{BoxError, ResolveError, ResolveResult};
pub use field::{
	FieldDescriptor, FieldKind, ModelMeta, REVERSE_ACCESSOR_SUFFIX, RelationCategory, classify,
};
pub use instance::Instance;
pub use prefetch::{PrefetchCache, prefetch_related};
pub use record::{Record, RecordId, RecordRef};
