//! # modeldict
//!
//! Cycle-safe conversion of ORM records and their relations into plain,
//! JSON-ready maps.
//!
//! Records describe their fields through a static [`ModelMeta`]. The
//! serializer walks those fields in declaration order:
//!
//! - scalar fields are copied as they are
//! - single relations (foreign keys, one-to-one in either direction) are
//!   nested, or `null` when there is no related record
//! - multi relations (many-to-many, reverse foreign keys) are emitted only
//!   when they were materialized with [`Instance::prefetch`] or
//!   [`prefetch_related`]
//!
//! A related record already being serialized higher up the same path is
//! skipped, so bidirectional relations terminate.
//!
//! ## Quick Example
//!
//! ```
//! use modeldict::prelude::*;
//! use serde_json::json;
//!
//! static GOAL: ModelMeta = ModelMeta::new("someapp.Goal", &[
//!     FieldDescriptor::value("name"),
//!     FieldDescriptor::reverse_foreign_key("todo"),
//! ]);
//! static TODO: ModelMeta = ModelMeta::new("someapp.Todo", &[
//!     FieldDescriptor::value("title"),
//!     FieldDescriptor::foreign_key("goal"),
//! ]);
//!
//! let goal = Instance::new(&GOAL).with_value("name", "Learn").into_ref();
//! let todo = Instance::new(&TODO).with_value("title", "Study french").into_ref();
//! todo.set_related("goal", Some(goal.clone()));
//! goal.prefetch("todo", vec![todo.clone() as RecordRef]);
//!
//! let out = serialize_record(&*goal).unwrap();
//! assert_eq!(
//!     json!(out),
//!     json!({"name": "Learn", "todo_set": [{"title": "Study french"}]})
//! );
//! ```
//!
//! ## Configuration
//!
//! [`SerializerSettings`] controls the reverse-relation suffix, explicit
//! output names and an optional depth bound. Settings can be read from TOML
//! and overridden from `MODELDICT_*` environment variables.

// Re-export record model
pub use modeldict_core::{
	BoxError, FieldDescriptor, FieldKind, Instance, ModelMeta, PrefetchCache, Record, RecordId,
	RecordRef, RelationCategory, ResolveError, ResolveResult, classify, prefetch_related,
};

// Re-export settings
pub use modeldict_conf::{
	ConfigError, ConfigResult, DEFAULT_REVERSE_SUFFIX, ENV_PREFIX, SerializerSettings,
};

// Re-export serializers
pub use modeldict_serializers::{
	Ancestry, Payload, RecordMap, RecordSerializer, ReverseNameResolver, SerializeError,
	SerializeResult, serialize_collection, serialize_payload, serialize_record,
};

/// Member crates, for access to items not re-exported at the top level
pub mod core {
	pub use modeldict_core::*;
}

pub mod conf {
	pub use modeldict_conf::*;
}

pub mod serializers {
	pub use modeldict_serializers::*;
}

/// Commonly used types
pub mod prelude {
	pub use crate::{
		Ancestry, FieldDescriptor, Instance, ModelMeta, Payload, Record, RecordRef,
		RecordSerializer, SerializeError, SerializerSettings, serialize_collection,
		serialize_payload, serialize_record,
	};
}
