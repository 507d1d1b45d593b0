//! # modeldict-serializers
//!
//! Recursive, cycle-safe conversion of records into `serde_json` maps.
//!
//! ## Overview
//!
//! - [`RecordSerializer`]: walks declared fields and recurses into relations
//! - [`Ancestry`]: identities of the records on the current path
//! - [`ReverseNameResolver`]: output names for materialized relations
//! - [`Payload`]: record, collection or plain value returned by a handler
//!
//! ## Example
//!
//! ```
//! use modeldict_core::{FieldDescriptor, Instance, ModelMeta};
//! use modeldict_serializers::serialize_record;
//! use serde_json::json;
//!
//! static CATEGORY: ModelMeta = ModelMeta::new("someapp.Category", &[
//!     FieldDescriptor::value("title"),
//!     FieldDescriptor::reverse_one_to_one("event"),
//! ]);
//! static EVENT: ModelMeta = ModelMeta::new("someapp.Event", &[
//!     FieldDescriptor::value("title"),
//!     FieldDescriptor::one_to_one("category"),
//! ]);
//!
//! let category = Instance::new(&CATEGORY).with_value("title", "Sport").into_ref();
//! let event = Instance::new(&EVENT).with_value("title", "Marathon").into_ref();
//! event.set_related("category", Some(category.clone()));
//! category.set_related("event", Some(event.clone()));
//!
//! let out = serialize_record(&*event).unwrap();
//! assert_eq!(
//!     json!(out),
//!     json!({"title": "Marathon", "category": {"title": "Sport"}})
//! );
//! ```

pub mod ancestry;
pub mod error;
pub mod naming;
pub mod payload;
pub mod serializer;

pub use ancestry::Ancestry;
pub use error::{SerializeError, SerializeResult};
pub use naming::ReverseNameResolver;
pub use payload::{Payload, serialize_payload};
pub use serializer::{RecordMap, RecordSerializer, serialize_collection, serialize_record};
