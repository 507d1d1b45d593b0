//! Demo schema: events, todos, goals, tags and rankings
//!
//! Field lists follow the order an ORM reports them in: reverse relations
//! first, then the model's own columns and forward relations.

use modeldict::{FieldDescriptor, Instance, ModelMeta};
use std::sync::Arc;

pub static CATEGORY: ModelMeta = ModelMeta::new(
	"someapp.Category",
	&[
		FieldDescriptor::reverse_one_to_one("event"),
		FieldDescriptor::value("id"),
		FieldDescriptor::value("title"),
	],
);

pub static EVENT: ModelMeta = ModelMeta::new(
	"someapp.Event",
	&[
		FieldDescriptor::value("id"),
		FieldDescriptor::value("title"),
		FieldDescriptor::one_to_one("category"),
		FieldDescriptor::value("start_date"),
		FieldDescriptor::value("end_date"),
	],
);

pub static CLIENT: ModelMeta = ModelMeta::new(
	"someapp.Client",
	&[FieldDescriptor::value("id"), FieldDescriptor::value("key")],
);

pub static GOAL: ModelMeta = ModelMeta::new(
	"someapp.Goal",
	&[
		FieldDescriptor::reverse_foreign_key("todo"),
		FieldDescriptor::value("id"),
		FieldDescriptor::value("name"),
	],
);

pub static TODO: ModelMeta = ModelMeta::new(
	"someapp.Todo",
	&[
		FieldDescriptor::reverse_many_to_many("tag"),
		FieldDescriptor::reverse_one_to_one("ranking"),
		FieldDescriptor::value("id"),
		FieldDescriptor::value("title"),
		FieldDescriptor::value("completed_at"),
		FieldDescriptor::foreign_key("goal"),
	],
);

pub static TAG: ModelMeta = ModelMeta::new(
	"someapp.Tag",
	&[
		FieldDescriptor::value("id"),
		FieldDescriptor::value("name"),
		FieldDescriptor::many_to_many("todos"),
	],
);

pub static RANKING: ModelMeta = ModelMeta::new(
	"someapp.Ranking",
	&[
		FieldDescriptor::value("id"),
		FieldDescriptor::value("position"),
		FieldDescriptor::one_to_one("todo"),
	],
);

pub fn category(id: i64, title: &str) -> Arc<Instance> {
	Instance::new(&CATEGORY)
		.with_value("id", id)
		.with_value("title", title)
		.into_ref()
}

pub fn event(id: i64, title: &str, start_date: &str, end_date: &str) -> Arc<Instance> {
	Instance::new(&EVENT)
		.with_value("id", id)
		.with_value("title", title)
		.with_value("start_date", start_date)
		.with_value("end_date", end_date)
		.with_related("category", None)
		.into_ref()
}

pub fn client(id: i64, key: &str) -> Arc<Instance> {
	Instance::new(&CLIENT)
		.with_value("id", id)
		.with_value("key", key)
		.into_ref()
}

pub fn goal(id: i64, name: &str) -> Arc<Instance> {
	Instance::new(&GOAL)
		.with_value("id", id)
		.with_value("name", name)
		.into_ref()
}

/// A todo with no goal; `completed_at` is an ISO timestamp or `null`
pub fn todo(id: i64, title: &str, completed_at: Option<&str>) -> Arc<Instance> {
	Instance::new(&TODO)
		.with_value("id", id)
		.with_value("title", title)
		.with_value("completed_at", completed_at)
		.with_related("goal", None)
		.into_ref()
}

pub fn tag(id: i64, name: &str) -> Arc<Instance> {
	Instance::new(&TAG)
		.with_value("id", id)
		.with_value("name", name)
		.into_ref()
}

/// A ranking pointing at `todo`, linked in both directions
pub fn ranking(id: i64, position: u32, todo: &Arc<Instance>) -> Arc<Instance> {
	let ranking = Instance::new(&RANKING)
		.with_value("id", id)
		.with_value("position", position)
		.with_related("todo", Some(todo.clone()))
		.into_ref();
	todo.set_related("ranking", Some(ranking.clone()));
	ranking
}
