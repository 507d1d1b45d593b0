//! Serialization scenarios over the `someapp` demo graph
//!
//! Each test mirrors what a list or detail view would return for the
//! corresponding query, with and without materialized relations.

use modeldict::{
	Ancestry, Payload, Record, RecordRef, RecordSerializer, ResolveError, SerializeError,
	serialize_collection, serialize_payload, serialize_record,
};
use modeldict_integration_tests::{COMPLETED_AT, Db, db_factory, init_tracing, someapp};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn refs<T: Record + 'static>(items: &[Arc<T>]) -> Vec<RecordRef> {
	items.iter().map(|item| item.clone() as RecordRef).collect()
}

fn to_value(record: &dyn Record) -> Value {
	Value::Object(serialize_record(record).unwrap())
}

// ============================================================================
// Single relations
// ============================================================================

#[rstest]
fn test_one_to_one_cycle_is_cut_at_back_edge() {
	init_tracing();
	let category = someapp::category(1, "Sport");
	let event = someapp::event(1, "Marathon", "2022-05-01", "2022-05-02");
	event.set_related("category", Some(category.clone()));
	category.set_related("event", Some(event.clone()));

	assert_eq!(
		to_value(&*event),
		json!({
			"id": 1,
			"title": "Marathon",
			"category": {"id": 1, "title": "Sport"},
			"start_date": "2022-05-01",
			"end_date": "2022-05-02",
		})
	);
	assert_eq!(
		to_value(&*category),
		json!({
			"event": {
				"id": 1,
				"title": "Marathon",
				"start_date": "2022-05-01",
				"end_date": "2022-05-02",
			},
			"id": 1,
			"title": "Sport",
		})
	);
}

#[rstest]
fn test_event_without_category_is_null() {
	let event = someapp::event(2, "Meetup", "2022-06-01", "2022-06-01");
	assert_eq!(to_value(&*event)["category"], Value::Null);
}

#[rstest]
fn test_todos_without_prefetch(db_factory: Db) {
	init_tracing();
	let out = serialize_collection(&refs(&db_factory.todos())).unwrap();

	assert_eq!(
		Value::Array(out),
		json!([
			{
				"ranking": {"id": 2, "position": 2},
				"id": 1,
				"title": "Study italian",
				"completed_at": COMPLETED_AT,
				"goal": {"id": 1, "name": "Learn foreign languages"},
			},
			{
				"ranking": {"id": 1, "position": 1},
				"id": 2,
				"title": "Work on project A",
				"completed_at": COMPLETED_AT,
				"goal": null,
			},
			{
				"ranking": null,
				"id": 3,
				"title": "Wash the dishes",
				"completed_at": null,
				"goal": null,
			},
			{
				"ranking": {"id": 3, "position": 3},
				"id": 4,
				"title": "Study french",
				"completed_at": null,
				"goal": {"id": 1, "name": "Learn foreign languages"},
			},
		])
	);
}

#[rstest]
fn test_rankings_nest_their_todo(db_factory: Db) {
	let out = serialize_collection(&refs(&db_factory.rankings())).unwrap();

	assert_eq!(
		out[0],
		json!({
			"id": 1,
			"position": 1,
			"todo": {
				"id": 2,
				"title": "Work on project A",
				"completed_at": COMPLETED_AT,
				"goal": null,
			},
		})
	);
	assert_eq!(
		out[1]["todo"]["goal"],
		json!({"id": 1, "name": "Learn foreign languages"})
	);
}

// ============================================================================
// Multi relations
// ============================================================================

#[rstest]
fn test_reverse_many_to_many_uses_set_suffix(db_factory: Db) {
	db_factory.prefetch_todo_tags().unwrap();
	let out = serialize_collection(&refs(&db_factory.todos())).unwrap();

	assert_eq!(out[0]["tag_set"], json!([]));
	assert_eq!(out[1]["tag_set"], json!([{"id": 2, "name": "Work"}]));
	assert_eq!(out[2]["tag_set"], json!([{"id": 1, "name": "Home"}]));
	assert_eq!(out[3]["tag_set"], json!([{"id": 1, "name": "Home"}]));
	for todo in &out {
		assert!(todo.get("tag").is_none());
	}
}

#[rstest]
fn test_reverse_accessor_key_is_not_suffixed_twice(db_factory: Db) {
	db_factory
		.todo_french
		.prefetch("tag_set", vec![db_factory.tag_home.clone() as RecordRef]);
	let out = to_value(&*db_factory.todo_french);

	assert_eq!(out["tag_set"], json!([{"id": 1, "name": "Home"}]));
	assert!(out.get("tag_set_set").is_none());
	let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
	assert_eq!(
		keys,
		vec!["tag_set", "ranking", "id", "title", "completed_at", "goal"]
	);
}

#[rstest]
fn test_forward_many_to_many_keeps_field_name(db_factory: Db) {
	db_factory.prefetch_tag_todos().unwrap();
	let out = serialize_collection(&refs(&db_factory.tags())).unwrap();

	assert_eq!(
		out[0],
		json!({
			"id": 1,
			"name": "Home",
			"todos": [
				{
					"ranking": null,
					"id": 3,
					"title": "Wash the dishes",
					"completed_at": null,
					"goal": null,
				},
				{
					"ranking": {"id": 3, "position": 3},
					"id": 4,
					"title": "Study french",
					"completed_at": null,
					"goal": {"id": 1, "name": "Learn foreign languages"},
				},
			],
		})
	);
	assert!(out[0].get("todos_set").is_none());
}

#[rstest]
fn test_tags_without_prefetch_omit_todos(db_factory: Db) {
	let out = serialize_collection(&refs(&db_factory.tags())).unwrap();
	assert_eq!(out, vec![json!({"id": 1, "name": "Home"}), json!({"id": 2, "name": "Work"})]);
}

#[rstest]
fn test_goal_reverse_foreign_key_cuts_cycle(db_factory: Db) {
	db_factory.prefetch_goal_todos().unwrap();
	let out = to_value(&*db_factory.goal);

	assert_eq!(
		out,
		json!({
			"todo_set": [
				{
					"ranking": {"id": 2, "position": 2},
					"id": 1,
					"title": "Study italian",
					"completed_at": COMPLETED_AT,
				},
				{
					"ranking": {"id": 3, "position": 3},
					"id": 4,
					"title": "Study french",
					"completed_at": null,
				},
			],
			"id": 1,
			"name": "Learn foreign languages",
		})
	);
}

#[rstest]
fn test_missing_vs_empty_vs_null(db_factory: Db) {
	// Not materialized: the multi relation is absent, the single one is null.
	let before = to_value(&*db_factory.todo_dishes);
	assert_eq!(before["ranking"], Value::Null);
	assert!(before.get("tag_set").is_none());

	// Materialized and empty: an empty list.
	db_factory.todo_dishes.prefetch("tag", Vec::new());
	let after = to_value(&*db_factory.todo_dishes);
	assert_eq!(after["tag_set"], json!([]));
}

#[rstest]
fn test_clearing_prefetch_restores_omission(db_factory: Db) {
	db_factory.prefetch_todo_tags().unwrap();
	db_factory.todo_french.clear_prefetched();
	assert!(to_value(&*db_factory.todo_french).get("tag_set").is_none());
}

// ============================================================================
// Graph shape
// ============================================================================

#[rstest]
fn test_shared_record_repeats_per_branch(db_factory: Db) {
	db_factory.prefetch_goal_todos().unwrap();
	let items = vec![
		db_factory.todo_italian.clone() as RecordRef,
		db_factory.todo_french.clone(),
	];
	let out = serialize_collection(&items).unwrap();

	// Both todos reach the goal; it is fully serialized under each, and each
	// copy lists the sibling but not the todo it was reached from.
	let italian_goal = &out[0]["goal"];
	let french_goal = &out[1]["goal"];
	assert_eq!(italian_goal["todo_set"].as_array().unwrap().len(), 1);
	assert_eq!(italian_goal["todo_set"][0]["title"], json!("Study french"));
	assert_eq!(french_goal["todo_set"][0]["title"], json!("Study italian"));
}

#[rstest]
fn test_serialization_is_idempotent(db_factory: Db) {
	db_factory.prefetch_todo_tags().unwrap();
	db_factory.prefetch_goal_todos().unwrap();
	let items = refs(&db_factory.todos());

	let first = serialize_collection(&items).unwrap();
	let second = serialize_collection(&items).unwrap();
	assert_eq!(first, second);
}

#[rstest]
fn test_caller_ancestry_suppresses_outer_records(db_factory: Db) {
	let serializer = RecordSerializer::new();
	let ancestry = Ancestry::new().descend(&*db_factory.goal);

	let out = serializer
		.serialize_record(&*db_factory.todo_italian, &ancestry)
		.unwrap();
	assert!(out.get("goal").is_none());
}

// ============================================================================
// Errors and limits
// ============================================================================

#[rstest]
fn test_unset_scalar_propagates(db_factory: Db) {
	db_factory.todo_dishes.unset("completed_at");
	let err = serialize_record(&*db_factory.todo_dishes).unwrap_err();

	match err {
		SerializeError::Resolve(ResolveError::AttributeAbsent { model, field }) => {
			assert_eq!(model, "someapp.Todo");
			assert_eq!(field, "completed_at");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[rstest]
fn test_max_depth_bounds_nesting(db_factory: Db) {
	db_factory.prefetch_goal_todos().unwrap();
	let ranking = db_factory.ranking_2.clone();

	// ranking -> todo -> goal -> todo_set[french] -> ranking_3
	let shallow = RecordSerializer::new().with_max_depth(3);
	assert!(matches!(
		shallow.serialize_record(&*ranking, &Ancestry::new()),
		Err(SerializeError::MaxDepthExceeded { depth: 4, max_depth: 3 })
	));

	let deep = RecordSerializer::new().with_max_depth(4);
	assert!(deep.serialize_record(&*ranking, &Ancestry::new()).is_ok());
}

// ============================================================================
// Payloads
// ============================================================================

#[rstest]
fn test_payload_dispatch(db_factory: Db) {
	let record = serialize_payload(&Payload::from(db_factory.goal.clone() as RecordRef)).unwrap();
	assert_eq!(record, json!({"id": 1, "name": "Learn foreign languages"}));

	let collection = serialize_payload(&Payload::from(refs(&db_factory.tags()))).unwrap();
	assert_eq!(collection.as_array().unwrap().len(), 2);

	let plain = serialize_payload(&Payload::from(json!({"detail": "ok"}))).unwrap();
	assert_eq!(plain, json!({"detail": "ok"}));
}

#[rstest]
fn test_client_has_no_relations() {
	let client = someapp::client(1, "abc");
	assert_eq!(to_value(&*client), json!({"id": 1, "key": "abc"}));
}
