//! Create Tests
//!
//! Document and edge creation, collection management and reads.

use docgraph_core::{CollectionKind, Error};
use docgraph_engine::Database;
use serde_json::json;
use std::sync::Arc;

fn setup() -> Arc<Database> {
    Database::builder()
        .collection("people", CollectionKind::Vertex)
        .collection("knows", CollectionKind::Edge)
        .open()
        .unwrap()
}

#[test]
fn test_create_returns_full_document() {
    let db = setup();
    let doc = db
        .create_single("people", json!({"_key": "alice", "age": 30, "tags": ["a"]}))
        .unwrap();
    let json = doc.to_json();
    assert_eq!(json["_key"], "alice");
    assert_eq!(json["_id"], "people/alice");
    assert!(json["_rev"].is_string());
    assert_eq!(json["age"], 30);
    assert_eq!(json["tags"], json!(["a"]));
}

#[test]
fn test_create_edge() {
    let db = setup();
    db.create_single("people", json!({"_key": "alice"})).unwrap();
    db.create_single("people", json!({"_key": "bob"})).unwrap();

    let edge = db
        .create_single(
            "knows",
            json!({"_from": "people/alice", "_to": "people/bob", "since": 2020}),
        )
        .unwrap();
    assert_eq!(edge.from().unwrap().to_string(), "people/alice");
    assert_eq!(edge.to().unwrap().to_string(), "people/bob");
    assert_eq!(edge.get("since"), Some(&json!(2020)));

    let read = db.read_single("knows", edge.key().as_str()).unwrap();
    assert_eq!(read, edge);
}

#[test]
fn test_create_edge_requires_endpoints() {
    let db = setup();
    db.create_single("people", json!({"_key": "alice"})).unwrap();

    for body in [
        json!({}),
        json!({"_from": "people/alice"}),
        json!({"_from": "people/alice", "_to": "people/nobody"}),
        json!({"_from": "people/alice", "_to": "knows/x"}),
    ] {
        let err = db.create_single("knows", body).unwrap_err();
        assert_eq!(err.error_num(), 1233);
    }
    assert_eq!(db.count("knows").unwrap(), 0);
}

#[test]
fn test_create_multiple_order_and_isolation() {
    let db = setup();
    let results = db
        .create_multiple(
            "people",
            vec![
                json!({"_key": "a"}),
                json!({"_key": "a"}),
                json!(null),
                json!({"_key": ""}),
                json!({"_key": "b"}),
            ],
        )
        .unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].as_ref().unwrap().key().as_str(), "a");
    assert!(matches!(results[1], Err(Error::UniqueConstraintViolated { .. })));
    assert!(matches!(results[2], Err(Error::DocumentTypeInvalid { .. })));
    assert!(matches!(results[3], Err(Error::DocumentKeyBad { .. })));
    assert_eq!(results[4].as_ref().unwrap().key().as_str(), "b");
}

#[test]
fn test_create_multiple_unknown_collection() {
    let db = setup();
    let err = db
        .create_multiple("nobody", vec![json!({})])
        .unwrap_err();
    assert_eq!(err.error_num(), 1203);
}

#[test]
fn test_collections_listing() {
    let db = setup();
    let names: Vec<(String, CollectionKind)> = db
        .collections()
        .into_iter()
        .map(|info| (info.name.to_string(), info.kind))
        .collect();
    assert_eq!(
        names,
        vec![
            ("knows".to_string(), CollectionKind::Edge),
            ("people".to_string(), CollectionKind::Vertex)
        ]
    );
    assert!(matches!(
        db.create_collection("people", CollectionKind::Edge),
        Err(Error::DuplicateName { .. })
    ));
    assert_eq!(
        db.create_collection("bad name", CollectionKind::Vertex)
            .unwrap_err()
            .error_num(),
        1208
    );
}

#[test]
fn test_document_size_limit() {
    let db = Database::builder()
        .config(docgraph_engine::DatabaseConfig {
            max_nesting_depth: 3,
            ..Default::default()
        })
        .collection("people", CollectionKind::Vertex)
        .open()
        .unwrap();
    assert!(db
        .create_single("people", json!({"a": {"b": {"c": 1}}}))
        .is_ok());
    let err = db
        .create_single("people", json!({"a": {"b": {"c": {"d": 1}}}}))
        .unwrap_err();
    assert_eq!(err.error_num(), 1216);
}

// ============================================================================
// Generated Keys
// ============================================================================

#[test]
fn test_generated_key_after_caller_numeric_keys() {
    let db = setup();
    for key in 1..=8 {
        db.create_single("people", json!({"_key": key.to_string()}))
            .unwrap();
    }

    let doc = db.create_single("people", json!({"k": 1})).unwrap();
    assert_eq!(doc.key().as_str(), "9");
    assert_eq!(db.count("people").unwrap(), 9);
}

#[test]
fn test_generated_keys_with_shared_store() {
    use docgraph_core::DocumentStore;
    use docgraph_storage::ShardedStore;

    let store: Arc<dyn DocumentStore> = Arc::new(ShardedStore::new());
    let open = || {
        Database::builder()
            .store(Arc::clone(&store))
            .collection("people", CollectionKind::Vertex)
            .open()
            .unwrap()
    };
    let first = open();
    let second = open();

    for _ in 0..20 {
        first.create_single("people", json!({})).unwrap();
    }
    let doc = second.create_single("people", json!({})).unwrap();
    assert_eq!(doc.key().as_str(), "21");
    assert_eq!(second.count("people").unwrap(), 21);
}
