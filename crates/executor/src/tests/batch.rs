//! Batch command tests: per-slot results and request-level failures.

use crate::{BatchItem, CollectionKind, Command, Database, Error, Executor, Output, WriteOptions};
use serde_json::{json, Value};

fn executor_with_docs() -> Executor {
    let db = Database::builder()
        .collection("vertices", CollectionKind::Vertex)
        .open()
        .unwrap();
    let executor = Executor::new(db);
    executor
        .execute(Command::CreateMultiple {
            collection: "vertices".into(),
            bodies: (1..=3)
                .map(|i| json!({"_key": i.to_string(), "k1": "v1", "k2": "v1"}))
                .collect(),
        })
        .unwrap();
    executor
}

fn write_batch(output: Output) -> Vec<BatchItem<crate::WriteResult>> {
    match output {
        Output::WriteBatch(items) => items,
        other => panic!("Expected WriteBatch, got {:?}", other),
    }
}

#[test]
fn test_update_multiple_slots() {
    let executor = executor_with_docs();
    let items = write_batch(
        executor
            .execute(Command::UpdateMultiple {
                collection: "vertices".into(),
                patches: vec![
                    json!({"_key": "1", "k1": "v2"}),
                    json!({"_key": "404", "k1": "v2"}),
                    json!({"_key": "3", "k1": "v2"}),
                ],
                options: WriteOptions::new().return_new(true),
            })
            .unwrap(),
    );

    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[2].is_ok());
    let descriptor = items[1].clone().err().unwrap();
    assert_eq!(descriptor.error_num, 1202);
    assert!(descriptor.error_message.contains("vertices/404"));
}

#[test]
fn test_replace_multiple_strict_conflicts_in_slot() {
    let executor = executor_with_docs();
    let items = write_batch(
        executor
            .execute(Command::ReplaceMultiple {
                collection: "vertices".into(),
                documents: vec![
                    json!({"_key": "1", "_rev": "mismatched_rev"}),
                    json!({"_key": "2"}),
                ],
                options: WriteOptions::new().ignore_revs(false),
            })
            .unwrap(),
    );
    assert_eq!(items[0].clone().err().unwrap().error_num, 1200);
    assert!(items[1].is_ok());
}

#[test]
fn test_batch_wire_shape() {
    let executor = executor_with_docs();
    let output = executor
        .execute(Command::UpdateMultiple {
            collection: "vertices".into(),
            patches: vec![json!({"_key": "1", "k2": null}), json!(7)],
            options: WriteOptions::new().keep_null(false),
        })
        .unwrap();

    let wire = serde_json::to_value(&output).unwrap();
    let slots = wire["WriteBatch"].as_array().unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["_key"], "1");
    assert!(slots[0]["_rev"].is_string());
    assert!(slots[0]["_oldRev"].is_string());
    assert!(slots[0].get("new").is_none());
    assert_eq!(slots[1]["errorNum"], 1227);
    assert!(slots[1]["errorMessage"].is_string());

    let back: Output = serde_json::from_value(wire).unwrap();
    assert_eq!(back, output);
}

#[test]
fn test_request_level_errors_fail_whole() {
    let executor = executor_with_docs();
    let err = executor
        .execute(Command::UpdateMultiple {
            collection: "nowhere".into(),
            patches: vec![json!({"_key": "1"})],
            options: WriteOptions::new(),
        })
        .unwrap_err();
    assert_eq!(err, Error::CollectionNotFound { collection: "nowhere".into() });
}

#[test]
fn test_read_multiple_slots() {
    let executor = executor_with_docs();
    let output = executor
        .execute(Command::ReadMultiple {
            collection: "vertices".into(),
            keys: vec!["2".into(), "nope".into()],
        })
        .unwrap();
    match output {
        Output::DocumentBatch(items) => {
            assert_eq!(items.len(), 2);
            let doc = items[0].clone().ok().unwrap();
            assert_eq!(doc.get("k1"), Some(&Value::from("v1")));
            assert_eq!(items[1].clone().err().unwrap().error_num, 1202);
        }
        other => panic!("Expected DocumentBatch, got {:?}", other),
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Slot i always answers request item i, whatever mix of hits and misses
        #[test]
        fn update_multiple_keeps_length_and_order(picks in prop::collection::vec(0u8..6, 0..30)) {
            let executor = executor_with_docs();
            let patches: Vec<Value> = picks
                .iter()
                .map(|p| json!({"_key": p.to_string(), "pick": p}))
                .collect();
            let items = write_batch(
                executor
                    .execute(Command::UpdateMultiple {
                        collection: "vertices".into(),
                        patches,
                        options: WriteOptions::new().return_new(true),
                    })
                    .unwrap(),
            );
            prop_assert_eq!(items.len(), picks.len());
            for (pick, item) in picks.iter().zip(items) {
                match item {
                    BatchItem::Ok(result) => {
                        prop_assert!((1..=3).contains(pick));
                        prop_assert_eq!(result.key.as_str(), pick.to_string());
                        prop_assert_eq!(result.new.as_ref().unwrap().get("pick"), Some(&json!(pick)));
                    }
                    BatchItem::Err(descriptor) => {
                        prop_assert!(!(1..=3).contains(pick));
                        prop_assert!(descriptor.error_num == 1202 || descriptor.error_num == 1221);
                    }
                }
            }
        }
    }
}

mod write_contention {
    use crate::{CollectionKind, Command, Database, Error, Executor, Output, WriteOptions};
    use docgraph_core::{
        CasOutcome, CollectionName, Document, DocumentId, DocumentStore, Result, Revision,
    };
    use serde_json::json;
    use std::sync::Arc;

    /// Every compare-and-swap loses to a newer revision
    struct AlwaysStale(Arc<dyn DocumentStore>);

    impl DocumentStore for AlwaysStale {
        fn get(&self, id: &DocumentId) -> Result<Option<Document>> {
            self.0.get(id)
        }

        fn put_if_absent(&self, document: Document) -> Result<bool> {
            self.0.put_if_absent(document)
        }

        fn compare_and_swap(&self, _expected: &Revision, _document: Document) -> Result<CasOutcome> {
            Ok(CasOutcome::RevisionMismatch {
                current: self.0.next_revision(),
            })
        }

        fn count(&self, collection: &CollectionName) -> usize {
            self.0.count(collection)
        }

        fn next_revision(&self) -> Revision {
            self.0.next_revision()
        }
    }

    #[test]
    fn test_exhausted_retries_reported_as_conflict() {
        let backing = Arc::clone(Database::in_memory().store());
        let db = Database::builder()
            .store(Arc::new(AlwaysStale(backing)))
            .collection("vertices", CollectionKind::Vertex)
            .open()
            .unwrap();
        let executor = Executor::new(db);
        executor
            .execute(Command::CreateSingle {
                collection: "vertices".into(),
                body: json!({"_key": "1"}),
            })
            .unwrap();

        let err = executor
            .execute(Command::UpdateSingle {
                collection: "vertices".into(),
                patch: json!({"_key": "1", "n": 1}),
                options: WriteOptions::new(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::Conflict { .. }));

        let output = executor
            .execute(Command::ReplaceMultiple {
                collection: "vertices".into(),
                documents: vec![json!({"_key": "1", "n": 1})],
                options: WriteOptions::new(),
            })
            .unwrap();
        match output {
            Output::WriteBatch(items) => {
                assert_eq!(items.len(), 1);
                let descriptor = items[0].clone().err().unwrap();
                assert_eq!(descriptor.error_num, 1200);
                assert!(!descriptor.error_message.is_empty());
            }
            other => panic!("Expected WriteBatch, got {:?}", other),
        }
    }
}
