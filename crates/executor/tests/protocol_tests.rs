//! JSON Protocol Tests
//!
//! Drives the executor the way an SDK would: JSON commands in, JSON
//! outputs out, one executor shared by several threads.

use docgraph_executor::{Database, Executor, Output};
use serde_json::{json, Value};
use std::sync::{Arc, Barrier};
use std::thread;

fn run(executor: &Executor, request: Value) -> Value {
    let output = executor.execute_json(&request.to_string()).unwrap();
    serde_json::to_value(output).unwrap()
}

fn setup() -> Arc<Executor> {
    let executor = Executor::new(Database::in_memory());
    run(&executor, json!({"CreateCollection": {"name": "vertices", "kind": "vertex"}}));
    run(&executor, json!({"CreateCollection": {"name": "edges", "kind": "edge"}}));
    Arc::new(executor)
}

#[test]
fn test_update_flow_over_json() {
    let executor = setup();
    let created = run(
        &executor,
        json!({"CreateSingle": {"collection": "vertices", "body": {"k1": {"a": 1}, "k2": "v1"}}}),
    );
    let cnode = &created["Document"];
    assert!(cnode["_key"].is_string());

    let mut patch = cnode.clone();
    patch["k1"] = json!({"b": 1});
    let updated = run(
        &executor,
        json!({"UpdateSingle": {
            "collection": "vertices",
            "patch": patch,
            "options": {"returnNew": true, "returnOld": true, "ignoreRevs": false}
        }}),
    );
    let write = &updated["Write"];
    assert_eq!(write["_id"], cnode["_id"]);
    assert_eq!(write["_oldRev"], cnode["_rev"]);
    assert_ne!(write["_rev"], cnode["_rev"]);
    assert_eq!(write["new"]["k1"], json!({"a": 1, "b": 1}));
    assert_eq!(write["old"]["k1"], json!({"a": 1}));
}

#[test]
fn test_error_over_json() {
    let executor = setup();
    let err = executor
        .execute_json(
            &json!({"UpdateSingle": {"collection": "vertices", "patch": {"_key": "nope"}}})
                .to_string(),
        )
        .unwrap_err();
    assert_eq!(err.error_num(), 1202);
    let wire = serde_json::to_value(&err).unwrap();
    assert_eq!(wire["DocumentNotFound"]["id"], "vertices/nope");
}

#[test]
fn test_batch_over_json() {
    let executor = setup();
    run(
        &executor,
        json!({"CreateMultiple": {"collection": "vertices", "bodies": [{"_key": "a"}, {"_key": "b"}]}}),
    );
    let output = run(
        &executor,
        json!({"CreateMultiple": {"collection": "edges", "bodies": [
            {"_from": "vertices/a", "_to": "vertices/b"},
            {"_from": "vertices/a"},
            {"_from": "vertices/a", "_to": "vertices/zzz"}
        ]}}),
    );
    let slots = output["DocumentBatch"].as_array().unwrap();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["_from"], "vertices/a");
    assert_eq!(slots[0]["_to"], "vertices/b");
    assert_eq!(slots[1]["errorNum"], 1233);
    assert_eq!(slots[2]["errorNum"], 1233);
}

#[test]
fn test_shared_executor_across_threads() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 25;

    let executor = setup();
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let executor = Arc::clone(&executor);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..PER_THREAD {
                    let key = format!("t{}-{}", t, i);
                    run(
                        &executor,
                        json!({"CreateSingle": {"collection": "vertices", "body": {"_key": key}}}),
                    );
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    match executor
        .execute_json(r#"{"Count": {"collection": "vertices"}}"#)
        .unwrap()
    {
        Output::Count(n) => assert_eq!(n as usize, THREADS * PER_THREAD),
        other => panic!("Expected Count, got {:?}", other),
    }
}
