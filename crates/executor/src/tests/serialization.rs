//! Wire format tests for Command, Output and Error.

use crate::{CollectionKind, Command, Error, ErrorDescriptor, WriteOptions};
use serde_json::json;

#[test]
fn test_command_options_are_camel_case() {
    let cmd = Command::UpdateSingle {
        collection: "vertices".into(),
        patch: json!({"_key": "1"}),
        options: WriteOptions::new()
            .return_old(true)
            .keep_null(false)
            .ignore_revs(false),
    };
    let wire = serde_json::to_value(&cmd).unwrap();
    assert_eq!(
        wire["UpdateSingle"]["options"],
        json!({"returnOld": true, "keepNull": false, "ignoreRevs": false})
    );
    let back: Command = serde_json::from_value(wire).unwrap();
    assert_eq!(back, cmd);
}

#[test]
fn test_options_default_when_omitted() {
    let cmd: Command = serde_json::from_value(json!({
        "ReplaceMultiple": {"collection": "vertices", "documents": []}
    }))
    .unwrap();
    match cmd {
        Command::ReplaceMultiple { options, .. } => assert_eq!(options, WriteOptions::default()),
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_unknown_option_rejected() {
    let result: Result<Command, _> = serde_json::from_value(json!({
        "UpdateSingle": {
            "collection": "vertices",
            "patch": {},
            "options": {"waitForSync": true}
        }
    }));
    assert!(result.is_err());
}

#[test]
fn test_collection_kind_wire_names() {
    let cmd: Command = serde_json::from_value(json!({
        "CreateCollection": {"name": "people", "kind": "document"}
    }))
    .unwrap();
    assert_eq!(
        cmd,
        Command::CreateCollection {
            name: "people".into(),
            kind: CollectionKind::Vertex
        }
    );
    assert_eq!(cmd.name(), "CreateCollection");
}

#[test]
fn test_error_serialization() {
    let err = Error::DocumentNotFound {
        id: "vertices/1".into(),
    };
    let wire = serde_json::to_value(&err).unwrap();
    assert_eq!(wire, json!({"DocumentNotFound": {"id": "vertices/1"}}));
    let back: Error = serde_json::from_value(wire).unwrap();
    assert_eq!(back, err);
}

#[test]
fn test_error_descriptor_shape() {
    let descriptor = ErrorDescriptor::from(Error::Conflict {
        id: "vertices/1".into(),
        reason: "expected revision a, found b".into(),
    });
    assert_eq!(
        serde_json::to_value(&descriptor).unwrap(),
        json!({
            "errorNum": 1200,
            "errorMessage": "conflict on vertices/1: expected revision a, found b"
        })
    );
}
