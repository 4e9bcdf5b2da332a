//! The Executor - single entry point to the docgraph engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! handler for their category and converts engine results to outputs.

use std::sync::Arc;

use docgraph_engine::Database;
use tracing::debug;

use crate::handlers::{collection, document, write};
use crate::{Command, Output, Result};

/// The command executor.
///
/// Holds a shared reference to the database and no state of its own.
/// `Send + Sync`; share it across threads behind an `Arc` or clone the
/// database handle into several executors.
///
/// # Example
///
/// ```
/// use docgraph_core::CollectionKind;
/// use docgraph_engine::Database;
/// use docgraph_executor::{Command, Executor, Output};
/// use serde_json::json;
///
/// let executor = Executor::new(Database::in_memory());
/// executor
///     .execute(Command::CreateCollection {
///         name: "people".into(),
///         kind: CollectionKind::Vertex,
///     })
///     .unwrap();
///
/// let results = executor.execute_many(vec![
///     Command::CreateSingle { collection: "people".into(), body: json!({"_key": "alice"}) },
///     Command::Count { collection: "people".into() },
/// ]);
/// assert_eq!(results[1], Ok(Output::Count(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    db: Arc<Database>,
}

impl Executor {
    /// Create a new executor wrapping a database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// The wrapped database.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = self.dispatch(cmd);
        if let Err(err) = &result {
            debug!(
                target: "docgraph::executor",
                command = name,
                error_num = err.error_num(),
                error = %err,
                "command failed"
            );
        }
        result
    }

    /// Execute a JSON-encoded command.
    ///
    /// A request that does not decode to a [`Command`] fails with
    /// `Error::Serialization`.
    pub fn execute_json(&self, request: &str) -> Result<Output> {
        let cmd: Command = serde_json::from_str(request)?;
        self.execute(cmd)
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns one result per command, in order. Each command runs whatever
    /// the outcome of the ones before it.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    fn dispatch(&self, cmd: Command) -> Result<Output> {
        let db = &self.db;
        match cmd {
            // Collection commands
            Command::CreateCollection { name, kind } => {
                collection::create_collection(db, name, kind)
            }
            Command::ListCollections => collection::list_collections(db),
            Command::Count { collection } => collection::count(db, collection),

            // Create and read commands
            Command::CreateSingle { collection, body } => {
                document::create_single(db, collection, body)
            }
            Command::CreateMultiple { collection, bodies } => {
                document::create_multiple(db, collection, bodies)
            }
            Command::ReadSingle { collection, key } => document::read_single(db, collection, key),
            Command::ReadMultiple { collection, keys } => {
                document::read_multiple(db, collection, keys)
            }

            // Update and replace commands
            Command::UpdateSingle {
                collection,
                patch,
                options,
            } => write::update_single(db, collection, patch, options),
            Command::UpdateMultiple {
                collection,
                patches,
                options,
            } => write::update_multiple(db, collection, patches, options),
            Command::ReplaceSingle {
                collection,
                document,
                options,
            } => write::replace_single(db, collection, document, options),
            Command::ReplaceMultiple {
                collection,
                documents,
                options,
            } => write::replace_multiple(db, collection, documents, options),
        }
    }
}
