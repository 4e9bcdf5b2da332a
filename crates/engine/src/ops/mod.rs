//! Document operations on [`Database`](crate::Database)
//!
//! Each submodule adds an `impl Database` block:
//! - create: `create_single`, `create_multiple`
//! - modify: `update_*`, `replace_*`
//! - read: `read_single`, `read_multiple`

mod create;
mod modify;
mod read;
