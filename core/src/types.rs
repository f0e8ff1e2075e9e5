//! Domain types for the todo store.
//!
//! # Design
//! `Todo` is a plain value: the store hands out clones and replaces whole
//! records on update, so nothing outside the store can observe a record
//! mid-write. The serde attributes pin the wire names (`isComplete`) here so
//! every transport encodes the same shape.

use serde::{Deserialize, Serialize};

/// Identifier assigned by `TodoStore::create`. The first id is 1.
pub type TodoId = u64;

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_complete,
        }
    }
}
