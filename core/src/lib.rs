//! In-memory todo store shared by the HTTP service.
//!
//! # Overview
//! `TodoStore` maps integer ids to `Todo` records behind a single mutex and
//! assigns ids from a counter that only moves forward. It performs no I/O and
//! has no async surface, so the transport can call it from any handler and it
//! can be tested without a runtime.
//!
//! # Design
//! - Every operation holds the lock for its whole read-modify-write, which
//!   makes the operations linearizable.
//! - Unknown ids are signalled with `None` / `false`; the store has no error
//!   type because nothing inside it can fail.
//! - Title validation belongs to the caller.

pub mod store;
pub mod types;

pub use store::TodoStore;
pub use types::{Todo, TodoId};
