//! Todo domain model: entity, ordered store, filtering, due-date rules.
//!
//! Everything in this module is synchronous and free of I/O. The store is
//! only ever mutated with server-confirmed data; the network side lives in
//! [`crate::api`].

mod due;
mod filter;
mod item;
mod store;

pub use due::{classify_due, DueStatus};
pub use filter::{Counts, FilterMode};
pub use item::{Todo, TodoId};
pub use store::{TodoPatch, TodoStore};
