//! `TodoStore`: CRUD over todo records behind an object-safe async trait,
//! backed by either a flat YAML file or a remote PocketBase collection.
//!
//! Both backends return records newest-first from `list`; the displayed
//! 1-based index is derived from that order per call and never stored, so
//! it can shift between a user's `list` and their follow-up command.

mod file;
mod remote;

pub use file::FileStore;
pub use remote::RemoteStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use todobot_core::{NewTodo, Todo, TodoPatch};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Core(#[from] todobot_core::TodoError),

    #[error(transparent)]
    Remote(#[from] pocketbase_client::PocketBaseError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> StoreResult<Vec<Todo>>;

    /// Persist a new record and return it with its assigned id.
    async fn create(&self, new: NewTodo) -> StoreResult<Todo>;

    /// Merge the supplied fields onto the record with this id.
    async fn update(&self, id: &str, patch: TodoPatch) -> StoreResult<Todo>;

    /// Remove and return the record with this id.
    async fn delete(&self, id: &str) -> StoreResult<Todo>;

    /// Case-insensitive substring match on `item` or `category`, in store
    /// order.
    async fn search(&self, keyword: &str) -> StoreResult<Vec<Todo>>;

    /// Records due exactly on `date` (reminder sweep).
    async fn due_on(&self, date: NaiveDate) -> StoreResult<Vec<Todo>>;

    /// Recurring records due exactly on `date` (recurrence sweep).
    async fn recurring_due_on(&self, date: NaiveDate) -> StoreResult<Vec<Todo>>;
}

pub type SharedStore = Arc<dyn TodoStore>;
