use crate::error::{Result, TodoError};
use crate::types::{Priority, Recurrence};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Todo
// ---------------------------------------------------------------------------

/// A single todo record. The `id` is the stable public handle; the 1-based
/// position shown to users is recomputed from the sort order on every
/// listing and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// NewTodo
// ---------------------------------------------------------------------------

/// Creation payload. `item` is validated non-empty at construction so no
/// store can persist a blank record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub item: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub recurrence: Option<Recurrence>,
    pub category: Option<String>,
    pub user_id: Option<String>,
}

impl NewTodo {
    pub fn new(item: impl Into<String>, user_id: Option<String>) -> Result<Self> {
        let item = item.into();
        if item.trim().is_empty() {
            return Err(TodoError::EmptyItem);
        }
        Ok(Self {
            item,
            due_date: None,
            priority: None,
            recurrence: None,
            category: None,
            user_id,
        })
    }

    /// Materialize as a full record with a fresh id and creation timestamp.
    /// Used by the file store; the remote store lets the server assign both.
    pub fn into_todo(self) -> Todo {
        Todo {
            id: Uuid::new_v4().to_string(),
            item: self.item,
            due_date: self.due_date,
            priority: self.priority,
            recurrence: self.recurrence,
            category: self.category,
            created_at: Utc::now(),
            user_id: self.user_id,
        }
    }
}

// ---------------------------------------------------------------------------
// TodoPatch
// ---------------------------------------------------------------------------

/// Partial update: only fields that are `Some` overwrite the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.recurrence.is_none()
            && self.category.is_none()
    }

    /// Merge onto an existing record, leaving omitted fields untouched.
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(item) = &self.item {
            todo.item = item.clone();
        }
        if let Some(due) = self.due_date {
            todo.due_date = Some(due);
        }
        if let Some(p) = self.priority {
            todo.priority = Some(p);
        }
        if let Some(r) = self.recurrence {
            todo.recurrence = Some(r);
        }
        if let Some(c) = &self.category {
            todo.category = Some(c.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// List operations (operate on slices in display order)
// ---------------------------------------------------------------------------

/// Sort newest-first. Ties on the timestamp keep reverse insertion order so
/// the display order is strict reverse creation order.
pub fn sort_newest_first(todos: &mut Vec<Todo>) {
    todos.reverse();
    todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Resolve a 1-based display index against an already-sorted list.
pub fn at_index(todos: &[Todo], index: i64) -> Result<&Todo> {
    if index < 1 || index as usize > todos.len() {
        return Err(TodoError::InvalidIndex {
            index,
            count: todos.len(),
        });
    }
    Ok(&todos[(index - 1) as usize])
}

/// Case-insensitive substring match against `item` or `category`.
pub fn matches_keyword(todo: &Todo, keyword: &str) -> bool {
    let kw = keyword.to_lowercase();
    todo.item.to_lowercase().contains(&kw)
        || todo
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(&kw))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
