use super::{StoreResult, TodoStore};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use pocketbase_client::{filter, Client, ListOptions};
use serde::{Deserialize, Serialize};
use todobot_core::{NewTodo, Priority, Recurrence, Todo, TodoPatch};

const COLLECTION: &str = "todos";

/// Remote store over a PocketBase `todos` collection. The server assigns
/// record ids and keeps `created` for sorting; search and the sweep date
/// checks are pushed down as filter expressions.
pub struct RemoteStore {
    pb: Client,
}

impl RemoteStore {
    pub fn new(pb: Client) -> Self {
        Self { pb }
    }

    async fn full_list(&self, opts: &ListOptions) -> StoreResult<Vec<Todo>> {
        let records: Vec<TodoRecord> = self.pb.full_list(COLLECTION, opts).await?;
        Ok(records.into_iter().map(TodoRecord::into_todo).collect())
    }
}

#[async_trait]
impl TodoStore for RemoteStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        self.full_list(&ListOptions::new().sort("-created")).await
    }

    async fn create(&self, new: NewTodo) -> StoreResult<Todo> {
        let record: TodoRecord = self
            .pb
            .create(COLLECTION, &CreatePayload::from(new))
            .await?;
        Ok(record.into_todo())
    }

    async fn update(&self, id: &str, patch: TodoPatch) -> StoreResult<Todo> {
        let record: TodoRecord = self
            .pb
            .update(COLLECTION, id, &PatchPayload::from(patch))
            .await?;
        Ok(record.into_todo())
    }

    async fn delete(&self, id: &str) -> StoreResult<Todo> {
        // Fetch first: PocketBase's delete returns no body and callers want
        // the removed record for the reply.
        let record: TodoRecord = self.pb.view(COLLECTION, id).await?;
        self.pb.delete(COLLECTION, id).await?;
        Ok(record.into_todo())
    }

    async fn search(&self, keyword: &str) -> StoreResult<Vec<Todo>> {
        let expr = filter::any_of(&[
            filter::contains("item", keyword),
            filter::contains("category", keyword),
        ]);
        self.full_list(&ListOptions::new().filter(expr)).await
    }

    async fn due_on(&self, date: NaiveDate) -> StoreResult<Vec<Todo>> {
        let expr = filter::equals("dueDate", &date.to_string());
        self.full_list(&ListOptions::new().filter(expr)).await
    }

    async fn recurring_due_on(&self, date: NaiveDate) -> StoreResult<Vec<Todo>> {
        let expr = filter::all_of(&[
            filter::not_equals("recurrence", ""),
            filter::equals("dueDate", &date.to_string()),
        ]);
        self.full_list(&ListOptions::new().filter(expr)).await
    }
}

// ---------------------------------------------------------------------------
// Wire types (camelCase, matching the original collection schema)
// ---------------------------------------------------------------------------

/// PocketBase stores optional text fields as `""` rather than null, so
/// typed optionals parse through this helper.
mod pb_opt {
    use serde::{Deserialize, Deserializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn deserialize<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let s = Option::<String>::deserialize(de)?.unwrap_or_default();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse::<T>().map(Some).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoRecord {
    id: String,
    item: String,
    #[serde(default, deserialize_with = "pb_opt::deserialize")]
    due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "pb_opt::deserialize")]
    priority: Option<Priority>,
    #[serde(default, deserialize_with = "pb_opt::deserialize")]
    recurrence: Option<Recurrence>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, deserialize_with = "pb_opt::deserialize")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    user_id: Option<String>,
}

impl TodoRecord {
    fn into_todo(self) -> Todo {
        Todo {
            id: self.id,
            item: self.item,
            due_date: self.due_date,
            priority: self.priority,
            recurrence: self.recurrence,
            category: self.category.filter(|c| !c.is_empty()),
            // Records created outside the bot may lack createdAt; they sort
            // to the bottom of any timestamp ordering.
            created_at: self.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            user_id: self.user_id.filter(|u| !u.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePayload {
    item: String,
    due_date: String,
    priority: String,
    recurrence: String,
    category: String,
    created_at: DateTime<Utc>,
    user_id: String,
}

impl From<NewTodo> for CreatePayload {
    fn from(new: NewTodo) -> Self {
        Self {
            item: new.item,
            due_date: new.due_date.map(|d| d.to_string()).unwrap_or_default(),
            priority: new.priority.map(|p| p.to_string()).unwrap_or_default(),
            recurrence: new.recurrence.map(|r| r.to_string()).unwrap_or_default(),
            category: new.category.unwrap_or_default(),
            created_at: Utc::now(),
            user_id: new.user_id.unwrap_or_default(),
        }
    }
}

/// Only supplied fields are serialized, so the server's merge semantics
/// leave the rest untouched.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct PatchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl From<TodoPatch> for PatchPayload {
    fn from(patch: TodoPatch) -> Self {
        Self {
            item: patch.item,
            due_date: patch.due_date.map(|d| d.to_string()),
            priority: patch.priority.map(|p| p.to_string()),
            recurrence: patch.recurrence.map(|r| r.to_string()),
            category: patch.category,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
