use super::{StoreError, StoreResult, TodoStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use todobot_core::{file, sweep, todo, NewTodo, Todo, TodoPatch};

/// File-backed store: the whole list is loaded, mutated in memory, and
/// written back on every mutation. No locking; racing writers are
/// last-writer-wins, as in the flat-file versions of the bot.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> StoreResult<Vec<Todo>> {
        Ok(file::load_todos(&self.path)?)
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        Ok(file::save_todos(&self.path, todos)?)
    }

    fn position_of(todos: &[Todo], id: &str) -> StoreResult<usize> {
        todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl TodoStore for FileStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let mut todos = self.load()?;
        todo::sort_newest_first(&mut todos);
        Ok(todos)
    }

    async fn create(&self, new: NewTodo) -> StoreResult<Todo> {
        let mut todos = self.load()?;
        let created = new.into_todo();
        todos.push(created.clone());
        self.save(&todos)?;
        Ok(created)
    }

    async fn update(&self, id: &str, patch: TodoPatch) -> StoreResult<Todo> {
        let mut todos = self.load()?;
        let pos = Self::position_of(&todos, id)?;
        patch.apply(&mut todos[pos]);
        let updated = todos[pos].clone();
        self.save(&todos)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> StoreResult<Todo> {
        let mut todos = self.load()?;
        let pos = Self::position_of(&todos, id)?;
        let removed = todos.remove(pos);
        self.save(&todos)?;
        Ok(removed)
    }

    async fn search(&self, keyword: &str) -> StoreResult<Vec<Todo>> {
        let todos = self.load()?;
        Ok(todos
            .into_iter()
            .filter(|t| todo::matches_keyword(t, keyword))
            .collect())
    }

    async fn due_on(&self, date: NaiveDate) -> StoreResult<Vec<Todo>> {
        let todos = self.load()?;
        Ok(todos
            .into_iter()
            .filter(|t| sweep::is_due_on(t, date))
            .collect())
    }

    async fn recurring_due_on(&self, date: NaiveDate) -> StoreResult<Vec<Todo>> {
        let todos = self.load()?;
        Ok(todos
            .into_iter()
            .filter(|t| sweep::is_recurring_due(t, date))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use todobot_core::{Priority, Recurrence};

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("todos.yaml"));
        (dir, store)
    }

    fn new_todo(item: &str) -> NewTodo {
        NewTodo::new(item, Some("u1".into())).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn create_then_list_shows_record() {
        let (_dir, store) = store();
        store.create(new_todo("buy milk")).await.unwrap();
        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].item, "buy milk");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (_dir, store) = store();
        store.create(new_todo("first")).await.unwrap();
        store.create(new_todo("second")).await.unwrap();
        store.create(new_todo("third")).await.unwrap();
        let items: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.item)
            .collect();
        assert_eq!(items, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let (_dir, store) = store();
        let mut new = new_todo("report");
        new.priority = Some(Priority::Low);
        new.category = Some("work".into());
        let created = store.create(new).await.unwrap();

        let patch = TodoPatch {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let updated = store.update(&created.id, patch).await.unwrap();

        assert_eq!(updated.priority, Some(Priority::High));
        assert_eq!(updated.item, created.item);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.user_id, created.user_id);
    }

    #[tokio::test]
    async fn update_persists_across_reload() {
        let (_dir, store) = store();
        let created = store.create(new_todo("old name")).await.unwrap();
        let patch = TodoPatch {
            item: Some("new name".into()),
            ..Default::default()
        };
        store.update(&created.id, patch).await.unwrap();
        let todos = store.list().await.unwrap();
        assert_eq!(todos[0].item, "new name");
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let (_dir, store) = store();
        let created = store.create(new_todo("doomed")).await.unwrap();
        let removed = store.delete(&created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (_dir, store) = store();
        assert!(matches!(
            store.delete("nope").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.update("nope", TodoPatch::default()).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn search_matches_item_and_category() {
        let (_dir, store) = store();
        store.create(new_todo("Buy milk")).await.unwrap();
        let mut tagged = new_todo("call plumber");
        tagged.category = Some("Household".into());
        store.create(tagged).await.unwrap();
        store.create(new_todo("send invoice")).await.unwrap();

        let hits = store.search("MILK").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item, "Buy milk");

        let hits = store.search("house").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item, "call plumber");

        assert!(store.search("gym").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn due_filters_by_exact_date() {
        let (_dir, store) = store();
        let mut due = new_todo("due tomorrow");
        due.due_date = Some(date("2026-08-31"));
        store.create(due).await.unwrap();
        let mut recurring = new_todo("daily standup");
        recurring.due_date = Some(date("2026-08-31"));
        recurring.recurrence = Some(Recurrence::Daily);
        store.create(recurring).await.unwrap();
        store.create(new_todo("no date")).await.unwrap();

        assert_eq!(store.due_on(date("2026-08-31")).await.unwrap().len(), 2);
        assert!(store.due_on(date("2026-09-01")).await.unwrap().is_empty());

        let recurring_due = store.recurring_due_on(date("2026-08-31")).await.unwrap();
        assert_eq!(recurring_due.len(), 1);
        assert_eq!(recurring_due[0].item, "daily standup");
    }
}
