use super::{patch_from_options, INVALID_INDEX_REPLY};
use crate::invocation::Invocation;
use crate::store::SharedStore;
use todobot_core::todo;

pub async fn run(store: &SharedStore, inv: &Invocation) -> anyhow::Result<String> {
    let Some(index) = inv.get_int("index") else {
        return Ok(INVALID_INDEX_REPLY.to_string());
    };
    let patch = match patch_from_options(inv) {
        Ok(p) => p,
        Err(err) => return Ok(err.to_string()),
    };
    if patch.is_empty() {
        return Ok("Nothing to update. Provide at least one field to change.".to_string());
    }
    let todos = store.list().await?;
    let target = match todo::at_index(&todos, index) {
        Ok(t) => t,
        Err(_) => return Ok(INVALID_INDEX_REPLY.to_string()),
    };
    let updated = store.update(&target.id, patch).await?;
    Ok(format!("Updated todo item: {}", updated.item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::add;
    use crate::cmd::test_support::file_store;
    use crate::store::TodoStore;
    use todobot_core::Priority;

    #[tokio::test]
    async fn update_merges_supplied_fields_only() {
        let (_dir, store) = file_store();
        let inv = Invocation::new("add", "u1")
            .with_option("item", "report")
            .with_option("priority", "low")
            .with_option("category", "work");
        add::run(&store, &inv).await.unwrap();
        let before = store.list().await.unwrap()[0].clone();

        let reply = run(
            &store,
            &Invocation::new("update", "u1")
                .with_option("index", "1")
                .with_option("priority", "high"),
        )
        .await
        .unwrap();
        assert_eq!(reply, "Updated todo item: report");

        let after = store.list().await.unwrap()[0].clone();
        assert_eq!(after.priority, Some(Priority::High));
        assert_eq!(after.item, before.item);
        assert_eq!(after.due_date, before.due_date);
        assert_eq!(after.recurrence, before.recurrence);
        assert_eq!(after.category, before.category);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.user_id, before.user_id);
        assert_eq!(after.id, before.id);
    }

    #[tokio::test]
    async fn update_echoes_new_item_text() {
        let (_dir, store) = file_store();
        add::run(&store, &Invocation::new("add", "u1").with_option("item", "old"))
            .await
            .unwrap();
        let reply = run(
            &store,
            &Invocation::new("update", "u1")
                .with_option("index", "1")
                .with_option("item", "new"),
        )
        .await
        .unwrap();
        assert_eq!(reply, "Updated todo item: new");
    }

    #[tokio::test]
    async fn out_of_range_index_replies_invalid() {
        let (_dir, store) = file_store();
        add::run(&store, &Invocation::new("add", "u1").with_option("item", "x"))
            .await
            .unwrap();
        let reply = run(
            &store,
            &Invocation::new("update", "u1")
                .with_option("index", "5")
                .with_option("item", "y"),
        )
        .await
        .unwrap();
        assert_eq!(reply, INVALID_INDEX_REPLY);
        assert_eq!(store.list().await.unwrap()[0].item, "x");
    }

    #[tokio::test]
    async fn empty_patch_is_rejected_before_touching_store() {
        let (_dir, store) = file_store();
        add::run(&store, &Invocation::new("add", "u1").with_option("item", "x"))
            .await
            .unwrap();
        let reply = run(
            &store,
            &Invocation::new("update", "u1").with_option("index", "1"),
        )
        .await
        .unwrap();
        assert_eq!(reply, "Nothing to update. Provide at least one field to change.");
    }

    #[tokio::test]
    async fn invalid_recurrence_replies_verbatim() {
        let (_dir, store) = file_store();
        add::run(&store, &Invocation::new("add", "u1").with_option("item", "x"))
            .await
            .unwrap();
        let reply = run(
            &store,
            &Invocation::new("update", "u1")
                .with_option("index", "1")
                .with_option("recurrence", "fortnightly"),
        )
        .await
        .unwrap();
        assert!(reply.contains("invalid recurrence 'fortnightly'"));
    }
}
