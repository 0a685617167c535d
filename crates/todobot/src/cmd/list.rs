use crate::invocation::Invocation;
use crate::store::SharedStore;
use todobot_core::render;

pub async fn run(store: &SharedStore, _inv: &Invocation) -> anyhow::Result<String> {
    let todos = store.list().await?;
    if todos.is_empty() {
        return Ok("Your todo list is empty.".to_string());
    }
    Ok(render::render_list("Your todo list:", &todos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::test_support::file_store;
    use crate::cmd::{add, dispatch};

    #[tokio::test]
    async fn empty_list_says_so() {
        let (_dir, store) = file_store();
        let reply = run(&store, &Invocation::new("list", "u1")).await.unwrap();
        assert_eq!(reply, "Your todo list is empty.");
    }

    #[tokio::test]
    async fn list_shows_newest_first_with_indexes() {
        let (_dir, store) = file_store();
        for item in ["first", "second"] {
            add::run(&store, &Invocation::new("add", "u1").with_option("item", item))
                .await
                .unwrap();
        }
        let reply = dispatch(&store, &Invocation::new("list", "u1")).await;
        assert_eq!(reply, "Your todo list:\n1. second\n2. first");
    }

    #[tokio::test]
    async fn list_renders_optional_fields() {
        let (_dir, store) = file_store();
        let inv = Invocation::new("add", "u1")
            .with_option("item", "pay rent")
            .with_option("due_date", "2026-09-01")
            .with_option("priority", "high")
            .with_option("category", "bills");
        add::run(&store, &inv).await.unwrap();
        let reply = run(&store, &Invocation::new("list", "u1")).await.unwrap();
        assert_eq!(
            reply,
            "Your todo list:\n1. pay rent (Due: 2026-09-01) [high] #bills"
        );
    }
}
