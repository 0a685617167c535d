use super::INVALID_INDEX_REPLY;
use crate::invocation::Invocation;
use crate::store::SharedStore;
use todobot_core::todo;

pub async fn run(store: &SharedStore, inv: &Invocation) -> anyhow::Result<String> {
    let Some(index) = inv.get_int("index") else {
        return Ok(INVALID_INDEX_REPLY.to_string());
    };
    // Resolve the display index against a fresh listing, then delete by id.
    let todos = store.list().await?;
    let target = match todo::at_index(&todos, index) {
        Ok(t) => t,
        Err(_) => return Ok(INVALID_INDEX_REPLY.to_string()),
    };
    let removed = store.delete(&target.id).await?;
    Ok(format!("Removed todo item: {}", removed.item))
}
