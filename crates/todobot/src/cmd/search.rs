use crate::invocation::Invocation;
use crate::store::SharedStore;
use todobot_core::render;

pub async fn run(store: &SharedStore, inv: &Invocation) -> anyhow::Result<String> {
    let Some(keyword) = inv.get("keyword") else {
        return Ok("Please provide a keyword to search for.".to_string());
    };
    let hits = store.search(keyword).await?;
    if hits.is_empty() {
        return Ok("No matching todo items found.".to_string());
    }
    Ok(render::render_list("Matching todo items:", &hits))
}
