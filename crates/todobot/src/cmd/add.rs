use super::patch_from_options;
use crate::invocation::Invocation;
use crate::store::SharedStore;
use todobot_core::NewTodo;

pub async fn run(store: &SharedStore, inv: &Invocation) -> anyhow::Result<String> {
    let fields = match patch_from_options(inv) {
        Ok(p) => p,
        Err(err) => return Ok(err.to_string()),
    };
    let Some(item) = fields.item else {
        return Ok("Please provide the todo item text.".to_string());
    };
    let mut new = NewTodo::new(item, Some(inv.user_id.clone()))?;
    new.due_date = fields.due_date;
    new.priority = fields.priority;
    new.recurrence = fields.recurrence;
    new.category = fields.category;

    let created = store.create(new).await?;
    Ok(format!("Added todo item: {}", created.item))
}
