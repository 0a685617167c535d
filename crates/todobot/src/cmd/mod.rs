//! Command handlers, one module per slash command, plus the dispatch
//! adapter that turns any handler failure into a user-facing reply.

pub mod add;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

use crate::invocation::Invocation;
use crate::store::SharedStore;
use chrono::NaiveDate;
use todobot_core::{TodoError, TodoPatch};

pub(crate) const INVALID_INDEX_REPLY: &str =
    "Invalid index. Please provide a valid todo item number.";

/// Route an invocation to its handler.
///
/// Validation problems come back as `Ok(reply)` from the handlers and are
/// surfaced verbatim. Anything that errors (store I/O, the network) is
/// logged here and degraded to the command's generic failure reply. No
/// retries; no failure escapes to the caller.
pub async fn dispatch(store: &SharedStore, inv: &Invocation) -> String {
    let result = match inv.command.as_str() {
        "add" => add::run(store, inv).await,
        "list" => list::run(store, inv).await,
        "remove" => remove::run(store, inv).await,
        "search" => search::run(store, inv).await,
        "update" => update::run(store, inv).await,
        other => {
            tracing::warn!(command = %other, "unknown command");
            return "An error occurred while processing your command. Please try again later."
                .to_string();
        }
    };
    match result {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!(
                command = %inv.command,
                error = %format!("{err:#}"),
                "command failed"
            );
            failure_reply(&inv.command).to_string()
        }
    }
}

fn failure_reply(command: &str) -> &'static str {
    match command {
        "add" => "Failed to add todo item. Please try again.",
        "list" => "Failed to list todo items. Please try again.",
        "remove" => "Failed to remove todo item. Please try again.",
        "search" => "Failed to search todo items. Please try again.",
        "update" => "Failed to update todo item. Please try again.",
        _ => "An error occurred while processing your command. Please try again later.",
    }
}

/// Build a patch from the add/update option set, validating each field.
/// Option values arrive as strings from the gateway.
pub(crate) fn patch_from_options(inv: &Invocation) -> todobot_core::Result<TodoPatch> {
    let mut patch = TodoPatch::default();
    if let Some(item) = inv.get("item") {
        if item.trim().is_empty() {
            return Err(TodoError::EmptyItem);
        }
        patch.item = Some(item.to_string());
    }
    if let Some(s) = inv.get("due_date") {
        let due = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| TodoError::InvalidDueDate(s.to_string()))?;
        patch.due_date = Some(due);
    }
    if let Some(s) = inv.get("priority") {
        patch.priority = Some(s.parse()?);
    }
    if let Some(s) = inv.get("recurrence") {
        patch.recurrence = Some(s.parse()?);
    }
    if let Some(s) = inv.get("category") {
        patch.category = Some(s.to_string());
    }
    Ok(patch)
}
