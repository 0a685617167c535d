//! User-facing line formatting shared by `list` and `search` replies.

use crate::todo::Todo;
use std::fmt::Write;

/// One display line: `N. item (Due: d) [priority] #category`, with the
/// optional parts omitted when absent.
pub fn format_line(index: usize, todo: &Todo) -> String {
    let mut line = format!("{}. {}", index, todo.item);
    if let Some(due) = todo.due_date {
        let _ = write!(line, " (Due: {due})");
    }
    if let Some(priority) = todo.priority {
        let _ = write!(line, " [{priority}]");
    }
    if let Some(category) = &todo.category {
        let _ = write!(line, " #{category}");
    }
    line
}

/// Header plus one numbered line per record.
pub fn render_list(header: &str, todos: &[Todo]) -> String {
    let body = todos
        .iter()
        .enumerate()
        .map(|(i, t)| format_line(i + 1, t))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header}\n{body}")
}
