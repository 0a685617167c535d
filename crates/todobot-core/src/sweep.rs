//! Pure selectors and date math for the periodic sweeps. The drivers that
//! read the store and write back live in the daemon crate.

use crate::todo::{NewTodo, Todo};
use chrono::NaiveDate;

/// Recurrence sweep predicate: recurrence set and due exactly on `date`.
pub fn is_recurring_due(todo: &Todo, date: NaiveDate) -> bool {
    todo.recurrence.is_some() && todo.due_date == Some(date)
}

/// Reminder sweep predicate: due exactly on `date`.
pub fn is_due_on(todo: &Todo, date: NaiveDate) -> bool {
    todo.due_date == Some(date)
}

/// Copy of a recurring record with the due date advanced one period.
///
/// The source record is deliberately not modified: expansion appends a new
/// occurrence rather than advancing in place, so an unmodified due-today
/// record will expand again on the next pass.
pub fn next_occurrence(todo: &Todo, today: NaiveDate) -> Option<NewTodo> {
    let recurrence = todo.recurrence?;
    if todo.due_date != Some(today) {
        return None;
    }
    Some(NewTodo {
        item: todo.item.clone(),
        due_date: Some(recurrence.next_due(today)),
        priority: todo.priority,
        recurrence: Some(recurrence),
        category: todo.category.clone(),
        user_id: todo.user_id.clone(),
    })
}
