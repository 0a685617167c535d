pub mod error;
pub mod file;
pub mod render;
pub mod sweep;
pub mod todo;
pub mod types;

pub use error::{Result, TodoError};
pub use todo::{NewTodo, Todo, TodoPatch};
pub use types::{Priority, Recurrence};
