use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("todo item text must not be empty")]
    EmptyItem,

    #[error("invalid due date '{0}': expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("invalid priority '{0}': expected high, medium, or low")]
    InvalidPriority(String),

    #[error("invalid recurrence '{0}': expected daily, weekly, or monthly")]
    InvalidRecurrence(String),

    #[error("invalid index {index}: list has {count} item(s)")]
    InvalidIndex { index: i64, count: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
