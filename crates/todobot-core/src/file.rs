//! Flat-file persistence: the whole list lives in a single YAML document.
//!
//! Every mutation is a whole-list read-modify-write; there is no locking,
//! so concurrent writers are last-writer-wins.

use crate::error::Result;
use crate::todo::Todo;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Load the full list. A missing or empty file is an empty list, not an
/// error.
pub fn load_todos(path: &Path) -> Result<Vec<Todo>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(&content)?)
}

/// Overwrite the file with the full list.
pub fn save_todos(path: &Path, todos: &[Todo]) -> Result<()> {
    let data = serde_yaml::to_string(todos)?;
    atomic_write(path, data.as_bytes())
}

/// Write via a tempfile in the same directory so a crash mid-write cannot
/// leave a truncated list behind.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::NewTodo;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty_list() {
        let dir = TempDir::new().unwrap();
        let todos = load_todos(&dir.path().join("todos.yaml")).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn empty_file_is_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.yaml");
        std::fs::write(&path, "").unwrap();
        assert!(load_todos(&path).unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.yaml");
        let todos = vec![
            NewTodo::new("first", Some("u1".into())).unwrap().into_todo(),
            NewTodo::new("second", None).unwrap().into_todo(),
        ];
        save_todos(&path, &todos).unwrap();
        let back = load_todos(&path).unwrap();
        assert_eq!(back, todos);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/state/todos.yaml");
        save_todos(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.yaml");
        let a = vec![NewTodo::new("keep", None).unwrap().into_todo()];
        let b = vec![NewTodo::new("replace", None).unwrap().into_todo()];
        save_todos(&path, &a).unwrap();
        save_todos(&path, &b).unwrap();
        let back = load_todos(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].item, "replace");
    }

    #[test]
    fn corrupt_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.yaml");
        std::fs::write(&path, "{not yaml: [").unwrap();
        assert!(load_todos(&path).is_err());
    }
}
