use crate::task::Task;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for task file access.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Represents a read or write failure other than "file does not exist".
    #[error("cannot access task file: {0}")]
    Io(#[from] io::Error),
    /// Represents file contents that are not a valid task list.
    #[error("task file is not a valid task list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reads the full task collection from `path`.
///
/// A missing or zero-length file is an empty collection, not an error.
pub fn load(path: &Path) -> Result<Vec<Task>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    if contents.is_empty() {
        return Ok(Vec::new());
    }
    let tasks: Vec<Task> = serde_json::from_str(&contents)?;
    tracing::debug!(count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Writes the full task collection to `path`, replacing prior content.
///
/// The file is a JSON array indented with one tab per nesting level. The
/// overwrite is a plain whole-file write, not atomic against crashes.
pub fn save(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    tracing::debug!(count = tasks.len(), "saved tasks");
    Ok(())
}
