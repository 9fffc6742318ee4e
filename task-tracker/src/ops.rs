use crate::date::is_valid_date;
use crate::store::{self, StoreError};
use crate::task::Task;
use std::path::Path;

/// Error type for task operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Represents add-task input that does not split into exactly three parts.
    #[error("invalid task format, expected 'description,start,deadline'")]
    InvalidFormat,
    /// Represents a start or deadline that is not a `YYYY-MM-DD` date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Represents an underlying load or save failure, surfaced unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parses `raw` as `description,start,deadline`, validates the dates, and
/// appends the new task (status `Later...`) to the collection at `path`.
///
/// The split is on the literal comma with no trimming and no escaping, so
/// descriptions cannot contain commas.
#[tracing::instrument(skip(raw))]
pub fn add_task(path: &Path, raw: &str) -> Result<(), TaskError> {
    let parts: Vec<&str> = raw.split(',').collect();
    let [desc, start, deadline] = parts[..] else {
        return Err(TaskError::InvalidFormat);
    };
    if !is_valid_date(start) {
        return Err(TaskError::InvalidDate(start.to_string()));
    }
    if !is_valid_date(deadline) {
        return Err(TaskError::InvalidDate(deadline.to_string()));
    }

    let mut tasks = store::load(path)?;
    tasks.push(Task::new(desc, start, deadline));
    store::save(path, &tasks)?;
    tracing::info!(desc, "task added");
    Ok(())
}

/// Loads the collection at `path` and renders the task report.
///
/// The report is a count line, then (only when tasks exist) a header line
/// and one row per task with a 1-based id in load order.
pub fn list_tasks(path: &Path) -> Result<String, TaskError> {
    let tasks = store::load(path)?;

    let mut report = format!("You got {} tasks:\n", tasks.len());
    if !tasks.is_empty() {
        report.push_str("id\n");
        for (position, task) in tasks.iter().enumerate() {
            report.push_str(&format!(
                "{} |\tDesc: {}\t\tStarted: {}\t\tDeadline: {}\t\tStatus: {}\n",
                position + 1,
                task.desc,
                task.start,
                task.deadline,
                task.status
            ));
        }
    }
    Ok(report)
}

/// Removes every task at `path` whose description equals `desc` exactly.
///
/// The filtered collection is saved even when nothing matched, and an
/// all-match delete saves an empty array rather than removing the file.
#[tracing::instrument]
pub fn delete_task(path: &Path, desc: &str) -> Result<(), TaskError> {
    let mut tasks = store::load(path)?;
    let before = tasks.len();
    tasks.retain(|task| task.desc != desc);
    store::save(path, &tasks)?;
    tracing::info!(desc, removed = before - tasks.len(), "tasks deleted");
    Ok(())
}
