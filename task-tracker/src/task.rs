use serde::{Deserialize, Serialize};
use std::fmt;

/// One persisted unit of work. Field order is the key order written to disk.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
pub struct Task {
    pub desc: String,
    pub start: String,
    pub deadline: String,
    pub status: Status,
}

/// Progress state of a task, wire-encoded as one of three fixed strings.
#[derive(Debug, Default, Eq, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum Status {
    #[serde(rename = "Completed!")]
    Completed,
    #[serde(rename = "In process!")]
    InProcess,
    #[default]
    #[serde(rename = "Later...")]
    Later,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "Completed!",
            Status::InProcess => "In process!",
            Status::Later => "Later...",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Task {
    /// Creates a task in the initial `Later` status.
    pub fn new(
        desc: impl Into<String>,
        start: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            desc: desc.into(),
            start: start.into(),
            deadline: deadline.into(),
            status: Status::Later,
        }
    }

    /// Marks the task as completed.
    pub fn completed(&mut self) {
        self.status = Status::Completed;
    }

    /// Marks the task as in process.
    pub fn in_process(&mut self) {
        self.status = Status::InProcess;
    }

    /// Puts the task back in the initial `Later` status.
    pub fn abandoned(&mut self) {
        self.status = Status::Later;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_later() {
        let task = Task::new("Buy milk", "2024-01-01", "2024-01-05");
        assert_eq!(task.status, Status::Later);
        assert_eq!(task.desc, "Buy milk");
        assert_eq!(task.start, "2024-01-01");
        assert_eq!(task.deadline, "2024-01-05");
    }

    #[test]
    fn transitions_move_status() {
        let mut task = Task::new("Buy milk", "2024-01-01", "2024-01-05");

        task.in_process();
        assert_eq!(task.status, Status::InProcess);

        task.completed();
        assert_eq!(task.status, Status::Completed);

        task.abandoned();
        assert_eq!(task.status, Status::Later);
    }

    #[test]
    fn status_serializes_to_fixed_strings() {
        assert_eq!(
            serde_json::to_string(&Status::Completed).unwrap(),
            "\"Completed!\""
        );
        assert_eq!(
            serde_json::to_string(&Status::InProcess).unwrap(),
            "\"In process!\""
        );
        assert_eq!(
            serde_json::to_string(&Status::Later).unwrap(),
            "\"Later...\""
        );
    }

    #[test]
    fn status_rejects_unknown_strings() {
        let result: Result<Status, _> = serde_json::from_str("\"Done\"");
        assert!(result.is_err(), "unknown status strings should not parse");
    }

    #[test]
    fn task_round_trips_through_json() {
        let task = Task::new("Buy milk", "2024-01-01", "2024-01-05");
        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }
}
