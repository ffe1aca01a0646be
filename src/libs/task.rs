use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const PRIORITY_HIGH: i32 = 1;
pub const PRIORITY_MEDIUM: i32 = 2;
pub const PRIORITY_LOW: i32 = 3;
pub const PRIORITY_NONE: i32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub project_id: i32,
    pub task_completed: bool,
    pub due_date: Option<DateTime<Local>>,
    pub completion_date: Option<DateTime<Local>>,
    pub creation_date: DateTime<Local>,
    pub last_updated_date: DateTime<Local>,
    pub priority: i32,
}

impl Task {
    pub fn new(name: &str, description: Option<&str>, project_id: i32) -> Self {
        let now = Local::now();
        Task {
            id: None,
            name: name.to_string(),
            description: description.map(str::to_string),
            project_id,
            task_completed: false,
            due_date: None,
            completion_date: None,
            creation_date: now,
            last_updated_date: now,
            priority: PRIORITY_NONE,
        }
    }

    /// Flips the completion flag; completing sets the completion date, reopening clears it.
    pub fn toggle(&mut self) {
        self.task_completed = !self.task_completed;
        self.completion_date = if self.task_completed { Some(Local::now()) } else { None };
    }
}

/// Human readable label for a priority value.
pub fn priority_label(priority: i32) -> &'static str {
    match priority {
        PRIORITY_HIGH => "High",
        PRIORITY_MEDIUM => "Medium",
        PRIORITY_LOW => "Low",
        PRIORITY_NONE => "None",
        _ => "Unknown",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskFilter {
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.task_completed,
            TaskFilter::Pending => !task.task_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk", None, 1);
        assert_eq!(task.id, None);
        assert_eq!(task.priority, PRIORITY_NONE);
        assert!(!task.task_completed);
        assert!(task.completion_date.is_none());
    }

    #[test]
    fn test_toggle() {
        let mut task = Task::new("Buy milk", None, 1);
        task.toggle();
        assert!(task.task_completed);
        assert!(task.completion_date.is_some());

        task.toggle();
        assert!(!task.task_completed);
        assert!(task.completion_date.is_none());
    }

    #[test]
    fn test_filter() {
        let mut task = Task::new("Buy milk", None, 1);
        assert!(TaskFilter::Pending.matches(&task));
        task.toggle();
        assert!(TaskFilter::Completed.matches(&task));
        assert!(TaskFilter::All.matches(&task));
    }

    #[test]
    fn test_priority_label() {
        assert_eq!(priority_label(1), "High");
        assert_eq!(priority_label(4), "None");
        assert_eq!(priority_label(9), "Unknown");
    }
}
