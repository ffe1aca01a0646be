//! Display implementation for gplan messages.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! between commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DbOpening(path) => format!("Opening database at {}", path),
            Message::DbInitFailed(error) => format!("Error initializing repository: {}", error),

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name, id) => format!("Project '{}' created with ID {}", name, id),
            Message::ProjectUpdated(name) => format!("Project '{}' updated", name),
            Message::ProjectDeleted(name) => format!("Project '{}' removed", name),
            Message::ProjectTasksLeftBehind(name, tasks) => {
                format!("{} task(s) still reference the removed project '{}'", tasks, name)
            }
            Message::ProjectNotFound(reference) => format!("Project '{}' not found", reference),
            Message::ProjectAlreadyExists(name) => format!("A project named '{}' already exists", name),
            Message::ProjectIdAllocated(id) => format!("Allocated project ID {}", id),
            Message::ProjectDeleteNoRows(id) => format!("No project with ID {} to delete", id),
            Message::ProjectOwnParent(name) => format!("Project '{}' cannot be its own parent", name),
            Message::ProjectParentCycle(name, parent) => {
                format!("Making '{}' the parent of '{}' would create a cycle", parent, name)
            }
            Message::ProjectsHeader => "Projects:".to_string(),
            Message::SubprojectsHeader(name) => format!("Subprojects of '{}':", name),
            Message::NoProjectsFound => "No projects found.".to_string(),
            Message::ConfirmDeleteProject(name, 0) => format!("Remove project '{}'?", name),
            Message::ConfirmDeleteProject(name, tasks) => {
                format!("Remove project '{}'? Its {} task(s) will be kept without a project.", name, tasks)
            }

            // === TASK MESSAGES ===
            Message::TaskCreated(name, id) => format!("Task '{}' created with ID {}", name, id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} removed", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskIdAllocated(id) => format!("Allocated task ID {}", id),
            Message::TaskUpdateNoRows(id) => format!("Update matched no task with ID {}", id),
            Message::TaskDeleteNoRows(id) => format!("No task with ID {} to delete", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskReopened(id) => format!("Task {} marked as pending", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksForProjectHeader(name) => format!("Tasks in '{}':", name),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Remove task '{}'?", name),

            // === INPUT MESSAGES ===
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),
            Message::InvalidPriority(priority) => format!("Invalid priority {}, expected 1 (high) to 4 (none)", priority),
            Message::NoChangesDetected => "Nothing to change.".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === APPLICATION MESSAGES ===
            Message::VersionInfo { name, version, commit } => format!("{} {} ({})", name, version, commit),
        };

        write!(f, "{}", text)
    }
}
