use super::project::Project;
use super::task::{priority_label, Task};
use chrono::{DateTime, Local};
use prettytable::{row, Table};
use std::collections::HashMap;

pub const MAX_PROJECT_NAME_LENGTH: usize = 30;
pub const MAX_PROJECT_DESC_LENGTH: usize = 50;
pub const MAX_TASK_NAME_LENGTH: usize = 20;
pub const MAX_TASK_DESC_LENGTH: usize = 30;

/// Cuts `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn format_date(date: Option<&DateTime<Local>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub struct View {}

impl View {
    fn projects_table(projects: &[Project], all_projects: &[Project]) -> Table {
        let names: HashMap<i32, &str> = all_projects.iter().filter_map(|p| p.id.map(|id| (id, p.name.as_str()))).collect();

        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "DESCRIPTION", "PARENT", "CREATED", "MODIFIED"]);
        for project in projects {
            // A parent that was deleted still shows its ID.
            let parent = match project.parent_project_id {
                Some(id) => names.get(&id).map(|n| truncate(n, MAX_PROJECT_NAME_LENGTH)).unwrap_or_else(|| format!("#{}", id)),
                None => String::new(),
            };
            table.add_row(row![
                project.id.unwrap_or(0),
                truncate(&project.name, MAX_PROJECT_NAME_LENGTH),
                truncate(project.description.as_deref().unwrap_or(""), MAX_PROJECT_DESC_LENGTH),
                parent,
                format_date(Some(&project.creation_date)),
                format_date(Some(&project.last_modified_date))
            ]);
        }
        table
    }

    fn tasks_table(tasks: &[Task], projects: &[Project]) -> Table {
        let names: HashMap<i32, &str> = projects.iter().filter_map(|p| p.id.map(|id| (id, p.name.as_str()))).collect();

        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "DESCRIPTION", "PROJECT", "PRIORITY", "DONE", "DUE", "COMPLETED"]);
        for task in tasks {
            let project = names
                .get(&task.project_id)
                .map(|n| truncate(n, MAX_PROJECT_NAME_LENGTH))
                .unwrap_or_else(|| format!("#{}", task.project_id));
            let done = if task.task_completed { "yes" } else { "no" };
            table.add_row(row![
                task.id.unwrap_or(0),
                truncate(&task.name, MAX_TASK_NAME_LENGTH),
                truncate(task.description.as_deref().unwrap_or(""), MAX_TASK_DESC_LENGTH),
                project,
                priority_label(task.priority),
                done,
                format_date(task.due_date.as_ref()),
                format_date(task.completion_date.as_ref())
            ]);
        }
        table
    }

    /// `all_projects` is only used to show parent names instead of IDs.
    pub fn projects(projects: &[Project], all_projects: &[Project]) {
        Self::projects_table(projects, all_projects).printstd();
    }

    /// `projects` is only used to show project names instead of IDs.
    pub fn tasks(tasks: &[Task], projects: &[Project]) {
        Self::tasks_table(tasks, projects).printstd();
    }
}
