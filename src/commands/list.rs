use super::find_project;
use crate::{
    db::{db::Db, projects::Projects, tasks::Tasks},
    libs::{messages::Message, task::TaskFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    command: Option<ListCommand>,
}

#[derive(Debug, Subcommand)]
enum ListCommand {
    /// List projects
    Projects {
        /// Only show subprojects of this project (ID or name)
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// List tasks
    Tasks {
        /// Only show tasks of this project (ID or name)
        #[arg(short = 'P', long)]
        project: Option<String>,
        /// Only show completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,
        /// Only show pending tasks
        #[arg(long)]
        pending: bool,
    },
}

pub fn cmd(db: &Db, args: ListArgs) -> Result<()> {
    match args.command {
        Some(ListCommand::Projects { parent }) => handle_projects(db, parent),
        Some(ListCommand::Tasks {
            project,
            completed,
            pending,
        }) => {
            let filter = match (completed, pending) {
                (true, _) => TaskFilter::Completed,
                (_, true) => TaskFilter::Pending,
                _ => TaskFilter::All,
            };
            handle_tasks(db, project, filter)
        }
        None => handle_tasks(db, None, TaskFilter::All),
    }
}

fn handle_projects(db: &Db, parent: Option<String>) -> Result<()> {
    let projects_db = Projects::new(db);
    let all = projects_db.get_all()?;

    let (header, projects) = match parent {
        Some(parent) => {
            let parent = find_project(&projects_db, &parent)?;
            let children = projects_db.get_subprojects(parent.id.unwrap_or_default())?;
            (Message::SubprojectsHeader(parent.name), children)
        }
        None => (Message::ProjectsHeader, all.clone()),
    };

    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(header, true);
    View::projects(&projects, &all);
    Ok(())
}

fn handle_tasks(db: &Db, project: Option<String>, filter: TaskFilter) -> Result<()> {
    let projects_db = Projects::new(db);
    let tasks_db = Tasks::new(db);

    let (header, tasks) = match project {
        Some(project) => {
            let project = find_project(&projects_db, &project)?;
            let tasks = tasks_db.get_by_project_id(project.id.unwrap_or_default())?;
            (Message::TasksForProjectHeader(project.name), tasks)
        }
        None => (Message::TasksHeader, tasks_db.get_all()?),
    };
    let tasks: Vec<_> = tasks.into_iter().filter(|t| filter.matches(t)).collect();

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(header, true);
    View::tasks(&tasks, &projects_db.get_all()?);
    Ok(())
}
