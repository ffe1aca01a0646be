use super::{find_project, parse_date, validate_priority};
use crate::{
    db::{db::Db, projects::Projects, tasks::Tasks},
    libs::{config::Config, messages::Message, project::Project, task::Task},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(subcommand)]
    command: NewCommand,
}

#[derive(Debug, Subcommand)]
enum NewCommand {
    /// Create a new project
    Project {
        /// Project name (must be unique)
        name: String,
        /// Project description
        #[arg(short, long)]
        description: Option<String>,
        /// Parent project ID or name
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Create a new task
    Task {
        /// Task name
        name: String,
        /// Owning project ID or name
        #[arg(short = 'P', long)]
        project: String,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Priority: 1 high, 2 medium, 3 low, 4 none
        #[arg(short, long)]
        priority: Option<i32>,
    },
}

pub fn cmd(db: &Db, config: &Config, args: NewArgs) -> Result<()> {
    match args.command {
        NewCommand::Project { name, description, parent } => handle_project(db, name, description, parent),
        NewCommand::Task {
            name,
            project,
            description,
            due,
            priority,
        } => handle_task(db, config, name, project, description, due, priority),
    }
}

fn handle_project(db: &Db, name: String, description: Option<String>, parent: Option<String>) -> Result<()> {
    let projects = Projects::new(db);

    // Check if project already exists
    match projects.get_by_name(&name) {
        Ok(_) => msg_bail_anyhow!(Message::ProjectAlreadyExists(name)),
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e.into()),
    }

    let mut project = Project::new(&name, description.as_deref());
    if let Some(parent) = parent {
        let parent = find_project(&projects, &parent)?;
        project.parent_project_id = parent.id;
    }

    let id = projects.insert(&mut project)?;
    msg_success!(Message::ProjectCreated(name, id));
    Ok(())
}

fn handle_task(
    db: &Db,
    config: &Config,
    name: String,
    project: String,
    description: Option<String>,
    due: Option<String>,
    priority: Option<i32>,
) -> Result<()> {
    let project = find_project(&Projects::new(db), &project)?;

    let mut task = Task::new(&name, description.as_deref(), project.id.unwrap_or_default());
    task.priority = validate_priority(priority.unwrap_or(config.default_priority))?;
    task.due_date = due.as_deref().map(parse_date).transpose()?;

    let id = Tasks::new(db).insert(&mut task)?;
    msg_success!(Message::TaskCreated(name, id));
    Ok(())
}
