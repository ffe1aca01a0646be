use super::{find_project, parse_date, validate_priority};
use crate::{
    db::{db::Db, projects::Projects, tasks::Tasks},
    libs::{messages::Message, project::creates_cycle},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct EditArgs {
    #[command(subcommand)]
    command: EditCommand,
}

#[derive(Debug, Subcommand)]
enum EditCommand {
    /// Edit a project
    Project {
        /// Project ID or name
        project: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New parent project ID or name
        #[arg(short, long, conflicts_with = "no_parent")]
        parent: Option<String>,
        /// Detach the project from its parent
        #[arg(long)]
        no_parent: bool,
    },
    /// Edit a task
    Task {
        /// Task ID
        id: i32,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Move the task to another project (ID or name)
        #[arg(short = 'P', long)]
        project: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "no_due")]
        due: Option<String>,
        /// Clear the due date
        #[arg(long)]
        no_due: bool,
        /// New priority: 1 high, 2 medium, 3 low, 4 none
        #[arg(short, long)]
        priority: Option<i32>,
    },
}

pub fn cmd(db: &Db, args: EditArgs) -> Result<()> {
    match args.command {
        EditCommand::Project {
            project,
            name,
            description,
            parent,
            no_parent,
        } => handle_project(db, project, name, description, parent, no_parent),
        EditCommand::Task {
            id,
            name,
            description,
            project,
            due,
            no_due,
            priority,
        } => handle_task(db, id, name, description, project, due, no_due, priority),
    }
}

fn handle_project(
    db: &Db,
    reference: String,
    name: Option<String>,
    description: Option<String>,
    parent: Option<String>,
    no_parent: bool,
) -> Result<()> {
    let projects = Projects::new(db);
    let mut project = find_project(&projects, &reference)?;
    let project_id = project.id.unwrap_or_default();
    let original = project.clone();

    if let Some(name) = name {
        match projects.get_by_name(&name) {
            Ok(other) if other.id != project.id => msg_bail_anyhow!(Message::ProjectAlreadyExists(name)),
            Ok(_) => {}
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.into()),
        }
        project.name = name;
    }
    if let Some(description) = description {
        project.description = Some(description);
    }
    if no_parent {
        project.parent_project_id = None;
    }
    if let Some(parent) = parent {
        let parent = find_project(&projects, &parent)?;
        let parent_id = parent.id.unwrap_or_default();
        if parent_id == project_id {
            msg_bail_anyhow!(Message::ProjectOwnParent(project.name));
        }
        if creates_cycle(project_id, parent_id, &projects.get_all()?) {
            msg_bail_anyhow!(Message::ProjectParentCycle(project.name, parent.name));
        }
        project.parent_project_id = Some(parent_id);
    }

    if project == original {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    projects.update(&mut project)?;
    msg_success!(Message::ProjectUpdated(project.name));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_task(
    db: &Db,
    id: i32,
    name: Option<String>,
    description: Option<String>,
    project: Option<String>,
    due: Option<String>,
    no_due: bool,
    priority: Option<i32>,
) -> Result<()> {
    let tasks = Tasks::new(db);
    let mut task = match tasks.get_by_id(id) {
        Ok(task) => task,
        Err(e) if e.is_not_found() => msg_bail_anyhow!(Message::TaskNotFoundWithId(id)),
        Err(e) => return Err(e.into()),
    };
    let original = task.clone();

    if let Some(name) = name {
        task.name = name;
    }
    if let Some(description) = description {
        task.description = Some(description);
    }
    if let Some(project) = project {
        task.project_id = find_project(&Projects::new(db), &project)?.id.unwrap_or_default();
    }
    if no_due {
        task.due_date = None;
    }
    if let Some(due) = due {
        task.due_date = Some(parse_date(&due)?);
    }
    if let Some(priority) = priority {
        task.priority = validate_priority(priority)?;
    }

    if task == original {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    tasks.update(&mut task)?;
    msg_success!(Message::TaskUpdated(id));
    Ok(())
}
