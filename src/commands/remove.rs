use super::find_project;
use crate::{
    db::{db::Db, projects::Projects, tasks::Tasks},
    libs::messages::Message,
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[command(subcommand)]
    command: RemoveCommand,
}

#[derive(Debug, Subcommand)]
enum RemoveCommand {
    /// Remove a project. Its tasks and subprojects are kept.
    Project {
        /// Project ID or name
        project: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove a task
    Task {
        /// Task ID
        id: i32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(db: &Db, args: RemoveArgs) -> Result<()> {
    match args.command {
        RemoveCommand::Project { project, yes } => handle_project(db, project, yes),
        RemoveCommand::Task { id, yes } => handle_task(db, id, yes),
    }
}

fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

fn handle_project(db: &Db, reference: String, yes: bool) -> Result<()> {
    let projects = Projects::new(db);
    let project = find_project(&projects, &reference)?;
    let id = project.id.unwrap_or_default();

    let task_count = Tasks::new(db).get_by_project_id(id)?.len();
    if !yes && !confirm(Message::ConfirmDeleteProject(project.name.clone(), task_count))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    projects.delete(id)?;
    if task_count > 0 {
        msg_warning!(Message::ProjectTasksLeftBehind(project.name.clone(), task_count));
    }
    msg_success!(Message::ProjectDeleted(project.name));
    Ok(())
}

fn handle_task(db: &Db, id: i32, yes: bool) -> Result<()> {
    let tasks = Tasks::new(db);
    let task = match tasks.get_by_id(id) {
        Ok(task) => task,
        Err(e) if e.is_not_found() => msg_bail_anyhow!(Message::TaskNotFoundWithId(id)),
        Err(e) => return Err(e.into()),
    };

    if !yes && !confirm(Message::ConfirmDeleteTask(task.name))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    tasks.delete(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
