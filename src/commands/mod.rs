pub mod completion;
pub mod edit;
pub mod list;
pub mod new;
pub mod remove;
pub mod toggle;

use crate::db::{db::Db, projects::Projects};
use crate::libs::{config::Config, messages::Message, project::Project, version};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the version number of gplan")]
    Version,
    #[command(about = "Generate a shell completion script")]
    Completion(completion::CompletionArgs),
    #[command(about = "Create a new project or task")]
    New(new::NewArgs),
    #[command(about = "Edit an existing project or task")]
    Edit(edit::EditArgs),
    #[command(about = "List projects or tasks")]
    List(list::ListArgs),
    #[command(about = "Remove a project or task")]
    Remove(remove::RemoveArgs),
    #[command(about = "Toggle the completion state of a task")]
    Toggle(toggle::ToggleArgs),
}

#[derive(Debug, Parser)]
#[command(name = "gplan", author, version, long_about = None)]
#[command(about = "gplan is a simple yet powerful CLI tool to manage your projects and tasks from the terminal")]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the process arguments and runs the command.
    ///
    /// The database is only opened for commands that touch it.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Version | Commands::Completion(_) => cli.run_without_db(),
            _ => {
                let config = Config::read()?;
                let db = Db::open(config.db_path()?).map_err(|e| msg_error_anyhow!(Message::DbInitFailed(e.to_string())))?;
                cli.run(&db, &config)
            }
        }
    }

    pub fn run(self, db: &Db, config: &Config) -> Result<()> {
        match self.command {
            Commands::New(args) => new::cmd(db, config, args),
            Commands::Edit(args) => edit::cmd(db, args),
            Commands::List(args) => list::cmd(db, args),
            Commands::Remove(args) => remove::cmd(db, args),
            Commands::Toggle(args) => toggle::cmd(db, args),
            Commands::Version | Commands::Completion(_) => self.run_without_db(),
        }
    }

    fn run_without_db(self) -> Result<()> {
        match self.command {
            Commands::Completion(args) => completion::cmd(args),
            _ => {
                msg_print!(version::full_version());
                Ok(())
            }
        }
    }
}

/// Finds a project by ID or, failing that, by exact name.
pub fn find_project(projects: &Projects, reference: &str) -> Result<Project> {
    if let Ok(id) = reference.parse::<i32>() {
        match projects.get_by_id(id) {
            Ok(project) => return Ok(project),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.into()),
        }
    }
    match projects.get_by_name(reference) {
        Ok(project) => Ok(project),
        Err(e) if e.is_not_found() => Err(msg_error_anyhow!(Message::ProjectNotFound(reference.to_string()))),
        Err(e) => Err(e.into()),
    }
}

/// Parses a `YYYY-MM-DD` date as local midnight.
pub fn parse_date(input: &str) -> Result<DateTime<Local>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(input.to_string())))?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(input.to_string())))?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(input.to_string())))
}

pub fn validate_priority(priority: i32) -> Result<i32> {
    if !(1..=4).contains(&priority) {
        msg_bail_anyhow!(Message::InvalidPriority(priority));
    }
    Ok(priority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-03-09").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 9));
        assert!(parse_date("09/03/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_validate_priority() {
        assert_eq!(validate_priority(1).unwrap(), 1);
        assert_eq!(validate_priority(4).unwrap(), 4);
        assert!(validate_priority(0).is_err());
        assert!(validate_priority(5).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["gplan"]).is_err());
        assert!(Cli::try_parse_from(["gplan", "version"]).is_ok());
    }
}
