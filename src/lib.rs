//! # gplan
//!
//! A command-line planner that keeps projects and tasks in a local SQLite
//! database.
//!
//! ## Features
//!
//! - **Projects**: uniquely named, optionally nested under a parent project
//! - **Tasks**: priority, due date and completion tracking, owned by a project
//! - **ID Reuse**: a new task takes the lowest free ID, so IDs stay short
//! - **Shell Completion**: scripts for bash, zsh, fish, PowerShell and elvish
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gplan::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
