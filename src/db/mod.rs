//! Database layer for gplan.
//!
//! A single SQLite file holds two tables, `Projects` and `Tasks`, created on
//! open if they are missing. There is no migration system: schema changes
//! require manual intervention.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gplan::db::{db::Db, projects::Projects, tasks::Tasks};
//! use gplan::libs::{project::Project, task::Task};
//!
//! let db = Db::open("plan.db")?;
//! let mut home = Project::new("Home", None);
//! let project_id = Projects::new(&db).insert(&mut home)?;
//!
//! let mut task = Task::new("Buy milk", None, project_id);
//! Tasks::new(&db).insert(&mut task)?;
//! # Ok::<(), gplan::libs::error::DbError>(())
//! ```

/// Connection ownership and schema initialization.
pub mod db;

/// Project CRUD, max+1 ID allocation and subproject lookup.
pub mod projects;

/// Task CRUD with lowest-free-ID allocation.
pub mod tasks;
