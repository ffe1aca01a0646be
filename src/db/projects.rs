//! Project storage.
//!
//! Project IDs are `MAX(ID) + 1` and never reuse gaps. The parent reference is
//! stored as-is; whether it points at an existing project, or forms a cycle,
//! is checked by the commands before they save.

use super::db::Db;
use crate::libs::error::{DbError, Result};
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::msg_debug;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const SELECT_NEXT_ID: &str = "SELECT COALESCE(MAX(ID), 0) + 1 FROM Projects";
const INSERT_PROJECT: &str = "INSERT INTO Projects (ID, Name, Description, CreationDate, LastModifiedDate, ParentProjectID)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SAVE_PROJECT: &str = "INSERT INTO Projects (ID, Name, Description, CreationDate, LastModifiedDate, ParentProjectID)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(ID) DO UPDATE SET
        Name = excluded.Name,
        Description = excluded.Description,
        LastModifiedDate = excluded.LastModifiedDate,
        ParentProjectID = excluded.ParentProjectID";
const SELECT_PROJECTS: &str = "SELECT ID, Name, Description, CreationDate, LastModifiedDate, ParentProjectID FROM Projects";
const WHERE_ID: &str = "WHERE ID = ?1";
const WHERE_NAME: &str = "WHERE Name = ?1";
const WHERE_PARENT_ID: &str = "WHERE ParentProjectID = ?1";
const DELETE_PROJECT: &str = "DELETE FROM Projects WHERE ID = ?1";

fn project_from_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        creation_date: row.get(3)?,
        last_modified_date: row.get(4)?,
        parent_project_id: row.get(5)?,
    })
}

pub struct Projects<'a> {
    conn: &'a Connection,
}

impl<'a> Projects<'a> {
    pub fn new(db: &'a Db) -> Self {
        Projects { conn: &db.conn }
    }

    /// One past the highest project ID. Not reserved: calling it twice returns the same value.
    pub fn next_id(&self) -> Result<i32> {
        Ok(self.conn.query_row(SELECT_NEXT_ID, [], |row| row.get(0))?)
    }

    /// Stores `project`, allocating the next ID when `project.id` is `None`.
    ///
    /// A duplicate name fails with SQLite's UNIQUE constraint error.
    pub fn insert(&self, project: &mut Project) -> Result<i32> {
        let now = Local::now();
        project.creation_date = now;
        project.last_modified_date = now;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let id = match project.id {
            Some(id) => id,
            None => tx.query_row(SELECT_NEXT_ID, [], |row| row.get(0))?,
        };
        tx.execute(
            INSERT_PROJECT,
            params![
                id,
                project.name,
                project.description,
                project.creation_date,
                project.last_modified_date,
                project.parent_project_id
            ],
        )?;
        tx.commit()?;

        project.id = Some(id);
        msg_debug!(Message::ProjectIdAllocated(id));

        Ok(id)
    }

    pub fn get_by_id(&self, id: i32) -> Result<Project> {
        self.conn
            .query_row(&format!("{} {}", SELECT_PROJECTS, WHERE_ID), params![id], project_from_row)
            .optional()?
            .ok_or(DbError::ProjectNotFound(id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<Project> {
        self.conn
            .query_row(&format!("{} {}", SELECT_PROJECTS, WHERE_NAME), params![name], project_from_row)
            .optional()?
            .ok_or_else(|| DbError::ProjectNameNotFound(name.to_string()))
    }

    pub fn get_all(&self) -> Result<Vec<Project>> {
        self.query_list(SELECT_PROJECTS, None)
    }

    pub fn get_subprojects(&self, parent_id: i32) -> Result<Vec<Project>> {
        self.query_list(&format!("{} {}", SELECT_PROJECTS, WHERE_PARENT_ID), Some(parent_id))
    }

    fn query_list(&self, sql: &str, id: Option<i32>) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(sql)?;
        let project_iter = match id {
            Some(id) => stmt.query_map(params![id], project_from_row)?,
            None => stmt.query_map([], project_from_row)?,
        };

        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }
        Ok(projects)
    }

    /// Saves the whole record by primary key: updates the row if it exists,
    /// inserts it otherwise. The creation date of an existing row is kept.
    pub fn update(&self, project: &mut Project) -> Result<()> {
        let Some(id) = project.id else {
            self.insert(project)?;
            return Ok(());
        };

        project.last_modified_date = Local::now();
        self.conn.execute(
            SAVE_PROJECT,
            params![
                id,
                project.name,
                project.description,
                project.creation_date,
                project.last_modified_date,
                project.parent_project_id
            ],
        )?;
        Ok(())
    }

    /// Removes the project without touching its tasks or subprojects.
    ///
    /// Foreign key enforcement is switched off for this one statement so tasks
    /// may keep pointing at the deleted ID.
    pub fn delete(&self, id: i32) -> Result<usize> {
        self.conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
        let result = self.conn.execute(DELETE_PROJECT, params![id]);
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let affected = result?;
        if affected == 0 {
            msg_debug!(Message::ProjectDeleteNoRows(id));
        }
        Ok(affected)
    }
}
