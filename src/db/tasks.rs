//! Task storage.
//!
//! Task IDs are reused: a new task always receives the smallest positive
//! integer that no existing task holds, so deleting task 2 out of `{1, 2, 3}`
//! makes 2 the next ID handed out. The ID scan and the insert share one
//! `IMMEDIATE` transaction, which keeps two gplan processes on the same
//! database file from allocating the same ID.

use super::db::Db;
use crate::libs::error::{DbError, Result};
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_debug;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const SELECT_IDS: &str = "SELECT ID FROM Tasks ORDER BY ID";
const INSERT_TASK: &str = "INSERT INTO Tasks (ID, Name, Description, ProjectID, TaskCompleted, DueDate, CompletionDate, CreationDate, LastUpdatedDate, Priority)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_TASKS: &str = "SELECT ID, Name, Description, ProjectID, TaskCompleted, DueDate, CompletionDate, CreationDate, LastUpdatedDate, Priority FROM Tasks";
const WHERE_ID: &str = "WHERE ID = ?1";
const WHERE_PROJECT_ID: &str = "WHERE ProjectID = ?1";
const UPDATE_TASK: &str = "UPDATE Tasks SET
    Name = ?2,
    Description = ?3,
    TaskCompleted = ?4,
    DueDate = ?5,
    CompletionDate = ?6,
    LastUpdatedDate = ?7,
    Priority = ?8
    WHERE ID = ?1";
// SQLite checks a foreign key only when its column is in the SET list, so the
// project is written separately and only when it actually changes.
const UPDATE_TASK_PROJECT: &str = "UPDATE Tasks SET ProjectID = ?2 WHERE ID = ?1 AND ProjectID IS NOT ?2";
const DELETE_TASK: &str = "DELETE FROM Tasks WHERE ID = ?1";

/// Returns the smallest positive integer absent from `sorted_ids`.
///
/// `sorted_ids` must be ascending; duplicates and non-positive values are skipped.
pub fn lowest_free_id(sorted_ids: &[i32]) -> i32 {
    let mut candidate = 1;
    for &id in sorted_ids {
        if id < candidate {
            continue;
        }
        if id > candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        project_id: row.get(3)?,
        task_completed: row.get(4)?,
        due_date: row.get(5)?,
        completion_date: row.get(6)?,
        creation_date: row.get(7)?,
        last_updated_date: row.get(8)?,
        priority: row.get(9)?,
    })
}

pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Tasks { conn: &db.conn }
    }

    /// Stores `task` under the lowest free ID and writes that ID and both timestamps back into it.
    pub fn insert(&self, task: &mut Task) -> Result<i32> {
        let now = Local::now();
        task.creation_date = now;
        task.last_updated_date = now;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let id = {
            let mut stmt = tx.prepare(SELECT_IDS)?;
            let ids = stmt.query_map([], |row| row.get::<_, i32>(0))?.collect::<rusqlite::Result<Vec<i32>>>()?;
            lowest_free_id(&ids)
        };
        tx.execute(
            INSERT_TASK,
            params![
                id,
                task.name,
                task.description,
                task.project_id,
                task.task_completed,
                task.due_date,
                task.completion_date,
                task.creation_date,
                task.last_updated_date,
                task.priority
            ],
        )?;
        tx.commit()?;

        task.id = Some(id);
        msg_debug!(Message::TaskIdAllocated(id));

        Ok(id)
    }

    pub fn get_by_id(&self, id: i32) -> Result<Task> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], task_from_row)
            .optional()?
            .ok_or(DbError::TaskNotFound(id))
    }

    /// All tasks in the order SQLite returns them.
    pub fn get_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Tasks owned by `project_id`. The project itself is not looked up.
    pub fn get_by_project_id(&self, project_id: i32) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_PROJECT_ID))?;
        let task_iter = stmt.query_map(params![project_id], task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Rewrites every mutable column of the row matching `task.id` and refreshes
    /// the last-updated timestamp. An unknown ID affects zero rows and is not an error.
    ///
    /// A task whose project was deleted can still be updated as long as it stays
    /// in that project; moving it checks the new project exists.
    pub fn update(&self, task: &mut Task) -> Result<usize> {
        task.last_updated_date = Local::now();

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let affected = tx.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.name,
                task.description,
                task.task_completed,
                task.due_date,
                task.completion_date,
                task.last_updated_date,
                task.priority
            ],
        )?;
        tx.execute(UPDATE_TASK_PROJECT, params![task.id, task.project_id])?;
        tx.commit()?;

        if affected == 0 {
            msg_debug!(Message::TaskUpdateNoRows(task.id.unwrap_or_default()));
        }
        Ok(affected)
    }

    /// Removes the task; deleting a missing ID affects zero rows.
    pub fn delete(&self, id: i32) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;

        if affected == 0 {
            msg_debug!(Message::TaskDeleteNoRows(id));
        }
        Ok(affected)
    }
}
