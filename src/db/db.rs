use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::path::Path;

/// Projects must exist before Tasks because of the ProjectID foreign key.
const SCHEMA_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS Projects (
    ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL UNIQUE,
    Description TEXT,
    CreationDate DATETIME NOT NULL,
    LastModifiedDate DATETIME NOT NULL,
    ParentProjectID INTEGER
)";
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS Tasks (
    ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Description TEXT,
    ProjectID INTEGER NOT NULL,
    TaskCompleted BOOLEAN NOT NULL,
    DueDate DATETIME,
    CompletionDate DATETIME,
    CreationDate DATETIME NOT NULL,
    LastUpdatedDate DATETIME NOT NULL,
    Priority INTEGER NOT NULL DEFAULT 4,
    FOREIGN KEY (ProjectID) REFERENCES Projects(ID)
)";

/// Owner of the single SQLite connection for one gplan run.
///
/// The handle is opened once in `main` and lent to the stores; dropping it
/// closes the connection, on error paths included.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        msg_debug!(Message::DbOpening(path.as_ref().display().to_string()));
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Db> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Db> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute(SCHEMA_PROJECTS, [])?;
        conn.execute(SCHEMA_TASKS, [])?;

        Ok(Db { conn })
    }
}
