#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DbOpening(String), // path
    DbInitFailed(String),

    // === PROJECT MESSAGES ===
    ProjectCreated(String, i32), // name, id
    ProjectUpdated(String),
    ProjectDeleted(String),
    ProjectNotFound(String), // id or name as typed
    ProjectAlreadyExists(String),
    ProjectIdAllocated(i32),
    ProjectDeleteNoRows(i32),
    ProjectTasksLeftBehind(String, usize), // name, task count
    ProjectOwnParent(String),
    ProjectParentCycle(String, String), // project, parent
    ProjectsHeader,
    SubprojectsHeader(String),
    NoProjectsFound,
    ConfirmDeleteProject(String, usize), // name, task count

    // === TASK MESSAGES ===
    TaskCreated(String, i32), // name, id
    TaskUpdated(i32),
    TaskDeleted(i32),
    TaskNotFoundWithId(i32),
    TaskIdAllocated(i32),
    TaskUpdateNoRows(i32),
    TaskDeleteNoRows(i32),
    TaskCompleted(i32),
    TaskReopened(i32),
    TasksHeader,
    TasksForProjectHeader(String),
    NoTasksFound,
    ConfirmDeleteTask(String),

    // === INPUT MESSAGES ===
    InvalidDate(String),
    InvalidPriority(i32),
    NoChangesDetected,
    OperationCancelled,

    // === APPLICATION MESSAGES ===
    VersionInfo {
        name: String,
        version: String,
        commit: String,
    },
}
