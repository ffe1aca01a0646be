#[cfg(test)]
mod tests {
    use gplan::db::db::Db;
    use gplan::db::projects::Projects;
    use gplan::db::tasks::Tasks;
    use gplan::libs::error::DbError;
    use gplan::libs::project::Project;
    use gplan::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ProjectTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for ProjectTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("data.db")).unwrap();
            ProjectTestContext { db, _temp_dir: temp_dir }
        }
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_crud(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        // Create
        let mut project = Project::new("Home", Some("Chores"));
        let id = projects.insert(&mut project).unwrap();
        assert_eq!(id, 1);
        assert_eq!(project.id, Some(1));

        // Read
        let fetched = projects.get_by_id(id).unwrap();
        assert_eq!(fetched, project);
        assert_eq!(projects.get_by_name("Home").unwrap().id, Some(id));

        // Update
        let mut fetched = fetched;
        fetched.name = "House".to_string();
        fetched.description = None;
        projects.update(&mut fetched).unwrap();
        let updated = projects.get_by_id(id).unwrap();
        assert_eq!(updated.name, "House");
        assert_eq!(updated.description, None);
        assert_eq!(updated.creation_date, project.creation_date);
        assert!(updated.last_modified_date >= project.last_modified_date);

        // Delete
        assert_eq!(projects.delete(id).unwrap(), 1);
        assert!(matches!(projects.get_by_id(id), Err(DbError::ProjectNotFound(1))));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_next_id_is_max_plus_one(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        assert_eq!(projects.next_id().unwrap(), 1);

        for name in ["A", "B", "C"] {
            projects.insert(&mut Project::new(name, None)).unwrap();
        }
        projects.delete(2).unwrap();

        // No gap reuse, and nothing is reserved between calls.
        assert_eq!(projects.next_id().unwrap(), 4);
        assert_eq!(projects.next_id().unwrap(), 4);
        assert_eq!(projects.insert(&mut Project::new("D", None)).unwrap(), 4);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_caller_supplied_id(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        let mut project = Project::new("Pinned", None);
        project.id = Some(10);
        assert_eq!(projects.insert(&mut project).unwrap(), 10);
        assert_eq!(projects.next_id().unwrap(), 11);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_duplicate_name_is_rejected(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        projects.insert(&mut Project::new("Home", None)).unwrap();

        let err = projects.insert(&mut Project::new("Home", Some("again"))).unwrap_err();
        assert!(err.is_constraint_violation());
        assert_eq!(projects.get_all().unwrap().len(), 1);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_rename_to_existing_name_is_rejected(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        projects.insert(&mut Project::new("Home", None)).unwrap();
        let mut work = Project::new("Work", None);
        projects.insert(&mut work).unwrap();

        work.name = "Home".to_string();
        assert!(projects.update(&mut work).unwrap_err().is_constraint_violation());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_get_by_name_missing(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        let err = projects.get_by_name("Nowhere").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Project 'Nowhere' not found");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_update_saves_missing_row(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        let mut project = Project::new("Saved", None);
        project.id = Some(5);
        projects.update(&mut project).unwrap();
        assert_eq!(projects.get_by_id(5).unwrap().name, "Saved");

        let mut fresh = Project::new("Fresh", None);
        projects.update(&mut fresh).unwrap();
        assert_eq!(fresh.id, Some(6));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_get_subprojects(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        let home = projects.insert(&mut Project::new("Home", None)).unwrap();
        let work = projects.insert(&mut Project::new("Work", None)).unwrap();
        projects.insert(&mut Project::new("Garden", None).with_parent(home)).unwrap();
        projects.insert(&mut Project::new("Kitchen", None).with_parent(home)).unwrap();
        projects.insert(&mut Project::new("Reports", None).with_parent(work)).unwrap();

        let mut children: Vec<String> = projects.get_subprojects(home).unwrap().into_iter().map(|p| p.name).collect();
        children.sort();
        assert_eq!(children, vec!["Garden", "Kitchen"]);

        let kitchen = projects.get_by_name("Kitchen").unwrap().id.unwrap();
        assert!(projects.get_subprojects(kitchen).unwrap().is_empty());
        assert!(projects.get_subprojects(999).unwrap().is_empty());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_delete_does_not_cascade(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        let tasks = Tasks::new(&ctx.db);
        let home = projects.insert(&mut Project::new("Home", None)).unwrap();
        let garden = projects.insert(&mut Project::new("Garden", None).with_parent(home)).unwrap();
        let task_id = tasks.insert(&mut Task::new("Sweep", None, home)).unwrap();

        assert_eq!(projects.delete(home).unwrap(), 1);

        let task = tasks.get_by_id(task_id).unwrap();
        assert_eq!(task.project_id, home);
        assert_eq!(projects.get_by_id(garden).unwrap().parent_project_id, Some(home));
        assert_eq!(tasks.get_by_project_id(home).unwrap().len(), 1);

        // Enforcement is back on after the delete.
        assert!(tasks.insert(&mut Task::new("Orphan", None, home)).unwrap_err().is_constraint_violation());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_delete_missing_is_noop(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        assert_eq!(projects.delete(3).unwrap(), 0);
    }
}
