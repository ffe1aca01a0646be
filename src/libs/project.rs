use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub creation_date: DateTime<Local>,
    pub last_modified_date: DateTime<Local>,
    pub parent_project_id: Option<i32>,
}

impl Project {
    pub fn new(name: &str, description: Option<&str>) -> Self {
        let now = Local::now();
        Project {
            id: None,
            name: name.to_string(),
            description: description.map(str::to_string),
            creation_date: now,
            last_modified_date: now,
            parent_project_id: None,
        }
    }

    pub fn with_parent(mut self, parent_project_id: i32) -> Self {
        self.parent_project_id = Some(parent_project_id);
        self
    }
}

/// Whether making `new_parent` the parent of `project_id` would close a loop.
///
/// Walks up from `new_parent` through `projects`. The walk stops at a root, at
/// a dangling parent reference, or at a loop that already exists elsewhere.
pub fn creates_cycle(project_id: i32, new_parent: i32, projects: &[Project]) -> bool {
    let parents: HashMap<i32, Option<i32>> = projects.iter().filter_map(|p| p.id.map(|id| (id, p.parent_project_id))).collect();

    let mut visited = HashSet::new();
    let mut current = Some(new_parent);
    while let Some(id) = current {
        if id == project_id {
            return true;
        }
        if !visited.insert(id) {
            return false;
        }
        current = parents.get(&id).copied().flatten();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i32, parent: Option<i32>) -> Project {
        let mut p = Project::new(&format!("p{}", id), None);
        p.id = Some(id);
        p.parent_project_id = parent;
        p
    }

    #[test]
    fn test_self_parent_is_cycle() {
        assert!(creates_cycle(1, 1, &[project(1, None)]));
    }

    #[test]
    fn test_descendant_as_parent_is_cycle() {
        // 1 <- 2 <- 3
        let projects = vec![project(1, None), project(2, Some(1)), project(3, Some(2))];
        assert!(creates_cycle(1, 3, &projects));
        assert!(!creates_cycle(3, 1, &projects));
    }

    #[test]
    fn test_dangling_and_existing_loops_terminate() {
        let projects = vec![project(1, Some(99)), project(5, Some(6)), project(6, Some(5))];
        assert!(!creates_cycle(2, 1, &projects));
        assert!(!creates_cycle(2, 5, &projects));
    }
}
