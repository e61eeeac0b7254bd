//! The project directory collaborator contract.

use crate::project::{Project, ProjectId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id-indexed project collection. The controller resolves canonical records
/// through this seam; hosts back it with whatever their project-listing
/// service provides.
pub trait ProjectDirectory {
    fn get(&self, id: ProjectId) -> Option<Project>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The shipped directory: a plain map hosts sync from their listing service.
/// Every test in this workspace uses it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryProjects {
    projects: HashMap<ProjectId, Project>,
}

impl InMemoryProjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, project: Project) {
        self.projects.insert(project.project_id, project);
    }

    pub fn extend(&mut self, projects: impl IntoIterator<Item = Project>) {
        for project in projects {
            self.insert(project);
        }
    }

    pub fn remove(&mut self, id: ProjectId) -> Option<Project> {
        self.projects.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }
}

impl ProjectDirectory for InMemoryProjects {
    fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects.get(&id).cloned()
    }

    fn len(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut directory = InMemoryProjects::new();
        assert!(directory.is_empty());

        let project = Project::new(ProjectId::new(), "Mill Street Garage");
        let id = project.project_id;
        directory.insert(project.clone());
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(id), Some(project.clone()));

        assert_eq!(directory.remove(id), Some(project));
        assert_eq!(directory.get(id), None);
        assert!(directory.is_empty());
    }

    #[test]
    fn insert_replaces_by_id() {
        let mut directory = InMemoryProjects::new();
        let id = ProjectId::new();
        directory.insert(Project::new(id, "Old name"));
        directory.insert(Project::new(id, "New name"));
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(id).map(|p| p.name), Some("New name".into()));
    }

    #[test]
    fn extend_from_listing() {
        let mut directory = InMemoryProjects::new();
        directory.extend(vec![
            Project::new(ProjectId::new(), "A"),
            Project::new(ProjectId::new(), "B"),
        ]);
        assert_eq!(directory.len(), 2);
    }
}
