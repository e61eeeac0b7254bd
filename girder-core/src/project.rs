//! Project identity and records.

use crate::section::SectionTag;
use crate::snapshot::DashboardSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Project identifier using UUIDv7 for timestamp-sortable IDs. Synthesized
/// placeholder ids are therefore naturally ordered by creation time, which is
/// what the legacy `temp-<timestamp>` ids approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque deep-link target inside the project-workflow view. The controller
/// stores and forwards these; it never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(pub String);

impl LineItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque workflow-section target, same contract as [`LineItemId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowSectionId(pub String);

impl WorkflowSectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonical project record as served by the project directory. The
/// controller reads only `project_id` and `name`; the display fields ride
/// along for the consuming views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: ProjectId,
    pub name: String,
    pub number: Option<String>,
    pub client: Option<String>,
    pub phase: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

impl Project {
    pub fn new(project_id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            project_id,
            name: name.into(),
            number: None,
            client: None,
            phase: None,
            address: None,
            status: None,
        }
    }

    /// Field-level merge of a caller-supplied pick onto this canonical
    /// record. The canonical id always wins; caller-supplied fields win
    /// everywhere else, so a stale partial object cannot clobber identity
    /// but can still carry fresher display data.
    pub fn absorb(&self, pick: &ProjectPick) -> Project {
        Project {
            project_id: self.project_id,
            name: pick.name.clone().unwrap_or_else(|| self.name.clone()),
            number: pick.number.clone().or_else(|| self.number.clone()),
            client: pick.client.clone().or_else(|| self.client.clone()),
            phase: pick.phase.clone().or_else(|| self.phase.clone()),
            address: pick.address.clone().or_else(|| self.address.clone()),
            status: pick.status.clone().or_else(|| self.status.clone()),
        }
    }

    /// Best-effort record for a pick that resolved to no directory entry.
    /// Keeps the pick's id when it has one, synthesizes a fresh one
    /// otherwise. Never fails.
    pub fn placeholder(pick: &ProjectPick) -> Project {
        Project {
            project_id: pick.project_id.unwrap_or_else(ProjectId::new),
            name: pick
                .name
                .clone()
                .unwrap_or_else(|| "Untitled project".to_string()),
            number: pick.number.clone(),
            client: pick.client.clone(),
            phase: pick.phase.clone(),
            address: pick.address.clone(),
            status: pick.status.clone(),
        }
    }
}

/// Caller-supplied, possibly partial selection payload: every canonical
/// field optional, plus the navigation hints the clicked object may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPick {
    pub project_id: Option<ProjectId>,
    pub name: Option<String>,
    pub number: Option<String>,
    pub client: Option<String>,
    pub phase: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    /// Section the click originated from, when the view knows it.
    pub navigation_source: Option<SectionTag>,
    /// Section the project wants back-navigation to return to.
    pub return_to: Option<SectionTag>,
    /// Dashboard state captured at click time, restored on drill-out.
    pub dashboard: Option<DashboardSnapshot>,
}

impl ProjectPick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: ProjectId) -> Self {
        self.project_id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn with_navigation_source(mut self, source: SectionTag) -> Self {
        self.navigation_source = Some(source);
        self
    }

    pub fn with_return_to(mut self, section: SectionTag) -> Self {
        self.return_to = Some(section);
        self
    }

    pub fn with_return_slug(mut self, slug: &str) -> Self {
        self.return_to = SectionTag::from_return_slug(slug);
        self
    }

    pub fn with_dashboard(mut self, snapshot: DashboardSnapshot) -> Self {
        self.dashboard = Some(snapshot);
        self
    }
}

impl From<&Project> for ProjectPick {
    fn from(project: &Project) -> Self {
        ProjectPick {
            project_id: Some(project.project_id),
            name: Some(project.name.clone()),
            number: project.number.clone(),
            client: project.client.clone(),
            phase: project.phase.clone(),
            address: project.address.clone(),
            status: project.status.clone(),
            navigation_source: None,
            return_to: None,
            dashboard: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> Project {
        Project {
            project_id: ProjectId::new(),
            name: "Riverside Tower".to_string(),
            number: Some("24-118".to_string()),
            client: Some("Harmon Group".to_string()),
            phase: Some("Execution".to_string()),
            address: None,
            status: Some("active".to_string()),
        }
    }

    #[test]
    fn absorb_keeps_canonical_id_and_prefers_caller_fields() {
        let project = canonical();
        let stale_id = ProjectId::new();
        let pick = ProjectPick::new()
            .with_id(stale_id)
            .with_name("Riverside Tower (renamed)")
            .with_phase("Closeout");

        let merged = project.absorb(&pick);
        assert_eq!(merged.project_id, project.project_id);
        assert_eq!(merged.name, "Riverside Tower (renamed)");
        assert_eq!(merged.phase.as_deref(), Some("Closeout"));
        // Fields the pick omits fall back to the canonical record.
        assert_eq!(merged.number.as_deref(), Some("24-118"));
        assert_eq!(merged.client.as_deref(), Some("Harmon Group"));
    }

    #[test]
    fn placeholder_keeps_pick_id_when_present() {
        let id = ProjectId::new();
        let pick = ProjectPick::new().with_id(id).with_name("Annex");
        let project = Project::placeholder(&pick);
        assert_eq!(project.project_id, id);
        assert_eq!(project.name, "Annex");
    }

    #[test]
    fn placeholder_synthesizes_id_and_name() {
        let a = Project::placeholder(&ProjectPick::new());
        let b = Project::placeholder(&ProjectPick::new());
        assert_ne!(a.project_id, b.project_id);
        assert_eq!(a.name, "Untitled project");
    }

    #[test]
    fn pick_from_project_carries_no_hints() {
        let project = canonical();
        let pick = ProjectPick::from(&project);
        assert_eq!(pick.project_id, Some(project.project_id));
        assert_eq!(pick.navigation_source, None);
        assert_eq!(pick.return_to, None);
        assert_eq!(pick.dashboard, None);
    }
}
