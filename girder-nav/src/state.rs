//! Navigation state definitions.

use chrono::{DateTime, Utc};
use girder_core::{
    DashboardSnapshot, LineItemId, Page, Project, SectionTag, WorkflowSectionId,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tab opened inside the project detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectView {
    Profile,
    Workflow,
    Messages,
    Alerts,
}

impl ProjectView {
    pub fn title(&self) -> &'static str {
        match self {
            ProjectView::Profile => "Project Profile",
            ProjectView::Workflow => "Project Workflow",
            ProjectView::Messages => "Messages",
            ProjectView::Alerts => "Alerts",
        }
    }
}

impl Default for ProjectView {
    fn default() -> Self {
        ProjectView::Workflow
    }
}

impl fmt::Display for ProjectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Accepts the tab labels legacy callers pass as strings. The shim entry
/// point degrades unknown labels to `Workflow` rather than erroring.
impl FromStr for ProjectView {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Project Profile" | "Profile" => Ok(ProjectView::Profile),
            "Project Workflow" | "Workflow" => Ok(ProjectView::Workflow),
            "Messages" => Ok(ProjectView::Messages),
            "Alerts" => Ok(ProjectView::Alerts),
            _ => Err(()),
        }
    }
}

/// The project currently drilled into, plus the hints captured at selection
/// time that back-navigation consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedProject {
    pub project: Project,
    /// `return_to` hint the pick carried, if any.
    pub return_to: Option<SectionTag>,
    /// Dashboard snapshot the pick carried, restored by the phases-origin
    /// back rule.
    pub dashboard: Option<DashboardSnapshot>,
}

impl SelectedProject {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            return_to: None,
            dashboard: None,
        }
    }
}

/// How the active page was most recently reached. Disambiguates back
/// behavior on pages reachable both from the main menu and by drill-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub from_page: Page,
    pub to_page: Page,
    pub at: DateTime<Utc>,
    pub menu_navigation: bool,
}

/// The single record the controller owns. Views read it; only the
/// controller's operations write it. Never persisted, so a restart resets
/// everything to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Drilled-into project, or `None` for the page-level view. A non-`None`
    /// selection overlays the detail view on whatever page is active.
    pub selection: Option<SelectedProject>,
    pub project_view: ProjectView,
    /// Section that initiated the drill-in; the back table switches on this.
    pub source_section: Option<SectionTag>,
    /// Return page when no section rule applies.
    pub previous_page: Page,
    pub dashboard: Option<DashboardSnapshot>,
    /// Row to highlight after returning to a list view.
    pub scroll_to_project: Option<Project>,
    pub target_line_item: Option<LineItemId>,
    pub target_section: Option<WorkflowSectionId>,
    /// Bumps on every selection so one-shot scroll/highlight effects re-fire
    /// even for identical targets.
    pub selection_nonce: u64,
    pub context: Option<NavigationContext>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selection.as_ref().map(|s| &s.project)
    }
}
