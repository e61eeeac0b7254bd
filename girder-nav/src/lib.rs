//! Girder navigation controller.
//!
//! Owns the console's `NavigationState` and active [`Page`], and exposes the
//! operations collaborator views call to move between views: menu navigation,
//! project drill-in, list reveal, and the back-navigation decision table.
//! Scroll side effects come out as explicit requests on an outbound queue;
//! rendering stays behind the page registry contract.

pub mod config;
pub mod controller;
pub mod effect;
pub mod registry;
pub mod state;
pub mod trace;

pub use config::{ConfigError, NavConfig};
pub use controller::{Navigator, SelectRequest};
pub use effect::{NavEffect, ScrollFallback, ScrollRequest};
pub use registry::{PageRegistry, RegistryError};
pub use state::{NavigationContext, NavigationState, ProjectView, SelectedProject};
pub use trace::{BackRule, NavOp, TransitionRecord, TransitionTrace};

pub use girder_core::{
    DashboardSnapshot, InMemoryProjects, LineItemId, Page, PageParseError, Project,
    ProjectDirectory, ProjectId, ProjectPick, ScrollAnchor, SectionTag, WorkflowSectionId,
};
