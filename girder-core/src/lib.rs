//! Girder Core - Navigation Vocabulary Types
//!
//! Pure data structures with no behavior beyond constructors, parsers, and
//! field-level merging. The navigation controller in `girder-nav` depends on
//! this crate; nothing here depends back on it.

pub mod directory;
pub mod page;
pub mod project;
pub mod section;
pub mod snapshot;

pub use directory::{InMemoryProjects, ProjectDirectory};
pub use page::{Page, PageParseError};
pub use project::{LineItemId, Project, ProjectId, ProjectPick, WorkflowSectionId};
pub use section::{ScrollAnchor, SectionTag};
pub use snapshot::DashboardSnapshot;
