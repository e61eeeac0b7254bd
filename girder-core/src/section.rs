//! Source sections and scroll anchors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// On-page region that originated a project drill-in. The back-navigation
/// decision table switches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionTag {
    CurrentAlerts,
    ProjectMessages,
    MyProjectMessages,
    ProjectPhases,
    ProjectCubes,
    WorkflowAlerts,
    GlobalSearch,
}

impl SectionTag {
    pub fn label(&self) -> &'static str {
        match self {
            SectionTag::CurrentAlerts => "Current Alerts",
            SectionTag::ProjectMessages => "Project Messages",
            SectionTag::MyProjectMessages => "My Project Messages",
            SectionTag::ProjectPhases => "Project Phases",
            SectionTag::ProjectCubes => "Project Cubes",
            SectionTag::WorkflowAlerts => "Project Workflow Alerts",
            SectionTag::GlobalSearch => "Global Search",
        }
    }

    /// The anchor a back-navigation to the dashboard should target for this
    /// origin. Sections without a dedicated anchor land on the cubes grid.
    pub fn return_anchor(&self) -> ScrollAnchor {
        match self {
            SectionTag::CurrentAlerts => ScrollAnchor::CurrentAlerts,
            SectionTag::ProjectMessages | SectionTag::MyProjectMessages => {
                ScrollAnchor::ProjectMessages
            }
            SectionTag::ProjectPhases => ScrollAnchor::ProjectPhases,
            SectionTag::ProjectCubes
            | SectionTag::WorkflowAlerts
            | SectionTag::GlobalSearch => ScrollAnchor::ProjectCubes,
        }
    }

    /// Maps the `return_to` slugs carried on project payloads. Unknown slugs
    /// are tolerated as `None`, never an error.
    pub fn from_return_slug(slug: &str) -> Option<SectionTag> {
        match slug {
            "current-alerts" => Some(SectionTag::CurrentAlerts),
            "project-messages" => Some(SectionTag::ProjectMessages),
            "my-project-messages" => Some(SectionTag::MyProjectMessages),
            "project-phases" => Some(SectionTag::ProjectPhases),
            "project-cubes" => Some(SectionTag::ProjectCubes),
            "workflow-alerts" => Some(SectionTag::WorkflowAlerts),
            "global-search" => Some(SectionTag::GlobalSearch),
            _ => None,
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named location a back-navigation may ask the consuming view to scroll to.
/// This is the complete anchor set; views tag their sections with these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollAnchor {
    CurrentAlerts,
    ProjectPhases,
    ProjectCubes,
    ProjectMessages,
}

impl ScrollAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollAnchor::CurrentAlerts => "current-alerts",
            ScrollAnchor::ProjectPhases => "project-phases",
            ScrollAnchor::ProjectCubes => "project-cubes",
            ScrollAnchor::ProjectMessages => "project-messages",
        }
    }
}

impl fmt::Display for ScrollAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    const KNOWN_SLUGS: &[&str] = &[
        "current-alerts",
        "project-messages",
        "my-project-messages",
        "project-phases",
        "project-cubes",
        "workflow-alerts",
        "global-search",
    ];

    const ANCHORS: &[ScrollAnchor] = &[
        ScrollAnchor::CurrentAlerts,
        ScrollAnchor::ProjectPhases,
        ScrollAnchor::ProjectCubes,
        ScrollAnchor::ProjectMessages,
    ];

    proptest! {
        #[test]
        fn slug_parsing_accepts_exactly_the_known_slugs(slug in "[a-z-]{0,24}") {
            let parsed = SectionTag::from_return_slug(&slug);
            prop_assert_eq!(parsed.is_some(), KNOWN_SLUGS.contains(&slug.as_str()));
        }

        #[test]
        fn anchor_serde_matches_the_slug(index in 0usize..4) {
            let anchor = ANCHORS[index];
            let json = serde_json::to_string(&anchor).unwrap();
            prop_assert_eq!(json, format!("\"{}\"", anchor.as_str()));
        }
    }
}
