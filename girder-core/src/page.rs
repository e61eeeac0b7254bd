//! Top-level console pages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A top-level, mutually exclusive console page. Exactly one is active at a
/// time; the project detail view overlays whichever page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Overview,
    Projects,
    ProjectMessages,
    CompanyCalendar,
    Assistant,
    Imports,
    Settings,
}

impl Page {
    /// Display label, matching the names legacy callers pass as strings.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Projects => "Projects",
            Page::ProjectMessages => "Project Messages",
            Page::CompanyCalendar => "Company Calendar",
            Page::Assistant => "Assistant",
            Page::Imports => "Imports",
            Page::Settings => "Settings",
        }
    }

    /// Stable menu ordering.
    pub fn all() -> &'static [Page] {
        &[
            Page::Overview,
            Page::Projects,
            Page::ProjectMessages,
            Page::CompanyCalendar,
            Page::Assistant,
            Page::Imports,
            Page::Settings,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Self::all().get(index).copied()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Overview
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Unknown page label on the string entry path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown page name: {name}")]
pub struct PageParseError {
    pub name: String,
}

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .find(|p| p.title() == s)
            .copied()
            .ok_or_else(|| PageParseError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_round_trips_for_every_page() {
        for page in Page::all() {
            assert_eq!(page.title().parse::<Page>().as_ref(), Ok(page));
        }
    }

    #[test]
    fn index_round_trips() {
        for (i, page) in Page::all().iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(Page::from_index(i), Some(*page));
        }
        assert_eq!(Page::from_index(Page::all().len()), None);
    }

    #[test]
    fn default_is_overview() {
        assert_eq!(Page::default(), Page::Overview);
    }

    #[test]
    fn unknown_label_errors() {
        let err = "Dashboard".parse::<Page>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown page name: Dashboard");
    }
}
