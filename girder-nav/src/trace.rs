//! Bounded transition journal.
//!
//! The back-navigation precedence was reverse-engineered from layered
//! special-casing; the journal captures what actually happened so real usage
//! traces that contradict the table can be reported instead of silently
//! re-deriving precedence.

use chrono::{DateTime, Utc};
use girder_core::{Page, SectionTag};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Operation that produced a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavOp {
    Navigate,
    SelectProject,
    RevealInList,
    GoBack,
}

/// Which back-table rule fired, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackRule {
    WorkflowAlertsReentry,
    AlertsOrigin,
    PhasesOrigin,
    MessagesContext,
    ProjectsPrevious,
    OverviewPrevious,
    PreviousPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub at: DateTime<Utc>,
    pub op: NavOp,
    pub from_page: Page,
    pub to_page: Page,
    pub source_section: Option<SectionTag>,
    pub back_rule: Option<BackRule>,
    pub menu_navigation: bool,
}

/// Ring of the most recent transitions. Capacity 0 disables recording.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionTrace {
    records: VecDeque<TransitionRecord>,
    capacity: usize,
}

impl TransitionTrace {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, record: TransitionRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_for(op: NavOp, to_page: Page) -> TransitionRecord {
        TransitionRecord {
            at: Utc::now(),
            op,
            from_page: Page::Overview,
            to_page,
            source_section: None,
            back_rule: None,
            menu_navigation: false,
        }
    }

    #[test]
    fn ring_drops_oldest_at_capacity() {
        let mut trace = TransitionTrace::new(2);
        trace.record(record_for(NavOp::Navigate, Page::Projects));
        trace.record(record_for(NavOp::Navigate, Page::Settings));
        trace.record(record_for(NavOp::GoBack, Page::Overview));
        assert_eq!(trace.len(), 2);
        let pages: Vec<Page> = trace.iter().map(|r| r.to_page).collect();
        assert_eq!(pages, vec![Page::Settings, Page::Overview]);
        assert_eq!(trace.latest().map(|r| r.op), Some(NavOp::GoBack));
    }

    #[test]
    fn zero_capacity_disables_recording() {
        let mut trace = TransitionTrace::new(0);
        trace.record(record_for(NavOp::Navigate, Page::Projects));
        assert!(trace.is_empty());
    }
}
