//! Dashboard state snapshots carried across drill-in round trips.

use crate::section::ScrollAnchor;
use serde::{Deserialize, Serialize};

/// Opaque bag of dashboard UI state captured at selection time so the
/// dashboard restores itself on return. The controller stores, merges, and
/// hands this back; only `alerts_panel` presence influences navigation
/// (it marks an alerts-panel origin for the back table).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub selected_phase: Option<String>,
    pub expanded_groups: Vec<String>,
    pub restore_anchor: Option<ScrollAnchor>,
    pub alerts_panel: Option<serde_json::Value>,
    pub extra: Option<serde_json::Value>,
}

impl DashboardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.selected_phase = Some(phase.into());
        self
    }

    pub fn with_restore_anchor(mut self, anchor: ScrollAnchor) -> Self {
        self.restore_anchor = Some(anchor);
        self
    }

    pub fn with_alerts_panel(mut self, panel: serde_json::Value) -> Self {
        self.alerts_panel = Some(panel);
        self
    }

    pub fn has_alerts_panel(&self) -> bool {
        self.alerts_panel.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_empty() {
        let snapshot = DashboardSnapshot::new();
        assert_eq!(snapshot.selected_phase, None);
        assert!(snapshot.expanded_groups.is_empty());
        assert!(!snapshot.has_alerts_panel());
    }

    #[test]
    fn with_phase_overwrites_only_the_phase() {
        let snapshot = DashboardSnapshot::new()
            .with_restore_anchor(ScrollAnchor::ProjectPhases)
            .with_phase("Preconstruction")
            .with_phase("Execution");
        assert_eq!(snapshot.selected_phase.as_deref(), Some("Execution"));
        assert_eq!(snapshot.restore_anchor, Some(ScrollAnchor::ProjectPhases));
    }

    #[test]
    fn alerts_panel_presence_is_observable() {
        let snapshot =
            DashboardSnapshot::new().with_alerts_panel(json!({ "open_alert": "a-113" }));
        assert!(snapshot.has_alerts_panel());
    }
}
