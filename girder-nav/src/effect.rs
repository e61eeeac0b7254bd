//! Outbound side-effect requests.

use girder_core::{ProjectId, ScrollAnchor};
use serde::{Deserialize, Serialize};

/// Advisory recovery hint for a scroll request. The consuming view owns the
/// actual retry policy; these hints carry what the controller knows about
/// the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollFallback {
    /// Target is expected to be mounted already.
    None,
    /// Target may not be mounted on the first frame after a page switch;
    /// retry once after the given delay.
    RetryAfter { delay_ms: u64 },
    /// Target may be below the fold or absent; scroll to the page bottom
    /// if it cannot be found.
    PageBottom,
}

/// Request to scroll a named anchor into view, optionally highlighting a
/// project row once there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub anchor: ScrollAnchor,
    pub highlight: Option<ProjectId>,
    pub fallback: ScrollFallback,
}

/// Effects queued by the controller and drained by the host. Fire-and-forget:
/// nothing a consumer does with an effect feeds back into navigation state,
/// and a missed anchor after the advisory retry is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEffect {
    ScrollToAnchor(ScrollRequest),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_request_serializes_with_anchor_slug() {
        let effect = NavEffect::ScrollToAnchor(ScrollRequest {
            anchor: ScrollAnchor::CurrentAlerts,
            highlight: None,
            fallback: ScrollFallback::RetryAfter { delay_ms: 250 },
        });
        let json = serde_json::to_string(&effect).unwrap();
        assert!(json.contains("current-alerts"));
    }
}
