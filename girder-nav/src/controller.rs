//! The navigation controller and its back-navigation decision table.

use crate::config::NavConfig;
use crate::effect::{NavEffect, ScrollFallback, ScrollRequest};
use crate::state::{NavigationContext, NavigationState, ProjectView, SelectedProject};
use crate::trace::{BackRule, NavOp, TransitionRecord, TransitionTrace};
use chrono::{DateTime, Duration, Utc};
use girder_core::{
    LineItemId, Page, PageParseError, Project, ProjectDirectory, ProjectId, ProjectPick,
    ScrollAnchor, SectionTag, WorkflowSectionId,
};
use std::collections::VecDeque;

// ============================================================================
// SELECTION REQUEST
// ============================================================================

/// Parameters of a project drill-in beyond the pick itself.
#[derive(Debug, Clone, Default)]
pub struct SelectRequest {
    pub view: ProjectView,
    pub phase: Option<String>,
    pub source: Option<SectionTag>,
    pub line_item: Option<LineItemId>,
    pub section_target: Option<WorkflowSectionId>,
}

impl SelectRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view: ProjectView) -> Self {
        self.view = view;
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn with_source(mut self, source: SectionTag) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_line_item(mut self, id: LineItemId) -> Self {
        self.line_item = Some(id);
        self
    }

    pub fn with_section_target(mut self, id: WorkflowSectionId) -> Self {
        self.section_target = Some(id);
        self
    }
}

// ============================================================================
// NAVIGATOR
// ============================================================================

/// Owns the navigation state and the active page. Single writer; views read
/// the exposed state and drain the effect queue. All operations take `now`
/// explicitly so every behavior is deterministic under test.
#[derive(Debug)]
pub struct Navigator {
    config: NavConfig,
    state: NavigationState,
    active: Page,
    effects: VecDeque<NavEffect>,
    suppressed_until: Option<DateTime<Utc>>,
    trace: TransitionTrace,
}

impl Navigator {
    pub fn new(config: NavConfig) -> Self {
        let trace = TransitionTrace::new(config.trace_capacity);
        Self {
            config,
            state: NavigationState::new(),
            active: Page::Overview,
            effects: VecDeque::new(),
            suppressed_until: None,
            trace,
        }
    }

    pub fn active_page(&self) -> Page {
        self.active
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn trace(&self) -> &TransitionTrace {
        &self.trace
    }

    /// Queued scroll requests, in emission order. Fire-and-forget for the
    /// consumer; nothing it does with them feeds back into navigation state.
    pub fn drain_effects(&mut self) -> Vec<NavEffect> {
        self.effects.drain(..).collect()
    }

    /// While true, the host's global scroll-to-top on page change must stand
    /// down so an anchor scroll is not immediately undone.
    pub fn auto_scroll_suppressed(&self, now: DateTime<Utc>) -> bool {
        self.suppressed_until.is_some_and(|until| now < until)
    }

    // ========================================================================
    // MENU NAVIGATION
    // ========================================================================

    /// Main-menu navigation to a page.
    pub fn navigate(&mut self, page: Page, now: DateTime<Utc>) {
        self.switch_page(page, true, now);
    }

    /// String entry path for legacy callers. Unknown names error in strict
    /// mode and degrade to `Overview` otherwise.
    pub fn navigate_named(
        &mut self,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Page, PageParseError> {
        match name.parse::<Page>() {
            Ok(page) => {
                self.navigate(page, now);
                Ok(page)
            }
            Err(err) if self.config.strict_pages => Err(err),
            Err(err) => {
                tracing::warn!(name = %err.name, "Unknown page name, falling back to Overview");
                self.navigate(Page::Overview, now);
                Ok(Page::Overview)
            }
        }
    }

    fn switch_page(&mut self, page: Page, menu_navigation: bool, now: DateTime<Utc>) {
        let from = self.active;
        if page != from {
            self.state.previous_page = from;
        }
        self.state.selection = None;
        if page == Page::Overview {
            // An explicit dashboard arrival must not keep a stale phase or
            // section selected.
            self.state.dashboard = None;
        }
        self.state.context = Some(NavigationContext {
            from_page: from,
            to_page: page,
            at: now,
            menu_navigation,
        });
        self.active = page;
        tracing::debug!(from = %from, to = %page, menu = menu_navigation, "Page switch");
        self.record(NavOp::Navigate, from, page, None, menu_navigation, now);
    }

    // ========================================================================
    // PROJECT SELECTION
    // ========================================================================

    /// Drill into project detail. Never fails: an unresolvable pick degrades
    /// to a placeholder record.
    pub fn select_project(
        &mut self,
        directory: &dyn ProjectDirectory,
        pick: ProjectPick,
        request: SelectRequest,
        now: DateTime<Utc>,
    ) {
        let from = self.active;
        let resolved = self.resolve(directory, &pick);

        // Sticky alerts origin: a detour through another view must not erase
        // the fact that the user's ultimate origin was the alerts list.
        let sticky = self.state.selection.is_some()
            && self.state.source_section == Some(SectionTag::CurrentAlerts);
        let effective = if sticky {
            Some(SectionTag::CurrentAlerts)
        } else {
            request
                .source
                .or(pick.navigation_source)
                .or(pick.return_to)
                .or(self.state.source_section)
        };

        if effective == Some(SectionTag::CurrentAlerts) {
            // Alerts always return to the dashboard, never to whatever
            // intermediate page was active.
            self.state.previous_page = Page::Overview;
        } else if self.state.selection.is_none() {
            self.state.previous_page = from;
        }
        // Re-selection while drilled in keeps the existing breadcrumb.

        tracing::debug!(
            project = %resolved.project_id,
            view = %request.view,
            source = ?effective,
            "Project selected"
        );
        self.state.selection = Some(SelectedProject {
            project: resolved,
            return_to: pick.return_to,
            dashboard: pick.dashboard.clone(),
        });
        self.state.project_view = request.view;
        self.state.source_section = effective;
        if let Some(snapshot) = pick.dashboard {
            self.state.dashboard = Some(snapshot);
        }
        if let Some(phase) = request.phase {
            let snapshot = self.state.dashboard.take().unwrap_or_default();
            self.state.dashboard = Some(snapshot.with_phase(phase));
        }
        self.state.target_line_item = request.line_item;
        self.state.target_section = request.section_target;
        self.state.selection_nonce += 1;
        self.record(NavOp::SelectProject, from, self.active, None, false, now);
    }

    /// Land on the projects list with a row highlighted, without selecting.
    pub fn reveal_in_list(
        &mut self,
        directory: &dyn ProjectDirectory,
        pick: ProjectPick,
        source: Option<SectionTag>,
        phase: Option<String>,
        now: DateTime<Utc>,
    ) {
        let from = self.active;
        let resolved = self.resolve(directory, &pick);
        if from != Page::Projects {
            self.state.previous_page = from;
        }
        self.state.selection = None;
        self.state.source_section = source;
        tracing::debug!(project = %resolved.project_id, source = ?source, "Reveal project in list");
        self.state.scroll_to_project = Some(resolved);
        if let Some(phase) = phase {
            let snapshot = self.state.dashboard.take().unwrap_or_default();
            self.state.dashboard = Some(snapshot.with_phase(phase));
        }
        self.state.selection_nonce += 1;
        self.state.context = Some(NavigationContext {
            from_page: from,
            to_page: Page::Projects,
            at: now,
            menu_navigation: false,
        });
        self.active = Page::Projects;
        self.record(NavOp::RevealInList, from, Page::Projects, None, false, now);
    }

    /// Compatibility shim preserving the combined legacy signature, which
    /// conflated page navigation, list reveal, and detail selection in one
    /// entry point. New callers should use the split operations directly.
    #[allow(clippy::too_many_arguments)]
    pub fn select_or_navigate(
        &mut self,
        directory: &dyn ProjectDirectory,
        pick: Option<ProjectPick>,
        view_name: &str,
        phase: Option<String>,
        source: Option<SectionTag>,
        line_item: Option<LineItemId>,
        section_target: Option<WorkflowSectionId>,
        now: DateTime<Utc>,
    ) {
        if pick.is_none() {
            if let Ok(page) = view_name.parse::<Page>() {
                // A page reached "by another name" is a drill-in, not a menu
                // click; rule 4 of the back table relies on the distinction.
                self.switch_page(page, false, now);
                return;
            }
        }
        if matches!(view_name.parse::<Page>(), Ok(Page::Projects)) {
            self.reveal_in_list(directory, pick.unwrap_or_default(), source, phase, now);
            return;
        }
        let request = SelectRequest {
            view: view_name.parse().unwrap_or_default(),
            phase,
            source,
            line_item,
            section_target,
        };
        self.select_project(directory, pick.unwrap_or_default(), request, now);
    }

    fn resolve(&self, directory: &dyn ProjectDirectory, pick: &ProjectPick) -> Project {
        match pick.project_id.and_then(|id| directory.get(id)) {
            Some(canonical) => canonical.absorb(pick),
            None => {
                if let Some(id) = pick.project_id {
                    tracing::warn!(project = %id, "Project not in directory, synthesizing placeholder");
                }
                Project::placeholder(pick)
            }
        }
    }

    // ========================================================================
    // BACK NAVIGATION
    // ========================================================================

    /// The back-navigation decision table, evaluated in strict priority
    /// order; the first matching rule wins. Never fails: rules whose project
    /// cannot be resolved are skipped and the terminal fallback always
    /// applies.
    pub fn go_back(&mut self, override_project: Option<&Project>, now: DateTime<Utc>) {
        let from = self.active;

        // Rule 1: workflow-alerts origin re-enters detail on the alerts tab.
        if self.state.source_section == Some(SectionTag::WorkflowAlerts) {
            let candidate = override_project
                .cloned()
                .or_else(|| self.state.selected_project().cloned())
                .or_else(|| self.state.scroll_to_project.clone());
            if let Some(project) = candidate {
                let same_pose = self.state.project_view == ProjectView::Alerts
                    && self.state.selected_project().map(|p| p.project_id)
                        == Some(project.project_id);
                if !same_pose {
                    tracing::debug!(project = %project.project_id, "Back re-enters workflow alerts");
                    self.state.selection = Some(SelectedProject::new(project));
                    self.state.project_view = ProjectView::Alerts;
                    self.state.selection_nonce += 1;
                    self.record(
                        NavOp::GoBack,
                        from,
                        from,
                        Some(BackRule::WorkflowAlertsReentry),
                        false,
                        now,
                    );
                    return;
                }
            }
        }

        // Rule 2: an alerts-panel origin always returns to the dashboard.
        let alerts_origin = self.state.source_section == Some(SectionTag::CurrentAlerts)
            || self.state.selection.as_ref().and_then(|s| s.return_to)
                == Some(SectionTag::CurrentAlerts)
            || self
                .state
                .dashboard
                .as_ref()
                .is_some_and(|d| d.has_alerts_panel());
        if alerts_origin {
            self.state.selection = None;
            self.state.dashboard = None;
            self.state.source_section = None;
            self.commit_page(Page::Overview, now);
            self.emit_scroll(ScrollAnchor::CurrentAlerts, None, ScrollFallback::None, now);
            self.record(
                NavOp::GoBack,
                from,
                Page::Overview,
                Some(BackRule::AlertsOrigin),
                false,
                now,
            );
            return;
        }

        // Rule 3: phases origin restores the snapshot the selection carried.
        if self.state.source_section == Some(SectionTag::ProjectPhases) {
            if let Some(selection) = self.state.selection.take() {
                self.state.dashboard = selection.dashboard;
                self.state.source_section = None;
                self.commit_page(Page::Overview, now);
                self.emit_scroll(ScrollAnchor::ProjectPhases, None, ScrollFallback::None, now);
                self.record(
                    NavOp::GoBack,
                    from,
                    Page::Overview,
                    Some(BackRule::PhasesOrigin),
                    false,
                    now,
                );
                return;
            }
        }

        // Rule 4: the messages page, page-level, follows its arrival context.
        if self.state.selection.is_none() && from == Page::ProjectMessages {
            let (page, with_anchor) = match self.state.context {
                Some(ctx) if ctx.from_page != Page::ProjectMessages => {
                    let anchored = ctx.menu_navigation && ctx.from_page == Page::Overview;
                    (ctx.from_page, anchored)
                }
                _ => (Page::Overview, false),
            };
            self.commit_page(page, now);
            if with_anchor {
                self.emit_scroll(
                    ScrollAnchor::ProjectMessages,
                    None,
                    ScrollFallback::RetryAfter {
                        delay_ms: self.config.anchor_retry_delay_ms,
                    },
                    now,
                );
            }
            self.record(
                NavOp::GoBack,
                from,
                page,
                Some(BackRule::MessagesContext),
                false,
                now,
            );
            return;
        }

        // Rule 5: drilled in from the projects list.
        if self.state.previous_page == Page::Projects
            && (self.state.selection.is_some() || from != Page::Projects)
        {
            self.state.selection = None;
            self.state.source_section = None;
            self.commit_page(Page::Projects, now);
            self.record(
                NavOp::GoBack,
                from,
                Page::Projects,
                Some(BackRule::ProjectsPrevious),
                false,
                now,
            );
            return;
        }

        // Rule 6: return to the dashboard, anchored by the origin section.
        if self.state.previous_page == Page::Overview
            && (self.state.selection.is_some()
                || self.state.source_section.is_some()
                || from != Page::Overview)
        {
            let section = self.state.source_section.take();
            let anchor = section
                .map(|s| s.return_anchor())
                .unwrap_or(ScrollAnchor::ProjectCubes);
            let highlight = if anchor == ScrollAnchor::ProjectPhases {
                match self.state.selected_project().cloned() {
                    Some(project) => {
                        let id = project.project_id;
                        self.state.scroll_to_project = Some(project);
                        Some(id)
                    }
                    // No selection, e.g. after a list reveal: keep whatever
                    // row highlight is already standing.
                    None => self.state.scroll_to_project.as_ref().map(|p| p.project_id),
                }
            } else {
                None
            };
            let fallback = match anchor {
                // May not be mounted on the first frame after the switch.
                ScrollAnchor::ProjectMessages => ScrollFallback::RetryAfter {
                    delay_ms: self.config.anchor_retry_delay_ms,
                },
                // The cubes grid can sit below the fold.
                ScrollAnchor::ProjectCubes => ScrollFallback::PageBottom,
                _ => ScrollFallback::None,
            };
            self.state.selection = None;
            self.commit_page(Page::Overview, now);
            self.emit_scroll(anchor, highlight, fallback, now);
            self.record(
                NavOp::GoBack,
                from,
                Page::Overview,
                Some(BackRule::OverviewPrevious),
                false,
                now,
            );
            return;
        }

        // Rule 7: terminal fallback.
        let page = self.state.previous_page;
        self.state.selection = None;
        self.state.source_section = None;
        self.commit_page(page, now);
        if page == from {
            tracing::debug!(page = %page, "Back with nothing to return to");
        }
        self.record(
            NavOp::GoBack,
            from,
            page,
            Some(BackRule::PreviousPage),
            false,
            now,
        );
    }

    /// Page change from a back transition. Does not rewrite `previous_page`:
    /// back consumes breadcrumbs, it never creates them.
    fn commit_page(&mut self, page: Page, now: DateTime<Utc>) {
        let from = self.active;
        if page != from {
            self.state.context = Some(NavigationContext {
                from_page: from,
                to_page: page,
                at: now,
                menu_navigation: false,
            });
        }
        self.active = page;
    }

    fn emit_scroll(
        &mut self,
        anchor: ScrollAnchor,
        highlight: Option<ProjectId>,
        fallback: ScrollFallback,
        now: DateTime<Utc>,
    ) {
        tracing::debug!(anchor = %anchor, "Scroll request queued");
        self.effects.push_back(NavEffect::ScrollToAnchor(ScrollRequest {
            anchor,
            highlight,
            fallback,
        }));
        // The config is only bounds-checked on the TOML path; a directly
        // constructed oversized window saturates instead of wrapping.
        let window = i64::try_from(self.config.scroll_suppress_ms).unwrap_or(i64::MAX);
        self.suppressed_until = now
            .checked_add_signed(Duration::milliseconds(window))
            .or(Some(DateTime::<Utc>::MAX_UTC));
    }

    fn record(
        &mut self,
        op: NavOp,
        from_page: Page,
        to_page: Page,
        back_rule: Option<BackRule>,
        menu_navigation: bool,
        now: DateTime<Utc>,
    ) {
        self.trace.record(TransitionRecord {
            at: now,
            op,
            from_page,
            to_page,
            source_section: self.state.source_section,
            back_rule,
            menu_navigation,
        });
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}
