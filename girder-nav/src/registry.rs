//! Page registry: the collaborator contract for rendering.

use crate::state::NavigationState;
use girder_core::Page;
use std::collections::HashMap;

type RenderFn<Ctx, Out> = Box<dyn Fn(&Ctx, &NavigationState) -> Out>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No handler registered for page: {page}")]
    Unregistered { page: Page },
}

/// Maps a page to the render function a host registered for it. The
/// controller knows page names and callbacks only, never what a page
/// renders, which keeps the navigation logic testable without a renderer.
pub struct PageRegistry<Ctx, Out> {
    handlers: HashMap<Page, RenderFn<Ctx, Out>>,
}

impl<Ctx, Out> PageRegistry<Ctx, Out> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, page: Page, handler: F)
    where
        F: Fn(&Ctx, &NavigationState) -> Out + 'static,
    {
        self.handlers.insert(page, Box::new(handler));
    }

    pub fn contains(&self, page: Page) -> bool {
        self.handlers.contains_key(&page)
    }

    /// Renders the page, degrading to the `Overview` handler when the page
    /// has no registration. `None` only when Overview itself is missing.
    pub fn render(&self, page: Page, ctx: &Ctx, state: &NavigationState) -> Option<Out> {
        self.handlers
            .get(&page)
            .or_else(|| self.handlers.get(&Page::Overview))
            .map(|handler| handler(ctx, state))
    }

    /// Fail-fast variant: reports a missing registration instead of falling
    /// back.
    pub fn try_render(
        &self,
        page: Page,
        ctx: &Ctx,
        state: &NavigationState,
    ) -> Result<Out, RegistryError> {
        self.handlers
            .get(&page)
            .map(|handler| handler(ctx, state))
            .ok_or(RegistryError::Unregistered { page })
    }
}

impl<Ctx, Out> Default for PageRegistry<Ctx, Out> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PageRegistry<(), &'static str> {
        let mut registry = PageRegistry::new();
        registry.register(Page::Overview, |_, _| "overview");
        registry.register(Page::Projects, |_, _| "projects");
        registry
    }

    #[test]
    fn dispatches_registered_page() {
        let registry = registry();
        let state = NavigationState::new();
        assert_eq!(registry.render(Page::Projects, &(), &state), Some("projects"));
    }

    #[test]
    fn unregistered_page_falls_back_to_overview() {
        let registry = registry();
        let state = NavigationState::new();
        assert_eq!(registry.render(Page::Settings, &(), &state), Some("overview"));
    }

    #[test]
    fn try_render_reports_the_gap() {
        let registry = registry();
        let state = NavigationState::new();
        assert_eq!(
            registry.try_render(Page::Settings, &(), &state),
            Err(RegistryError::Unregistered {
                page: Page::Settings
            })
        );
    }

    #[test]
    fn empty_registry_renders_nothing() {
        let registry: PageRegistry<(), &'static str> = PageRegistry::new();
        let state = NavigationState::new();
        assert_eq!(registry.render(Page::Overview, &(), &state), None);
    }
}
