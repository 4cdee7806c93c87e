//! Navigation & viewport controller
//!
//! Owns the `MenuState` for the page session and re-renders the view after
//! every change. Constructed once at startup and shared with the event bindings.

use super::projection::NavProjection;
use super::state::{ClickRegion, MenuEvent, MenuState, Transition};
use crate::error::PageError;
use crate::viewport::ViewportClass;

/// Sink for navigation projections
pub trait NavView {
    /// Ok when every element the menu needs is present
    fn check(&self) -> Result<(), PageError>;

    /// Apply classes and styles for the given projection
    fn render(&mut self, projection: &NavProjection) -> Result<(), PageError>;
}

pub struct NavController<V: NavView> {
    state: MenuState,
    view: V,
}

impl<V: NavView> NavController<V> {
    pub fn new(view: V, width: f64) -> Self {
        let viewport = ViewportClass::from_width(width);
        log::debug!("Navigation controller starting at {} ({}px)", viewport.as_str(), width);
        Self {
            state: MenuState::new(viewport),
            view,
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Flip the menu between open and closed
    ///
    /// A no-op when the menu markup is missing.
    pub fn toggle_menu(&mut self) {
        if let Err(e) = self.view.check() {
            log::error!("Navigation elements not found: {}", e);
            return;
        }
        self.dispatch(MenuEvent::ToggleClick);
    }

    /// Close the menu when a click lands outside both the toggle and the panel
    pub fn handle_outside_click(&mut self, region: ClickRegion) {
        self.dispatch(MenuEvent::Click(region));
    }

    /// Re-bucket the viewport, closing the menu on desktop, and resync the toggle
    pub fn handle_resize(&mut self, width: f64) {
        let viewport = ViewportClass::from_width(width);
        let changed = viewport != self.state.viewport();
        let transition = self.state.apply(MenuEvent::Resize(viewport));
        if changed {
            log::debug!("Viewport is now {} ({}px)", viewport.as_str(), width);
        }
        if transition == Transition::Closed {
            log::debug!("Menu force-closed on desktop resize");
        }
        self.sync_toggle_visibility();
    }

    /// Project the current state onto the view. Safe to call repeatedly.
    pub fn sync_toggle_visibility(&mut self) {
        self.render();
    }

    /// Selecting a destination closes the mobile menu
    pub fn on_nav_link_click(&mut self) {
        self.dispatch(MenuEvent::NavLinkClick);
    }

    fn dispatch(&mut self, event: MenuEvent) {
        match self.state.apply(event) {
            Transition::Unchanged => {}
            transition => {
                log::debug!("Menu {:?} after {:?}", transition, event);
                self.render();
            }
        }
    }

    fn render(&mut self) {
        let projection = NavProjection::from_state(&self.state);
        if let Err(e) = self.view.render(&projection) {
            log::warn!("Navigation render skipped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every projection it is asked to render
    #[derive(Default)]
    struct RecordingView {
        missing: bool,
        renders: Vec<NavProjection>,
    }

    impl RecordingView {
        fn missing() -> Self {
            Self {
                missing: true,
                renders: Vec::new(),
            }
        }

        fn last(&self) -> &NavProjection {
            self.renders.last().expect("nothing rendered")
        }
    }

    impl NavView for RecordingView {
        fn check(&self) -> Result<(), PageError> {
            if self.missing {
                Err(PageError::MissingElement(".nav-toggle"))
            } else {
                Ok(())
            }
        }

        fn render(&mut self, projection: &NavProjection) -> Result<(), PageError> {
            self.check()?;
            self.renders.push(*projection);
            Ok(())
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut nav = NavController::new(RecordingView::default(), 600.0);
        nav.toggle_menu();
        assert!(nav.is_open());
        assert!(nav.view().last().menu_active);
        nav.toggle_menu();
        assert!(!nav.is_open());
        assert!(!nav.view().last().menu_active);
        assert_eq!(nav.view().renders.len(), 2);
    }

    #[test]
    fn test_toggle_without_markup_is_noop() {
        let mut nav = NavController::new(RecordingView::missing(), 600.0);
        nav.toggle_menu();
        assert!(!nav.is_open());
        assert!(nav.view().renders.is_empty());
    }

    #[test]
    fn test_outside_click() {
        let mut nav = NavController::new(RecordingView::default(), 600.0);
        nav.handle_outside_click(ClickRegion::Outside);
        assert!(nav.view().renders.is_empty());

        nav.toggle_menu();
        nav.handle_outside_click(ClickRegion::Toggle);
        assert!(nav.is_open());
        nav.handle_outside_click(ClickRegion::Outside);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_nav_link_click_closes_menu() {
        let mut nav = NavController::new(RecordingView::default(), 700.0);
        nav.toggle_menu();
        nav.on_nav_link_click();
        assert!(!nav.is_open());
        assert!(!nav.view().last().body_locked);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut nav = NavController::new(RecordingView::default(), 400.0);
        nav.sync_toggle_visibility();
        nav.sync_toggle_visibility();
        let renders = &nav.view().renders;
        assert_eq!(renders.len(), 2);
        assert_eq!(renders[0], renders[1]);
    }

    #[test]
    fn test_small_screen_open_then_resize_to_desktop() {
        let mut nav = NavController::new(RecordingView::default(), 400.0);
        nav.sync_toggle_visibility();
        let toggle = nav.view().last().toggle;
        assert!(toggle.is_visible());
        assert!(toggle.important);

        nav.toggle_menu();
        assert!(nav.is_open());

        nav.handle_resize(1024.0);
        assert!(!nav.is_open());
        let last = nav.view().last();
        assert!(!last.menu_active);
        assert!(!last.toggle.is_visible());
    }

    #[test]
    fn test_desktop_toggle_stays_closed() {
        let mut nav = NavController::new(RecordingView::default(), 1280.0);
        nav.toggle_menu();
        assert!(!nav.is_open());
    }
}
