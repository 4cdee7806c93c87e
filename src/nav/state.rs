//! Menu state machine
//!
//! Two states, closed and open. The menu can only be open on a mobile layout.

use crate::viewport::ViewportClass;

/// Where a click landed relative to the navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    /// On the hamburger toggle (or one of its bars)
    Toggle,
    /// Inside the menu panel
    Menu,
    /// Anywhere else on the page
    Outside,
}

/// Input that can change the menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClick,
    Click(ClickRegion),
    NavLinkClick,
    Resize(ViewportClass),
}

/// Effect of applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    is_open: bool,
    viewport: ViewportClass,
}

impl MenuState {
    pub fn new(viewport: ViewportClass) -> Self {
        Self {
            is_open: false,
            viewport,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn apply(&mut self, event: MenuEvent) -> Transition {
        match event {
            MenuEvent::ToggleClick => {
                if self.is_open {
                    self.close()
                } else if self.viewport.is_desktop() {
                    // Desktop has no menu panel to open
                    Transition::Unchanged
                } else {
                    self.is_open = true;
                    Transition::Opened
                }
            }
            MenuEvent::Click(ClickRegion::Outside) | MenuEvent::NavLinkClick => self.close(),
            MenuEvent::Click(_) => Transition::Unchanged,
            MenuEvent::Resize(viewport) => {
                self.viewport = viewport;
                if viewport.is_desktop() {
                    self.close()
                } else {
                    Transition::Unchanged
                }
            }
        }
    }

    fn close(&mut self) -> Transition {
        if self.is_open {
            self.is_open = false;
            Transition::Closed
        } else {
            Transition::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state_is_closed() {
        let state = MenuState::new(ViewportClass::Mobile);
        assert!(!state.is_open());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = MenuState::new(ViewportClass::Mobile);
        assert_eq!(state.apply(MenuEvent::ToggleClick), Transition::Opened);
        assert_eq!(state.apply(MenuEvent::ToggleClick), Transition::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn test_toggle_refused_on_desktop() {
        let mut state = MenuState::new(ViewportClass::Desktop);
        assert_eq!(state.apply(MenuEvent::ToggleClick), Transition::Unchanged);
        assert!(!state.is_open());
    }

    #[test]
    fn test_outside_click_closes_only_when_open() {
        let mut state = MenuState::new(ViewportClass::SmallMobile);
        assert_eq!(
            state.apply(MenuEvent::Click(ClickRegion::Outside)),
            Transition::Unchanged
        );

        state.apply(MenuEvent::ToggleClick);
        assert_eq!(
            state.apply(MenuEvent::Click(ClickRegion::Menu)),
            Transition::Unchanged
        );
        assert_eq!(
            state.apply(MenuEvent::Click(ClickRegion::Toggle)),
            Transition::Unchanged
        );
        assert!(state.is_open());
        assert_eq!(
            state.apply(MenuEvent::Click(ClickRegion::Outside)),
            Transition::Closed
        );
    }

    #[test]
    fn test_nav_link_closes_open_menu() {
        let mut state = MenuState::new(ViewportClass::Mobile);
        state.apply(MenuEvent::ToggleClick);
        assert_eq!(state.apply(MenuEvent::NavLinkClick), Transition::Closed);
        assert_eq!(state.apply(MenuEvent::NavLinkClick), Transition::Unchanged);
    }

    #[test]
    fn test_resize_to_desktop_forces_close() {
        let mut state = MenuState::new(ViewportClass::Mobile);
        state.apply(MenuEvent::ToggleClick);
        assert_eq!(
            state.apply(MenuEvent::Resize(ViewportClass::SmallMobile)),
            Transition::Unchanged
        );
        assert!(state.is_open());
        assert_eq!(
            state.apply(MenuEvent::Resize(ViewportClass::Desktop)),
            Transition::Closed
        );
        assert_eq!(state.viewport(), ViewportClass::Desktop);
    }

    fn any_event() -> impl Strategy<Value = MenuEvent> {
        let viewport = prop_oneof![
            Just(ViewportClass::Desktop),
            Just(ViewportClass::Mobile),
            Just(ViewportClass::SmallMobile),
        ];
        let region = prop_oneof![
            Just(ClickRegion::Toggle),
            Just(ClickRegion::Menu),
            Just(ClickRegion::Outside),
        ];
        prop_oneof![
            Just(MenuEvent::ToggleClick),
            Just(MenuEvent::NavLinkClick),
            region.prop_map(MenuEvent::Click),
            viewport.prop_map(MenuEvent::Resize),
        ]
    }

    proptest! {
        #[test]
        fn prop_never_open_on_desktop(events in prop::collection::vec(any_event(), 0..64)) {
            let mut state = MenuState::new(ViewportClass::Mobile);
            for event in events {
                state.apply(event);
                prop_assert!(!(state.is_open() && state.viewport().is_desktop()));
            }
        }
    }
}
