//! Projection of `MenuState` onto classes and inline styles

use super::state::MenuState;
use crate::consts::TOGGLE_Z_INDEX;
use crate::viewport::ViewportClass;

/// Inline style for one hamburger bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const fn bar(transform: &'static str, opacity: &'static str) -> BarStyle {
    BarStyle { transform, opacity }
}

/// Three parallel bars
const BARS_CLOSED: [BarStyle; 3] = [bar("none", "1"), bar("none", "1"), bar("none", "1")];

/// Outer bars crossed into an "X", middle bar hidden
const BARS_OPEN: [BarStyle; 3] = [
    bar("rotate(45deg) translate(5px, 5px)", "1"),
    bar("none", "0"),
    bar("rotate(-45deg) translate(7px, -6px)", "1"),
];

/// Display rule for the hamburger toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleVisibility {
    pub display: &'static str,
    pub z_index: Option<&'static str>,
    /// Apply with `!important` so no stylesheet rule can hide the toggle
    pub important: bool,
}

impl ToggleVisibility {
    /// The only rule deciding whether the toggle shows
    pub fn for_viewport(viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Desktop => Self {
                display: "none",
                z_index: None,
                important: false,
            },
            ViewportClass::Mobile => Self {
                display: "flex",
                z_index: Some(TOGGLE_Z_INDEX),
                important: false,
            },
            ViewportClass::SmallMobile => Self {
                display: "flex",
                z_index: Some(TOGGLE_Z_INDEX),
                important: true,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.display != "none"
    }

    pub fn priority(&self) -> &'static str {
        if self.important { "important" } else { "" }
    }
}

/// Everything the view needs to draw the navigation for one state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavProjection {
    /// `active` on `.nav-links`
    pub menu_active: bool,
    /// `active` on `.nav-toggle`
    pub toggle_active: bool,
    /// `nav-open` on `<body>` (locks background scrolling)
    pub body_locked: bool,
    pub bars: [BarStyle; 3],
    pub toggle: ToggleVisibility,
}

impl NavProjection {
    pub fn from_state(state: &MenuState) -> Self {
        let open = state.is_open();
        Self {
            menu_active: open,
            toggle_active: open,
            body_locked: open,
            bars: if open { BARS_OPEN } else { BARS_CLOSED },
            toggle: ToggleVisibility::for_viewport(state.viewport()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::state::MenuEvent;
    use proptest::prelude::*;

    #[test]
    fn test_closed_projection_draws_parallel_bars() {
        let state = MenuState::new(ViewportClass::Mobile);
        let projection = NavProjection::from_state(&state);
        assert!(!projection.menu_active);
        assert!(!projection.body_locked);
        assert!(projection.bars.iter().all(|b| b.transform == "none" && b.opacity == "1"));
    }

    #[test]
    fn test_open_projection_draws_cross() {
        let mut state = MenuState::new(ViewportClass::Mobile);
        state.apply(MenuEvent::ToggleClick);
        let projection = NavProjection::from_state(&state);
        assert!(projection.menu_active && projection.toggle_active && projection.body_locked);
        assert_eq!(projection.bars[0].transform, "rotate(45deg) translate(5px, 5px)");
        assert_eq!(projection.bars[1].opacity, "0");
        assert_eq!(projection.bars[2].transform, "rotate(-45deg) translate(7px, -6px)");
    }

    #[test]
    fn test_small_mobile_forces_toggle() {
        let toggle = ToggleVisibility::for_viewport(ViewportClass::SmallMobile);
        assert!(toggle.is_visible());
        assert_eq!(toggle.priority(), "important");
        assert_eq!(toggle.z_index, Some("1002"));

        let toggle = ToggleVisibility::for_viewport(ViewportClass::Mobile);
        assert_eq!(toggle.priority(), "");
    }

    proptest! {
        #[test]
        fn prop_toggle_visible_iff_mobile_width(width in 0.0f64..3000.0) {
            let toggle = ToggleVisibility::for_viewport(ViewportClass::from_width(width));
            prop_assert_eq!(toggle.is_visible(), width <= 767.0);
        }
    }
}
