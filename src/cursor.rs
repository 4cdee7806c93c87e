//! Custom cursor (desktop only)
//!
//! A dot and a trailing ring follow the pointer. Both share the same state,
//! the stylesheet gives the follower its easing.

use glam::Vec2;

use crate::settings::PageSettings;
use crate::viewport::Viewport;

/// Scale applied while hovering a project card
pub const HOVER_SCALE: f32 = 1.5;

pub fn custom_cursor_enabled(viewport: &Viewport, settings: &PageSettings) -> bool {
    settings.custom_cursor && viewport.supports_pointer_effects()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    pub visible: bool,
    pub scale: f32,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            visible: true,
            scale: 1.0,
        }
    }
}

impl CursorState {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Pointer left or entered the document
    pub fn set_inside(&mut self, inside: bool) {
        self.visible = inside;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.scale = if hovering { HOVER_SCALE } else { 1.0 };
    }

    pub fn left(&self) -> String {
        format!("{}px", self.position.x)
    }

    pub fn top(&self) -> String {
        format!("{}px", self.position.y)
    }

    pub fn display(&self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }

    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_disabled_on_touch_or_narrow() {
        let settings = PageSettings::default();
        assert!(custom_cursor_enabled(&Viewport::new(1440.0, 900.0, false), &settings));
        assert!(!custom_cursor_enabled(&Viewport::new(1440.0, 900.0, true), &settings));
        assert!(!custom_cursor_enabled(&Viewport::new(500.0, 900.0, false), &settings));

        let settings = PageSettings {
            custom_cursor: false,
            ..PageSettings::default()
        };
        assert!(!custom_cursor_enabled(&Viewport::new(1440.0, 900.0, false), &settings));
    }

    #[test]
    fn test_cursor_styles() {
        let mut cursor = CursorState::default();
        cursor.move_to(120.0, 48.5);
        assert_eq!(cursor.left(), "120px");
        assert_eq!(cursor.top(), "48.5px");

        cursor.set_hovering(true);
        assert_eq!(cursor.transform(), "scale(1.5)");
        cursor.set_hovering(false);
        assert_eq!(cursor.transform(), "scale(1)");

        cursor.set_inside(false);
        assert_eq!(cursor.display(), "none");
    }
}
