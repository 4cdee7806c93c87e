//! Viewport bucketing
//!
//! The page only cares about three layouts. Every width-dependent decision
//! goes through [`ViewportClass::from_width`] so the breakpoints live in one place.

use crate::consts::{MOBILE_MAX_WIDTH, SMALL_MOBILE_MAX_WIDTH};

/// Layout bucket derived from the window width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    /// Wider than 767px
    #[default]
    Desktop,
    /// 481px to 767px
    Mobile,
    /// 480px and below
    SmallMobile,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width <= SMALL_MOBILE_MAX_WIDTH {
            ViewportClass::SmallMobile
        } else if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_desktop(self) -> bool {
        self == ViewportClass::Desktop
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportClass::Desktop => "desktop",
            ViewportClass::Mobile => "mobile",
            ViewportClass::SmallMobile => "small-mobile",
        }
    }
}

/// Snapshot of the browser window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Device exposes touch events
    pub touch: bool,
}

impl Viewport {
    pub fn new(width: f64, height: f64, touch: bool) -> Self {
        Self {
            width,
            height,
            touch,
        }
    }

    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.width)
    }

    /// Pointer-driven effects (custom cursor, parallax) only run on a
    /// desktop-width window without touch input
    pub fn supports_pointer_effects(&self) -> bool {
        self.class().is_desktop() && !self.touch
    }
}
