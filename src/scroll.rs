//! Scroll-driven behavior: frame throttling, parallax and the navbar

use crate::consts::{NAVBAR_SCROLL_THRESHOLD, PARALLAX_RATE};

/// Coalesces high-frequency events into at most one update per animation frame
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self { pending: false }
    }

    /// Returns true if the caller should schedule a frame
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Call from the frame callback once the update ran
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Run `schedule` if no frame is pending. A failed schedule clears the
    /// pending flag so later events can try again.
    ///
    /// Returns `Ok(false)` when a frame was already pending.
    pub fn schedule<E>(&mut self, schedule: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if !self.request() {
            return Ok(false);
        }
        if let Err(e) = schedule() {
            self.complete();
            return Err(e);
        }
        Ok(true)
    }
}

/// Vertical offset for the hero background at the given scroll position
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

/// Inline styles for `.navbar` after a scroll frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
    /// `None` leaves the current transform alone
    pub transform: Option<&'static str>,
}

pub const NAVBAR_HIDDEN: &str = "translateY(-100%)";
pub const NAVBAR_SHOWN: &str = "translateY(0)";

/// Tracks the previous scroll position to tell scroll direction
#[derive(Debug, Clone, Copy)]
pub struct NavbarScroll {
    last_scroll_y: f64,
}

impl NavbarScroll {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            last_scroll_y: scroll_y,
        }
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    pub fn update(&mut self, scroll_y: f64, mobile: bool, menu_open: bool) -> NavbarStyle {
        let condensed = scroll_y > NAVBAR_SCROLL_THRESHOLD;
        let (background, backdrop_filter) = if condensed {
            ("rgba(10, 10, 10, 0.95)", "blur(20px)")
        } else {
            ("rgba(10, 10, 10, 0.9)", "blur(10px)")
        };

        // Keep the bar in place while the mobile menu hangs off it
        let transform = if mobile && menu_open {
            None
        } else if scroll_y > self.last_scroll_y && condensed {
            Some(NAVBAR_HIDDEN)
        } else {
            Some(NAVBAR_SHOWN)
        };

        self.last_scroll_y = scroll_y;
        NavbarStyle {
            background,
            backdrop_filter,
            transform,
        }
    }
}

/// Section id referenced by an in-page link (`#about` -> `about`)
pub fn section_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
