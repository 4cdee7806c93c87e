//! Portfolio Page - client-side behavior for a personal portfolio site
//!
//! Core modules:
//! - `nav`: Mobile navigation menu state, projection and controller
//! - `viewport`: Width bucketing and pointer capability
//! - `scroll`: Frame throttling, parallax and navbar scroll styling
//! - `sections`: Active link highlighting and reveal-on-scroll
//! - `typing` / `terminal`: Text animations
//! - `particles`: Seeded decorative particles
//! - `contact`: Contact form to `mailto:` link
//! - `web`: DOM adapters (wasm32 only)

pub mod contact;
pub mod cursor;
pub mod effects;
pub mod error;
pub mod nav;
pub mod particles;
pub mod scroll;
pub mod sections;
pub mod settings;
pub mod terminal;
pub mod typing;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{PageError, timer_delay};
pub use settings::PageSettings;
pub use viewport::{Viewport, ViewportClass};

/// Page configuration constants
pub mod consts {
    /// Widest viewport (px) that still uses the mobile layout
    pub const MOBILE_MAX_WIDTH: f64 = 767.0;
    /// Widest viewport (px) treated as a small phone
    pub const SMALL_MOBILE_MAX_WIDTH: f64 = 480.0;

    /// Stacking order for the hamburger toggle on mobile
    pub const TOGGLE_Z_INDEX: &str = "1002";
    /// Delay before re-syncing toggle visibility after load settles
    pub const TOGGLE_RESYNC_DELAY_MS: u32 = 100;

    /// Parallax rate applied to the scroll offset (negative = moves up)
    pub const PARALLAX_RATE: f64 = -0.5;
    /// Scroll offset (px) past which the navbar condenses and may hide
    pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

    /// Typing animation timings (ms)
    pub const TYPE_DELAY_MS: u32 = 100;
    pub const DELETE_DELAY_MS: u32 = 50;
    pub const LINE_PAUSE_MS: u32 = 2000;

    /// Terminal reveal timings (ms)
    pub const TERMINAL_START_DELAY_MS: u32 = 500;
    pub const TERMINAL_CHAR_DELAY_MS: u32 = 50;

    /// Particle defaults
    pub const PARTICLE_INTERVAL_MS: u32 = 300;
    /// Longest accepted spawn interval (one minute)
    pub const PARTICLE_MAX_INTERVAL_MS: u32 = 60_000;
    pub const PARTICLE_MIN_DURATION_MS: f64 = 2000.0;
    pub const PARTICLE_MAX_DURATION_MS: f64 = 5000.0;
    /// Extra travel (px) so particles leave the top edge before fading out
    pub const PARTICLE_OVERSHOOT: f32 = 100.0;

    /// Contact form feedback (ms)
    pub const SUBMIT_RESET_DELAY_MS: u32 = 3000;

    /// Brand logo pulse duration (ms)
    pub const LOGO_PULSE_MS: u32 = 600;
}
