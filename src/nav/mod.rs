//! Mobile navigation menu
//!
//! `MenuState` is the single source of truth:
//! - Events mutate the state through explicit transitions
//! - `NavProjection` maps state to classes and inline styles
//! - A `NavView` applies the projection (DOM in the browser, fakes in tests)

pub mod controller;
pub mod projection;
pub mod state;

pub use controller::{NavController, NavView};
pub use projection::{BarStyle, NavProjection, ToggleVisibility};
pub use state::{ClickRegion, MenuEvent, MenuState, Transition};
