//! Error taxonomy for page behaviors
//!
//! Nothing here is ever shown to the visitor. Callers log the error and skip
//! the affected feature so the rest of the page keeps working.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// An element the feature depends on is not in the markup
    #[error("expected element `{0}` is missing")]
    MissingElement(&'static str),

    /// A required form field is absent or blank
    #[error("form field `{0}` is empty")]
    EmptyField(&'static str),

    /// Page configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A browser API call was rejected
    #[error("DOM call failed: {0}")]
    Js(String),
}

/// Convert a delay for `setTimeout`/`setInterval`, which take a signed 32-bit value
pub fn timer_delay(ms: u32) -> Result<i32, PageError> {
    i32::try_from(ms)
        .map_err(|_| PageError::InvalidConfig(format!("timer delay {}ms out of range", ms)))
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message_names_selector() {
        let err = PageError::MissingElement(".nav-toggle");
        assert_eq!(err.to_string(), "expected element `.nav-toggle` is missing");
    }

    #[test]
    fn test_timer_delay_rejects_values_that_would_wrap() {
        assert_eq!(timer_delay(300), Ok(300));
        assert_eq!(timer_delay(i32::MAX as u32), Ok(i32::MAX));
        assert!(matches!(timer_delay(u32::MAX), Err(PageError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_field_message() {
        assert_eq!(
            PageError::EmptyField("email").to_string(),
            "form field `email` is empty"
        );
    }
}
