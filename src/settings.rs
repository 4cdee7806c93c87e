//! Page settings
//!
//! Read from an optional `<script type="application/json" id="page-config">`
//! block so the page owner can tweak behavior without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::{PARTICLE_INTERVAL_MS, PARTICLE_MAX_INTERVAL_MS};
use crate::error::PageError;

/// Page settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Address the contact form writes to
    pub contact_recipient: String,
    /// Lines cycled by the hero typing animation
    pub typing_lines: Vec<String>,

    // === Effects ===
    /// Floating background particles
    pub particles: bool,
    /// Milliseconds between particle spawns
    pub particle_interval_ms: u32,
    /// Hero background parallax
    pub parallax: bool,
    /// Custom cursor on desktop
    pub custom_cursor: bool,

    // === Accessibility ===
    /// Reduced motion (no particles, parallax or glitch)
    pub reduced_motion: bool,

    /// `log` level name: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            contact_recipient: "bsse1439@iit.du.ac.bd".to_string(),
            typing_lines: [
                "const developer = {",
                "  name: \"Shah Alam Abir\",",
                "  role: \"Software Engineer\",",
                "  focus: [\"Web Dev\", \"AI/ML\"],",
                "  passion: \"Innovation\"",
                "}",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),

            particles: true,
            particle_interval_ms: PARTICLE_INTERVAL_MS,
            parallax: true,
            custom_cursor: true,

            reduced_motion: false,

            log_level: "info".to_string(),
        }
    }
}

impl PageSettings {
    /// `id` of the JSON config block
    const CONFIG_ELEMENT_ID: &'static str = "page-config";

    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| PageError::InvalidConfig(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), PageError> {
        if self.contact_recipient.trim().is_empty() {
            return Err(PageError::InvalidConfig("contact_recipient is empty".into()));
        }
        if self.typing_lines.is_empty() {
            return Err(PageError::InvalidConfig("typing_lines is empty".into()));
        }
        if self.particle_interval_ms == 0 {
            return Err(PageError::InvalidConfig("particle_interval_ms must be > 0".into()));
        }
        if self.particle_interval_ms > PARTICLE_MAX_INTERVAL_MS {
            return Err(PageError::InvalidConfig(format!(
                "particle_interval_ms must be <= {}",
                PARTICLE_MAX_INTERVAL_MS
            )));
        }
        Ok(())
    }

    /// Effective particles (respects reduced_motion)
    pub fn effective_particles(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// Effective parallax (respects reduced_motion)
    pub fn effective_parallax(&self) -> bool {
        self.parallax && !self.reduced_motion
    }

    /// Hero title glitch on hover (respects reduced_motion)
    pub fn effective_glitch(&self) -> bool {
        !self.reduced_motion
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load settings from the page's JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded page settings from #{}", Self::CONFIG_ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring page settings: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No #{} block outside the browser", Self::CONFIG_ELEMENT_ID);
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = PageSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.typing_lines.len(), 6);
        assert_eq!(settings.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"particles": false, "log_level": "debug"}"#;
        let settings = PageSettings::from_json(json).unwrap();
        assert!(!settings.particles);
        assert_eq!(settings.log_level(), log::Level::Debug);
        assert_eq!(settings.contact_recipient, "bsse1439@iit.du.ac.bd");
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            PageSettings::from_json("{not json"),
            Err(PageError::InvalidConfig(_))
        ));
        assert!(matches!(
            PageSettings::from_json(r#"{"typing_lines": []}"#),
            Err(PageError::InvalidConfig(_))
        ));
        assert!(matches!(
            PageSettings::from_json(r#"{"particle_interval_ms": 0}"#),
            Err(PageError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_particle_interval_upper_bound() {
        assert!(PageSettings::from_json(r#"{"particle_interval_ms": 60000}"#).is_ok());
        assert!(matches!(
            PageSettings::from_json(r#"{"particle_interval_ms": 60001}"#),
            Err(PageError::InvalidConfig(_))
        ));
        // Would wrap to -1 as a signed timer delay
        assert!(matches!(
            PageSettings::from_json(r#"{"particle_interval_ms": 4294967295}"#),
            Err(PageError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_reduced_motion_disables_effects() {
        let settings = PageSettings {
            reduced_motion: true,
            ..PageSettings::default()
        };
        assert!(!settings.effective_particles());
        assert!(!settings.effective_parallax());
        assert!(!settings.effective_glitch());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let settings = PageSettings {
            log_level: "loud".into(),
            ..PageSettings::default()
        };
        assert_eq!(settings.log_level(), log::Level::Info);
    }
}
