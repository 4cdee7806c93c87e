//! Section tracking: active nav link and reveal-on-scroll

/// Intersection observer parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Section counts as current once 30% is visible inside the inset viewport
pub const ACTIVE_SECTION_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: 0.3,
    root_margin: "-100px 0px -100px 0px",
};

pub const REVEAL_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: 0.1,
    root_margin: "0px",
};

/// Terminal reveal starts once half the terminal is on screen
pub const TERMINAL_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: 0.5,
    root_margin: "0px",
};

/// Elements that fade in when they enter the viewport
pub const REVEAL_SELECTOR: &str = ".project-card, .timeline-item, .contact-item, .skill-category";

/// Whether a nav link points at the given section
pub fn link_is_active(href: Option<&str>, section_id: &str) -> bool {
    match href.and_then(|h| h.strip_prefix('#')) {
        Some(id) => !section_id.is_empty() && id == section_id,
        None => false,
    }
}

/// Active flags for each link, in order
pub fn active_link_flags<'a, I>(hrefs: I, section_id: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .map(|href| link_is_active(href, section_id))
        .collect()
}

/// Inline styles for a revealable element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const REVEAL_HIDDEN: RevealStyle = RevealStyle {
    opacity: "0",
    transform: "translateY(30px)",
};

pub const REVEAL_SHOWN: RevealStyle = RevealStyle {
    opacity: "1",
    transform: "translateY(0)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_matching_link_is_active() {
        let hrefs = [Some("#home"), Some("#about"), None, Some("#projects")];
        assert_eq!(
            active_link_flags(hrefs, "about"),
            vec![false, true, false, false]
        );
    }

    #[test]
    fn test_empty_section_id_matches_nothing() {
        assert!(!link_is_active(Some("#"), ""));
        assert!(!link_is_active(Some("about"), "about"));
    }
}
