//! Hover and attention effects, and the stylesheet they rely on

/// `id` of the injected `<style>` element, used to inject it only once
pub const STYLESHEET_ID: &str = "portfolio-page-effects";

pub const SKILL_HOVER_BACKGROUND: &str = "rgba(0, 255, 136, 0.2)";
pub const SKILL_HOVER_TRANSFORM: &str = "translateY(-5px) scale(1.05)";

pub const HERO_GLITCH_ANIMATION: &str = "glitch 0.3s ease-in-out";
pub const LOGO_PULSE_ANIMATION: &str = "logoPulse 0.6s ease-out";

/// Keyframes and mobile navigation rules appended to `<head>` at startup.
///
/// The toggle's own visibility is not set here; it is driven inline by the
/// navigation controller.
pub const STYLESHEET: &str = r#"
@keyframes glitch {
    0% { transform: translate(0); }
    20% { transform: translate(-2px, 2px); }
    40% { transform: translate(-2px, -2px); }
    60% { transform: translate(2px, 2px); }
    80% { transform: translate(2px, -2px); }
    100% { transform: translate(0); }
}

@keyframes logoPulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.1); text-shadow: 0 0 20px rgba(0, 255, 136, 0.8); }
    100% { transform: scale(1); }
}

.cursor-blink {
    animation: blink 1s infinite;
}

@media (max-width: 767px) {
    .nav-links {
        display: flex;
        position: fixed;
        top: 100%;
        left: 0;
        width: 100%;
        background: rgba(10, 10, 10, 0.95);
        backdrop-filter: blur(20px);
        flex-direction: column;
        padding: 2rem;
        transform: translateY(-100%);
        transition: transform 0.3s ease;
        border-top: 1px solid var(--border-color);
    }

    .nav-links.active {
        transform: translateY(0);
    }

    .cursor,
    .cursor-follower {
        display: none;
    }

    body.nav-open {
        overflow: hidden;
    }

    .nav-toggle span {
        transition: all 0.3s ease;
    }

    .btn,
    .social-link,
    .nav-link {
        min-height: 44px;
        min-width: 44px;
    }
}

@media (hover: none) and (pointer: coarse) {
    .btn:hover,
    .social-link:hover,
    .nav-link:hover,
    .project-card:hover,
    .achievement-card:hover,
    .skill-category:hover {
        transform: none;
    }

    .btn:active,
    .social-link:active {
        transform: scale(0.95);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_defines_animations_it_references() {
        for name in ["glitch", "logoPulse"] {
            assert!(STYLESHEET.contains(&format!("@keyframes {}", name)));
        }
        assert!(HERO_GLITCH_ANIMATION.starts_with("glitch "));
        assert!(LOGO_PULSE_ANIMATION.starts_with("logoPulse "));
    }

    #[test]
    fn test_stylesheet_leaves_toggle_visibility_alone() {
        assert!(!STYLESHEET.contains("!important"));
        assert!(!STYLESHEET.contains(".nav-toggle {"));
    }
}
