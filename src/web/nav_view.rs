//! `NavView` backed by the page's navigation markup

use web_sys::{Document, HtmlElement, Node};

use super::{children, query, set_class, set_style};
use crate::error::PageError;
use crate::nav::{ClickRegion, NavProjection, NavView};

const TOGGLE_SELECTOR: &str = ".nav-toggle";
const MENU_SELECTOR: &str = ".nav-links";

struct NavElements {
    toggle: HtmlElement,
    menu: HtmlElement,
    body: HtmlElement,
    /// The three `span` bars inside the toggle
    bars: Vec<HtmlElement>,
}

impl NavElements {
    fn locate(document: &Document) -> Result<Self, PageError> {
        let toggle = query(document, TOGGLE_SELECTOR)?;
        let menu = query(document, MENU_SELECTOR)?;
        let body = document.body().ok_or(PageError::MissingElement("body"))?;
        let bars = children(&toggle, "span")?;
        if bars.len() < 3 {
            log::warn!("{} has {} bars, expected 3", TOGGLE_SELECTOR, bars.len());
        }
        Ok(Self {
            toggle,
            menu,
            body,
            bars,
        })
    }
}

pub struct DomNavView {
    elements: Option<NavElements>,
}

impl DomNavView {
    /// Find the navigation markup; missing pieces leave the view detached
    pub fn locate(document: &Document) -> Self {
        let elements = match NavElements::locate(document) {
            Ok(elements) => Some(elements),
            Err(e) => {
                log::error!("Mobile navigation elements not found in DOM: {}", e);
                None
            }
        };
        Self { elements }
    }

    pub fn toggle(&self) -> Option<&HtmlElement> {
        self.elements.as_ref().map(|e| &e.toggle)
    }

    /// Which navigation region a click target belongs to
    pub fn classify(&self, target: Option<&Node>) -> ClickRegion {
        let Some(elements) = &self.elements else {
            return ClickRegion::Outside;
        };
        if elements.toggle.contains(target) {
            ClickRegion::Toggle
        } else if elements.menu.contains(target) {
            ClickRegion::Menu
        } else {
            ClickRegion::Outside
        }
    }
}

impl NavView for DomNavView {
    fn check(&self) -> Result<(), PageError> {
        match self.elements {
            Some(_) => Ok(()),
            None => Err(PageError::MissingElement(TOGGLE_SELECTOR)),
        }
    }

    fn render(&mut self, projection: &NavProjection) -> Result<(), PageError> {
        let el = self
            .elements
            .as_ref()
            .ok_or(PageError::MissingElement(TOGGLE_SELECTOR))?;

        set_class(&el.menu, "active", projection.menu_active)?;
        set_class(&el.toggle, "active", projection.toggle_active)?;
        set_class(&el.body, "nav-open", projection.body_locked)?;

        for (bar, style) in el.bars.iter().zip(projection.bars.iter()) {
            set_style(bar, "transform", style.transform)?;
            set_style(bar, "opacity", style.opacity)?;
        }

        let toggle = &projection.toggle;
        let css = el.toggle.style();
        css.set_property_with_priority("display", toggle.display, toggle.priority())?;
        match toggle.z_index {
            Some(z) => css.set_property_with_priority("z-index", z, toggle.priority())?,
            None => {
                css.remove_property("z-index")?;
            }
        }
        Ok(())
    }
}
