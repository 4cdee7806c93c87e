//! Portfolio Page entry point
//!
//! Wires every page behavior to its DOM events in the browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Event, HtmlElement, HtmlFormElement, MouseEvent, Node};

    use portfolio_page::consts::*;
    use portfolio_page::contact::{ContactMessage, SUBMIT_FEEDBACK};
    use portfolio_page::cursor::{CursorState, custom_cursor_enabled};
    use portfolio_page::effects::*;
    use portfolio_page::nav::NavController;
    use portfolio_page::particles::{
        PARTICLE_CLASS, PARTICLE_CSS, PARTICLE_START_OPACITY, ParticleSpawner,
    };
    use portfolio_page::scroll::{
        FrameThrottle, NavbarScroll, NavbarStyle, parallax_transform, section_target,
    };
    use portfolio_page::sections::*;
    use portfolio_page::terminal::{RevealFrame, TerminalReveal};
    use portfolio_page::typing::Typewriter;
    use portfolio_page::web::{self, DomNavView};
    use portfolio_page::{PageError, PageSettings, Viewport};

    type SharedNav = Rc<RefCell<NavController<DomNavView>>>;

    /// Log a feature failure; the rest of the page keeps running
    fn report(feature: &str, result: Result<(), PageError>) {
        if let Err(e) = result {
            log::warn!("{}: {}", feature, e);
        }
    }

    /// Run `update` on the next animation frame unless one is already queued
    fn throttled_frame(
        throttle: &Rc<RefCell<FrameThrottle>>,
        feature: &str,
        update: impl FnOnce() + 'static,
    ) {
        let pending = throttle.clone();
        let scheduled = throttle.borrow_mut().schedule(|| {
            web::request_frame(move || {
                pending.borrow_mut().complete();
                update();
            })
        });
        report(feature, scheduled.map(|_| ()));
    }

    pub fn start() {
        console_error_panic_hook::set_once();
        // Level is narrowed once settings are read
        if console_log::init_with_level(log::Level::Trace).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        let settings = PageSettings::load();
        log::set_max_level(settings.log_level().to_level_filter());
        log::info!("Portfolio page starting...");

        let document = match web::document() {
            Ok(document) => document,
            Err(e) => {
                log::error!("No document: {}", e);
                return;
            }
        };

        if document.ready_state() == "loading" {
            let result = web::listen(&document, "DOMContentLoaded", move |_event: Event| {
                init(&settings)
            });
            report("startup", result);
        } else {
            init(&settings);
        }
    }

    fn init(settings: &PageSettings) {
        let (document, viewport) = match (web::document(), web::viewport()) {
            (Ok(d), Ok(v)) => (d, v),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("Page init aborted: {}", e);
                return;
            }
        };

        report("styles", web::inject_styles(&document));
        report("cursor", setup_cursor(&document, &viewport, settings));
        report("typing", setup_typing(&document, settings));

        let nav = setup_navigation(&document, &viewport);
        report("nav links", setup_nav_links(&document, nav.clone()));
        report("active section", setup_active_section(&document));
        report("navbar", setup_navbar_scroll(&document, nav));

        if viewport.supports_pointer_effects() && settings.effective_parallax() {
            report("parallax", setup_parallax(&document));
        }
        report("reveal", setup_reveal(&document));
        report("contact form", setup_contact_form(&document, settings));
        report("terminal", setup_terminal(&document));
        if settings.effective_particles() {
            report("particles", setup_particles(settings));
        }
        report("brand", setup_brand(&document));
        if settings.effective_glitch() {
            report("hero title", setup_hero_glitch(&document));
        }
        report("skills", setup_skills(&document));

        log::info!(
            "Portfolio page ready ({}, {}px)",
            viewport.class().as_str(),
            viewport.width
        );
    }

    // === Cursor ===

    struct CustomCursor {
        dot: HtmlElement,
        follower: HtmlElement,
        state: CursorState,
    }

    impl CustomCursor {
        fn each(
            &self,
            mut apply: impl FnMut(&HtmlElement) -> Result<(), PageError>,
        ) -> Result<(), PageError> {
            apply(&self.dot)?;
            apply(&self.follower)
        }

        fn render_position(&self) -> Result<(), PageError> {
            let (left, top) = (self.state.left(), self.state.top());
            self.each(|el| {
                web::set_style(el, "left", &left)?;
                web::set_style(el, "top", &top)
            })
        }

        fn render_visibility(&self) -> Result<(), PageError> {
            self.each(|el| web::set_style(el, "display", self.state.display()))
        }

        fn render_scale(&self) -> Result<(), PageError> {
            let transform = self.state.transform();
            self.each(|el| web::set_style(el, "transform", &transform))
        }
    }

    fn setup_cursor(
        document: &Document,
        viewport: &Viewport,
        settings: &PageSettings,
    ) -> Result<(), PageError> {
        let dot = web::query(document, ".cursor")?;
        let follower = web::query(document, ".cursor-follower")?;

        if !custom_cursor_enabled(viewport, settings) {
            web::set_style(&dot, "display", "none")?;
            web::set_style(&follower, "display", "none")?;
            return Ok(());
        }

        let cursor = Rc::new(RefCell::new(CustomCursor {
            dot,
            follower,
            state: CursorState::default(),
        }));
        let throttle = Rc::new(RefCell::new(FrameThrottle::new()));

        // Pointer move - store the latest position, draw once per frame
        {
            let cursor = cursor.clone();
            web::listen(document, "mousemove", move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                cursor
                    .borrow_mut()
                    .state
                    .move_to(event.client_x() as f32, event.client_y() as f32);

                if throttle.borrow().is_pending() {
                    return;
                }
                let cursor = cursor.clone();
                throttled_frame(&throttle, "cursor", move || {
                    report("cursor", cursor.borrow().render_position());
                });
            })?;
        }

        // Leaving / entering the window
        for (event_name, inside) in [("mouseleave", false), ("mouseenter", true)] {
            let cursor = cursor.clone();
            web::listen(document, event_name, move |_event: Event| {
                let mut c = cursor.borrow_mut();
                c.state.set_inside(inside);
                report("cursor", c.render_visibility());
            })?;
        }

        // Project cards grow the cursor
        for card in web::query_all(document, ".project-card")? {
            for (event_name, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let cursor = cursor.clone();
                web::listen(&card, event_name, move |_event: Event| {
                    let mut c = cursor.borrow_mut();
                    c.state.set_hovering(hovering);
                    report("cursor", c.render_scale());
                })?;
            }
        }

        log::debug!("Custom cursor enabled");
        Ok(())
    }

    // === Typing ===

    fn setup_typing(document: &Document, settings: &PageSettings) -> Result<(), PageError> {
        let el = web::query(document, "#typing-text")?;
        let writer = Rc::new(RefCell::new(Typewriter::new(settings.typing_lines.clone())));
        type_next(el, writer);
        Ok(())
    }

    fn type_next(el: HtmlElement, writer: Rc<RefCell<Typewriter>>) {
        let frame = writer.borrow_mut().step();
        el.set_text_content(Some(&frame.text));
        report(
            "typing",
            web::set_timeout(frame.delay_ms, move || type_next(el, writer)),
        );
    }

    // === Navigation ===

    fn setup_navigation(document: &Document, viewport: &Viewport) -> SharedNav {
        let nav = Rc::new(RefCell::new(NavController::new(
            DomNavView::locate(document),
            viewport.width,
        )));
        nav.borrow_mut().sync_toggle_visibility();

        // Hamburger click
        let toggle = nav.borrow().view().toggle().cloned();
        if let Some(toggle) = toggle {
            let nav = nav.clone();
            let result = web::listen(&toggle, "click", move |_event: Event| {
                nav.borrow_mut().toggle_menu();
            });
            report("nav toggle", result);
        }

        // Click anywhere else closes the menu
        {
            let nav = nav.clone();
            let result = web::listen(document, "click", move |event: Event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let mut nav = nav.borrow_mut();
                let region = nav.view().classify(target.as_ref());
                nav.handle_outside_click(region);
            });
            report("outside click", result);
        }

        // Resize re-buckets the viewport and resyncs the toggle
        {
            let nav = nav.clone();
            let result = web::window().and_then(|window| {
                web::listen(&window, "resize", move |_event: Event| match web::viewport() {
                    Ok(viewport) => nav.borrow_mut().handle_resize(viewport.width),
                    Err(e) => log::warn!("resize: {}", e),
                })
            });
            report("resize", result);
        }

        // Once more after load settles (late stylesheets, font swaps)
        {
            let nav = nav.clone();
            report(
                "nav resync",
                web::set_timeout(TOGGLE_RESYNC_DELAY_MS, move || {
                    nav.borrow_mut().sync_toggle_visibility();
                }),
            );
        }

        nav
    }

    fn setup_nav_links(document: &Document, nav: SharedNav) -> Result<(), PageError> {
        for link in web::query_all(document, ".nav-link")? {
            let nav = nav.clone();
            let document = document.clone();
            let href = link.get_attribute("href");
            web::listen(&link, "click", move |event: Event| {
                event.prevent_default();
                if let Some(id) = href.as_deref().and_then(section_target) {
                    match document.get_element_by_id(id) {
                        Some(section) => web::scroll_into_view(&section),
                        None => log::warn!("No section #{}", id),
                    }
                }
                nav.borrow_mut().on_nav_link_click();
            })?;
        }
        Ok(())
    }

    fn setup_active_section(document: &Document) -> Result<(), PageError> {
        let links = web::query_all(document, ".nav-link")?;
        let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();

        let observer = web::intersection_observer(&ACTIVE_SECTION_OBSERVER, move |section, _| {
            let flags = active_link_flags(hrefs.iter().map(|h| h.as_deref()), &section.id());
            for (link, active) in links.iter().zip(flags) {
                report("active link", web::set_class(link, "active", active));
            }
        })?;

        for section in web::query_all(document, "section")? {
            observer.observe(&section);
        }
        Ok(())
    }

    fn render_navbar(navbar: &HtmlElement, style: &NavbarStyle) -> Result<(), PageError> {
        web::set_style(navbar, "background", style.background)?;
        web::set_style(navbar, "backdrop-filter", style.backdrop_filter)?;
        if let Some(transform) = style.transform {
            web::set_style(navbar, "transform", transform)?;
        }
        Ok(())
    }

    fn setup_navbar_scroll(document: &Document, nav: SharedNav) -> Result<(), PageError> {
        let navbar = web::query(document, ".navbar")?;
        let tracker = Rc::new(RefCell::new(NavbarScroll::new(web::scroll_y())));
        let throttle = Rc::new(RefCell::new(FrameThrottle::new()));

        web::listen(&web::window()?, "scroll", move |_event: Event| {
            if throttle.borrow().is_pending() {
                return;
            }
            let navbar = navbar.clone();
            let tracker = tracker.clone();
            let nav = nav.clone();
            throttled_frame(&throttle, "navbar", move || {
                let (mobile, menu_open) = {
                    let nav = nav.borrow();
                    (!nav.state().viewport().is_desktop(), nav.is_open())
                };
                let style = tracker.borrow_mut().update(web::scroll_y(), mobile, menu_open);
                report("navbar", render_navbar(&navbar, &style));
            });
        })
    }

    fn setup_brand(document: &Document) -> Result<(), PageError> {
        let brand = web::query(document, ".nav-brand")?;
        let target = brand.clone();
        web::listen(&brand, "click", move |_event: Event| {
            report("brand", web::scroll_to_top());
            report("brand", pulse_logo(&target));
        })
    }

    fn pulse_logo(brand: &HtmlElement) -> Result<(), PageError> {
        web::set_style(brand, "animation", LOGO_PULSE_ANIMATION)?;
        let brand = brand.clone();
        web::set_timeout(LOGO_PULSE_MS, move || {
            report("brand", web::clear_style(&brand, "animation"));
        })
    }

    // === Scroll effects ===

    fn setup_parallax(document: &Document) -> Result<(), PageError> {
        let rain = web::query(document, ".code-rain")?;
        let throttle = Rc::new(RefCell::new(FrameThrottle::new()));

        web::listen(&web::window()?, "scroll", move |_event: Event| {
            if throttle.borrow().is_pending() {
                return;
            }
            let rain = rain.clone();
            throttled_frame(&throttle, "parallax", move || {
                let transform = parallax_transform(web::scroll_y());
                report("parallax", web::set_style(&rain, "transform", &transform));
            });
        })
    }

    fn apply_reveal(el: &HtmlElement, style: &RevealStyle) -> Result<(), PageError> {
        web::set_style(el, "opacity", style.opacity)?;
        web::set_style(el, "transform", style.transform)
    }

    fn setup_reveal(document: &Document) -> Result<(), PageError> {
        let observer = web::intersection_observer(&REVEAL_OBSERVER, |target, _| {
            if let Some(el) = target.dyn_ref::<HtmlElement>() {
                report("reveal", apply_reveal(el, &REVEAL_SHOWN));
            }
        })?;

        for el in web::query_all(document, REVEAL_SELECTOR)? {
            apply_reveal(&el, &REVEAL_HIDDEN)?;
            web::set_style(&el, "transition", REVEAL_TRANSITION)?;
            observer.observe(&el);
        }
        Ok(())
    }

    // === Terminal ===

    fn setup_terminal(document: &Document) -> Result<(), PageError> {
        let terminal = web::query(document, ".terminal-body")?;
        let reveal = Rc::new(RefCell::new(TerminalReveal::new(terminal.inner_html())));
        terminal.set_inner_html("");

        let target = terminal.clone();
        let observer = web::intersection_observer(&TERMINAL_OBSERVER, move |el, observer| {
            observer.unobserve(el);
            let terminal = target.clone();
            let reveal = reveal.clone();
            report(
                "terminal",
                web::set_timeout(TERMINAL_START_DELAY_MS, move || reveal_next(terminal, reveal)),
            );
        })?;
        observer.observe(&terminal);
        Ok(())
    }

    fn reveal_next(terminal: HtmlElement, reveal: Rc<RefCell<TerminalReveal>>) {
        let frame = reveal.borrow_mut().next_frame();
        match frame {
            RevealFrame::Partial(html) => {
                terminal.set_inner_html(&html);
                report(
                    "terminal",
                    web::set_timeout(TERMINAL_CHAR_DELAY_MS, move || reveal_next(terminal, reveal)),
                );
            }
            RevealFrame::Done(html) => terminal.set_inner_html(&html),
        }
    }

    // === Particles ===

    fn setup_particles(settings: &PageSettings) -> Result<(), PageError> {
        let mut spawner = ParticleSpawner::new(js_sys::Date::now() as u64);
        web::set_interval(settings.particle_interval_ms, move || {
            report("particles", spawn_particle(&mut spawner));
        })
    }

    fn spawn_particle(spawner: &mut ParticleSpawner) -> Result<(), PageError> {
        let document = web::document()?;
        let body = document.body().ok_or(PageError::MissingElement("body"))?;
        let viewport = web::viewport()?;
        let particle = spawner.spawn(viewport.width as f32, viewport.height as f32);

        let el: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| PageError::Js("created div is not an HtmlElement".into()))?;
        el.set_class_name(PARTICLE_CLASS);
        el.style().set_css_text(PARTICLE_CSS);
        web::set_style(&el, "left", &particle.left())?;
        web::set_style(&el, "top", &particle.top())?;
        body.append_child(&el)?;

        let keyframes = js_sys::Array::of2(
            &web::keyframe(&[
                ("transform", "translateY(0px)".into()),
                ("opacity", PARTICLE_START_OPACITY.into()),
            ])?,
            &web::keyframe(&[
                ("transform", particle.end_transform().into()),
                ("opacity", 0.0_f64.into()),
            ])?,
        );
        let animation = el.animate_with_f64(Some(&*keyframes), particle.duration_ms)?;

        let closure = Closure::once(move || el.remove());
        animation.set_onfinish(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        Ok(())
    }

    // === Contact form ===

    fn setup_contact_form(document: &Document, settings: &PageSettings) -> Result<(), PageError> {
        let form: HtmlFormElement = document
            .get_element_by_id("contact-form")
            .and_then(|el| el.dyn_into().ok())
            .ok_or(PageError::MissingElement("#contact-form"))?;

        let recipient = settings.contact_recipient.clone();
        let target = form.clone();
        web::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            report("contact form", submit_contact(&target, &recipient));
        })
    }

    fn submit_contact(form: &HtmlFormElement, recipient: &str) -> Result<(), PageError> {
        let data = web_sys::FormData::new_with_form(form)?;
        let field = |name: &str| data.get(name).as_string();
        let message =
            ContactMessage::from_fields(field("name"), field("email"), field("message"))?;

        web::window()?
            .location()
            .set_href(&message.mailto(recipient).href())?;
        log::info!("Opened mail composer");

        let button = form
            .query_selector("button[type=\"submit\"]")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(PageError::MissingElement("button[type=\"submit\"]"))?;
        let original_label = button.text_content().unwrap_or_default();
        button.set_text_content(Some(SUBMIT_FEEDBACK.label));
        web::set_style(&button, "background", SUBMIT_FEEDBACK.background)?;

        let form = form.clone();
        web::set_timeout(SUBMIT_FEEDBACK.restore_after_ms, move || {
            button.set_text_content(Some(&original_label));
            report("contact form", web::clear_style(&button, "background"));
            form.reset();
        })
    }

    // === Hover effects ===

    fn setup_hero_glitch(document: &Document) -> Result<(), PageError> {
        let title = web::query(document, ".hero-title")?;
        let events = [
            ("mouseenter", Some(HERO_GLITCH_ANIMATION)),
            ("animationend", None),
        ];
        for (event_name, animation) in events {
            let target = title.clone();
            web::listen(&title, event_name, move |_event: Event| {
                let result = match animation {
                    Some(animation) => web::set_style(&target, "animation", animation),
                    None => web::clear_style(&target, "animation"),
                };
                report("hero title", result);
            })?;
        }
        Ok(())
    }

    fn setup_skills(document: &Document) -> Result<(), PageError> {
        for skill in web::query_all(document, ".skill")? {
            for (event_name, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let target = skill.clone();
                web::listen(&skill, event_name, move |_event: Event| {
                    let result = if hovering {
                        web::set_style(&target, "background", SKILL_HOVER_BACKGROUND).and_then(
                            |_| web::set_style(&target, "transform", SKILL_HOVER_TRANSFORM),
                        )
                    } else {
                        web::clear_style(&target, "background")
                            .and_then(|_| web::clear_style(&target, "transform"))
                    };
                    report("skills", result);
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Portfolio page (native) starting...");
    log::info!("The page needs a browser - run with `trunk serve`. Replaying navigation instead.");

    replay_navigation();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Log-only view used to walk the navigation controller outside the browser
#[cfg(not(target_arch = "wasm32"))]
struct LogView;

#[cfg(not(target_arch = "wasm32"))]
impl portfolio_page::nav::NavView for LogView {
    fn check(&self) -> Result<(), portfolio_page::PageError> {
        Ok(())
    }

    fn render(
        &mut self,
        projection: &portfolio_page::nav::NavProjection,
    ) -> Result<(), portfolio_page::PageError> {
        log::info!(
            "render: menu {} | toggle display={}{}",
            if projection.menu_active { "open" } else { "closed" },
            projection.toggle.display,
            if projection.toggle.important { " !important" } else { "" }
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn replay_navigation() {
    use portfolio_page::nav::NavController;

    let mut nav = NavController::new(LogView, 400.0);
    nav.sync_toggle_visibility();
    nav.toggle_menu();
    nav.handle_resize(1024.0);

    assert!(!nav.is_open(), "menu must close on desktop");
    println!("✓ Navigation replay passed (400px open -> 1024px closed)");
}
