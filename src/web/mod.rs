//! DOM adapters (wasm32 only)
//!
//! Thin wrappers over `web-sys` that turn `JsValue` failures and missing
//! elements into `PageError`. Closures registered here live for the whole
//! page and are intentionally leaked with `Closure::forget`.

pub mod nav_view;

pub use nav_view::DomNavView;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::effects::{STYLESHEET, STYLESHEET_ID};
use crate::error::{PageError, timer_delay};
use crate::sections::ObserverConfig;
use crate::viewport::Viewport;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingElement("window"))
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::MissingElement("document"))
}

/// Current window size and touch capability
pub fn viewport() -> Result<Viewport, PageError> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let touch = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    Ok(Viewport::new(width, height, touch))
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// First element matching `selector`
pub fn query(document: &Document, selector: &'static str) -> Result<HtmlElement, PageError> {
    document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(PageError::MissingElement(selector))
}

/// Every element matching `selector`; empty is not an error
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

/// Descendants of `parent` matching `selector`
pub fn children(parent: &Element, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
    Ok(html_elements(&parent.query_selector_all(selector)?))
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, name: &str, value: &str) -> Result<(), PageError> {
    el.style().set_property(name, value)?;
    Ok(())
}

pub fn clear_style(el: &HtmlElement, name: &str) -> Result<(), PageError> {
    el.style().remove_property(name)?;
    Ok(())
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), PageError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Register an event handler for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(_)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_timeout<F>(delay_ms: u32, callback: F) -> Result<(), PageError>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(callback);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timer_delay(delay_ms)?,
    )?;
    closure.forget();
    Ok(())
}

pub fn set_interval<F>(interval_ms: u32, callback: F) -> Result<(), PageError>
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(callback);
    window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timer_delay(interval_ms)?,
    )?;
    closure.forget();
    Ok(())
}

pub fn request_frame<F>(callback: F) -> Result<(), PageError>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(move |_time: f64| callback());
    window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Observer that calls `on_visible` for every entry that starts intersecting
pub fn intersection_observer<F>(
    config: &ObserverConfig,
    mut on_visible: F,
) -> Result<IntersectionObserver, PageError>
where
    F: FnMut(&Element, &IntersectionObserver) + 'static,
{
    let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(config.root_margin);

    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    Ok(observer)
}

/// Build one Web Animations keyframe
pub fn keyframe(props: &[(&str, JsValue)]) -> Result<js_sys::Object, PageError> {
    let frame = js_sys::Object::new();
    for (name, value) in props {
        js_sys::Reflect::set(&frame, &JsValue::from_str(name), value)?;
    }
    Ok(frame)
}

pub fn scroll_into_view(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() -> Result<(), PageError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Append the effects stylesheet to `<head>` unless it is already there
pub fn inject_styles(document: &Document) -> Result<(), PageError> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(STYLESHEET));
    document
        .head()
        .ok_or(PageError::MissingElement("head"))?
        .append_child(&style)?;
    Ok(())
}
