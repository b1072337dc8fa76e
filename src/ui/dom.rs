//! Document bindings for the page interactions.
//!
//! `bind` wires every listener once and returns the closures so they stay
//! alive for the page lifetime. Missing elements are skipped silently; a page
//! without a hamburger button simply has no mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use super::nav::{ACTIVE_CLASS, SCROLLED_CLASS};
use super::{
    fragment_target, scroll_target, HoverStyle, NavChange, NavState, RevealStyle,
    BODY_LOADED_CLASS, CARD_SELECTORS,
};
use crate::config::{NavConfig, PortfolioConfig, RevealConfig};

type EventClosure = Closure<dyn FnMut(Event)>;

/// Live listeners and observers; dropping this detaches nothing but frees the
/// Rust side, so keep it for the page lifetime.
#[derive(Default)]
pub struct UiBindings {
    closures: Vec<EventClosure>,
    observer: Option<IntersectionObserver>,
    _observer_closure: Option<Closure<dyn FnMut(js_sys::Array)>>,
}

impl UiBindings {
    pub fn listener_count(&self) -> usize {
        self.closures.len()
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn listen(target: &Element, event: &str, closure: EventClosure, closures: &mut Vec<EventClosure>) {
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closures.push(closure);
}

fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Bind navigation, reveal, anchor scrolling, card hover and the load
/// indicator. `loaded_summary` reports `(loaded, total)` frames for the load
/// log line.
pub fn bind(config: &PortfolioConfig, loaded_summary: impl Fn() -> (usize, usize) + 'static) -> UiBindings {
    let mut bindings = UiBindings::default();
    let Some(window) = web_sys::window() else {
        return bindings;
    };
    let Some(document) = window.document() else {
        return bindings;
    };

    bind_nav(&window, &document, &config.nav, &mut bindings.closures);
    bind_anchors(&window, &document, &config.nav, &mut bindings.closures);
    bind_hover(&document, &mut bindings.closures);
    if let Some((observer, closure)) = bind_reveal(&document, &config.reveal) {
        bindings.observer = Some(observer);
        bindings._observer_closure = Some(closure);
    }
    bind_load_indicator(&window, &document, loaded_summary, &mut bindings.closures);

    bindings
}

fn bind_nav(window: &Window, document: &Document, config: &NavConfig, closures: &mut Vec<EventClosure>) {
    let state = Rc::new(RefCell::new(NavState::new(config.scrolled_threshold)));
    let hamburger = query_one(document, &config.hamburger_selector);
    let menu = query_one(document, &config.menu_selector);
    let navbar = query_one(document, &config.navbar_selector);

    let apply_menu = {
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        move |change: NavChange| {
            let open = match change {
                NavChange::MenuOpened => true,
                NavChange::MenuClosed => false,
                _ => return,
            };
            for el in hamburger.iter().chain(menu.iter()) {
                set_class(el, ACTIVE_CLASS, open);
            }
        }
    };
    let apply_menu = Rc::new(apply_menu);

    if let Some(button) = &hamburger {
        let state = Rc::clone(&state);
        let apply = Rc::clone(&apply_menu);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let change = state.borrow_mut().toggle_menu();
            apply(change);
        }) as Box<dyn FnMut(Event)>);
        listen(button, "click", closure, closures);
    }

    for link in query_all(document, &config.link_selector) {
        let state = Rc::clone(&state);
        let apply = Rc::clone(&apply_menu);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let change = state.borrow_mut().close_menu();
            apply(change);
        }) as Box<dyn FnMut(Event)>);
        listen(&link, "click", closure, closures);
    }

    if let Some(navbar) = navbar {
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            match state.borrow_mut().update_scroll(scroll_y) {
                NavChange::ScrolledOn => set_class(&navbar, SCROLLED_CLASS, true),
                NavChange::ScrolledOff => set_class(&navbar, SCROLLED_CLASS, false),
                _ => {}
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closures.push(closure);
    }
}

fn bind_anchors(window: &Window, document: &Document, config: &NavConfig, closures: &mut Vec<EventClosure>) {
    for anchor in query_all(document, r##"a[href^="#"]"##) {
        let win = window.clone();
        let doc = document.clone();
        let navbar_selector = config.navbar_selector.clone();
        let link = anchor.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = fragment_target(&href) else {
                return;
            };
            let Some(target) = query_one(&doc, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let navbar_height = query_one(&doc, &navbar_selector)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |nav| f64::from(nav.offset_height()));

            let options = ScrollToOptions::new();
            options.set_top(scroll_target(f64::from(target.offset_top()), navbar_height));
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }) as Box<dyn FnMut(Event)>);
        listen(&anchor, "click", closure, closures);
    }
}

fn bind_hover(document: &Document, closures: &mut Vec<EventClosure>) {
    let style = HoverStyle::default();
    for card in query_all(document, CARD_SELECTORS) {
        let Ok(card_el) = card.clone().dyn_into::<HtmlElement>() else {
            continue;
        };
        for (event, transform) in [
            ("mouseenter", style.enter_transform),
            ("mouseleave", style.leave_transform),
        ] {
            let el = card_el.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let _ = el.style().set_property("transform", transform);
            }) as Box<dyn FnMut(Event)>);
            listen(&card, event, closure, closures);
        }
    }
}

fn bind_reveal(
    document: &Document,
    config: &RevealConfig,
) -> Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> {
    let style = Rc::new(RevealStyle::from_config(config));

    let shown = Rc::clone(&style);
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                let css = target.style();
                let _ = css.set_property("opacity", shown.shown_opacity);
                let _ = css.set_property("transform", shown.shown_transform);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer = match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            tracing::warn!("reveal observer unavailable: {err:?}");
            return None;
        }
    };

    for section in query_all(document, &config.section_selector) {
        if let Some(el) = section.dyn_ref::<HtmlElement>() {
            let css = el.style();
            let _ = css.set_property("opacity", style.hidden_opacity);
            let _ = css.set_property("transform", &style.hidden_transform);
            let _ = css.set_property("transition", &style.transition);
        }
        observer.observe(&section);
    }

    Some((observer, closure))
}

fn mark_page_loaded(document: &Document, loaded_summary: &dyn Fn() -> (usize, usize)) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(BODY_LOADED_CLASS);
    }
    let (loaded, total) = loaded_summary();
    tracing::info!("portfolio page loaded");
    tracing::info!("canvas animation with {total} frames");
    tracing::info!("images loaded: {loaded}/{total}");
}

/// Run the load indicator on window `load`, or right away when the module
/// was mounted after the document finished loading.
fn bind_load_indicator(
    window: &Window,
    document: &Document,
    loaded_summary: impl Fn() -> (usize, usize) + 'static,
    closures: &mut Vec<EventClosure>,
) {
    if document.ready_state() == "complete" {
        mark_page_loaded(document, &loaded_summary);
        return;
    }
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        mark_page_loaded(&doc, &loaded_summary);
    }) as Box<dyn FnMut(Event)>);
    let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closures.push(closure);
}
