//! Chat panel bindings.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::client::GeminiClient;
use super::relay::{prepare_input, reply_or_apology, ChatMessage};
use super::session::ChatSession;
use crate::config::ChatConfig;

/// Class that hides the chat container.
pub const HIDDEN_CLASS: &str = "chat-hidden";

const TOGGLE_ID: &str = "chat-toggle";
const CONTAINER_ID: &str = "chat-container";
const CLOSE_ID: &str = "close-chat";
const INPUT_ID: &str = "chat-input";
const SEND_ID: &str = "chat-send";
const MESSAGES_ID: &str = "chat-messages";

type EventClosure = Closure<dyn FnMut(Event)>;

/// Keeps the widget's listeners alive.
pub struct ChatWidget {
    _closures: Vec<EventClosure>,
}

struct Relay {
    client: GeminiClient,
    session: RefCell<ChatSession>,
    document: Document,
    input: HtmlInputElement,
    messages: Element,
}

impl Relay {
    fn append(&self, message: &ChatMessage) {
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        let [base, role] = message.author.css_classes();
        let _ = el.class_list().add_2(base, role);
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            html.set_inner_text(&message.text);
        }
        let _ = self.messages.append_child(&el);
        self.messages.set_scroll_top(self.messages.scroll_height());
    }

    fn submit(self: &Rc<Self>) {
        let raw = self.input.value();
        let Some(text) = prepare_input(&raw).map(str::to_string) else {
            return;
        };
        self.append(&ChatMessage::user(text.as_str()));
        self.input.set_value("");

        let relay = Rc::clone(self);
        spawn_local(async move {
            // Clone so no borrow is held across the await.
            let session = relay.session.borrow().clone();
            let result = relay.client.send(&session, &text).await;
            if let Ok(reply) = &result {
                relay.session.borrow_mut().record_exchange(&text, reply);
            }
            relay.append(&reply_or_apology(result));
        });
    }
}

/// Bind the chat panel. Returns `None` when the relay is disabled or the
/// panel markup is missing.
pub fn bind(document: &Document, config: &ChatConfig) -> Option<ChatWidget> {
    let Some(client) = GeminiClient::from_config(config) else {
        tracing::warn!("chat relay disabled: no API key configured");
        return None;
    };
    let container = document.get_element_by_id(CONTAINER_ID)?;
    let input = document
        .get_element_by_id(INPUT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    let messages = document.get_element_by_id(MESSAGES_ID)?;

    let relay = Rc::new(Relay {
        client,
        session: RefCell::new(ChatSession::new(config.model.clone(), &config.persona)),
        document: document.clone(),
        input: input.clone(),
        messages,
    });
    let mut closures = Vec::new();

    if let Some(toggle) = document.get_element_by_id(TOGGLE_ID) {
        let container = container.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let _ = container.class_list().toggle(HIDDEN_CLASS);
            tracing::debug!("chat toggled");
        }) as Box<dyn FnMut(Event)>);
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closures.push(closure);
    }

    if let Some(close) = document.get_element_by_id(CLOSE_ID) {
        let container = container.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let _ = container.class_list().add_1(HIDDEN_CLASS);
        }) as Box<dyn FnMut(Event)>);
        let _ = close.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closures.push(closure);
    }

    if let Some(send) = document.get_element_by_id(SEND_ID) {
        let relay = Rc::clone(&relay);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            relay.submit();
        }) as Box<dyn FnMut(Event)>);
        let _ = send.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closures.push(closure);
    }

    {
        let relay = Rc::clone(&relay);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let is_enter = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Enter");
            if is_enter {
                relay.submit();
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = input.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref());
        closures.push(closure);
    }

    tracing::info!("chat relay bound to model {}", config.model);
    Some(ChatWidget {
        _closures: closures,
    })
}
