//! Scoped DOM event listener registration
//!
//! Every listener added through `EventListeners` is removed when the guard is
//! cleared or dropped, so a torn-down game leaves no handlers behind.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

struct Registration {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

#[derive(Default)]
pub struct EventListeners {
    registrations: Vec<Registration>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event` on `target`.
    ///
    /// Events that don't cast to `E` are skipped. `passive: false` is needed
    /// for handlers that call `prevent_default` on touch events.
    pub fn add<E, F>(&mut self, target: &EventTarget, event: &'static str, passive: bool, handler: F)
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let mut handler = handler;
        let callback = Closure::<dyn FnMut(Event)>::new(move |raw: Event| {
            if let Ok(typed) = raw.dyn_into::<E>() {
                handler(typed);
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => self.registrations.push(Registration {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => log::warn!("Failed to add '{}' listener: {:?}", event, e),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Remove every registered listener
    pub fn clear(&mut self) {
        for reg in self.registrations.drain(..) {
            let _ = reg
                .target
                .remove_event_listener_with_callback(reg.event, reg.callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventListeners {
    fn drop(&mut self) {
        self.clear();
    }
}
