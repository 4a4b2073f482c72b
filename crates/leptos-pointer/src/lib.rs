//! Leptos Pointer Utilities
//!
//! Press-and-hold repetition for Leptos using mouse events.
//! A held button fires a tick on a fixed period until it is released,
//! the pointer leaves it, or the mouse is released anywhere in the document.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Primary (left) mouse button as reported by `MouseEvent.button`
const PRIMARY_BUTTON: i16 = 0;

/// Repeating timer bound to a held button.
///
/// Dropping the inner `Interval` cancels it, so at most one timer runs per
/// `HoldRepeat` at any time.
#[derive(Clone, Copy)]
pub struct HoldRepeat {
    interval: StoredValue<Option<Interval>, LocalStorage>,
    period_ms: u32,
}

impl HoldRepeat {
    pub fn new(period_ms: u32) -> Self {
        Self {
            interval: StoredValue::new_local(None),
            period_ms,
        }
    }

    /// Start repeating `tick`, replacing any running timer
    pub fn start<F>(&self, tick: F)
    where
        F: FnMut() + 'static,
    {
        let interval = Interval::new(self.period_ms, tick);
        self.interval.set_value(Some(interval));
    }

    /// Stop the running timer, if any
    pub fn stop(&self) {
        let _ = self.interval.try_update_value(|interval| {
            interval.take();
        });
    }

    pub fn is_running(&self) -> bool {
        self.interval
            .try_with_value(|interval| interval.is_some())
            .unwrap_or(false)
    }
}

/// Create mousedown handler for the primary button: `tick` fires once
/// right away, then on every period while the button is held
pub fn make_on_hold<F>(hold: HoldRepeat, tick: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == PRIMARY_BUTTON {
            ev.prevent_default();
            tick();
            hold.start(tick.clone());
        }
    }
}

/// Create mouseup / mouseleave handler that stops the timer
pub fn make_on_release(hold: HoldRepeat) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        hold.stop();
    }
}

/// Bind a document-level mouseup handler so a release outside the
/// held button still stops the timer
pub fn bind_document_release(hold: HoldRepeat) {
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if hold.is_running() {
            hold.stop();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
}
