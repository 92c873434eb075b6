use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::motion::{self, ScrollSnapshot, Typewriter, TypewriterTiming, VisibilityState};

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[hook]
pub fn use_scroll_snapshot() -> ScrollSnapshot {
    use_context::<ScrollSnapshot>().unwrap_or_default()
}

/// One-shot reveal detector: watches the referenced region until it first
/// intersects the viewport, then disconnects so entrance animations never
/// replay. Regions that never intersect simply stay unrevealed.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> VisibilityState {
    let state = use_state(VisibilityState::default);

    {
        let state = state.clone();
        use_effect_with(node, move |node| {
            let mut watcher: Option<(
                IntersectionObserver,
                Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
            )> = None;

            if let Some(element) = node.cast::<Element>() {
                let tracked = Rc::new(Cell::new(VisibilityState::default()));
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            let next = tracked.get().observe(entry.is_intersecting());
                            tracked.set(next);
                            state.set(next);

                            if next.has_ever_intersected {
                                observer.disconnect();
                            }
                        }
                    },
                );

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(threshold));

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                ) {
                    observer.observe(&element);
                    watcher = Some((observer, callback));
                }
            }

            move || {
                if let Some((observer, callback)) = watcher {
                    observer.disconnect();
                    drop(callback);
                }
            }
        });
    }

    *state
}

/// Animates 0..=end over `duration_ms` once `active` flips on. Changing the
/// target, the duration, or the activation flag restarts from zero; there is
/// no pause/resume.
#[hook]
pub fn use_count_up(end: u64, duration_ms: f64, active: bool) -> u64 {
    let value = use_state(|| 0);

    {
        let value = value.clone();
        use_effect_with((end, duration_ms, active), move |(end, duration_ms, active)| {
            let mut ticker = None;

            if *active {
                let end = *end;
                let duration_ms = *duration_ms;
                let started_at = now_ms();
                let done = Cell::new(false);
                value.set(0);

                ticker = Some(Interval::new(16, move || {
                    if done.get() {
                        return;
                    }

                    let current = motion::count_up_value(end, duration_ms, now_ms() - started_at);
                    if current >= end {
                        done.set(true);
                    }
                    value.set(current);
                }));
            }

            move || drop(ticker)
        });
    }

    *value
}

/// Infinite self-driving role cycle; cancelled only when the component using
/// it unmounts.
#[hook]
pub fn use_typewriter(roles: &'static [&'static str], timing: TypewriterTiming) -> String {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with((roles, timing), move |(roles, timing)| {
            let machine = Rc::new(RefCell::new(Typewriter::new(*roles, *timing, now_ms())));

            let ticker = Interval::new(30, move || {
                let mut machine = machine.borrow_mut();
                if machine.step_until(now_ms()) {
                    text.set(machine.text());
                }
            });

            move || drop(ticker)
        });
    }

    (*text).clone()
}

/// Caret visibility toggle on a fixed interval, independent of typing
/// progress.
#[hook]
pub fn use_caret_blink() -> bool {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let current = Cell::new(true);

            let ticker = Interval::new(motion::CARET_BLINK_MS, move || {
                let next = !current.get();
                current.set(next);
                visible.set(next);
            });

            move || drop(ticker)
        });
    }

    *visible
}
