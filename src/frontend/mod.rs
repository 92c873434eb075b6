mod hooks;
mod sections;
mod theme;

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use crate::motion::ScrollSnapshot;
use sections::{About, ContactSection, Footer, Hero, Navigation, Projects, Skills, Timeline};
use theme::{apply_theme, Theme, ThemeHandle};

pub fn scroll_to_anchor(selector: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Ok(Some(element)) = document.query_selector(selector) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn current_scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
struct ScrollTelemetryProps {
    children: Html,
}

/// Owns the process-wide scroll snapshot and hands it to every section
/// through context, so tests and subtrees never reach for ambient globals.
#[function_component(ScrollTelemetry)]
fn scroll_telemetry(props: &ScrollTelemetryProps) -> Html {
    let snapshot = use_state(ScrollSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let mut listener = None;

            if let Some(win) = window() {
                let tracked = Rc::new(Cell::new(ScrollSnapshot::default()));

                // gloo listeners are passive by default, so sampling never
                // blocks the scroll gesture.
                listener = Some(EventListener::new(&win, "scroll", move |_| {
                    let next = tracked.get().observe(current_scroll_offset());
                    tracked.set(next);
                    snapshot.set(next);
                }));
            }

            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<ScrollSnapshot> context={*snapshot}>
            {props.children.clone()}
        </ContextProvider<ScrollSnapshot>>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(|| Theme::Dark);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            apply_theme(next);
            theme.set(next);
        })
    };

    let theme_handle = ThemeHandle {
        theme: *theme,
        on_toggle,
    };

    html! {
        <ContextProvider<ThemeHandle> context={theme_handle}>
            <ScrollTelemetry>
                <div class="page-shell">
                    <Navigation />
                    <main class="page-main">
                        <Hero />
                        <About />
                        <Skills />
                        <Timeline />
                        <Projects />
                        <ContactSection />
                    </main>
                    <Footer />
                </div>
            </ScrollTelemetry>
        </ContextProvider<ThemeHandle>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
