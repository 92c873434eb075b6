use yew::prelude::*;

use crate::data::{NAV_LINKS, OWNER_NAME, OWNER_TITLE, SOCIAL_LINKS};
use crate::frontend::{scroll_to_anchor, scroll_to_top};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    let nav_callback = |anchor: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_anchor(anchor);
        })
    };

    let on_back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <p class="footer-name">{OWNER_NAME}</p>
                    <p class="footer-title">{OWNER_TITLE}</p>
                </div>

                <nav class="footer-nav" aria-label="Footer">
                    <ul>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li key={link.href}>
                                <a href={link.href} onclick={nav_callback(link.href)}>
                                    {link.name}
                                </a>
                            </li>
                        })}
                    </ul>
                </nav>

                <ul class="footer-social" aria-label="Social links">
                    { for SOCIAL_LINKS.iter().map(|social| html! {
                        <li key={social.name}>
                            <a href={social.href} target="_blank" rel="noreferrer">
                                {social.name}
                            </a>
                        </li>
                    })}
                </ul>
            </div>

            <div class="footer-meta">
                <p>{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
                <button
                    type="button"
                    class="back-to-top"
                    aria-label="Back to top"
                    onclick={on_back_to_top}
                >
                    {"↑ Top"}
                </button>
            </div>
        </footer>
    }
}
