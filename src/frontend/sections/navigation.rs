use yew::prelude::*;

use crate::data::NAV_LINKS;
use crate::frontend::hooks::use_scroll_snapshot;
use crate::frontend::scroll_to_anchor;
use crate::frontend::theme::ThemeHandle;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let snapshot = use_scroll_snapshot();
    let menu_open = use_state(|| false);
    let theme = use_context::<ThemeHandle>();

    let nav_callback = {
        let menu_open = menu_open.clone();
        move |href: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                menu_open.set(false);
                scroll_to_anchor(href);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let header_class = classes!(
        "site-nav",
        snapshot.is_scrolled().then_some("is-scrolled"),
        snapshot.hides_navigation().then_some("is-hidden"),
    );

    html! {
        <header class={header_class}>
            <nav class="nav-inner" aria-label="Primary">
                <a class="nav-brand" href="#hero" onclick={nav_callback("#hero")}>
                    <span class="nav-mark" aria-hidden="true">{"VR"}</span>
                    <span class="nav-name">{"VINEETH"}</span>
                </a>

                <ul class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li key={link.name}>
                            <a href={link.href} onclick={nav_callback(link.href)}>{link.name}</a>
                        </li>
                    })}
                </ul>

                <div class="nav-actions">
                    if let Some(handle) = theme {
                        <button
                            class="theme-toggle"
                            type="button"
                            aria-label={handle.theme.toggle_label()}
                            aria-pressed={handle.theme.pressed().to_string()}
                            onclick={handle.on_toggle.clone()}
                        >
                            <span aria-hidden="true">{handle.theme.icon()}</span>
                        </button>
                    }
                    <a class="nav-cta" href="#contact" onclick={nav_callback("#contact")}>
                        {"Get In Touch"}
                    </a>
                    <button
                        class="nav-menu-toggle"
                        type="button"
                        aria-expanded={menu_open.to_string()}
                        aria-label="Toggle menu"
                        onclick={toggle_menu}
                    >
                        <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </nav>

            if *menu_open {
                <ul class="nav-mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li key={link.name}>
                            <a href={link.href} onclick={nav_callback(link.href)}>{link.name}</a>
                        </li>
                    })}
                </ul>
            }
        </header>
    }
}
