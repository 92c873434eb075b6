use yew::prelude::*;

use crate::data::{HERO_ROLES, OWNER_INTRO, OWNER_NAME, OWNER_TAGLINE, POWERS, SOCIAL_LINKS};
use crate::frontend::hooks::{use_caret_blink, use_reveal, use_typewriter};
use crate::frontend::scroll_to_anchor;
use crate::motion::TypewriterTiming;

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let visibility = use_reveal(node.clone(), 0.2);
    let typed = use_typewriter(HERO_ROLES, TypewriterTiming::default());
    let caret_visible = use_caret_blink();

    let on_cta = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll_to_anchor("#contact");
    });

    html! {
        <section
            id="hero"
            ref={node}
            aria-labelledby="hero-title"
            class={classes!("hero", visibility.revealed().then_some("is-revealed"))}
        >
            <div class="hero-backdrop" aria-hidden="true" />

            <div class="hero-content">
                <p class="hero-intro">{OWNER_INTRO}</p>
                <h1 id="hero-title" class="hero-name">{OWNER_NAME}</h1>
                <p class="hero-tagline">{OWNER_TAGLINE}</p>

                <p class="hero-roles">
                    <span class="typed-role">{typed}</span>
                    <span
                        class={classes!("caret", caret_visible.then_some("is-visible"))}
                        aria-hidden="true"
                    >
                        {"|"}
                    </span>
                </p>

                <div class="powers-strip">
                    { for POWERS.iter().map(|power| html! {
                        <div class="power-badge" key={power.label}>
                            <div class="power-heading">
                                <span class="power-value">{power.value}</span>
                                <span class="power-label">{power.label}</span>
                            </div>
                            <p class="power-sub">{power.sub}</p>
                        </div>
                    })}
                </div>

                <div class="hero-actions">
                    <a class="btn btn-primary" href="#contact" onclick={on_cta}>
                        {"Get In Touch"}
                    </a>
                    <div class="hero-social">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                key={social.name}
                                class="social-link"
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={social.name}
                            >
                                {social.name}
                            </a>
                        })}
                    </div>
                </div>
            </div>

            <div class="scroll-hint" aria-hidden="true">
                <span class="scroll-hint-dot" />
            </div>
        </section>
    }
}
