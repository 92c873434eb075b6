use yew::prelude::*;

use crate::data::{ABOUT_STATS, OWNER_BIO, OWNER_EMAIL, OWNER_NAME, OWNER_TITLE, PROFILE_IMAGE};
use crate::frontend::hooks::{use_count_up, use_reveal};
use crate::motion::COUNT_UP_DURATION_MS;

#[derive(Properties, PartialEq)]
struct StatTileProps {
    label: AttrValue,
    end: u64,
    suffix: AttrValue,
    active: bool,
}

#[function_component(StatTile)]
fn stat_tile(props: &StatTileProps) -> Html {
    let value = use_count_up(props.end, COUNT_UP_DURATION_MS, props.active);

    html! {
        <div class="stat-tile">
            <p class="stat-value">
                {value}
                <span class="stat-suffix">{props.suffix.clone()}</span>
            </p>
            <p class="stat-label">{props.label.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileImageProps {
    src: AttrValue,
    alt: AttrValue,
}

// Missing assets degrade to a text placeholder instead of a broken image.
#[function_component(ProfileImage)]
fn profile_image(props: &ProfileImageProps) -> Html {
    let broken = use_state(|| false);

    {
        let broken = broken.clone();
        use_effect_with(props.src.clone(), move |_| {
            broken.set(false);
            || ()
        });
    }

    if *broken {
        return html! {
            <div class="media-fallback profile-fallback">{props.alt.clone()}</div>
        };
    }

    let onerror = {
        let broken = broken.clone();
        Callback::from(move |_| broken.set(true))
    };

    html! {
        <img
            class="profile-photo"
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            onerror={onerror}
        />
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let visibility = use_reveal(node.clone(), 0.2);
    let revealed = visibility.revealed();

    html! {
        <section
            id="about"
            ref={node}
            aria-labelledby="about-title"
            class={classes!("section-block", "about", revealed.then_some("is-revealed"))}
        >
            <div class="section-heading">
                <h2 id="about-title">{"About Me"}</h2>
                <p class="section-lede">
                    {"Backend-focused Java developer with 4+ years designing and building \
                      highly available microservices for banking and financial markets."}
                </p>
            </div>

            <div class="about-grid">
                <div class="profile-card">
                    <ProfileImage src={PROFILE_IMAGE} alt={OWNER_NAME} />
                    <div class="profile-copy">
                        <h3>{OWNER_NAME}</h3>
                        <p class="profile-title">{OWNER_TITLE}</p>
                        <p class="profile-bio">{OWNER_BIO}</p>
                        <a class="btn btn-ghost" href={format!("mailto:{OWNER_EMAIL}")}>
                            {"Get In Touch"}
                        </a>
                    </div>
                </div>

                <div class="stat-grid">
                    { for ABOUT_STATS.iter().map(|stat| html! {
                        <StatTile
                            key={stat.label}
                            label={stat.label}
                            end={stat.end}
                            suffix={stat.suffix}
                            active={revealed}
                        />
                    })}
                </div>
            </div>
        </section>
    }
}
