use yew::prelude::*;

use crate::data::PROJECTS;
use crate::frontend::hooks::use_reveal;
use crate::motion::{carousel_next, carousel_previous};

#[derive(Properties, PartialEq)]
struct ProjectMediaProps {
    src: AttrValue,
    alt: AttrValue,
    title: AttrValue,
}

#[function_component(ProjectMedia)]
fn project_media(props: &ProjectMediaProps) -> Html {
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
            <div class="media-fallback project-fallback">{props.title.clone()}</div>
        };
    }

    let onerror = {
        let broken = broken.clone();
        Callback::from(move |_| broken.set(true))
    };

    html! {
        <img
            class="project-media"
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            onerror={onerror}
        />
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let node = use_node_ref();
    let visibility = use_reveal(node.clone(), 0.15);
    let selected = use_state(|| 0usize);

    let count = PROJECTS.len();
    let index = (*selected).min(count - 1);
    let project = &PROJECTS[index];

    let go_previous = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(carousel_previous(*selected, count));
        })
    };

    let go_next = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(carousel_next(*selected, count));
        })
    };

    let select_dot = {
        let selected = selected.clone();
        move |target: usize| {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(target))
        }
    };

    html! {
        <section
            id="projects"
            ref={node}
            aria-labelledby="projects-title"
            class={classes!("section-block", "projects", visibility.revealed().then_some("is-revealed"))}
        >
            <div class="section-heading">
                <h2 id="projects-title">{"Projects"}</h2>
                <p class="section-lede">
                    {"Selected production systems I designed, built, and ran."}
                </p>
            </div>

            <div class="project-carousel">
                <button
                    type="button"
                    class="carousel-arrow"
                    aria-label="Previous project"
                    onclick={go_previous}
                >
                    {"‹"}
                </button>

                <article class="project-card" key={project.id}>
                    <ProjectMedia
                        src={project.image}
                        alt={format!("{} preview", project.title)}
                        title={project.title}
                    />
                    <div class="project-copy">
                        <h3>{project.title}</h3>
                        <p class="project-blurb">{project.description}</p>
                        <p class="project-detail">{project.long_description}</p>
                        <ul class="project-tags">
                            { for project.tags.iter().map(|tag| html! {
                                <li class="tag-pill" key={*tag}>{*tag}</li>
                            })}
                        </ul>
                    </div>
                </article>

                <button
                    type="button"
                    class="carousel-arrow"
                    aria-label="Next project"
                    onclick={go_next}
                >
                    {"›"}
                </button>
            </div>

            <div class="carousel-dots" role="tablist" aria-label="Projects">
                { for PROJECTS.iter().enumerate().map(|(dot_index, entry)| {
                    let is_current = dot_index == index;
                    html! {
                        <button
                            key={entry.id}
                            type="button"
                            role="tab"
                            class={classes!("carousel-dot", is_current.then_some("is-active"))}
                            aria-selected={is_current.to_string()}
                            aria-label={entry.title}
                            onclick={select_dot(dot_index)}
                        />
                    }
                })}
            </div>
        </section>
    }
}
