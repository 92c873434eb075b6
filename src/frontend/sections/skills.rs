use yew::prelude::*;

use crate::data::{CORE_STACK, SKILL_CATEGORIES};
use crate::frontend::hooks::use_reveal;

#[function_component(Skills)]
pub fn skills() -> Html {
    let node = use_node_ref();
    let visibility = use_reveal(node.clone(), 0.15);
    let active_tab = use_state(|| 0usize);

    let select_tab = {
        let active_tab = active_tab.clone();
        move |index: usize| {
            let active_tab = active_tab.clone();
            Callback::from(move |_: MouseEvent| active_tab.set(index))
        }
    };

    let category = &SKILL_CATEGORIES[(*active_tab).min(SKILL_CATEGORIES.len() - 1)];

    html! {
        <section
            id="skills"
            ref={node}
            aria-labelledby="skills-title"
            class={classes!("section-block", "skills", visibility.revealed().then_some("is-revealed"))}
        >
            <div class="section-heading">
                <h2 id="skills-title">{"Skills"}</h2>
                <p class="section-lede">
                    {"The stack I reach for when building resilient backend systems."}
                </p>
            </div>

            <ul class="core-stack" aria-label="Core stack">
                { for CORE_STACK.iter().map(|item| html! {
                    <li class="stack-pill" key={*item}>{*item}</li>
                })}
            </ul>

            <div class="skills-tabs" role="tablist" aria-label="Skill categories">
                { for SKILL_CATEGORIES.iter().enumerate().map(|(index, entry)| {
                    let selected = index == *active_tab;
                    html! {
                        <button
                            key={entry.name}
                            type="button"
                            role="tab"
                            class={classes!("skills-tab", selected.then_some("is-active"))}
                            aria-selected={selected.to_string()}
                            onclick={select_tab(index)}
                        >
                            {entry.name}
                        </button>
                    }
                })}
            </div>

            <ul class="skill-rows" role="tabpanel">
                { for category.skills.iter().map(|skill| html! {
                    <li class="skill-row" key={skill.name}>
                        <div class="skill-heading">
                            <span class="skill-name">{skill.name}</span>
                            <span class={skill.level.badge_class()}>{skill.level.as_str()}</span>
                        </div>
                        <p class="skill-description">{skill.description}</p>
                    </li>
                })}
            </ul>
        </section>
    }
}
