use yew::prelude::*;

use crate::data::EXPERIENCE;
use crate::frontend::hooks::use_reveal;
use crate::motion::toggle_expansion;

struct SummaryMetric {
    label: &'static str,
    value: &'static str,
}

const SUMMARY_METRICS: &[SummaryMetric] = &[
    SummaryMetric {
        label: "Years Experience",
        value: "4+",
    },
    SummaryMetric {
        label: "Companies",
        value: "2",
    },
    SummaryMetric {
        label: "Projects Delivered",
        value: "4+",
    },
    SummaryMetric {
        label: "Team Members Mentored",
        value: "8+",
    },
];

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let node = use_node_ref();
    let visibility = use_reveal(node.clone(), 0.1);

    // At most one row open; the first starts expanded.
    let expanded = use_state(|| Some(0usize));

    let toggle_row = {
        let expanded = expanded.clone();
        move |index: usize| {
            let expanded = expanded.clone();
            Callback::from(move |_: MouseEvent| {
                expanded.set(toggle_expansion(*expanded, index));
            })
        }
    };

    html! {
        <section
            id="experience"
            ref={node}
            aria-labelledby="timeline-title"
            class={classes!("section-block", "timeline", visibility.revealed().then_some("is-revealed"))}
        >
            <div class="section-heading">
                <h2 id="timeline-title">{"Career Journey"}</h2>
                <p class="section-lede">
                    {"Professional growth, impactful projects, and technical ownership."}
                </p>
            </div>

            <div class="timeline-rows">
                { for EXPERIENCE.iter().enumerate().map(|(index, entry)| {
                    let is_expanded = *expanded == Some(index);

                    html! {
                        <article class="timeline-row" key={entry.year}>
                            <button
                                type="button"
                                class={classes!("timeline-card", is_expanded.then_some("is-expanded"))}
                                aria-expanded={is_expanded.to_string()}
                                onclick={toggle_row(index)}
                            >
                                <p class="timeline-year">{entry.year}</p>
                                <h3 class="timeline-company">{entry.company}</h3>
                                <p class="timeline-role">{entry.role}</p>
                                if let Some(client) = entry.client {
                                    <p class="timeline-client">{client}</p>
                                }
                                if !is_expanded {
                                    <p class="timeline-preview">{entry.description}</p>
                                }
                                <span class="timeline-chevron" aria-hidden="true">
                                    {if is_expanded { "▲" } else { "▼" }}
                                </span>
                            </button>

                            if is_expanded {
                                <div class="timeline-detail">
                                    <h4>{"About this role"}</h4>
                                    <p>{entry.description}</p>

                                    if !entry.achievements.is_empty() {
                                        <h4>{"Key Achievements"}</h4>
                                        <ul class="achievement-list">
                                            { for entry.achievements.iter().map(|achievement| html! {
                                                <li key={*achievement}>{*achievement}</li>
                                            })}
                                        </ul>
                                    }
                                </div>
                            }
                        </article>
                    }
                })}
            </div>

            <div class="metric-grid">
                { for SUMMARY_METRICS.iter().map(|metric| html! {
                    <div class="metric-tile" key={metric.label}>
                        <p class="metric-value">{metric.value}</p>
                        <p class="metric-label">{metric.label}</p>
                    </div>
                })}
            </div>
        </section>
    }
}
