use dioxus::prelude::*;

use literacy_core::model::{ModuleId, SessionProgress};
use services::catalog;

use crate::context::AppContext;
use crate::views::shared::{ScoreBadge, report_result};

/// Mechanics tab: the seven-stage pipeline walkthrough and the
/// assign-to-category game.
#[component]
pub fn MechanicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut progress = use_context::<Signal<SessionProgress>>();
    let catalog = ctx.catalog();
    let mut assignment = use_signal(move || catalog.assignment());
    let mut step = use_signal(|| 0usize);

    let steps = catalog::pipeline_steps();
    let step_count = steps.len();
    let current_step = step().min(step_count - 1);
    let stage = &steps[current_step];

    let game = assignment.read();
    let categories: Vec<String> = game.categories().to_vec();
    let items: Vec<(String, Option<usize>, Option<bool>)> = game
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| (item.text().to_string(), game.assignment(i), game.correct(i)))
        .collect();
    let submitted = game.is_submitted();
    let ready = game.is_ready();
    let result = game.result();
    drop(game);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "{ModuleId::Mechanics.label()}" }
                p { class: "view-subtitle",
                    "What actually happens between your question and the answer."
                }
            }

            section { class: "card",
                h3 { "The language-model pipeline, step by step" }
                div { class: "pipeline-nav",
                    for (i, s) in steps.iter().enumerate() {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: if i == current_step { "pipeline-pill active" } else { "pipeline-pill" },
                            onclick: move |_| step.set(i),
                            "{i + 1} {s.subtitle}"
                        }
                    }
                }
                div { class: "pipeline-stage",
                    h4 { "{stage.title}" }
                    p { class: "pipeline-subtitle", "{stage.subtitle}" }
                    p { "{stage.summary}" }
                }
                div { class: "pipeline-pager",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: current_step == 0,
                        onclick: move |_| step.set(current_step.saturating_sub(1)),
                        "Previous"
                    }
                    span { class: "pipeline-count", "{current_step + 1}/{step_count}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: current_step + 1 == step_count,
                        onclick: move |_| step.set(current_step + 1),
                        "Next"
                    }
                }
            }

            section { class: "card game-card",
                h3 { "Which kind of AI is it?" }
                p { class: "game-hint",
                    "File each example under the technique that powers it, then submit."
                }
                div { class: "assignment",
                    for (item_index, (text, assigned, correct)) in items.into_iter().enumerate() {
                        div {
                            key: "{item_index}",
                            class: match correct {
                                Some(true) => "assignment-item item-correct",
                                Some(false) => "assignment-item item-wrong",
                                None => "assignment-item",
                            },
                            span { class: "assignment-text", "{text}" }
                            div { class: "assignment-choices",
                                for (category_index, category) in categories.iter().enumerate() {
                                    button {
                                        key: "{category_index}",
                                        r#type: "button",
                                        class: if assigned == Some(category_index) {
                                            "choice choice-picked"
                                        } else {
                                            "choice"
                                        },
                                        disabled: submitted,
                                        onclick: move |_| {
                                            let _ = assignment
                                                .write()
                                                .assign(item_index, category_index);
                                        },
                                        "{category}"
                                    }
                                }
                            }
                        }
                    }
                }
                if let Some((score, total)) = result {
                    div { class: "game-complete",
                        ScoreBadge { score, total }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| assignment.write().reset(),
                            "Play again"
                        }
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !ready,
                        onclick: move |_| {
                            if let Ok((score, total)) = assignment.write().submit() {
                                report_result(
                                    &mut progress,
                                    &clock,
                                    ModuleId::Mechanics,
                                    score,
                                    total,
                                );
                            }
                        },
                        "Submit"
                    }
                }
            }
        }
    }
}
