use dioxus::prelude::*;

use literacy_core::model::{ModuleId, SessionProgress};
use services::catalog;

use crate::context::AppContext;
use crate::views::shared::{ScoreBadge, report_result};

/// Concepts tab: glossary accordion, history timeline and the
/// twelve-question concept quiz.
#[component]
pub fn ConceptsView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut progress = use_context::<Signal<SessionProgress>>();
    let catalog = ctx.catalog();
    let mut quiz = use_signal(move || catalog.quiz());
    let mut open_concept = use_signal(|| None::<usize>);
    let mut open_era = use_signal(|| None::<usize>);

    let game = quiz.read();
    let finished = game.is_finished();
    let index = game.index();
    let len = game.len();
    let selected = game.selected();
    let score = game.score();
    let total = game.total();
    let tally: Vec<bool> = game.tally().to_vec();
    let current = game
        .current()
        .map(|q| (q.prompt().to_string(), q.options().to_vec(), q.answer()));
    drop(game);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "{ModuleId::Concepts.label()}" }
                p { class: "view-subtitle",
                    "From algorithms to superintelligence, the vocabulary in one sitting."
                }
            }

            section { class: "card",
                h3 { "Nine terms that cover the field" }
                for (i, concept) in catalog::concepts().iter().enumerate() {
                    div { class: "concept", key: "{i}",
                        button {
                            class: "concept-head",
                            r#type: "button",
                            onclick: move |_| {
                                let next = if open_concept() == Some(i) { None } else { Some(i) };
                                open_concept.set(next);
                            },
                            span { class: "concept-tag", "{concept.tag}" }
                            span { class: "concept-name", "{concept.name}" }
                            span { class: "concept-tagline", "{concept.tagline}" }
                        }
                        if open_concept() == Some(i) {
                            div { class: "concept-body",
                                p { "{concept.summary}" }
                                p { class: "concept-example", "e.g. {concept.example}" }
                            }
                        }
                    }
                }
            }

            section { class: "card",
                h3 { "Four eras of AI" }
                for (i, era) in catalog::eras().iter().enumerate() {
                    div { class: "era", key: "{i}",
                        button {
                            class: "era-head",
                            r#type: "button",
                            onclick: move |_| {
                                let next = if open_era() == Some(i) { None } else { Some(i) };
                                open_era.set(next);
                            },
                            span { class: "era-period", "{era.period}" }
                            span { class: "era-label", "{era.label}" }
                        }
                        if open_era() == Some(i) {
                            div { class: "era-body",
                                p { "{era.summary}" }
                                ul { class: "milestones",
                                    for milestone in era.milestones {
                                        li { key: "{milestone.year}",
                                            span { class: "milestone-year", "{milestone.year}" }
                                            strong { "{milestone.event}" }
                                            span { class: "milestone-who", " — {milestone.who}" }
                                            p { "{milestone.summary}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "card game-card",
                h3 { "Concept check" }
                if let Some((prompt, options, answer)) = current {
                    div { class: "quiz",
                        div { class: "quiz-progress",
                            span { class: "quiz-count", "{index + 1}/{len}" }
                            div { class: "quiz-dots",
                                for (i, correct) in tally.iter().enumerate() {
                                    span {
                                        key: "{i}",
                                        class: if *correct { "dot dot-hit" } else { "dot dot-miss" },
                                    }
                                }
                            }
                        }
                        p { class: "quiz-prompt", "{prompt}" }
                        div { class: "quiz-options",
                            for (i, option) in options.into_iter().enumerate() {
                                button {
                                    key: "{i}",
                                    r#type: "button",
                                    class: match selected {
                                        None => "quiz-option",
                                        Some(_) if i == answer => "quiz-option revealed-correct",
                                        Some(picked) if i == picked => "quiz-option revealed-wrong",
                                        Some(_) => "quiz-option",
                                    },
                                    disabled: selected.is_some(),
                                    onclick: move |_| quiz.write().select(i),
                                    "{option}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: selected.is_none(),
                            onclick: move |_| {
                                if let Some((score, total)) = quiz.write().advance() {
                                    report_result(
                                        &mut progress,
                                        &clock,
                                        ModuleId::Concepts,
                                        score,
                                        total,
                                    );
                                }
                            },
                            if index + 1 == len { "Finish" } else { "Next question" }
                        }
                    }
                }
                if finished {
                    div { class: "game-complete",
                        ScoreBadge { score, total }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| quiz.write().reset(),
                            "Play again"
                        }
                    }
                }
            }
        }
    }
}
