use dioxus::prelude::*;

use literacy_core::games::TriageAction;
use literacy_core::model::{ModuleId, SessionProgress};
use services::catalog::{self, HallucinationLevel};

use crate::context::AppContext;
use crate::views::shared::{ScoreBadge, report_result};

struct ReviewRow {
    text: String,
    reason: String,
    action: &'static str,
    correct: bool,
}

/// Cautions tab: the hallucination temperature demo and the request
/// triage game.
#[component]
pub fn EthicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut progress = use_context::<Signal<SessionProgress>>();
    let catalog = ctx.catalog();
    let mut temperature = use_signal(|| 30u8);
    let mut triage = use_signal(move || catalog.triage());

    let example = catalog::hallucination_for(temperature());
    let example_class = match example.level {
        HallucinationLevel::Fact => "halluc halluc-fact",
        HallucinationLevel::Stretch => "halluc halluc-stretch",
        HallucinationLevel::Hallucination => "halluc halluc-warn",
        HallucinationLevel::Severe => "halluc halluc-severe",
    };

    let game = triage.read();
    let judged = game.judgments().len();
    let total_cards = game.cards().len();
    let current = game.current().map(|card| card.text().to_string());
    let review: Vec<ReviewRow> = game
        .review()
        .map(|(card, judgment)| ReviewRow {
            text: card.text().to_string(),
            reason: card.reason().to_string(),
            action: match judgment.action() {
                TriageAction::Block => "blocked",
                TriageAction::Allow => "allowed",
            },
            correct: judgment.correct(),
        })
        .collect();
    let result = game.result();
    drop(game);

    let judge = move |action: TriageAction| {
        if let Some((score, total)) = triage.write().judge(action) {
            report_result(&mut progress, &clock, ModuleId::Ethics, score, total);
        }
    };

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "{ModuleId::Ethics.label()}" }
                p { class: "view-subtitle",
                    "The model will say something. Whether it is true is your problem."
                }
            }

            section { class: "card",
                h3 { "Hallucination, by temperature" }
                p { class: "game-hint",
                    "Slide the imagination up and watch a plausible answer drift into fiction."
                }
                div { class: "halluc-demo",
                    div { class: "halluc-slider",
                        span { "accurate" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: "{temperature}",
                            oninput: move |event: FormEvent| {
                                if let Ok(value) = event.value().parse::<u8>() {
                                    temperature.set(value.min(100));
                                }
                            },
                        }
                        span { "unhinged" }
                    }
                    div { class: "{example_class}",
                        p { class: "halluc-text", "\"{example.text}\"" }
                        span { class: "halluc-label", "{example.level.label()}" }
                    }
                }
            }

            section { class: "card game-card",
                h3 { "Gatekeeper" }
                p { class: "game-hint",
                    "Would you paste this into a public chatbot? Block what leaks, allow the rest."
                }
                match current {
                    Some(text) => rsx! {
                        div { class: "triage",
                            span { class: "triage-count", "card {judged + 1}/{total_cards}" }
                            div { class: "triage-card",
                                p { "\"{text}\"" }
                            }
                            div { class: "triage-actions",
                                button {
                                    class: "btn btn-danger",
                                    r#type: "button",
                                    onclick: move |_| judge(TriageAction::Block),
                                    "Block"
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| judge(TriageAction::Allow),
                                    "Allow"
                                }
                            }
                        }
                    },
                    None => rsx! {},
                }
                if !review.is_empty() {
                    ul { class: "triage-review",
                        for (i, row) in review.iter().enumerate() {
                            li {
                                key: "{i}",
                                class: if row.correct { "review review-hit" } else { "review review-miss" },
                                span { class: "review-action", "{row.action}" }
                                span { class: "review-text", "{row.text}" }
                                p { class: "review-reason", "{row.reason}" }
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
                            onclick: move |_| triage.write().reset(),
                            "Play again"
                        }
                    }
                }
            }
        }
    }
}
