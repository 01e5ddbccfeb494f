use dioxus::prelude::*;

use literacy_core::model::{ModuleId, SessionProgress};

use crate::context::AppContext;
use crate::views::shared::{ScoreBadge, report_result};
use crate::views::state::ViewError;

struct PromptPart {
    label: &'static str,
    example: &'static str,
    summary: &'static str,
}

const PROMPT_PARTS: [PromptPart; 3] = [
    PromptPart {
        label: "Role",
        example: "You are a manager with ten years in power equipment",
        summary: "Give the model an expert role and the answer arrives in that \
                  field's register and vocabulary, the way a briefing for a new \
                  hire starts with who they are supposed to be.",
    },
    PromptPart {
        label: "Context",
        example: "A storm knocked out a 154 kV line and three districts are dark",
        summary: "Spell out the situation. 'Something broke' gets generic advice; \
                  the concrete facts get a concrete answer.",
    },
    PromptPart {
        label: "Format",
        example: "Write the notice in three paragraphs",
        summary: "Name the output shape you want: a checklist, a table, three \
                  paragraphs. 'Tell me about it' leaves the shape to chance.",
    },
];

struct SlotRow {
    role: String,
    occupant: Option<String>,
    correct: Option<bool>,
}

struct PoolRow {
    index: usize,
    text: String,
    placed: bool,
}

struct SlotBoard {
    slots: Vec<SlotRow>,
    pool: Vec<PoolRow>,
    ready: bool,
    result: Option<(u32, u32)>,
    perfect: bool,
}

/// Prompting tab: the three-part prompt formula and the slot game
/// built on it.
#[component]
pub fn PromptingView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut progress = use_context::<Signal<SessionProgress>>();
    let catalog = ctx.catalog();
    let catalog_for_reset = ctx.catalog();
    let mut open_part = use_signal(|| None::<usize>);
    let mut slots = use_signal(move || catalog.slots().ok());

    let board = slots.read().as_ref().map(|game| SlotBoard {
        slots: game
            .roles()
            .iter()
            .enumerate()
            .map(|(slot, role)| SlotRow {
                role: role.clone(),
                occupant: game.placed_item(slot).map(|item| item.text().to_string()),
                correct: game.slot_correct(slot),
            })
            .collect(),
        pool: game
            .pool()
            .iter()
            .enumerate()
            .map(|(index, item)| PoolRow {
                index,
                text: item.text().to_string(),
                placed: game.is_placed(index),
            })
            .collect(),
        ready: game.is_ready(),
        result: game.result(),
        perfect: game.is_perfect(),
    });

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "{ModuleId::Prompting.label()}" }
                p { class: "view-subtitle",
                    "Role, context, format: the three parts of a request that works."
                }
            }

            section { class: "card",
                h3 { "The work-order formula" }
                div { class: "prompt-parts",
                    for (i, part) in PROMPT_PARTS.iter().enumerate() {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: if open_part() == Some(i) { "prompt-part active" } else { "prompt-part" },
                            onclick: move |_| {
                                let next = if open_part() == Some(i) { None } else { Some(i) };
                                open_part.set(next);
                            },
                            strong { "{part.label}" }
                            span { class: "prompt-example", "\"{part.example}\"" }
                        }
                    }
                }
                if let Some(i) = open_part() {
                    p { class: "prompt-part-summary", "{PROMPT_PARTS[i].summary}" }
                }
            }

            section { class: "card game-card",
                h3 { "Build the prompt" }
                match board {
                    None => rsx! {
                        p { "{ViewError::message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: {
                                let catalog = catalog_for_reset.clone();
                                move |_| slots.set(catalog.slots().ok())
                            },
                            "Retry"
                        }
                    },
                    Some(board) => rsx! {
                        p { class: "game-hint",
                            "Three of these fragments belong in the slots below; three are "
                            "filler. Placing over an occupied slot replaces it."
                        }
                        div { class: "slot-row",
                            for (slot, entry) in board.slots.iter().enumerate() {
                                div {
                                    key: "{slot}",
                                    class: match entry.correct {
                                        Some(true) => "slot slot-correct",
                                        Some(false) => "slot slot-wrong",
                                        None => "slot",
                                    },
                                    span { class: "slot-role", "{entry.role}" }
                                    match &entry.occupant {
                                        Some(text) => rsx! { span { class: "slot-text", "{text}" } },
                                        None => rsx! { span { class: "slot-empty", "empty" } },
                                    }
                                }
                            }
                        }
                        div { class: "slot-pool",
                            for row in &board.pool {
                                div {
                                    key: "{row.index}",
                                    class: if row.placed { "pool-item pool-item-placed" } else { "pool-item" },
                                    span { class: "pool-text", "{row.text}" }
                                    if board.result.is_none() {
                                        div { class: "pool-targets",
                                            for slot in 0..board.slots.len() {
                                                button {
                                                    key: "{slot}",
                                                    r#type: "button",
                                                    class: "choice",
                                                    onclick: {
                                                        let item = row.index;
                                                        move |_| {
                                                            if let Some(game) = slots.write().as_mut() {
                                                                let _ = game.place(item, slot);
                                                            }
                                                        }
                                                    },
                                                    "{slot + 1}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        match board.result {
                            Some((score, total)) => rsx! {
                                div { class: "game-complete",
                                    if board.perfect {
                                        p { class: "outcome outcome-stable",
                                            "A complete work order. This prompt would land."
                                        }
                                    }
                                    ScoreBadge { score, total }
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: {
                                            let catalog = catalog_for_reset.clone();
                                            move |_| slots.set(catalog.slots().ok())
                                        },
                                        "Play again"
                                    }
                                }
                            },
                            None => rsx! {
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    disabled: !board.ready,
                                    onclick: move |_| {
                                        let outcome = slots
                                            .write()
                                            .as_mut()
                                            .and_then(|game| game.submit().ok());
                                        if let Some((score, total)) = outcome {
                                            report_result(
                                                &mut progress,
                                                &clock,
                                                ModuleId::Prompting,
                                                score,
                                                total,
                                            );
                                        }
                                    },
                                    "Submit"
                                }
                            },
                        }
                    },
                }
            }
        }
    }
}
