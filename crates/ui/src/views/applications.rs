use std::time::Duration;

use dioxus::prelude::*;

use literacy_core::games::grid::{MAX_STABILITY, STEP_BUDGET};
use literacy_core::games::{ControlMode, GridGame, GridOutcome};
use literacy_core::model::{ModuleId, SessionProgress};
use services::{DemandSignal, catalog};

use crate::context::AppContext;
use crate::views::shared::{ScoreBadge, report_result};

/// Points kept per trace in the mini charts.
const CHART_POINTS: usize = 40;
/// Wall-clock interval between simulation steps.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn push_trimmed(history: &mut Signal<Vec<f64>>, value: f64) {
    let mut history = history.write();
    history.push(value);
    let excess = history.len().saturating_sub(CHART_POINTS);
    if excess > 0 {
        history.drain(..excess);
    }
}

/// Applications tab: forecasting scenarios and the grid-balancing
/// simulation with its one-way autopilot.
#[component]
pub fn ApplicationsView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut progress = use_context::<Signal<SessionProgress>>();
    let mut scenario = use_signal(|| None::<usize>);
    let mut show_forecast = use_signal(|| false);

    let mut grid = use_signal(GridGame::new);
    let mut demand_history = use_signal(Vec::<f64>::new);
    let mut supply_history = use_signal(Vec::<f64>::new);
    let mut run_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = run_task.take() {
            task.cancel();
        }
    });

    let start = move |_| {
        if let Some(task) = run_task.take() {
            task.cancel();
        }
        grid.set(GridGame::new());
        demand_history.set(Vec::new());
        supply_history.set(Vec::new());

        let task = spawn(async move {
            let mut signal = DemandSignal::new();
            loop {
                tokio::time::sleep(TICK_INTERVAL).await;
                let tick = grid.peek().tick();
                let demand = signal.sample(tick + 1);
                let outcome = grid.write().step(demand);
                let output = grid.peek().output();
                push_trimmed(&mut demand_history, demand);
                push_trimmed(&mut supply_history, output);
                if outcome.is_some() {
                    if let Some((score, total)) = grid.peek().result() {
                        report_result(
                            &mut progress,
                            &clock,
                            ModuleId::Applications,
                            score,
                            total,
                        );
                    }
                    break;
                }
            }
            run_task.set(None);
        });
        run_task.set(Some(task));
    };

    let sim = grid.read();
    let tick = sim.tick();
    let stability = sim.stability();
    let output = sim.output();
    let demand = sim.demand();
    let assisted = sim.mode() == ControlMode::Assisted;
    let outcome = sim.outcome();
    let result = sim.result();
    drop(sim);
    let running = run_task.read().is_some();

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "{ModuleId::Applications.label()}" }
                p { class: "view-subtitle",
                    "Why the grid control room wants a forecast model on its side."
                }
            }

            section { class: "card",
                h3 { "Manual forecast vs. model forecast" }
                div { class: "scenario-row",
                    for (i, s) in catalog::scenarios().iter().enumerate() {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: if scenario() == Some(i) { "scenario active" } else { "scenario" },
                            onclick: move |_| {
                                scenario.set(Some(i));
                                show_forecast.set(false);
                            },
                            strong { "{s.label}" }
                            span { "{s.summary}" }
                        }
                    }
                }
                if scenario().is_some() {
                    div { class: "forecast-compare",
                        div { class: "forecast forecast-manual",
                            h4 { "Manual forecast" }
                            p {
                                "An operator extrapolates from yesterday's curve and misses the "
                                "spikes, over- and under-committing generation all shift long."
                            }
                        }
                        div { class: "forecast forecast-model",
                            h4 { "Model forecast" }
                            if show_forecast() {
                                p {
                                    "A model trained on years of weather and usage data tracks "
                                    "the swings closely and flags the spike hours in advance."
                                }
                            } else {
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| show_forecast.set(true),
                                    "Show the model's forecast"
                                }
                            }
                        }
                    }
                }
            }

            section { class: "card game-card",
                h3 { "Hold the grid" }
                p { class: "game-hint",
                    "Keep your output within 25 of demand. Lose stability on every miss; "
                    "hand over to the autopilot whenever you have had enough."
                }
                div { class: "grid-meters",
                    div { class: "meter",
                        span { class: "meter-label", "Stability" }
                        div { class: "meter-track",
                            div {
                                class: "meter-fill",
                                style: "width: {stability}%",
                            }
                        }
                        span { class: "meter-value", "{stability}/{MAX_STABILITY}" }
                    }
                    span { class: "grid-tick", "step {tick}/{STEP_BUDGET}" }
                    if assisted {
                        span { class: "grid-mode", "autopilot engaged" }
                    }
                }
                div { class: "grid-charts",
                    div { class: "chart-block",
                        span { class: "chart-label", "demand {demand:.0}" }
                        TraceChart { data: demand_history(), class: "chart chart-demand" }
                    }
                    div { class: "chart-block",
                        span { class: "chart-label", "your output {output:.0}" }
                        TraceChart { data: supply_history(), class: "chart chart-supply" }
                    }
                }
                div { class: "grid-controls",
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{output}",
                        disabled: assisted || !running,
                        oninput: move |event: FormEvent| {
                            if let Ok(value) = event.value().parse::<f64>() {
                                grid.write().set_output(value);
                            }
                        },
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: assisted || !running,
                        onclick: move |_| grid.write().engage_autopilot(),
                        "Engage autopilot"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: start,
                        if tick == 0 && !running { "Start shift" } else { "Restart" }
                    }
                }
                if let Some((score, total)) = result {
                    div { class: "game-complete",
                        match outcome {
                            Some(GridOutcome::Stable) => rsx! {
                                p { class: "outcome outcome-stable",
                                    "Shift survived with {stability} stability to spare."
                                }
                            },
                            Some(GridOutcome::Blackout) => rsx! {
                                p { class: "outcome outcome-blackout",
                                    "Blackout at step {tick}. The grid does not forgive."
                                }
                            },
                            None => rsx! {},
                        }
                        ScoreBadge { score, total }
                    }
                }
            }
        }
    }
}

#[component]
fn TraceChart(data: Vec<f64>, class: String) -> Element {
    if data.len() < 2 {
        return rsx! {
            div { class: "chart chart-empty" }
        };
    }
    let last = data.len() - 1;
    let points = data
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 / last as f64 * 100.0;
            let y = 100.0 - value;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 100 100",
            preserve_aspect_ratio: "none",
            polyline { points: "{points}", fill: "none" }
        }
    }
}
