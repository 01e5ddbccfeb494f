use dioxus::prelude::*;

use literacy_core::Clock;
use literacy_core::model::{ModuleId, ModuleResult, ScoreBand, SessionProgress};

/// Final-score pill shown when a mini-game reaches its terminal state.
#[component]
pub fn ScoreBadge(score: u32, total: u32) -> Element {
    let (class, verdict) = match ScoreBand::for_score(score, total) {
        ScoreBand::Perfect => ("score-badge perfect", "Perfect!"),
        ScoreBand::Good => ("score-badge good", "Great"),
        ScoreBand::Fair => ("score-badge fair", "Not bad"),
        ScoreBand::Low => ("score-badge low", "Keep practicing"),
    };

    rsx! {
        span { class: "{class}",
            span { class: "score-badge-verdict", "{verdict}" }
            span { class: "score-badge-figures", "{score}/{total}" }
        }
    }
}

/// Records a finished play-through in the shared session progress.
///
/// Callers only reach this from a terminal game transition, which
/// guarantees `score <= total` and a positive total; a result that
/// fails validation anyway is dropped rather than crashing the view.
pub fn report_result(
    progress: &mut Signal<SessionProgress>,
    clock: &Clock,
    module: ModuleId,
    score: u32,
    total: u32,
) {
    if let Ok(result) = ModuleResult::new(module, score, total, clock.now()) {
        progress.write().report(result);
    }
}
