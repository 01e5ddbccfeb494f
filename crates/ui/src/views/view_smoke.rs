use literacy_core::model::{ModuleId, ModuleResult, SessionProgress};
use literacy_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_progress};

fn result(module: ModuleId, score: u32, total: u32) -> ModuleResult {
    ModuleResult::new(module, score, total, fixed_now()).unwrap()
}

#[test]
fn shell_smoke_renders_tab_nav() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("AI Primer"), "missing app title in {html}");
    for module in ModuleId::ALL {
        let label = module.short_label();
        assert!(html.contains(label), "missing tab {label} in {html}");
    }
    assert!(!html.contains("TOTAL XP"), "total shown for empty session in {html}");
}

#[test]
fn shell_smoke_shows_totals_once_something_is_done() {
    let mut progress = SessionProgress::new();
    progress.report(result(ModuleId::Concepts, 10, 12));
    progress.report(result(ModuleId::Ethics, 5, 6));

    let mut harness = setup_view_harness_with_progress(ViewKind::Shell, progress);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("TOTAL XP 15/18"), "missing total in {html}");
    assert!(html.contains("10/12"), "missing concepts scoreline in {html}");
    assert!(
        !html.contains("All five modules complete"),
        "premature completion banner in {html}"
    );
}

#[test]
fn shell_smoke_banner_after_all_five() {
    let mut progress = SessionProgress::new();
    for module in ModuleId::ALL {
        progress.report(result(module, 1, 2));
    }

    let mut harness = setup_view_harness_with_progress(ViewKind::Shell, progress);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("All five modules complete"),
        "missing completion banner in {html}"
    );
}

#[test]
fn concepts_view_smoke_renders_glossary_and_first_question() {
    let mut harness = setup_view_harness(ViewKind::Concepts);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Nine terms"), "missing glossary in {html}");
    assert!(html.contains("Four eras"), "missing timeline in {html}");
    assert!(
        html.contains("Which kind of AI has every rule written out by hand?"),
        "missing first question in {html}"
    );
    assert!(html.contains("1/12"), "missing question counter in {html}");
}

#[test]
fn mechanics_view_smoke_renders_pipeline_and_items() {
    let mut harness = setup_view_harness(ViewKind::Mechanics);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Tokenization"), "missing first stage in {html}");
    assert!(html.contains("1/7"), "missing stage counter in {html}");
    assert!(
        html.contains("spam filter"),
        "missing assignment item in {html}"
    );
    assert!(html.contains("Submit"), "missing submit button in {html}");
}

#[test]
fn applications_view_smoke_renders_scenarios_and_sim() {
    let mut harness = setup_view_harness(ViewKind::Applications);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sudden heat wave"), "missing scenario in {html}");
    assert!(html.contains("Hold the grid"), "missing sim heading in {html}");
    assert!(html.contains("Start shift"), "missing start button in {html}");
    assert!(html.contains("step 0/100"), "missing step counter in {html}");
}

#[test]
fn prompting_view_smoke_renders_slots_and_pool() {
    let mut harness = setup_view_harness(ViewKind::Prompting);
    harness.rebuild();
    let html = harness.render();
    for role in ["Role", "Context", "Format"] {
        assert!(html.contains(role), "missing slot {role} in {html}");
    }
    assert!(html.contains("empty"), "missing empty slots in {html}");
    assert!(
        html.contains("Just write something"),
        "missing distractor in {html}"
    );
    assert!(html.contains("Submit"), "missing submit button in {html}");
}

#[test]
fn ethics_view_smoke_renders_demo_and_first_card() {
    let mut harness = setup_view_harness(ViewKind::Ethics);
    harness.rebuild();
    let html = harness.render();
    // Default temperature 30 snaps to the 1961 founding fact.
    assert!(html.contains("founded in 1961"), "missing canned answer in {html}");
    assert!(
        html.contains("confidential budget spreadsheet"),
        "missing first card in {html}"
    );
    assert!(html.contains("Block"), "missing block action in {html}");
    assert!(html.contains("Allow"), "missing allow action in {html}");
    assert!(html.contains("card 1/6"), "missing card counter in {html}");
}
