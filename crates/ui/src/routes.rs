use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use literacy_core::model::{ModuleId, SessionProgress};

use crate::views::{
    ApplicationsView, ConceptsView, EthicsView, MechanicsView, PromptingView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ConceptsView)] Concepts {},
        #[route("/mechanics", MechanicsView)] Mechanics {},
        #[route("/applications", ApplicationsView)] Applications {},
        #[route("/prompting", PromptingView)] Prompting {},
        #[route("/ethics", EthicsView)] Ethics {},
}

impl Route {
    #[must_use]
    pub fn for_module(module: ModuleId) -> Self {
        match module {
            ModuleId::Concepts => Route::Concepts {},
            ModuleId::Mechanics => Route::Mechanics {},
            ModuleId::Applications => Route::Applications {},
            ModuleId::Prompting => Route::Prompting {},
            ModuleId::Ethics => Route::Ethics {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let progress = use_context::<Signal<SessionProgress>>();
    let snapshot = progress.read();

    let total_line = (snapshot.completed_count() > 0).then(|| {
        format!(
            "TOTAL XP {}/{}",
            snapshot.total_score(),
            snapshot.total_possible()
        )
    });
    let tabs: Vec<(ModuleId, Option<String>, u32)> = ModuleId::ALL
        .into_iter()
        .map(|module| {
            let result = snapshot.result(module);
            (
                module,
                result.map(|r| format!("{}/{}", r.score(), r.total())),
                result.map_or(0, |r| r.percent()),
            )
        })
        .collect();
    let all_complete = snapshot.is_complete();

    rsx! {
        header { class: "topbar",
            div { class: "topbar-row",
                h1 { "AI Primer" }
                if let Some(total) = total_line {
                    span { class: "total-xp", "{total}" }
                }
            }
            nav { class: "tabs",
                for (module, scoreline, percent) in tabs {
                    Link {
                        key: "{module}",
                        to: Route::for_module(module),
                        class: if scoreline.is_some() { "tab tab-done" } else { "tab" },
                        span { class: "tab-label", "{module.short_label()}" }
                        if let Some(scoreline) = scoreline {
                            span { class: "tab-dot", "{scoreline}" }
                        }
                        div { class: "tab-fill-track",
                            div {
                                class: "tab-fill",
                                style: "width: {percent}%",
                            }
                        }
                    }
                }
            }
            if all_complete {
                p { class: "all-complete", "All five modules complete. Well done!" }
            }
        }
    }
}
