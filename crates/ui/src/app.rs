use dioxus::prelude::*;
use dioxus_router::Router;

use literacy_core::model::SessionProgress;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // Session progress lives for the lifetime of the window. Every tab
    // reads and reports through this one signal; nothing is persisted.
    use_context_provider(|| Signal::new(SessionProgress::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-tab headings are rendered in the content pane.
        document::Title { "AI Primer" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
