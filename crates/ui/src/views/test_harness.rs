use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use literacy_core::model::SessionProgress;
use literacy_core::time::fixed_clock;
use services::{Catalog, Clock};

use crate::context::{UiApp, build_app_context};
use crate::views::{
    ApplicationsView, ConceptsView, EthicsView, MechanicsView, PromptingView,
};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
    clock: Clock,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The full shell: top bar, tab nav and the default tab.
    Shell,
    Concepts,
    Mechanics,
    Applications,
    Prompting,
    Ethics,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    progress: SessionProgress,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let progress = props.progress.clone();
    use_context_provider(move || Signal::new(progress));
    match props.view {
        ViewKind::Shell => rsx! { Router::<crate::routes::Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Shell => rsx! {},
        ViewKind::Concepts => rsx! { ConceptsView {} },
        ViewKind::Mechanics => rsx! { MechanicsView {} },
        ViewKind::Applications => rsx! { ApplicationsView {} },
        ViewKind::Prompting => rsx! { PromptingView {} },
        ViewKind::Ethics => rsx! { EthicsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_progress(view, SessionProgress::new())
}

pub fn setup_view_harness_with_progress(
    view: ViewKind,
    progress: SessionProgress,
) -> ViewHarness {
    let catalog = Arc::new(Catalog::new().expect("built-in content should validate"));
    let app = Arc::new(TestApp {
        catalog,
        clock: fixed_clock(),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            progress,
        },
    );

    ViewHarness { dom }
}
