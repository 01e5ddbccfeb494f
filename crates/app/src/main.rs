use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Catalog, Clock};
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    catalog: Arc<Catalog>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Validate the built-in content before a window ever opens.
    let catalog = Arc::new(Catalog::new()?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        clock: Clock::default_clock(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("AI Primer")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
