//! Launch the hookdeck presentation.
//!
//! Runs in the browser by default. Build with `--features desktop` for a native window, where
//! fullscreen goes through the window itself instead of the document.

use dioxus::prelude::*;
use hookdeck_shell::prelude::*;

const DECK_CONFIG: &str = include_str!("../Deck.toml");

fn main() {
    let config = ShellConfig::from_toml(DECK_CONFIG).expect("Deck.toml is not a valid deck config");
    let level = config
        .tracing_level()
        .expect("Deck.toml log_level was already validated");
    dioxus::logger::init(level).expect("failed to initialize the logger");

    tracing::info!("starting \"{}\"", config.title);

    dioxus::LaunchBuilder::new().with_context(config).launch(app);
}

fn app() -> Element {
    let config = use_context::<ShellConfig>();
    use_context_provider(platform_host);

    let deck = match hookdeck_slides::deck() {
        Ok(deck) => deck,
        Err(err) => {
            tracing::error!("the slide table is broken: {err}");
            return rsx! { p { class: "fatal", "{err}" } };
        }
    };

    rsx! {
        Presentation { deck, config }
    }
}

#[cfg(not(feature = "desktop"))]
fn platform_host() -> HostHandle {
    HostHandle::document()
}

#[cfg(feature = "desktop")]
fn platform_host() -> HostHandle {
    HostHandle::new(desktop::WindowHost)
}

#[cfg(feature = "desktop")]
mod desktop {
    use hookdeck_shell::{DocumentHost, KeyListener, PresentationHost};

    /// Fullscreens the native window. Keys still arrive through the webview's document.
    pub struct WindowHost;

    impl PresentationHost for WindowHost {
        fn set_fullscreen(&self, fullscreen: bool) {
            tracing::debug!("window fullscreen: {fullscreen}");
            dioxus::desktop::window().set_fullscreen(fullscreen);
        }

        fn listen_for_keys(&self, on_key: Box<dyn FnMut(String)>) -> KeyListener {
            DocumentHost.listen_for_keys(on_key)
        }
    }
}
