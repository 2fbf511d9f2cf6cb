use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
// At the top of the tree.
let theme = use_context_provider(|| Signal::new(Theme::Light));

// Anywhere below it, without threading props.
let mut theme = use_context::<Signal<Theme>>();
button { onclick: move |_| theme.with_mut(Theme::toggle), "{theme}" }
"#;

/// A value shared with every component under the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

pub fn slide(_: Navigator) -> Element {
    let theme = use_context_provider(|| Signal::new(Theme::default()));

    rsx! {
        SlideFrame {
            title: "Context",
            hook: "use_context",
            narration: "A provider puts a value in scope for its whole subtree. Any descendant can read it, and writing a signal in context updates everyone who reads it.",
            source: SOURCE,
            div { class: "panel {theme.read().class_name()}",
                p { "The page is {theme}" }
                Toolbar {}
            }
        }
    }
}

#[component]
fn Toolbar() -> Element {
    rsx! {
        div { class: "toolbar",
            ThemeButton {}
        }
    }
}

#[component]
fn ThemeButton() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    rsx! {
        button {
            class: theme.read().class_name(),
            onclick: move |_| theme.with_mut(Theme::toggle),
            "Switch from {theme}"
        }
    }
}
