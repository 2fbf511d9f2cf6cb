use crate::SLIDES;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

/// Title slide with a clickable table of contents.
pub fn slide(nav: Navigator) -> Element {
    rsx! {
        section { class: "slide-frame intro",
            h1 { "Hooks in Practice" }
            p { class: "narration",
                "Twenty live demos of state, effects, memoization, async work and actions. "
                "Every demo runs in this page, next to the code that drives it."
            }
            button { class: "start", onclick: move |_| nav.go_to(1), "Start" }

            ol { class: "contents",
                for (index, slide) in SLIDES.iter().enumerate().skip(1) {
                    li { key: "{slide.id}",
                        button { onclick: move |_| nav.go_to(index), "{slide.title}" }
                    }
                }
            }
        }
    }
}
