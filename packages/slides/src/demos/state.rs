use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
let mut count = use_signal(|| 0);

rsx! {
    button { onclick: move |_| count -= 1, "-" }
    span { "{count}" }
    button { onclick: move |_| count += 1, "+" }
}
"#;

pub fn slide(_: Navigator) -> Element {
    let mut count = use_signal(|| 0);

    rsx! {
        SlideFrame {
            title: "State",
            hook: "use_signal",
            narration: "A signal owns a value. Writing to it re-renders every component that read it.",
            source: SOURCE,
            div { class: "counter",
                button { onclick: move |_| count -= 1, "-" }
                span { class: "count", "{count}" }
                button { onclick: move |_| count += 1, "+" }
                button { onclick: move |_| count.set(0), "Reset" }
            }
        }
    }
}
