use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::{cell::Cell, rc::Rc};

const SOURCE: &str = r#"
let mut count = use_signal(|| 0);

// One Callback for the life of the component. It is Copy,
// so it can be handed to children and stored in other hooks.
let on_step = use_callback(move |step: i32| count += step);

rsx! { StepButtons { on_step } }
"#;

pub fn slide(_: Navigator) -> Element {
    let mut count = use_signal(|| 0);
    let mut theme_dark = use_signal(|| false);

    let on_step = use_callback(move |step: i32| count += step);

    rsx! {
        SlideFrame {
            title: "Stable Callbacks",
            hook: "use_callback",
            narration: "use_callback returns a Copy handle whose identity never changes, so children that receive it are not re-rendered just because the parent was.",
            source: SOURCE,
            div { class: if theme_dark() { "panel dark" } else { "panel" },
                p { class: "count", "count: {count}" }
                StepButtons { on_step }
                button { onclick: move |_| theme_dark.toggle(), "Toggle parent theme" }
            }
        }
    }
}

#[component]
fn StepButtons(on_step: Callback<i32>) -> Element {
    let renders = use_hook(|| Rc::new(Cell::new(0u32)));
    renders.set(renders.get() + 1);

    rsx! {
        div { class: "step-buttons",
            for step in [-5, -1, 1, 5] {
                button { key: "{step}", onclick: move |_| on_step.call(step), "{step:+}" }
            }
            span { class: "render-count", "child rendered {renders.get()} times" }
        }
    }
}
