use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::{cell::Cell, rc::Rc};

const SOURCE: &str = r#"
// Three writes, one render.
let add_three = move |_| {
    count += 1;
    count += 1;
    count += 1;
};

// Three writes of the same stale snapshot: +1, not +3.
let add_snapshot = move |_| {
    let snapshot = count();
    count.set(snapshot + 1);
    count.set(snapshot + 1);
    count.set(snapshot + 1);
};
"#;

pub fn slide(_: Navigator) -> Element {
    let mut count = use_signal(|| 0);

    // Not reactive: bumping it never schedules a render.
    let renders = use_hook(|| Rc::new(Cell::new(0u32)));
    renders.set(renders.get() + 1);

    let add_three = move |_| {
        count += 1;
        count += 1;
        count += 1;
    };

    let add_snapshot = move |_| {
        let snapshot = count();
        count.set(snapshot + 1);
        count.set(snapshot + 1);
        count.set(snapshot + 1);
    };

    rsx! {
        SlideFrame {
            title: "Batched Updates",
            hook: "Signal::set",
            narration: "Writes inside one handler are batched into a single render. Writes built from a stale read overwrite each other.",
            source: SOURCE,
            div { class: "counter",
                span { class: "count", "{count}" }
                button { onclick: add_three, "+3 (three writes)" }
                button { onclick: add_snapshot, "+3 from a snapshot" }
                button { onclick: move |_| count.set(0), "Reset" }
            }
            p { class: "render-count", "Rendered {renders.get()} times" }
        }
    }
}
