use super::log::EventLog;
use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
let mut count = use_signal(|| 0);
let mut step = use_signal(|| 1);

// Runs after the render that created it, then again
// whenever a signal it read changes.
use_effect(move || {
    let count = count();
    log.write().push(format!("effect saw count = {count}"));
});
"#;

pub fn slide(_: Navigator) -> Element {
    let mut count = use_signal(|| 0);
    let mut unrelated = use_signal(|| 0);
    let mut log = use_signal(EventLog::default);

    use_effect(move || {
        let count = count();
        tracing::debug!(count, "effect demo ran");
        log.write().push(format!("effect saw count = {count}"));
    });

    rsx! {
        SlideFrame {
            title: "Effects",
            hook: "use_effect",
            narration: "An effect runs after rendering and re-runs only when a signal it read changes.",
            source: SOURCE,
            div { class: "counter",
                button { onclick: move |_| count += 1, "count: {count}" }
                button { onclick: move |_| unrelated += 1, "unrelated: {unrelated}" }
                button { onclick: move |_| log.write().clear(), "Clear log" }
            }
            EventList { log }
        }
    }
}

/// Renders an [`EventLog`] signal.
#[component]
pub fn EventList(log: ReadSignal<EventLog>) -> Element {
    rsx! {
        ol { class: "event-log",
            for (n, entry) in log.read().iter() {
                li { key: "{n}", "{n}. {entry}" }
            }
        }
    }
}
