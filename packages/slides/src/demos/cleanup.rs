use super::{effects::EventList, log::EventLog};
use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::time::Duration;

const SOURCE: &str = r#"
#[component]
fn Ticker(interval: ReadSignal<u64>) -> Element {
    let mut ticks = use_signal(|| 0);

    use_effect(move || log(format!("ticking every {} ms", interval())));

    // Cancelled automatically when the component unmounts.
    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(*interval.peek())).await;
            ticks += 1;
        }
    });

    // Cleanup goes in its own hook.
    use_drop(move || log("ticker dropped"));

    rsx! { p { "ticks: {ticks}" } }
}
"#;

pub fn slide(_: Navigator) -> Element {
    let mut mounted = use_signal(|| true);
    let mut interval = use_signal(|| 500u64);
    let mut log = use_signal(|| EventLog::new(10));

    let toggle = move |_| {
        let next = !mounted();
        log.write().push(if next { "parent: mounting ticker" } else { "parent: unmounting ticker" });
        mounted.set(next);
    };

    rsx! {
        SlideFrame {
            title: "Effect Cleanup",
            hook: "use_drop",
            narration: "Effects re-run when their inputs change. Cleanup runs once, when the component goes away, and async work it started is cancelled with it.",
            source: SOURCE,
            div { class: "controls",
                button { onclick: toggle, if mounted() { "Unmount" } else { "Mount" } }
                button {
                    onclick: move |_| {
                        let next = if interval() == 500 { 1000 } else { 500 };
                        interval.set(next);
                    },
                    "Interval: {interval} ms"
                }
                button { onclick: move |_| log.write().clear(), "Clear log" }
            }
            if mounted() {
                Ticker { interval, log }
            }
            EventList { log }
        }
    }
}

#[component]
fn Ticker(interval: ReadSignal<u64>, log: Signal<EventLog>) -> Element {
    let mut log = log;
    let mut ticks = use_signal(|| 0u32);

    use_effect(move || {
        let ms = interval();
        log.write().push(format!("effect: ticking every {ms} ms"));
    });

    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(*interval.peek())).await;
            ticks += 1;
        }
    });

    use_drop(move || {
        log.write().push("cleanup: ticker dropped, its future is cancelled");
    });

    rsx! {
        p { class: "ticks", "ticks: {ticks}" }
    }
}
