use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::time::Duration;

const SOURCE: &str = r#"
let mut seconds = use_signal(|| 0);
let mut paused = use_signal(|| false);

// Spawned once, on the first render, and cancelled on unmount.
let ticker = use_future(move || async move {
    loop {
        sleep(Duration::from_secs(1)).await;
        if !*paused.peek() {
            seconds += 1;
        }
    }
});

button { onclick: move |_| ticker.restart(), "restart" }
"#;

/// `hh:mm:ss`
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let seconds = seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

pub fn slide(_: Navigator) -> Element {
    let mut seconds = use_signal(|| 0u64);
    let mut paused = use_signal(|| false);

    let mut ticker = use_future(move || async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            if !*paused.peek() {
                seconds += 1;
            }
        }
    });

    rsx! {
        SlideFrame {
            title: "Background Futures",
            hook: "use_future",
            narration: "use_future spawns async work tied to the component. It runs until the component unmounts or you cancel it.",
            source: SOURCE,
            p { class: "clock", "{format_clock(seconds())}" }
            div { class: "controls",
                button { onclick: move |_| paused.toggle(), if paused() { "Resume" } else { "Pause" } }
                button {
                    onclick: move |_| {
                        seconds.set(0);
                        ticker.restart();
                    },
                    "Restart"
                }
            }
            p { class: "status", if ticker.finished() { "stopped" } else { "running in the background" } }
        }
    }
}
