use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::time::Duration;

const SOURCE: &str = r#"
// Reactive: writing re-renders.
let mut watch = use_signal(Stopwatch::default);

// Not reactive: a plain value that survives renders.
let mut silent = use_hook(|| CopyValue::new(0));

button { onclick: move |_| *silent.write() += 1, "bump silently" }
button { onclick: move |_| shown.set(silent()), "show it" }
"#;

/// A tenth-of-a-second stopwatch driven by an external tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stopwatch {
    tenths: u64,
    running: bool,
    laps: Vec<u64>,
}

impl Stopwatch {
    pub fn tick(&mut self) {
        if self.running {
            self.tenths += 1;
        }
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Record a lap. Laps are only recorded while running.
    pub fn lap(&mut self) {
        if self.running {
            self.laps.push(self.tenths);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> String {
        format_tenths(self.tenths)
    }

    pub fn laps(&self) -> impl Iterator<Item = String> + '_ {
        self.laps.iter().map(|lap| format_tenths(*lap))
    }
}

/// `mm:ss.t`
pub fn format_tenths(tenths: u64) -> String {
    let minutes = tenths / 600;
    let seconds = (tenths / 10) % 60;
    let tenth = tenths % 10;
    format!("{minutes:02}:{seconds:02}.{tenth}")
}

pub fn slide(_: Navigator) -> Element {
    let mut watch = use_signal(Stopwatch::default);
    let mut silent = use_hook(|| CopyValue::new(0u32));
    let mut shown = use_signal(|| 0u32);

    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(100)).await;
            if watch.peek().running() {
                watch.write().tick();
            }
        }
    });

    rsx! {
        SlideFrame {
            title: "Mutable Values",
            hook: "use_hook + CopyValue",
            narration: "Not every value should re-render. A CopyValue kept in use_hook persists across renders and changes silently.",
            source: SOURCE,
            div { class: "stopwatch",
                span { class: "elapsed", "{watch.read().elapsed()}" }
                button { onclick: move |_| watch.write().toggle(), if watch.read().running() { "Stop" } else { "Start" } }
                button { onclick: move |_| watch.write().lap(), "Lap" }
                button { onclick: move |_| watch.write().reset(), "Reset" }
            }
            ol { class: "laps",
                for (n, lap) in watch.read().laps().enumerate() {
                    li { key: "{n}", "{lap}" }
                }
            }
            div { class: "silent-counter",
                button { onclick: move |_| *silent.write() += 1, "Bump silently" }
                button { onclick: move |_| shown.set(*silent.peek()), "Show it" }
                span { "last shown value: {shown}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_while_running() {
        let mut watch = Stopwatch::default();
        watch.tick();
        assert_eq!(watch.elapsed(), "00:00.0");

        watch.toggle();
        for _ in 0..615 {
            watch.tick();
        }
        assert_eq!(watch.elapsed(), "01:01.5");
    }

    #[test]
    fn laps_and_reset() {
        let mut watch = Stopwatch::default();
        watch.lap();
        watch.toggle();
        watch.tick();
        watch.lap();
        watch.tick();
        watch.lap();

        assert_eq!(watch.laps().collect::<Vec<_>>(), ["00:00.1", "00:00.2"]);

        watch.reset();
        assert_eq!(watch, Stopwatch::default());
    }
}
