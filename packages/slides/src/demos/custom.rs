use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
// A custom hook is just a function that calls hooks.
pub fn use_counter(start: i64, bounds: Bounds) -> Counter {
    let value = use_signal(|| bounds.clamp(start));
    Counter { value, bounds }
}

// Each call gets its own state.
let a = use_counter(0, Bounds::new(0, 10));
let b = use_counter(5, Bounds::new(-5, 5));
"#;

/// Inclusive limits for a [`Counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    /// Swaps the ends if they are given backwards.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn clamp(self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// `value + delta`, held inside the bounds.
    pub fn step(self, value: i64, delta: i64) -> i64 {
        self.clamp(value.saturating_add(delta))
    }
}

/// The handle returned by [`use_counter`].
#[derive(Clone, Copy, PartialEq)]
pub struct Counter {
    value: Signal<i64>,
    bounds: Bounds,
}

impl Counter {
    pub fn get(&self) -> i64 {
        (self.value)()
    }

    pub fn add(&mut self, delta: i64) {
        let next = self.bounds.step(*self.value.peek(), delta);
        self.value.set(next);
    }

    pub fn at_min(&self) -> bool {
        self.get() == self.bounds.min
    }

    pub fn at_max(&self) -> bool {
        self.get() == self.bounds.max
    }
}

/// A bounded counter with its own state.
pub fn use_counter(start: i64, bounds: Bounds) -> Counter {
    let value = use_signal(|| bounds.clamp(start));
    Counter { value, bounds }
}

/// A boolean with a flip.
#[derive(Clone, Copy, PartialEq)]
pub struct Toggle(Signal<bool>);

impl Toggle {
    pub fn on(&self) -> bool {
        (self.0)()
    }

    pub fn flip(&mut self) {
        self.0.toggle();
    }
}

pub fn use_toggle(initial: bool) -> Toggle {
    Toggle(use_signal(|| initial))
}

pub fn slide(_: Navigator) -> Element {
    let mut details = use_toggle(false);

    rsx! {
        SlideFrame {
            title: "Custom Hooks",
            hook: "fn use_counter()",
            narration: "Hooks compose. A function that calls hooks is itself a hook, and every component that calls it gets its own copy of the state.",
            source: SOURCE,
            div { class: "counters",
                CounterCard { label: "Score (0 to 10)", start: 0, bounds: Bounds::new(0, 10) }
                CounterCard { label: "Balance (-5 to 5)", start: 5, bounds: Bounds::new(-5, 5) }
            }
            button { onclick: move |_| details.flip(), if details.on() { "Hide details" } else { "Show details" } }
            if details.on() {
                p { class: "details",
                    "Both cards call the same use_counter hook. Their signals are separate because each call happens in a different component."
                }
            }
        }
    }
}

#[component]
fn CounterCard(label: &'static str, start: i64, bounds: Bounds) -> Element {
    let mut counter = use_counter(start, bounds);

    rsx! {
        div { class: "counter-card",
            h4 { "{label}" }
            button { disabled: counter.at_min(), onclick: move |_| counter.add(-1), "-" }
            span { class: "count", "{counter.get()}" }
            button { disabled: counter.at_max(), onclick: move |_| counter.add(1), "+" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stay_in_bounds() {
        let bounds = Bounds::new(-5, 5);
        assert_eq!(bounds.step(4, 1), 5);
        assert_eq!(bounds.step(5, 1), 5);
        assert_eq!(bounds.step(-5, -1), -5);
        assert_eq!(bounds.step(0, i64::MAX), 5);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let bounds = Bounds::new(10, 0);
        assert_eq!(bounds.clamp(-3), 0);
        assert_eq!(bounds.clamp(30), 10);
    }
}
