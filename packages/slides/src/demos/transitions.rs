use super::search::{count_matches, filter_items, sample_items};
use crate::{timing::sleep, SlideFrame};
use dioxus::core::Task;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::{rc::Rc, time::Duration};

const SOURCE: &str = r#"
let mut query = use_signal(String::new);
let mut results = use_signal(Vec::new);
let mut pending = use_signal(|| None::<Task>);

let search = move |evt: FormEvent| {
    // The input updates right away.
    query.set(evt.value());

    // The slow part runs as a task. Starting a new one cancels the stale one.
    if let Some(stale) = pending.take() {
        stale.cancel();
    }
    pending.set(Some(spawn(async move {
        sleep(SLOW_RENDER).await;
        results.set(filter_items(&items, &query(), 50));
        pending.set(None);
    })));
};
"#;

const SLOW_RENDER: Duration = Duration::from_millis(400);
const SHOWN: usize = 50;

pub fn slide(_: Navigator) -> Element {
    let items = use_hook(|| Rc::new(sample_items(10_000)));
    let mut query = use_signal(String::new);
    let mut results = use_signal({
        let items = items.clone();
        move || filter_items(&items, "", SHOWN)
    });
    let mut matches = use_signal({
        let items = items.clone();
        move || items.len()
    });
    let mut pending = use_signal(|| None::<Task>);
    let mut cancelled = use_signal(|| 0u32);

    let search = move |evt: FormEvent| {
        query.set(evt.value());

        let stale = pending.write().take();
        if let Some(stale) = stale {
            stale.cancel();
            cancelled += 1;
        }

        let items = items.clone();
        let task = spawn(async move {
            sleep(SLOW_RENDER).await;
            let query = query();
            results.set(filter_items(&items, &query, SHOWN));
            matches.set(count_matches(&items, &query));
            pending.set(None);
        });
        pending.set(Some(task));
    };

    let is_pending = pending.read().is_some();

    rsx! {
        SlideFrame {
            title: "Transitions",
            hook: "spawn + Task::cancel",
            narration: "Keep urgent updates urgent. The input changes immediately, the expensive update runs as a task, and a newer keystroke cancels work that is already stale.",
            source: SOURCE,
            input {
                placeholder: "Filter 10,000 items",
                value: "{query}",
                oninput: search,
            }
            p { class: if is_pending { "status pending" } else { "status" },
                if is_pending { "Updating..." } else { "{matches} matches" }
                " ({cancelled} stale updates cancelled)"
            }
            ul { class: if is_pending { "results stale" } else { "results" },
                for (i, item) in results.read().iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        }
    }
}
