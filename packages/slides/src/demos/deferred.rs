use super::search::{count_matches, filter_items, sample_items};
use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::{rc::Rc, time::Duration};

const SOURCE: &str = r#"
let mut query = use_signal(String::new);

// Lags behind `query`. Every keystroke restarts the resource,
// so it only settles once typing pauses.
let deferred = use_resource(move || {
    let query = query();
    async move {
        sleep(Duration::from_millis(300)).await;
        query
    }
});

let shown = deferred.cloned().unwrap_or_default();
let results = use_memo(move || filter_items(&items, &shown(), 50));
let stale = query() != shown;
"#;

const SETTLE: Duration = Duration::from_millis(300);

pub fn slide(_: Navigator) -> Element {
    let items = use_hook(|| Rc::new(sample_items(10_000)));
    let mut query = use_signal(String::new);

    let deferred = use_resource(move || {
        let query = query();
        async move {
            sleep(SETTLE).await;
            query
        }
    });

    let shown = use_memo(move || deferred.cloned().unwrap_or_default());

    let results = use_memo({
        let items = items.clone();
        move || filter_items(&items, &shown(), 50)
    });
    let matches = use_memo(move || count_matches(&items, &shown()));

    let stale = query().trim() != shown().trim();

    rsx! {
        SlideFrame {
            title: "Deferred Values",
            hook: "use_resource as a debounce",
            narration: "A deferred copy of a value trails the original. The input stays responsive while the expensive view catches up once typing pauses.",
            source: SOURCE,
            input {
                placeholder: "Search 10,000 items",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            p { class: if stale { "status pending" } else { "status" },
                "Showing results for \"{shown}\": {matches} matches"
                if stale { " (catching up)" }
            }
            ul { class: if stale { "results stale" } else { "results" },
                for (i, item) in results.read().iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        }
    }
}
