use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
let mut limit = use_signal(|| 5_000);
let mut clicks = use_signal(|| 0);

// Recomputed only when `limit` changes, not on every render.
let primes = use_memo(move || primes_up_to(limit()));

rsx! {
    input { r#type: "range", oninput: move |e| limit.set(e.parsed()?) }
    button { onclick: move |_| clicks += 1, "re-render" }
    p { "{primes.read().len()} primes" }
}
"#;

/// Every prime `<= limit`, by sieve of Eratosthenes.
pub fn primes_up_to(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for n in 2..=limit {
        if composite[n] {
            continue;
        }
        primes.push(n);
        let mut multiple = n * n;
        while multiple <= limit {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
}

pub fn slide(_: Navigator) -> Element {
    let mut limit = use_signal(|| 5_000usize);
    let mut clicks = use_signal(|| 0u32);

    // How many times the memo body ran. Not reactive, so bumping it inside the memo is harmless.
    let computations = use_hook(|| CopyValue::new(0u32));

    let primes = use_memo(move || {
        let mut computations = computations;
        *computations.write() += 1;
        primes_up_to(limit())
    });

    let count = primes.read().len();
    let largest = primes.read().last().copied().unwrap_or_default();
    let computed = *computations.peek();

    rsx! {
        SlideFrame {
            title: "Memoization",
            hook: "use_memo",
            narration: "A memo caches a derived value and recomputes it only when a signal it read changes.",
            source: SOURCE,
            label {
                "Primes up to {limit}"
                input {
                    r#type: "range",
                    min: "10",
                    max: "50000",
                    step: "10",
                    value: "{limit}",
                    oninput: move |evt| {
                        if let Ok(next) = evt.value().parse() {
                            limit.set(next);
                        }
                    },
                }
            }
            button { onclick: move |_| clicks += 1, "Unrelated re-render ({clicks})" }
            p { "{count} primes, the largest is {largest}" }
            p { class: "render-count", "Memo computed {computed} times" }
        }
    }
}
