use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
// Lives outside every component, for the life of the app.
static CART: GlobalSignal<Vec<&str>> = Signal::global(Vec::new);

#[component]
fn Shelf() -> Element {
    rsx! { button { onclick: move |_| CART.write().push("tea"), "Add tea" } }
}

#[component]
fn Badge() -> Element {
    rsx! { span { "{CART.read().len()} items" } }
}
"#;

/// Shared by every component that reads it, and survives leaving this slide.
pub static CART: GlobalSignal<Vec<&'static str>> = Signal::global(Vec::new);

const PRODUCTS: [&str; 4] = ["tea", "coffee", "cocoa", "matcha"];

/// `(product, quantity)` pairs in first-added order.
pub fn summarize(cart: &[&'static str]) -> Vec<(&'static str, usize)> {
    let mut summary: Vec<(&'static str, usize)> = Vec::new();
    for item in cart {
        match summary.iter_mut().find(|(name, _)| name == item) {
            Some((_, quantity)) => *quantity += 1,
            None => summary.push((item, 1)),
        }
    }
    summary
}

pub fn slide(_: Navigator) -> Element {
    rsx! {
        SlideFrame {
            title: "External Stores",
            hook: "GlobalSignal",
            narration: "A global signal is a store outside the component tree. Unrelated components stay in sync, and the state outlives the components that use it. Leave this slide and come back.",
            source: SOURCE,
            div { class: "store-demo",
                Shelf {}
                CartBadge {}
            }
        }
    }
}

#[component]
fn Shelf() -> Element {
    rsx! {
        div { class: "shelf",
            for product in PRODUCTS {
                button { key: "{product}", onclick: move |_| CART.write().push(product), "Add {product}" }
            }
            button { onclick: move |_| CART.write().clear(), "Empty cart" }
        }
    }
}

#[component]
fn CartBadge() -> Element {
    let summary = summarize(&CART.read());

    rsx! {
        div { class: "cart",
            span { class: "badge", "{CART.read().len()} items" }
            ul {
                for (product, quantity) in summary {
                    li { key: "{product}", "{quantity} × {product}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_repeated_products() {
        let cart = ["tea", "cocoa", "tea", "tea"];
        assert_eq!(summarize(&cart), [("tea", 3), ("cocoa", 1)]);
        assert!(summarize(&[]).is_empty());
    }
}
