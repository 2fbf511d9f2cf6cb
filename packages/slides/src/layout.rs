use dioxus::prelude::*;

/// The common slide layout: heading, the hook being shown, a line of narration, the live demo
/// and its source.
#[component]
pub fn SlideFrame(
    title: &'static str,
    hook: &'static str,
    narration: &'static str,
    source: &'static str,
    children: Element,
) -> Element {
    rsx! {
        section { class: "slide-frame",
            header { class: "slide-header",
                h2 { "{title}" }
                code { class: "hook-name", "{hook}" }
            }
            p { class: "narration", "{narration}" }
            div { class: "slide-body",
                div { class: "demo", {children} }
                CodeSample { source }
            }
        }
    }
}

/// A read-only code listing.
#[component]
pub fn CodeSample(source: &'static str) -> Element {
    let source = source.trim();
    rsx! {
        pre { class: "code-sample",
            code { "{source}" }
        }
    }
}
