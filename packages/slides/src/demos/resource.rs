use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::time::Duration;
use thiserror::Error;

const SOURCE: &str = r#"
let mut user_id = use_signal(|| 1);

// Re-runs whenever `user_id` changes. A newer run cancels the older one.
let profile = use_resource(move || {
    let id = user_id();
    async move { fetch_profile(id).await }
});

match &*profile.read() {
    None => rsx! { p { "Loading..." } },
    Some(Ok(user)) => rsx! { p { "{user.name}" } },
    Some(Err(err)) => rsx! { p { class: "error", "{err}" } },
}
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no user with id {0}")]
    NotFound(u32),
    #[error("the directory is down for maintenance, try another id")]
    Unavailable,
}

const DIRECTORY: &[Profile] = &[
    Profile { id: 1, name: "Ada", role: "Compiler engineer" },
    Profile { id: 2, name: "Grace", role: "Language designer" },
    Profile { id: 3, name: "Alan", role: "Theorist" },
    Profile { id: 4, name: "Barbara", role: "Systems architect" },
    Profile { id: 5, name: "Edsger", role: "Structured programmer" },
];

/// The id that always fails, to show the error state.
pub const MAINTENANCE_ID: u32 = 6;

/// Look a user up in the in-memory directory.
pub fn lookup(id: u32) -> Result<Profile, LookupError> {
    if id == MAINTENANCE_ID {
        return Err(LookupError::Unavailable);
    }
    DIRECTORY
        .iter()
        .find(|profile| profile.id == id)
        .cloned()
        .ok_or(LookupError::NotFound(id))
}

async fn fetch_profile(id: u32) -> Result<Profile, LookupError> {
    sleep(Duration::from_millis(600)).await;
    lookup(id)
}

pub fn slide(_: Navigator) -> Element {
    let mut user_id = use_signal(|| 1u32);

    let mut profile = use_resource(move || {
        let id = user_id();
        async move { fetch_profile(id).await }
    });

    let body = match &*profile.read() {
        None => rsx! { p { class: "loading", "Loading user {user_id}..." } },
        Some(Ok(user)) => rsx! {
            div { class: "profile",
                h3 { "{user.name}" }
                p { "{user.role}" }
            }
        },
        Some(Err(err)) => rsx! { p { class: "error", "{err}" } },
    };

    rsx! {
        SlideFrame {
            title: "Async Resources",
            hook: "use_resource",
            narration: "A resource runs a future and tracks its result. Reading a signal before the first await makes it re-run when that signal changes.",
            source: SOURCE,
            div { class: "controls",
                button { disabled: user_id() <= 1, onclick: move |_| user_id -= 1, "Previous user" }
                span { "id {user_id}" }
                button { disabled: user_id() > MAINTENANCE_ID, onclick: move |_| user_id += 1, "Next user" }
                button { onclick: move |_| profile.restart(), "Reload" }
            }
            {body}
        }
    }
}
