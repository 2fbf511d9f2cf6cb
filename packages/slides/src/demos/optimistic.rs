use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::time::Duration;
use thiserror::Error;

const SOURCE: &str = r#"
let mut messages = use_signal(OptimisticList::default);

let send = move |text: String| {
    // Show it right away, then settle it once the server answers.
    let id = messages.write().add_pending(text.clone());
    spawn(async move {
        match deliver(&text).await {
            Ok(()) => messages.write().confirm(id),
            Err(_) => messages.write().rollback(id),
        };
    });
};
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub delivery: Delivery,
}

/// Messages shown before the server has answered for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimisticList {
    messages: Vec<Message>,
    next_id: u64,
    rolled_back: Vec<String>,
}

impl OptimisticList {
    pub fn add_pending(&mut self, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text,
            delivery: Delivery::Pending,
        });
        id
    }

    /// Returns false if the message already settled.
    pub fn confirm(&mut self, id: u64) -> bool {
        match self
            .messages
            .iter_mut()
            .find(|message| message.id == id && message.delivery == Delivery::Pending)
        {
            Some(message) => {
                message.delivery = Delivery::Confirmed;
                true
            }
            None => false,
        }
    }

    /// Drops a pending message and remembers its text so the user can see what failed.
    pub fn rollback(&mut self, id: u64) -> bool {
        let Some(position) = self
            .messages
            .iter()
            .position(|message| message.id == id && message.delivery == Delivery::Pending)
        else {
            return false;
        };
        let message = self.messages.remove(position);
        self.rolled_back.push(message.text);
        true
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn rolled_back(&self) -> &[String] {
        &self.rolled_back
    }

    pub fn pending(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.delivery == Delivery::Pending)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("the server rejected \"{0}\"")]
    Rejected(String),
}

/// Any message mentioning "fail" is rejected.
pub fn check_delivery(text: &str) -> Result<(), SendError> {
    if text.to_lowercase().contains("fail") {
        return Err(SendError::Rejected(text.to_string()));
    }
    Ok(())
}

async fn deliver(text: &str) -> Result<(), SendError> {
    sleep(Duration::from_millis(1200)).await;
    check_delivery(text)
}

pub fn slide(_: Navigator) -> Element {
    let mut messages = use_signal(OptimisticList::default);
    let mut draft = use_signal(String::new);

    let mut send = move |text: String| {
        let id = messages.write().add_pending(text.clone());
        spawn(async move {
            match deliver(&text).await {
                Ok(()) => messages.write().confirm(id),
                Err(err) => {
                    tracing::debug!("rolling back message {id}: {err}");
                    messages.write().rollback(id)
                }
            };
        });
    };

    rsx! {
        SlideFrame {
            title: "Optimistic Updates",
            hook: "spawn + Signal",
            narration: "The message appears at once as pending. When the server answers it is confirmed, or rolled back if the send failed. Type fail to see a rollback.",
            source: SOURCE,
            form {
                class: "compose",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let text = draft().trim().to_string();
                    if !text.is_empty() {
                        send(text);
                        draft.set(String::new());
                    }
                },
                input {
                    value: "{draft}",
                    placeholder: "Say something",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { r#type: "submit", "Send" }
            }
            p { class: "pending-count", "{messages.read().pending()} pending" }
            ul { class: "messages",
                for message in messages.read().messages().iter().cloned() {
                    li {
                        key: "{message.id}",
                        class: if message.delivery == Delivery::Pending { "pending" },
                        "{message.text}"
                        if message.delivery == Delivery::Pending {
                            span { class: "status", " sending..." }
                        }
                    }
                }
            }
            for text in messages.read().rolled_back().iter().cloned() {
                p { class: "error", "Not sent: {text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_messages_settle_once() {
        let mut list = OptimisticList::default();
        let hello = list.add_pending("hello".into());
        let oops = list.add_pending("please fail".into());
        assert_eq!(list.pending(), 2);

        assert!(list.confirm(hello));
        assert!(!list.confirm(hello));
        assert!(!list.rollback(hello));

        assert!(list.rollback(oops));
        assert!(!list.confirm(oops));

        assert_eq!(list.pending(), 0);
        assert_eq!(list.messages().len(), 1);
        assert_eq!(list.messages()[0].delivery, Delivery::Confirmed);
        assert_eq!(list.rolled_back(), ["please fail".to_string()]);
    }

    #[test]
    fn ids_are_not_reused_after_rollback() {
        let mut list = OptimisticList::default();
        let first = list.add_pending("a".into());
        list.rollback(first);
        assert_ne!(list.add_pending("b".into()), first);
    }

    #[test]
    fn rejects_messages_mentioning_fail() {
        assert_eq!(check_delivery("all good"), Ok(()));
        assert_eq!(
            check_delivery("FAIL please"),
            Err(SendError::Rejected("FAIL please".into()))
        );
    }
}
