use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use futures_util::StreamExt;
use hookdeck_shell::Navigator;
use std::time::Duration;

const SOURCE: &str = r#"
// A long-lived task with an inbox.
let bot = use_coroutine(move |mut inbox: UnboundedReceiver<String>| async move {
    while let Some(message) = inbox.next().await {
        sleep(Duration::from_millis(500)).await;
        chat.write().push(Author::Bot, reply_to(&message));
    }
});

// Sending never blocks the handler.
let send = move |_| bot.send(draft());
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    You,
    Bot,
}

impl Author {
    fn class_name(self) -> &'static str {
        match self {
            Author::You => "from-you",
            Author::Bot => "from-bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub author: Author,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u32,
}

impl ChatLog {
    pub fn push(&mut self, author: Author, text: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            author,
            text: text.into(),
        });
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// What the bot says back.
pub fn reply_to(message: &str) -> String {
    let message = message.trim();
    let lower = message.to_lowercase();

    if ["hello", "hi", "hey"].iter().any(|greeting| lower.starts_with(greeting)) {
        "Hello! Ask me about a hook.".to_string()
    } else if lower.contains("signal") {
        "Signals hold state. Reading one subscribes you to it.".to_string()
    } else if lower.contains("effect") {
        "Effects run after rendering, and again when what they read changes.".to_string()
    } else if message.ends_with('?') {
        "Good question. Try the slide about it.".to_string()
    } else {
        format!("You said \"{message}\". Messages wait in my inbox until I get to them.")
    }
}

pub fn slide(_: Navigator) -> Element {
    let mut chat = use_signal(ChatLog::default);
    let mut draft = use_signal(String::new);
    let mut queued = use_signal(|| 0u32);

    let bot = use_coroutine(move |mut inbox: UnboundedReceiver<String>| async move {
        while let Some(message) = inbox.next().await {
            sleep(Duration::from_millis(500)).await;
            chat.write().push(Author::Bot, reply_to(&message));
            queued -= 1;
        }
    });

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft();
        draft.set(String::new());
        if text.trim().is_empty() {
            return;
        }
        chat.write().push(Author::You, text.clone());
        queued += 1;
        bot.send(text);
    };

    rsx! {
        SlideFrame {
            title: "Coroutines",
            hook: "use_coroutine",
            narration: "A coroutine is a task with an inbox. Handlers send to it and return immediately, and it works through messages one at a time.",
            source: SOURCE,
            ul { class: "chat",
                for message in chat.read().messages().iter().cloned() {
                    li {
                        key: "{message.id}",
                        class: message.author.class_name(),
                        "{message.text}"
                    }
                }
            }
            if queued() > 0 {
                p { class: "typing", "bot is typing ({queued} queued)" }
            }
            form { onsubmit: send,
                input {
                    placeholder: "Say something",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { r#type: "submit", "Send" }
            }
        }
    }
}
