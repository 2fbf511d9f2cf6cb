use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
enum TodoAction { Add(String), Toggle(u32), Remove(u32), ClearCompleted }

impl TodoList {
    fn reduce(&mut self, action: TodoAction) {
        match action { /* one place for every transition */ }
    }
}

let mut todos = use_signal(TodoList::default);
let mut dispatch = move |action| todos.write().reduce(action);
"#;

/// Everything that can happen to the todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add(String),
    Toggle(u32),
    Remove(u32),
    ClearCompleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u32,
}

impl TodoList {
    /// Apply one action. Blank additions and unknown ids are ignored.
    pub fn reduce(&mut self, action: TodoAction) {
        match action {
            TodoAction::Add(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return;
                }
                self.items.push(Todo {
                    id: self.next_id,
                    text: text.to_string(),
                    done: false,
                });
                self.next_id += 1;
            }
            TodoAction::Toggle(id) => {
                if let Some(todo) = self.items.iter_mut().find(|todo| todo.id == id) {
                    todo.done = !todo.done;
                }
            }
            TodoAction::Remove(id) => self.items.retain(|todo| todo.id != id),
            TodoAction::ClearCompleted => self.items.retain(|todo| !todo.done),
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|todo| !todo.done).count()
    }
}

pub fn slide(_: Navigator) -> Element {
    let mut todos = use_signal(TodoList::default);
    let mut draft = use_signal(String::new);

    let mut dispatch = move |action: TodoAction| todos.write().reduce(action);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        dispatch(TodoAction::Add(draft()));
        draft.set(String::new());
    };

    let remaining = todos.read().remaining();

    rsx! {
        SlideFrame {
            title: "Reducers",
            hook: "Signal<TodoList>",
            narration: "When state has many transitions, funnel them through one reduce method driven by an action enum.",
            source: SOURCE,
            form { class: "todo-form", onsubmit: submit,
                input {
                    placeholder: "What needs doing?",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { r#type: "submit", "Add" }
            }
            ul { class: "todo-list",
                for todo in todos.read().items().iter().cloned() {
                    li { key: "{todo.id}", class: if todo.done { "done" },
                        input {
                            r#type: "checkbox",
                            checked: todo.done,
                            onchange: move |_| dispatch(TodoAction::Toggle(todo.id)),
                        }
                        span { "{todo.text}" }
                        button { onclick: move |_| dispatch(TodoAction::Remove(todo.id)), "×" }
                    }
                }
            }
            footer { class: "todo-footer",
                span { "{remaining} left" }
                button { onclick: move |_| dispatch(TodoAction::ClearCompleted), "Clear completed" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(texts: &[&str]) -> TodoList {
        let mut list = TodoList::default();
        for text in texts {
            list.reduce(TodoAction::Add(text.to_string()));
        }
        list
    }

    #[test]
    fn adds_trimmed_items_with_fresh_ids() {
        let list = list(&["  write slides ", "", "   ", "rehearse"]);
        let texts: Vec<_> = list.items().iter().map(|todo| (todo.id, todo.text.as_str())).collect();
        assert_eq!(texts, [(0, "write slides"), (1, "rehearse")]);
    }

    #[test]
    fn toggle_and_clear_completed() {
        let mut list = list(&["a", "b", "c"]);
        list.reduce(TodoAction::Toggle(1));
        assert_eq!(list.remaining(), 2);

        list.reduce(TodoAction::ClearCompleted);
        let ids: Vec<_> = list.items().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, [0, 2]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut list = list(&["a"]);
        list.reduce(TodoAction::Remove(0));
        list.reduce(TodoAction::Add("b".into()));
        assert_eq!(list.items()[0].id, 1);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut list = list(&["a"]);
        let before = list.clone();
        list.reduce(TodoAction::Toggle(42));
        list.reduce(TodoAction::Remove(42));
        assert_eq!(list, before);
    }
}
