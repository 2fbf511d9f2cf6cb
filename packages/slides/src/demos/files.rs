use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
let mut picked = use_signal(Vec::new);

input {
    r#type: "file",
    multiple: true,
    onchange: move |evt| {
        let files = evt.files().iter().map(|file| (file.name(), file.size())).collect();
        picked.set(files);
    },
}
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
}

/// Human readable size: `512 B`, `1.5 KB`, `3.0 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

pub fn slide(_: Navigator) -> Element {
    let mut picked = use_signal(Vec::<PickedFile>::new);

    let total: u64 = picked.read().iter().map(|file| file.size).sum();

    rsx! {
        SlideFrame {
            title: "File Picker",
            hook: "onchange + FormEvent::files",
            narration: "Event handlers get typed event data. A file input hands over every selected file, and nothing leaves the page.",
            source: SOURCE,
            input {
                r#type: "file",
                multiple: true,
                onchange: move |evt| {
                    let files: Vec<PickedFile> = evt
                        .files()
                        .iter()
                        .map(|file| PickedFile { name: file.name(), size: file.size() })
                        .collect();
                    tracing::debug!(count = files.len(), "files picked");
                    picked.set(files);
                },
            }
            if picked.read().is_empty() {
                p { class: "hint", "No files chosen yet." }
            } else {
                ul { class: "file-list",
                    for (i, file) in picked.read().iter().enumerate() {
                        li { key: "{i}",
                            span { class: "file-name", "{file.name}" }
                            span { class: "file-size", "{format_size(file.size)}" }
                        }
                    }
                }
                p { class: "status", "{picked.read().len()} files, {format_size(total)} total" }
            }
        }
    }
}
