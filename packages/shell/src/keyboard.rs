use crate::HostHandle;
use dioxus::prelude::*;
use std::rc::Rc;

/// A keyboard-driven shell transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Right arrow or space.
    Next,
    /// Left arrow.
    Previous,
    /// `f` or F11.
    ToggleFullscreen,
    /// Escape. Only does something while fullscreen.
    ExitFullscreen,
}

impl Shortcut {
    /// Map a `KeyboardEvent.key` name to a shortcut.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | " " => Some(Shortcut::Next),
            "ArrowLeft" => Some(Shortcut::Previous),
            "f" | "F11" => Some(Shortcut::ToggleFullscreen),
            "Escape" => Some(Shortcut::ExitFullscreen),
            _ => None,
        }
    }
}

/// The keys and what they do, as shown in the shell's legend.
pub const SHORTCUT_LEGEND: &[(&str, &str)] = &[
    ("→ / Space", "Next slide"),
    ("←", "Previous slide"),
    ("F / F11", "Toggle fullscreen"),
    ("Esc", "Exit fullscreen"),
];

/// Route global key presses to `on_shortcut` for as long as the calling component is mounted.
///
/// The host's key listener is acquired on the first render and stored in the hook slot. It is
/// released when the component unmounts, so remounting the shell never stacks listeners.
/// Keys that are not shortcuts are dropped here.
pub fn use_keyboard_shortcuts(host: &HostHandle, mut on_shortcut: impl FnMut(Shortcut) + 'static) {
    let host = host.clone();
    use_hook(move || {
        tracing::trace!("acquiring global key listener");
        let listener = host.listen_for_keys(Box::new(move |key| {
            if let Some(shortcut) = Shortcut::from_key_name(&key) {
                on_shortcut(shortcut);
            }
        }));
        Rc::new(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_documented_keys() {
        assert_eq!(Shortcut::from_key_name("ArrowRight"), Some(Shortcut::Next));
        assert_eq!(Shortcut::from_key_name(" "), Some(Shortcut::Next));
        assert_eq!(Shortcut::from_key_name("ArrowLeft"), Some(Shortcut::Previous));
        assert_eq!(Shortcut::from_key_name("f"), Some(Shortcut::ToggleFullscreen));
        assert_eq!(Shortcut::from_key_name("F11"), Some(Shortcut::ToggleFullscreen));
        assert_eq!(Shortcut::from_key_name("Escape"), Some(Shortcut::ExitFullscreen));
    }

    #[test]
    fn ignores_everything_else() {
        for key in ["ArrowUp", "Enter", "F", "F10", "q", "Spacebar", ""] {
            assert_eq!(Shortcut::from_key_name(key), None, "{key:?}");
        }
    }
}
