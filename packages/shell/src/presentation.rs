use crate::{
    use_keyboard_shortcuts, HostHandle, MenuBar, MenuKey, NavigationState, Navigator, ShellConfig,
    Shortcut, ShortcutLegend, SlideDeck, SlideHost,
};
use dioxus::prelude::*;

/// Everything the shell tracks: navigation plus the optimistic fullscreen flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationState {
    navigation: NavigationState,
    fullscreen: bool,
}

impl PresentationState {
    /// Not fullscreen, with the given navigation state.
    pub fn new(navigation: NavigationState) -> Self {
        Self {
            navigation,
            fullscreen: false,
        }
    }

    /// Slide index and open menu.
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Whether the shell believes it is fullscreen. This is never confirmed with the host.
    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// See [`NavigationState::go_to_slide`].
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        self.navigation.go_to_slide(index)
    }

    /// See [`NavigationState::next_slide`].
    pub fn next_slide(&mut self) {
        self.navigation.next_slide();
    }

    /// See [`NavigationState::prev_slide`].
    pub fn prev_slide(&mut self) {
        self.navigation.prev_slide();
    }

    /// See [`NavigationState::toggle_menu`].
    pub fn toggle_menu(&mut self, menu: MenuKey) {
        self.navigation.toggle_menu(menu);
    }

    /// See [`NavigationState::close_menu`].
    pub fn close_menu(&mut self) {
        self.navigation.close_menu();
    }

    /// Flip the fullscreen flag and return the state to request from the host.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Run a keyboard shortcut. Returns the fullscreen state to request from the host, if the
    /// shortcut changed it.
    pub fn apply(&mut self, shortcut: Shortcut) -> Option<bool> {
        match shortcut {
            Shortcut::Next => self.next_slide(),
            Shortcut::Previous => self.prev_slide(),
            Shortcut::ToggleFullscreen => return Some(self.toggle_fullscreen()),
            Shortcut::ExitFullscreen if self.fullscreen => return Some(self.toggle_fullscreen()),
            Shortcut::ExitFullscreen => {}
        }
        None
    }
}

/// The presentation shell.
///
/// Owns the slide index, the open menu and the fullscreen flag, listens for global shortcuts
/// while mounted, and renders the active slide between the menu bar and the controls.
///
/// The host comes from a [`HostHandle`] in context, falling back to the document.
#[component]
pub fn Presentation(deck: SlideDeck, #[props(default)] config: ShellConfig) -> Element {
    let host = use_hook(|| try_consume_context::<HostHandle>().unwrap_or_else(HostHandle::document));

    let mut state = use_signal(|| {
        let start = deck.starting_index(config.start_slide.as_deref());
        PresentationState::new(NavigationState::starting_at(deck.len(), start))
    });

    use_keyboard_shortcuts(&host, {
        let host = host.clone();
        move |shortcut| {
            let request = state.write().apply(shortcut);
            if let Some(fullscreen) = request {
                host.set_fullscreen(fullscreen);
            }
        }
    });

    let navigator = Navigator::new(use_callback(move |index: usize| {
        state.write().go_to_slide(index);
    }));

    use_effect(move || {
        let index = state.read().navigation().current_slide();
        tracing::debug!(index, id = deck.slide(index).id, "showing slide");
    });

    let toggle_fullscreen = move |_| {
        let fullscreen = state.write().toggle_fullscreen();
        host.set_fullscreen(fullscreen);
    };

    let current = *state.read();
    let slide = deck.slide(current.navigation().current_slide());

    rsx! {
        div { class: "deck",
            MenuBar {
                title: config.title.clone(),
                deck,
                current_slide: current.navigation().current_slide(),
                open_menu: current.navigation().open_menu(),
                on_toggle: move |menu| state.write().toggle_menu(menu),
                on_close: move |_| state.write().close_menu(),
                navigator,
            }

            // Keyed so that changing slides unmounts the old demo instead of reusing its hooks.
            main { class: "slide",
                for slide in std::iter::once(slide) {
                    SlideHost { key: "{slide.id}", slide, navigator }
                }
            }

            footer { class: "controls",
                button {
                    class: "nav-button",
                    title: "Previous slide",
                    onclick: move |_| state.write().prev_slide(),
                    "←"
                }
                span { class: "slide-position", "{current.navigation().position_label()}" }
                button {
                    class: "nav-button",
                    title: "Next slide",
                    onclick: move |_| state.write().next_slide(),
                    "→"
                }
                button {
                    class: "fullscreen-button",
                    onclick: toggle_fullscreen,
                    if current.fullscreen() { "Exit fullscreen" } else { "Fullscreen" }
                }
            }

            if config.show_legend {
                ShortcutLegend {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(slides: usize) -> PresentationState {
        PresentationState::new(NavigationState::new(slides))
    }

    #[test]
    fn arrow_keys_move_between_slides() {
        let mut state = state(21);
        assert_eq!(state.apply(Shortcut::Previous), None);
        assert_eq!(state.navigation().current_slide(), 20);
        assert_eq!(state.apply(Shortcut::Next), None);
        assert_eq!(state.navigation().current_slide(), 0);
    }

    #[test]
    fn fullscreen_toggle_is_optimistic() {
        let mut state = state(3);
        assert_eq!(state.apply(Shortcut::ToggleFullscreen), Some(true));
        assert!(state.fullscreen());
        assert_eq!(state.apply(Shortcut::ToggleFullscreen), Some(false));
        assert!(!state.fullscreen());
    }

    #[test]
    fn escape_only_leaves_fullscreen() {
        let mut state = state(3);
        assert_eq!(state.apply(Shortcut::ExitFullscreen), None);
        assert!(!state.fullscreen());

        state.toggle_fullscreen();
        assert_eq!(state.apply(Shortcut::ExitFullscreen), Some(false));
        assert!(!state.fullscreen());
    }

    #[test]
    fn right_arrow_cycles_back_to_start() {
        let mut state = state(21);
        for _ in 0..21 {
            state.apply(Shortcut::Next);
        }
        assert_eq!(state.navigation().current_slide(), 0);
    }
}
