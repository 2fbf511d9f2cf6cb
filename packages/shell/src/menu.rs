use crate::{MenuKey, Navigator, SlideDeck, SHORTCUT_LEGEND};
use dioxus::prelude::*;

/// The deck title and one dropdown per menu that has slides in it.
///
/// While a menu is open a backdrop covers the page so a click anywhere else closes it.
#[component]
pub fn MenuBar(
    title: String,
    deck: SlideDeck,
    current_slide: usize,
    open_menu: Option<MenuKey>,
    on_toggle: EventHandler<MenuKey>,
    on_close: EventHandler<()>,
    navigator: Navigator,
) -> Element {
    rsx! {
        nav { class: "menu-bar",
            span { class: "deck-title", "{title}" }

            if open_menu.is_some() {
                div { class: "menu-backdrop", onclick: move |_| on_close.call(()) }
            }

            for menu in MenuKey::ALL.into_iter().filter(|menu| deck.has_menu(*menu)) {
                SlideMenu {
                    key: "{menu:?}",
                    menu,
                    deck,
                    current_slide,
                    open: open_menu == Some(menu),
                    on_toggle,
                    navigator,
                }
            }
        }
    }
}

#[component]
fn SlideMenu(
    menu: MenuKey,
    deck: SlideDeck,
    current_slide: usize,
    open: bool,
    on_toggle: EventHandler<MenuKey>,
    navigator: Navigator,
) -> Element {
    rsx! {
        div { class: "menu",
            button {
                class: "menu-button",
                class: if open { "open" },
                onclick: move |_| on_toggle.call(menu),
                "{menu} ▾"
            }
            if open {
                ul { class: "menu-items",
                    for (index, number, slide) in deck.in_menu(menu).map(|(index, slide)| (index, index + 1, slide)) {
                        li { key: "{slide.id}",
                            class: if index == current_slide { "active" },
                            button {
                                onclick: move |_| navigator.go_to(index),
                                "{number}. {slide.title}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The static list of keyboard shortcuts.
#[component]
pub fn ShortcutLegend() -> Element {
    rsx! {
        dl { class: "shortcut-legend",
            for (keys, action) in SHORTCUT_LEGEND.iter() {
                dt { "{keys}" }
                dd { "{action}" }
            }
        }
    }
}
