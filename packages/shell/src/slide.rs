use crate::{DeckError, MenuKey};
use dioxus::prelude::*;
use std::fmt;

/// Renders a slide. Called inside the slide's own component scope, so it may use hooks.
pub type SlideRenderer = fn(Navigator) -> Element;

/// One slide of the deck.
#[derive(Clone, Copy)]
pub struct SlideDescriptor {
    /// Unique, stable identifier. Also used as the render key.
    pub id: &'static str,
    /// Display label used in the menus.
    pub title: &'static str,
    /// The dropdown menu the slide is listed under.
    pub menu: MenuKey,
    /// Produces the slide's content.
    pub render: SlideRenderer,
}

impl SlideDescriptor {
    /// Describe a slide.
    pub const fn new(
        id: &'static str,
        title: &'static str,
        menu: MenuKey,
        render: SlideRenderer,
    ) -> Self {
        Self {
            id,
            title,
            menu,
            render,
        }
    }
}

impl PartialEq for SlideDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for SlideDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

/// A validated, ordered, immutable list of slides.
///
/// Never empty, and no two slides share an id.
#[derive(Clone, Copy)]
pub struct SlideDeck {
    slides: &'static [SlideDescriptor],
}

impl SlideDeck {
    /// Validate a slide table.
    pub fn new(slides: &'static [SlideDescriptor]) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }

        for (index, slide) in slides.iter().enumerate() {
            if slides[..index].iter().any(|earlier| earlier.id == slide.id) {
                return Err(DeckError::DuplicateId { id: slide.id });
            }
        }

        Ok(Self { slides })
    }

    /// Number of slides. Always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false, a deck has at least one slide.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The slide at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&'static SlideDescriptor> {
        self.slides.get(index)
    }

    /// The slide at `index`, clamped to the last slide.
    pub fn slide(&self, index: usize) -> &'static SlideDescriptor {
        &self.slides[index.min(self.slides.len() - 1)]
    }

    /// The index of the slide with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    /// All slides in order.
    pub fn iter(&self) -> impl Iterator<Item = &'static SlideDescriptor> {
        self.slides.iter()
    }

    /// The slides listed under `menu`, with their deck indices.
    pub fn in_menu(
        &self,
        menu: MenuKey,
    ) -> impl Iterator<Item = (usize, &'static SlideDescriptor)> {
        self.slides
            .iter()
            .enumerate()
            .filter(move |(_, slide)| slide.menu == menu)
    }

    /// Whether any slide is listed under `menu`.
    pub fn has_menu(&self, menu: MenuKey) -> bool {
        self.slides.iter().any(|slide| slide.menu == menu)
    }

    /// Where the deck opens: the slide named by `start`, or the first slide.
    pub fn starting_index(&self, start: Option<&str>) -> usize {
        let Some(id) = start else {
            return 0;
        };

        self.position(id).unwrap_or_else(|| {
            tracing::warn!("start slide `{id}` is not in the deck, opening the first slide");
            0
        })
    }
}

impl PartialEq for SlideDeck {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slides, other.slides)
    }
}

impl fmt::Debug for SlideDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slides.iter().map(|slide| slide.id))
            .finish()
    }
}

/// The callback a slide uses to ask the shell for another slide.
///
/// Out-of-range indices are ignored by the shell.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigator {
    go_to: Callback<usize>,
}

impl Navigator {
    /// Wrap the shell's jump callback.
    pub fn new(go_to: Callback<usize>) -> Self {
        Self { go_to }
    }

    /// Request a jump to the slide at `index`.
    pub fn go_to(&self, index: usize) {
        self.go_to.call(index);
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}

/// Renders a single slide in its own scope.
///
/// The shell renders it as a one-item list keyed by slide id, so moving to another slide tears
/// the old demo down and its cleanups run before the next one mounts.
#[component]
pub fn SlideHost(slide: &'static SlideDescriptor, navigator: Navigator) -> Element {
    (slide.render)(navigator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(_: Navigator) -> Element {
        rsx! {}
    }

    static SLIDES: &[SlideDescriptor] = &[
        SlideDescriptor::new("one", "One", MenuKey::Basic, blank),
        SlideDescriptor::new("two", "Two", MenuKey::Additional, blank),
        SlideDescriptor::new("three", "Three", MenuKey::Basic, blank),
    ];

    static DUPLICATES: &[SlideDescriptor] = &[
        SlideDescriptor::new("one", "One", MenuKey::Basic, blank),
        SlideDescriptor::new("one", "Again", MenuKey::Basic, blank),
    ];

    #[test]
    fn rejects_empty_and_duplicate_tables() {
        assert_eq!(SlideDeck::new(&[]).unwrap_err(), DeckError::Empty);
        assert_eq!(
            SlideDeck::new(DUPLICATES).unwrap_err(),
            DeckError::DuplicateId { id: "one" }
        );
    }

    #[test]
    fn groups_slides_by_menu() {
        let deck = SlideDeck::new(SLIDES).unwrap();
        let basic: Vec<_> = deck
            .in_menu(MenuKey::Basic)
            .map(|(index, slide)| (index, slide.id))
            .collect();

        assert_eq!(basic, [(0, "one"), (2, "three")]);
        assert!(deck.has_menu(MenuKey::Additional));
        assert!(!deck.has_menu(MenuKey::Latest));
    }

    #[test]
    fn resolves_the_starting_slide() {
        let deck = SlideDeck::new(SLIDES).unwrap();
        assert_eq!(deck.starting_index(None), 0);
        assert_eq!(deck.starting_index(Some("three")), 2);
        assert_eq!(deck.starting_index(Some("missing")), 0);
    }

    #[test]
    fn slide_lookup_is_clamped() {
        let deck = SlideDeck::new(SLIDES).unwrap();
        assert_eq!(deck.get(3), None);
        assert_eq!(deck.slide(3).id, "three");
        assert_eq!(deck.position("two"), Some(1));
    }
}
