use std::fmt::{self, Display};

/// The dropdown menus in the shell's menu bar. Every slide is listed under exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKey {
    /// The everyday primitives: state, effects, memoization, context.
    Basic,
    /// Async primitives and patterns built out of the basics.
    Additional,
    /// Concurrent-rendering era patterns: transitions, deferred values, external stores.
    Modern,
    /// Action era patterns: optimistic updates and form actions.
    Latest,
}

impl MenuKey {
    /// All menus, in menu bar order.
    pub const ALL: [MenuKey; 4] = [
        MenuKey::Basic,
        MenuKey::Additional,
        MenuKey::Modern,
        MenuKey::Latest,
    ];

    /// The label on the menu's button.
    pub const fn label(self) -> &'static str {
        match self {
            MenuKey::Basic => "Basic Hooks",
            MenuKey::Additional => "Additional Hooks",
            MenuKey::Modern => "Concurrent Patterns",
            MenuKey::Latest => "Actions",
        }
    }
}

impl Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which slide is showing and which menu is open.
///
/// Two independent variables with trivial transitions:
///
/// - `current_slide` is always a valid index into a deck of `slide_count` slides
/// - at most one menu is open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_slide: usize,
    open_menu: Option<MenuKey>,
    slide_count: usize,
}

impl NavigationState {
    /// Start on the first slide with every menu closed.
    ///
    /// A deck always has at least one slide, so `slide_count` is clamped to one.
    pub fn new(slide_count: usize) -> Self {
        Self {
            current_slide: 0,
            open_menu: None,
            slide_count: slide_count.max(1),
        }
    }

    /// Start on `index`, or on the first slide if `index` is out of range.
    pub fn starting_at(slide_count: usize, index: usize) -> Self {
        let mut state = Self::new(slide_count);
        state.go_to_slide(index);
        state
    }

    /// The index of the slide being shown.
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// The menu that is currently open, if any.
    pub fn open_menu(&self) -> Option<MenuKey> {
        self.open_menu
    }

    /// The number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether `menu` is the open menu.
    pub fn is_open(&self, menu: MenuKey) -> bool {
        self.open_menu == Some(menu)
    }

    /// Jump to `index` and close any open menu.
    ///
    /// Out-of-range indices are ignored. Navigation callbacks can outlive the deck they were
    /// created for, so a stale jump is dropped rather than treated as an error.
    /// Returns whether the jump happened.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            tracing::debug!(index, slide_count = self.slide_count, "ignoring out of range slide jump");
            return false;
        }

        self.current_slide = index;
        self.open_menu = None;
        true
    }

    /// Advance one slide, wrapping from the last slide to the first.
    pub fn next_slide(&mut self) {
        self.current_slide = (self.current_slide + 1) % self.slide_count;
    }

    /// Go back one slide, wrapping from the first slide to the last.
    pub fn prev_slide(&mut self) {
        self.current_slide = match self.current_slide {
            0 => self.slide_count - 1,
            current => current - 1,
        };
    }

    /// Open `menu`, or close it if it is already open. Opening a menu closes any other.
    pub fn toggle_menu(&mut self, menu: MenuKey) {
        self.open_menu = match self.open_menu {
            Some(open) if open == menu => None,
            _ => Some(menu),
        };
    }

    /// Close whichever menu is open.
    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    /// The slide position indicator, one based: `"3 / 21"`.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_slide + 1, self.slide_count)
    }
}
