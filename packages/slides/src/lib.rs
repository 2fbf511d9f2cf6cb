//! The slides of the hookdeck presentation.
//!
//! Every slide is a live demo of one hook or pattern, shown next to the code that drives it.
//! The table in [`SLIDES`] is the deck, in presentation order.

use hookdeck_shell::{DeckError, MenuKey, SlideDeck, SlideDescriptor};

mod demos;
mod layout;
mod timing;

pub use demos::*;
pub use layout::{CodeSample, SlideFrame};

/// Every slide, in order.
pub static SLIDES: &[SlideDescriptor] = &[
    SlideDescriptor::new("intro", "Hooks in Practice", MenuKey::Basic, intro::slide),
    SlideDescriptor::new("use-signal", "State with use_signal", MenuKey::Basic, state::slide),
    SlideDescriptor::new("batching", "Batched Updates", MenuKey::Basic, batching::slide),
    SlideDescriptor::new("use-effect", "Effects", MenuKey::Basic, effects::slide),
    SlideDescriptor::new("effect-cleanup", "Effect Cleanup", MenuKey::Basic, cleanup::slide),
    SlideDescriptor::new("use-memo", "Memoization", MenuKey::Basic, memo::slide),
    SlideDescriptor::new("use-callback", "Stable Callbacks", MenuKey::Basic, callback::slide),
    SlideDescriptor::new("use-context", "Context", MenuKey::Basic, context::slide),
    SlideDescriptor::new("reducer", "Reducers", MenuKey::Basic, reducer::slide),
    SlideDescriptor::new("use-hook", "Mutable Values", MenuKey::Basic, refs::slide),
    SlideDescriptor::new("use-resource", "Async Resources", MenuKey::Additional, resource::slide),
    SlideDescriptor::new("use-future", "Background Futures", MenuKey::Additional, future::slide),
    SlideDescriptor::new("use-coroutine", "Coroutines", MenuKey::Additional, coroutine::slide),
    SlideDescriptor::new("custom-hooks", "Custom Hooks", MenuKey::Additional, custom::slide),
    SlideDescriptor::new("canvas", "Drawing", MenuKey::Additional, canvas::slide),
    SlideDescriptor::new("file-picker", "File Picker", MenuKey::Additional, files::slide),
    SlideDescriptor::new("transitions", "Transitions", MenuKey::Modern, transitions::slide),
    SlideDescriptor::new("deferred-value", "Deferred Values", MenuKey::Modern, deferred::slide),
    SlideDescriptor::new("global-signal", "External Stores", MenuKey::Modern, store::slide),
    SlideDescriptor::new("optimistic-ui", "Optimistic UI", MenuKey::Latest, optimistic::slide),
    SlideDescriptor::new("form-action", "Form Actions", MenuKey::Latest, form::slide),
];

/// The validated deck.
pub fn deck() -> Result<SlideDeck, DeckError> {
    SlideDeck::new(SLIDES)
}
