#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod config;
pub use config::*;

mod error;
pub use error::*;

mod host;
pub use host::*;

mod keyboard;
pub use keyboard::*;

mod navigation;
pub use navigation::*;

mod presentation;
pub use presentation::*;

mod slide;
pub use slide::*;

mod menu;
pub use menu::*;

/// Everything a slide or an app needs to plug into the shell.
pub mod prelude {
    pub use crate::{
        HostHandle, KeyListener, MenuKey, Navigator, Presentation, PresentationHost, ShellConfig,
        SlideDeck, SlideDescriptor,
    };
}
