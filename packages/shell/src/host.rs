//! The shell's view of the environment it runs in.
//!
//! The shell needs two things from its host: a way to ask for fullscreen, and a stream of global
//! key presses. Both are best effort. A host that cannot do either is still a valid host.

use dioxus::prelude::*;
use std::{fmt, ops::Deref, rc::Rc};

/// The environment the presentation runs in.
pub trait PresentationHost {
    /// Ask the host to enter or leave fullscreen.
    ///
    /// This is fire and forget. The shell tracks its own optimistic flag and never waits for the
    /// host to confirm, so a host that silently refuses leaves the flag out of sync.
    fn set_fullscreen(&self, fullscreen: bool);

    /// Start delivering the `KeyboardEvent.key` name of every global key press to `on_key`.
    ///
    /// Keys keep flowing until the returned [`KeyListener`] is dropped.
    fn listen_for_keys(&self, on_key: Box<dyn FnMut(String)>) -> KeyListener;
}

/// A live subscription to a host's key stream. Dropping it unsubscribes.
#[must_use = "the key listener is released as soon as it is dropped"]
pub struct KeyListener {
    release: Option<Box<dyn FnOnce()>>,
}

impl KeyListener {
    /// A listener that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A listener with nothing to release, for hosts without a key stream.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!("releasing global key listener");
            release();
        }
    }
}

impl fmt::Debug for KeyListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListener")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// A shared handle to the [`PresentationHost`], handed around through context.
#[derive(Clone)]
pub struct HostHandle(Rc<dyn PresentationHost>);

impl HostHandle {
    /// Wrap a host.
    pub fn new(host: impl PresentationHost + 'static) -> Self {
        Self(Rc::new(host))
    }

    /// The default host, backed by the rendered document.
    pub fn document() -> Self {
        Self::new(DocumentHost)
    }
}

impl Deref for HostHandle {
    type Target = dyn PresentationHost;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for HostHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostHandle").finish_non_exhaustive()
    }
}

/// Uses the fullscreen API and a `keydown` listener of whatever document the app renders into.
///
/// Works on the web and inside the desktop webview.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHost;

const ENTER_FULLSCREEN: &str = r#"
    if (document.fullscreenEnabled && !document.fullscreenElement) {
        document.documentElement.requestFullscreen().catch(() => {});
    }
"#;

const EXIT_FULLSCREEN: &str = r#"
    if (document.fullscreenElement) {
        document.exitFullscreen().catch(() => {});
    }
"#;

// Keys typed into form controls belong to the control, not the deck.
const KEY_LISTENER: &str = r#"
    const onKeyDown = (event) => {
        const target = event.target;
        if (target && (target.isContentEditable || ["INPUT", "TEXTAREA", "SELECT"].includes(target.tagName))) {
            return;
        }
        if (event.ctrlKey || event.metaKey || event.altKey) {
            return;
        }
        if (event.key === "F11" || event.key === " ") {
            event.preventDefault();
        }
        dioxus.send(event.key);
    };
    window.addEventListener("keydown", onKeyDown);
    await dioxus.recv();
    window.removeEventListener("keydown", onKeyDown);
"#;

impl PresentationHost for DocumentHost {
    fn set_fullscreen(&self, fullscreen: bool) {
        tracing::debug!(fullscreen, "requesting fullscreen change from the document");
        let script = match fullscreen {
            true => ENTER_FULLSCREEN,
            false => EXIT_FULLSCREEN,
        };
        _ = document::eval(script);
    }

    fn listen_for_keys(&self, mut on_key: Box<dyn FnMut(String)>) -> KeyListener {
        tracing::trace!("attaching keydown listener to the document");
        let eval = document::eval(KEY_LISTENER);

        let mut stream = eval.clone();
        let task = spawn(async move {
            loop {
                match stream.recv::<String>().await {
                    Ok(key) => on_key(key),
                    Err(err) => {
                        tracing::warn!("keyboard shortcuts unavailable: {err}");
                        break;
                    }
                }
            }
        });

        KeyListener::new(move || {
            // Unblocks the script so it removes its own listener.
            if let Err(err) = eval.send(true) {
                tracing::trace!("key listener script already gone: {err}");
            }
            task.cancel();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dropping_a_listener_releases_it_once() {
        let released = Rc::new(Cell::new(0));
        let listener = KeyListener::new({
            let released = released.clone();
            move || released.set(released.get() + 1)
        });

        assert_eq!(released.get(), 0);
        drop(listener);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn detached_listener_has_nothing_to_release() {
        let listener = KeyListener::detached();
        assert_eq!(format!("{listener:?}"), "KeyListener { attached: false }");
    }
}
