//! Drive the shell through a VirtualDom with a fake host standing in for the document.

use dioxus::prelude::*;
use dioxus_core::generation;
use hookdeck_shell::prelude::*;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

#[derive(Default)]
struct FakeHost {
    listeners: RefCell<usize>,
    on_key: Rc<RefCell<Option<Box<dyn FnMut(String)>>>>,
    fullscreen_requests: RefCell<Vec<bool>>,
}

impl FakeHost {
    fn press(&self, key: &str) {
        if let Some(on_key) = self.on_key.borrow_mut().as_mut() {
            on_key(key.to_string());
        }
    }
}

#[derive(Clone, Default)]
struct SharedHost(Rc<FakeHost>);

impl PresentationHost for SharedHost {
    fn set_fullscreen(&self, fullscreen: bool) {
        self.0.fullscreen_requests.borrow_mut().push(fullscreen);
    }

    fn listen_for_keys(&self, on_key: Box<dyn FnMut(String)>) -> KeyListener {
        *self.0.listeners.borrow_mut() += 1;
        *self.0.on_key.borrow_mut() = Some(on_key);

        let host = self.0.clone();
        KeyListener::new(move || {
            *host.listeners.borrow_mut() -= 1;
            host.on_key.borrow_mut().take();
        })
    }
}

/// Handed to the slides through root context so tests can drive their navigator.
#[derive(Clone, Default)]
struct Captured(Rc<Cell<Option<Navigator>>>);

/// Counts how often the title slide was torn down.
#[derive(Clone, Default)]
struct Dropped(Rc<Cell<usize>>);

fn capture(nav: Navigator) {
    if let Some(captured) = try_consume_context::<Captured>() {
        captured.0.set(Some(nav));
    }
}

fn title(nav: Navigator) -> Element {
    capture(nav);
    let dropped = use_hook(try_consume_context::<Dropped>);
    use_drop(move || {
        if let Some(dropped) = dropped {
            dropped.0.set(dropped.0.get() + 1);
        }
    });
    rsx! { h1 { "Welcome" } }
}

fn second(nav: Navigator) -> Element {
    capture(nav);
    let visits = use_signal(|| 1);
    rsx! {
        p { "visit {visits}" }
        h1 { "Second" }
        button { onclick: move |_| nav.go_to(0), "back" }
    }
}

fn third(nav: Navigator) -> Element {
    capture(nav);
    rsx! { h1 { "Third" } }
}

static SLIDES: &[SlideDescriptor] = &[
    SlideDescriptor::new("title", "Title", MenuKey::Basic, title),
    SlideDescriptor::new("second", "Second", MenuKey::Basic, second),
    SlideDescriptor::new("third", "Third", MenuKey::Latest, third),
];

fn app() -> Element {
    let config = use_context::<ShellConfig>();
    let deck = SlideDeck::new(SLIDES).unwrap();
    rsx! { Presentation { deck, config } }
}

fn render(config: ShellConfig, host: &SharedHost) -> (VirtualDom, String) {
    let mut dom = VirtualDom::new(app)
        .with_root_context(config)
        .with_root_context(HostHandle::new(host.clone()));
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    (dom, html)
}

#[test]
fn renders_first_slide_and_controls() {
    let host = SharedHost::default();
    let (_dom, html) = render(ShellConfig::default(), &host);

    assert!(html.contains("<h1>Welcome</h1>"), "{html}");
    assert!(html.contains("1 / 3"), "{html}");
    assert!(html.contains("Basic Hooks"), "{html}");
    assert!(html.contains("Actions"), "{html}");
    assert!(!html.contains("Additional Hooks"), "{html}");
    assert!(html.contains("Toggle fullscreen"), "{html}");
    assert!(html.contains("Fullscreen"), "{html}");
}

#[test]
fn starts_on_the_configured_slide() {
    let host = SharedHost::default();
    let config = ShellConfig {
        start_slide: Some("second".to_string()),
        show_legend: false,
        ..Default::default()
    };
    let (_dom, html) = render(config, &host);

    assert!(html.contains("<h1>Second</h1>"), "{html}");
    assert!(html.contains("2 / 3"), "{html}");
    assert!(!html.contains("Toggle fullscreen"), "{html}");
}

#[test]
fn unknown_start_slide_opens_the_first() {
    let host = SharedHost::default();
    let config = ShellConfig {
        start_slide: Some("missing".to_string()),
        ..Default::default()
    };
    let (_dom, html) = render(config, &host);

    assert!(html.contains("1 / 3"), "{html}");
}

#[test]
fn menus_start_closed() {
    let host = SharedHost::default();
    let (_dom, html) = render(ShellConfig::default(), &host);

    assert!(!html.contains("menu-items"), "{html}");
    assert!(!html.contains("menu-backdrop"), "{html}");
}

#[test]
fn key_listener_lives_as_long_as_the_shell() {
    fn rerendering_app() -> Element {
        let deck = SlideDeck::new(SLIDES).unwrap();
        // A new title every render forces the shell itself to re-render.
        let config = ShellConfig {
            title: format!("Deck {}", generation()),
            ..Default::default()
        };
        rsx! { Presentation { deck, config } }
    }

    let host = SharedHost::default();
    let mut dom = VirtualDom::new(rerendering_app).with_root_context(HostHandle::new(host.clone()));
    assert_eq!(*host.0.listeners.borrow(), 0);

    dom.rebuild_in_place();
    assert_eq!(*host.0.listeners.borrow(), 1);

    for _ in 0..3 {
        dom.mark_dirty(ScopeId::APP);
        _ = dom.render_immediate_to_vec();
    }
    assert_eq!(*host.0.listeners.borrow(), 1);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Deck "), "{html}");
    assert!(!html.contains("Deck 0"), "{html}");

    drop(dom);
    assert_eq!(*host.0.listeners.borrow(), 0);
    assert!(host.0.on_key.borrow().is_none());
}

#[test]
fn fullscreen_shortcuts_reach_the_host() {
    let host = SharedHost::default();
    let (dom, _) = render(ShellConfig::default(), &host);

    dom.in_runtime(|| {
        // Not fullscreen yet, so escape does nothing.
        host.0.press("Escape");
        host.0.press("f");
        host.0.press("ArrowRight");
        host.0.press("q");
        host.0.press("Escape");
        host.0.press("F11");
    });

    assert_eq!(*host.0.fullscreen_requests.borrow(), [true, false, true]);
}

fn press(dom: &mut VirtualDom, host: &SharedHost, key: &str) -> String {
    dom.in_runtime(|| host.0.press(key));
    _ = dom.render_immediate_to_vec();
    dioxus_ssr::render(dom)
}

#[test]
fn arrow_keys_move_the_rendered_slide() {
    let host = SharedHost::default();
    let (mut dom, _) = render(ShellConfig::default(), &host);

    let html = press(&mut dom, &host, "ArrowRight");
    assert!(html.contains("<h1>Second</h1>"), "{html}");
    assert!(html.contains("2 / 3"), "{html}");

    let html = press(&mut dom, &host, " ");
    assert!(html.contains("<h1>Third</h1>"), "{html}");

    let html = press(&mut dom, &host, "ArrowRight");
    assert!(html.contains("<h1>Welcome</h1>"), "{html}");
    assert!(html.contains("1 / 3"), "{html}");

    let html = press(&mut dom, &host, "ArrowLeft");
    assert!(html.contains("3 / 3"), "{html}");
}

#[test]
fn navigator_ignores_out_of_range_jumps() {
    let host = SharedHost::default();
    let captured = Captured::default();
    let mut dom = VirtualDom::new(app)
        .with_root_context(ShellConfig::default())
        .with_root_context(HostHandle::new(host.clone()))
        .with_root_context(captured.clone());
    dom.rebuild_in_place();

    let nav = captured.0.get().expect("the first slide received a navigator");

    dom.in_runtime(|| nav.go_to(3));
    _ = dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<h1>Welcome</h1>"), "{html}");
    assert!(html.contains("1 / 3"), "{html}");

    dom.in_runtime(|| nav.go_to(2));
    _ = dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<h1>Third</h1>"), "{html}");
    assert!(html.contains("3 / 3"), "{html}");
}

#[test]
fn leaving_a_slide_runs_its_cleanup() {
    let host = SharedHost::default();
    let dropped = Dropped::default();
    let mut dom = VirtualDom::new(app)
        .with_root_context(ShellConfig::default())
        .with_root_context(HostHandle::new(host.clone()))
        .with_root_context(dropped.clone());
    dom.rebuild_in_place();
    assert_eq!(dropped.0.get(), 0);

    press(&mut dom, &host, "ArrowRight");
    assert_eq!(dropped.0.get(), 1);

    // Coming back mounts a fresh title slide, and leaving again drops it again.
    let html = press(&mut dom, &host, "ArrowLeft");
    assert!(html.contains("<h1>Welcome</h1>"), "{html}");
    let html = press(&mut dom, &host, "ArrowRight");
    assert!(html.contains("visit 1"), "{html}");
    assert_eq!(dropped.0.get(), 2);
}
