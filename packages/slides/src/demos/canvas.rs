use crate::SlideFrame;
use dioxus::prelude::*;
use hookdeck_shell::Navigator;

const SOURCE: &str = r#"
let mut strokes = use_signal(Strokes::default);

svg {
    onpointerdown: move |e| {
        let p = e.element_coordinates();
        strokes.write().begin(color(), p.x, p.y);
    },
    onpointermove: move |e| {
        let p = e.element_coordinates();
        strokes.write().extend(p.x, p.y);
    },
    onpointerup: move |_| strokes.write().end(),
    for stroke in strokes.read().iter() {
        path { d: stroke.path_data(), stroke: stroke.color }
    }
}
"#;

pub const COLORS: [&str; 4] = ["#1d4ed8", "#dc2626", "#16a34a", "#111827"];

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    points: Vec<(f64, f64)>,
}

impl Stroke {
    /// SVG path data, `M x y L x y ...`, rounded to one decimal.
    pub fn path_data(&self) -> String {
        let mut data = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                data.push(' ');
            }
            let command = if i == 0 { 'M' } else { 'L' };
            data.push_str(&format!("{command} {x:.1} {y:.1}"));
        }
        data
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Every stroke drawn so far and whether the pointer is still down.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Strokes {
    strokes: Vec<Stroke>,
    drawing: bool,
}

impl Strokes {
    pub fn begin(&mut self, color: &'static str, x: f64, y: f64) {
        self.strokes.push(Stroke {
            color,
            points: vec![(x, y)],
        });
        self.drawing = true;
    }

    /// Add a point to the open stroke. Ignored when no stroke is open or the pointer has not moved.
    pub fn extend(&mut self, x: f64, y: f64) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            if stroke.points.last() != Some(&(x, y)) {
                stroke.points.push((x, y));
            }
        }
    }

    pub fn end(&mut self) {
        self.drawing = false;
    }

    pub fn undo(&mut self) {
        self.drawing = false;
        self.strokes.pop();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

pub fn slide(_: Navigator) -> Element {
    let mut strokes = use_signal(Strokes::default);
    let mut color = use_signal(|| COLORS[0]);

    let paths: Vec<(usize, String, &'static str)> = strokes
        .read()
        .iter()
        .enumerate()
        .map(|(i, stroke)| (i, stroke.path_data(), stroke.color))
        .collect();

    rsx! {
        SlideFrame {
            title: "Drawing",
            hook: "onpointermove",
            narration: "Pointer events feed a signal of strokes. The SVG is just a rendering of that state.",
            source: SOURCE,
            div { class: "palette",
                for swatch in COLORS {
                    button {
                        key: "{swatch}",
                        class: if color() == swatch { "swatch selected" } else { "swatch" },
                        background_color: swatch,
                        onclick: move |_| color.set(swatch),
                    }
                }
                button { onclick: move |_| strokes.write().undo(), "Undo" }
                button { onclick: move |_| strokes.write().clear(), "Clear" }
            }
            svg {
                class: "canvas",
                width: "480",
                height: "280",
                onpointerdown: move |evt| {
                    let point = evt.element_coordinates();
                    strokes.write().begin(color(), point.x, point.y);
                },
                onpointermove: move |evt| {
                    let point = evt.element_coordinates();
                    strokes.write().extend(point.x, point.y);
                },
                onpointerup: move |_| strokes.write().end(),
                onpointerleave: move |_| strokes.write().end(),
                for (i, data, stroke_color) in paths {
                    path {
                        key: "{i}",
                        d: "{data}",
                        stroke: stroke_color,
                        stroke_width: "3",
                        fill: "none",
                    }
                }
            }
            p { class: "status", "{strokes.read().len()} strokes" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_path_data() {
        let mut strokes = Strokes::default();
        strokes.begin("red", 1.0, 2.0);
        strokes.extend(3.26, 4.0);
        strokes.extend(3.26, 4.0);
        strokes.end();

        let stroke = strokes.iter().next().unwrap();
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.path_data(), "M 1.0 2.0 L 3.3 4.0");
    }

    #[test]
    fn moves_without_a_pressed_pointer_are_ignored() {
        let mut strokes = Strokes::default();
        strokes.extend(1.0, 1.0);
        assert!(strokes.is_empty());

        strokes.begin("blue", 0.0, 0.0);
        strokes.end();
        strokes.extend(5.0, 5.0);
        assert_eq!(strokes.iter().next().unwrap().len(), 1);
    }

    #[test]
    fn undo_and_clear() {
        let mut strokes = Strokes::default();
        strokes.begin("a", 0.0, 0.0);
        strokes.end();
        strokes.begin("b", 1.0, 1.0);
        strokes.undo();
        assert_eq!(strokes.len(), 1);
        strokes.clear();
        assert!(strokes.is_empty());
    }
}
