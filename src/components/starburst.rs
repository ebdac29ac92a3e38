#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    Bounds, FontWeight, Hsla, IntoElement, ParentElement, PathBuilder, Pixels, Point, RenderOnce,
    Rgba, SharedString, Styled, Window, canvas, div, point, px, rems,
};

use crate::utils::{RgbaExt, ink, rgb_a};

/// Outline of the burst, as fractions of its bounding box.
const STAR_OUTLINE: [(f32, f32); 10] = [
    (0.50, 0.00),
    (0.61, 0.35),
    (0.98, 0.35),
    (0.68, 0.57),
    (0.79, 0.91),
    (0.50, 0.70),
    (0.21, 0.91),
    (0.32, 0.57),
    (0.02, 0.35),
    (0.39, 0.35),
];

const SHADOW_OFFSET: f32 = 4.;
const OUTLINE_WIDTH: f32 = 3.;

/// Edge length of the burst and its text size, in rems.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn extent(&self) -> f32)]
#[func(pub fn text_size(&self) -> f32)]
pub enum StarburstSize {
    #[assoc(extent = 4.)]
    #[assoc(text_size = 0.875)]
    Sm,
    #[default]
    #[assoc(extent = 6.)]
    #[assoc(text_size = 1.25)]
    Md,
    #[assoc(extent = 8.)]
    #[assoc(text_size = 1.875)]
    Lg,
}

#[derive(IntoElement)]
pub struct RetroStarburst {
    text: SharedString,
    size: StarburstSize,
    color: Rgba,
}

impl RetroStarburst {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            size: StarburstSize::default(),
            color: rgb_a(0xFBBF24, 1.),
        }
    }

    pub fn size(mut self, size: StarburstSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = color.into();
        self
    }

    pub fn get_text(&self) -> &SharedString {
        &self.text
    }
}

pub(crate) fn star_points(bounds: Bounds<Pixels>) -> impl Iterator<Item = Point<Pixels>> {
    STAR_OUTLINE.into_iter().map(move |(x, y)| {
        point(
            bounds.origin.x + bounds.size.width * x,
            bounds.origin.y + bounds.size.height * y,
        )
    })
}

fn paint_star(bounds: Bounds<Pixels>, mut builder: PathBuilder, color: Rgba, window: &mut Window) {
    let mut points = star_points(bounds);
    let Some(first) = points.next() else {
        return;
    };

    builder.move_to(first);
    for point in points {
        builder.line_to(point);
    }
    builder.close();

    if let Ok(path) = builder.build() {
        window.paint_path(path, Hsla::from(color));
    }
}

impl RenderOnce for RetroStarburst {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let color = self.color;

        div()
            .relative()
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .size(rems(self.size.extent()))
            .child(
                canvas(
                    |_bounds, _window, _cx| {},
                    move |bounds, _, window, _cx| {
                        let shadow_bounds = Bounds {
                            origin: bounds.origin + point(px(SHADOW_OFFSET), px(SHADOW_OFFSET)),
                            size: bounds.size,
                        };

                        paint_star(shadow_bounds, PathBuilder::fill(), ink(), window);
                        paint_star(bounds, PathBuilder::fill(), rgb_a(0xFFFFFF, 1.), window);
                        paint_star(bounds, PathBuilder::fill(), color.alpha(0.25), window);
                        paint_star(bounds, PathBuilder::stroke(px(OUTLINE_WIDTH)), ink(), window);
                    },
                )
                .absolute()
                .size_full(),
            )
            .child(
                div()
                    .relative()
                    .text_size(rems(self.size.text_size()))
                    .font_weight(FontWeight::BLACK)
                    .font_family("Impact")
                    .text_color(ink())
                    .child(self.text),
            )
    }
}
