#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    AnyElement, Div, FontWeight, IntoElement, ParentElement, RenderOnce, Rgba, Styled, div,
    prelude::FluentBuilder, px, relative, rems,
};
use smallvec::SmallVec;

use crate::utils::{hard_shadow, ink, rgb_a};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BubbleDirection {
    #[default]
    Left,
    Right,
}

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn background(&self) -> Rgba)]
#[func(pub fn is_rounded(&self) -> bool)]
pub enum BubbleVariant {
    #[default]
    #[assoc(background = rgb_a(0xFFFFFF, 0.35))]
    #[assoc(is_rounded = false)]
    Default,
    #[assoc(background = rgb_a(0xC8DCFF, 0.35))]
    #[assoc(is_rounded = true)]
    Thought,
    #[assoc(background = rgb_a(0xFFC800, 0.35))]
    #[assoc(is_rounded = false)]
    Shout,
}

/// Comic speech bubble. Thought bubbles trail a chain of circles, the others
/// a pointed tail.
#[derive(IntoElement, Default)]
pub struct RetroSpeechBubble {
    direction: BubbleDirection,
    variant: BubbleVariant,
    children: SmallVec<[AnyElement; 2]>,
}

impl RetroSpeechBubble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: BubbleDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn variant(mut self, variant: BubbleVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl ParentElement for RetroSpeechBubble {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

fn thought_dot(size: f32, border: f32) -> Div {
    div()
        .size(rems(size))
        .rounded_full()
        .border(px(border))
        .border_color(ink())
        .bg(rgb_a(0xFFFFFF, 0.4))
}

impl RenderOnce for RetroSpeechBubble {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let variant = self.variant;
        let direction = self.direction;

        let tail = if variant.is_rounded() {
            div()
                .absolute()
                .bottom(rems(-2.))
                .map(|this| match direction {
                    BubbleDirection::Left => this.left(relative(1. / 3.)),
                    BubbleDirection::Right => this.right(relative(1. / 3.)),
                })
                .flex()
                .items_start()
                .gap(rems(0.5))
                .child(thought_dot(1.5, 3.))
                .child(thought_dot(1., 3.))
                .child(thought_dot(0.5, 2.))
        } else {
            div()
                .absolute()
                .bottom(rems(-0.75))
                .map(|this| match direction {
                    BubbleDirection::Left => this.left(rems(2.)),
                    BubbleDirection::Right => this.right(rems(2.)),
                })
                .size(rems(2.))
                .bg(variant.background())
                .border_b_4()
                .border_r_4()
                .border_color(ink())
        };

        div()
            .relative()
            .flex_none()
            .child(
                div()
                    .py(rems(1.5))
                    .px(rems(2.))
                    .bg(variant.background())
                    .border(px(5.))
                    .border_color(ink())
                    .map(|this| {
                        if variant.is_rounded() {
                            this.rounded_full()
                        } else {
                            this.rounded(rems(0.5))
                        }
                    })
                    .shadow(vec![hard_shadow(8., 2.)])
                    .text_size(rems(1.5))
                    .font_weight(FontWeight::BLACK)
                    .font_family("Arial Black")
                    .text_color(ink())
                    .children(self.children),
            )
            .child(tail)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    const VARIANTS: [BubbleVariant; 3] = [
        BubbleVariant::Default,
        BubbleVariant::Thought,
        BubbleVariant::Shout,
    ];
    const DIRECTIONS: [BubbleDirection; 2] = [BubbleDirection::Left, BubbleDirection::Right];

    fn bubbles() -> impl Iterator<Item = RetroSpeechBubble> {
        VARIANTS.into_iter().flat_map(|variant| {
            DIRECTIONS.into_iter().map(move |direction| {
                RetroSpeechBubble::new()
                    .variant(variant)
                    .direction(direction)
                    .child("Great Scott!")
            })
        })
    }

    struct BubbleTestView;

    impl gpui::Render for BubbleTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().flex().flex_col().gap(rems(3.)).children(bubbles())
        }
    }

    #[gpui::test]
    fn test_every_variant_and_direction_renders(cx: &mut TestAppContext) {
        assert_eq!(bubbles().count(), 6);
        for bubble in bubbles() {
            assert_eq!(bubble.children.len(), 1);
        }

        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| BubbleTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }
}
