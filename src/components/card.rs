#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    AnyElement, FontWeight, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled,
    div, prelude::FluentBuilder, rems,
};
use smallvec::SmallVec;

use crate::utils::{hard_shadow, ink, rgb_a};

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn background(&self) -> Rgba)]
pub enum CardVariant {
    #[default]
    #[assoc(background = rgb_a(0xFFFFFF, 0.25))]
    Default,
    #[assoc(background = rgb_a(0x3B82F6, 0.25))]
    Blue,
    #[assoc(background = rgb_a(0xEF4444, 0.25))]
    Red,
    #[assoc(background = rgb_a(0xFACC15, 0.25))]
    Yellow,
    #[assoc(background = rgb_a(0x22C55E, 0.25))]
    Green,
}

/// A translucent panel with a heavy outline and an optional heading.
#[derive(IntoElement, Default)]
pub struct RetroCard {
    title: Option<SharedString>,
    variant: CardVariant,
    children: SmallVec<[AnyElement; 2]>,
}

impl RetroCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn get_title(&self) -> Option<&SharedString> {
        self.title.as_ref()
    }
}

impl ParentElement for RetroCard {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for RetroCard {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .relative()
            .flex()
            .flex_col()
            .p(rems(1.5))
            .bg(self.variant.background())
            .border_4()
            .border_color(ink())
            .rounded(rems(0.5))
            .shadow(vec![hard_shadow(8., 2.)])
            .text_color(ink())
            .when_some(self.title, |this, title| {
                this.child(
                    div()
                        .mb(rems(1.))
                        .text_size(rems(1.5))
                        .font_weight(FontWeight::BLACK)
                        .font_family("Arial Black")
                        .child(title),
                )
            })
            .child(div().relative().children(self.children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_tint_at_same_alpha() {
        for variant in [
            CardVariant::Default,
            CardVariant::Blue,
            CardVariant::Red,
            CardVariant::Yellow,
            CardVariant::Green,
        ] {
            assert_eq!(variant.background().a, 0.25);
        }
        assert_ne!(
            CardVariant::Blue.background(),
            CardVariant::Green.background()
        );
    }

    #[test]
    fn test_builder() {
        let card = RetroCard::new().title("Mission log").variant(CardVariant::Red);
        assert_eq!(card.title.as_deref(), Some("Mission log"));
        assert_eq!(card.variant, CardVariant::Red);

        let card = RetroCard::new();
        assert!(card.title.is_none());
        assert_eq!(card.variant, CardVariant::Default);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    const VARIANTS: [CardVariant; 5] = [
        CardVariant::Default,
        CardVariant::Blue,
        CardVariant::Red,
        CardVariant::Yellow,
        CardVariant::Green,
    ];

    fn card(variant: CardVariant) -> RetroCard {
        RetroCard::new()
            .title("Mission log")
            .variant(variant)
            .child("Day 1: the robots are friendly.")
            .child(div().child("Day 2: the robots are less friendly."))
    }

    struct CardTestView;

    impl gpui::Render for CardTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .flex()
                .flex_col()
                .children(VARIANTS.into_iter().map(card))
                .child(RetroCard::new())
        }
    }

    #[gpui::test]
    fn test_every_variant_renders(cx: &mut TestAppContext) {
        for variant in VARIANTS {
            let card = card(variant);
            assert_eq!(card.get_title().map(|title| &**title), Some("Mission log"));
            assert_eq!(card.children.len(), 2);
        }

        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| CardTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }
}
