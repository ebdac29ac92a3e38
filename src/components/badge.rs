#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    FontWeight, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, div, px, rems,
};

use crate::utils::{hard_shadow, ink, rgb_a};

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn background(&self) -> Rgba)]
#[func(pub fn text_color(&self) -> Rgba)]
pub enum BadgeVariant {
    #[default]
    #[assoc(background = rgb_a(0xFFDC00, 0.4))]
    #[assoc(text_color = rgb_a(0xDC2626, 1.))]
    Primary,
    #[assoc(background = rgb_a(0x3B82F6, 0.4))]
    #[assoc(text_color = rgb_a(0xFFFFFF, 1.))]
    Secondary,
    #[assoc(background = rgb_a(0x22C55E, 0.4))]
    #[assoc(text_color = rgb_a(0xFFFFFF, 1.))]
    Success,
    #[assoc(background = rgb_a(0xEF4444, 0.4))]
    #[assoc(text_color = rgb_a(0xFFFFFF, 1.))]
    Danger,
}

/// Padding (vertical, horizontal) and text size, in rems.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn padding(&self) -> (f32, f32))]
#[func(pub fn text_size(&self) -> f32)]
pub enum BadgeSize {
    #[assoc(padding = (0.25, 0.75))]
    #[assoc(text_size = 0.875)]
    Sm,
    #[default]
    #[assoc(padding = (0.5, 1.))]
    #[assoc(text_size = 1.125)]
    Md,
    #[assoc(padding = (0.75, 1.5))]
    #[assoc(text_size = 1.25)]
    Lg,
}

#[derive(IntoElement)]
pub struct RetroBadge {
    text: SharedString,
    variant: BadgeVariant,
    size: BadgeSize,
}

impl RetroBadge {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
            size: BadgeSize::default(),
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn get_text(&self) -> &SharedString {
        &self.text
    }
}

impl RenderOnce for RetroBadge {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let (vertical_padding, horizontal_padding) = self.size.padding();

        div()
            .flex_none()
            .py(rems(vertical_padding))
            .px(rems(horizontal_padding))
            .bg(self.variant.background())
            .border(px(3.))
            .border_color(ink())
            .rounded(rems(0.5))
            .shadow(vec![hard_shadow(4., 1.)])
            .text_color(self.variant.text_color())
            .text_size(rems(self.size.text_size()))
            .font_family("Arial Black")
            .font_weight(FontWeight::BLACK)
            .child(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_the_only_red_text() {
        assert_eq!(BadgeVariant::Primary.text_color(), rgb_a(0xDC2626, 1.));
        for variant in [
            BadgeVariant::Secondary,
            BadgeVariant::Success,
            BadgeVariant::Danger,
        ] {
            assert_eq!(variant.text_color(), rgb_a(0xFFFFFF, 1.));
        }
    }

    #[test]
    fn test_sizes_grow() {
        let sizes = [BadgeSize::Sm, BadgeSize::Md, BadgeSize::Lg];
        for pair in sizes.windows(2) {
            assert!(pair[0].text_size() < pair[1].text_size());
            assert!(pair[0].padding().1 < pair[1].padding().1);
        }
    }

    #[test]
    fn test_defaults() {
        let badge = RetroBadge::new("NEW!");
        assert_eq!(&*badge.text, "NEW!");
        assert_eq!(badge.variant, BadgeVariant::Primary);
        assert_eq!(badge.size, BadgeSize::Md);
    }
}
