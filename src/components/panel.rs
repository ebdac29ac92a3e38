use gpui::{
    AnyElement, FontWeight, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled,
    div, prelude::FluentBuilder, rems,
};
use smallvec::SmallVec;

use crate::utils::{hard_shadow, ink, rgb_a};

/// A comic panel, optionally headed by a sound effect ("POW!").
#[derive(IntoElement)]
pub struct RetroPanel {
    sound: Option<SharedString>,
    color: Rgba,
    children: SmallVec<[AnyElement; 2]>,
}

impl Default for RetroPanel {
    fn default() -> Self {
        Self {
            sound: None,
            color: rgb_a(0xDC2626, 1.),
            children: SmallVec::new(),
        }
    }
}

impl RetroPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sound(mut self, sound: impl Into<SharedString>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Color of the sound effect text.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = color.into();
        self
    }

    pub fn get_sound(&self) -> Option<&SharedString> {
        self.sound.as_ref()
    }
}

impl ParentElement for RetroPanel {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for RetroPanel {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .p(rems(1.5))
            .bg(rgb_a(0xFFFFFF, 0.2))
            .border_4()
            .border_color(ink())
            .rounded(rems(0.5))
            .shadow(vec![hard_shadow(6., 2.)])
            .when_some(self.sound, |this, sound| {
                this.child(
                    div()
                        .flex()
                        .justify_center()
                        .mb(rems(1.))
                        .text_size(rems(3.75))
                        .font_weight(FontWeight::BLACK)
                        .font_family("Impact")
                        .text_color(self.color)
                        .child(sound),
                )
            })
            .children(self.children)
    }
}
