#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    FontWeight, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, div,
    prelude::FluentBuilder, px, relative, rems,
};

use crate::utils::{hard_shadow, ink, rgb_a};

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn fill_color(&self) -> Rgba)]
pub enum ProgressVariant {
    #[default]
    #[assoc(fill_color = rgb_a(0xFFDC00, 0.6))]
    Primary,
    #[assoc(fill_color = rgb_a(0x3B82F6, 0.6))]
    Secondary,
    #[assoc(fill_color = rgb_a(0x22C55E, 0.6))]
    Success,
    #[assoc(fill_color = rgb_a(0xEF4444, 0.6))]
    Danger,
}

#[derive(IntoElement)]
pub struct RetroProgressBar {
    progress: f32,
    variant: ProgressVariant,
    show_label: bool,
}

impl Default for RetroProgressBar {
    fn default() -> Self {
        Self {
            progress: 0.,
            variant: ProgressVariant::default(),
            show_label: true,
        }
    }
}

impl RetroProgressBar {
    pub fn new(progress: f32) -> Self {
        Self {
            progress,
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ProgressVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    /// The progress exactly as it was given, out-of-range values included.
    pub fn value(&self) -> f32 {
        self.progress
    }

    /// Share of the track that is filled, in `0.0..=1.0`.
    pub fn fill_fraction(&self) -> f32 {
        if self.progress.is_nan() {
            return 0.;
        }
        self.progress.clamp(0., 100.) / 100.
    }

    /// The progress rounded to a whole percent, halves rounding up.
    pub fn label(&self) -> SharedString {
        let floor = self.progress.floor();
        let rounded = if self.progress - floor >= 0.5 {
            floor + 1.
        } else {
            floor
        };
        // Adding zero turns -0 into 0.
        format!("{}%", rounded + 0.).into()
    }
}

impl RenderOnce for RetroProgressBar {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let fill_fraction = self.fill_fraction();
        let label = self.show_label.then(|| self.label());

        div()
            .w_full()
            .p(rems(0.25))
            .bg(rgb_a(0xFFFFFF, 0.2))
            .border_4()
            .border_color(ink())
            .rounded(rems(0.5))
            .shadow(vec![hard_shadow(4., 2.)])
            .child(
                div()
                    .w_full()
                    .h(rems(2.))
                    .child(
                        div()
                            .h_full()
                            .w(relative(fill_fraction))
                            .bg(self.variant.fill_color())
                            .rounded(rems(0.25))
                            .when(fill_fraction > 0., |this| {
                                this.border(px(2.)).border_color(ink())
                            }),
                    ),
            )
            .when_some(label, |this, label| {
                this.child(
                    div()
                        .flex()
                        .justify_center()
                        .mt(rems(0.5))
                        .font_weight(FontWeight::BLACK)
                        .font_family("Arial Black")
                        .text_color(ink())
                        .child(label),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_clamped() {
        assert_eq!(RetroProgressBar::new(-20.).fill_fraction(), 0.);
        assert_eq!(RetroProgressBar::new(0.).fill_fraction(), 0.);
        assert_eq!(RetroProgressBar::new(42.).fill_fraction(), 0.42);
        assert_eq!(RetroProgressBar::new(100.).fill_fraction(), 1.);
        assert_eq!(RetroProgressBar::new(150.).fill_fraction(), 1.);
        assert_eq!(RetroProgressBar::new(f32::NAN).fill_fraction(), 0.);
    }

    #[test]
    fn test_value_is_reported_raw() {
        assert_eq!(RetroProgressBar::new(150.).value(), 150.);
        assert_eq!(RetroProgressBar::new(-20.).value(), -20.);
        assert_eq!(&*RetroProgressBar::new(150.).label(), "150%");
        assert_eq!(&*RetroProgressBar::new(-20.).label(), "-20%");
    }

    #[test]
    fn test_label_rounding() {
        assert_eq!(&*RetroProgressBar::new(42.4).label(), "42%");
        assert_eq!(&*RetroProgressBar::new(42.5).label(), "43%");
        assert_eq!(&*RetroProgressBar::new(99.6).label(), "100%");
        assert_eq!(&*RetroProgressBar::new(-0.4).label(), "0%");
        assert_eq!(&*RetroProgressBar::new(-2.5).label(), "-2%");
    }

    #[test]
    fn test_label_rounding_just_below_half() {
        // Adding 0.5 to these rounds up in f32 and would overshoot.
        assert_eq!(&*RetroProgressBar::new(0.49999997).label(), "0%");
        assert_eq!(&*RetroProgressBar::new(-0.50000006).label(), "-1%");
        assert_eq!(&*RetroProgressBar::new(0.5).label(), "1%");
        assert_eq!(&*RetroProgressBar::new(-0.).label(), "0%");
    }

    #[test]
    fn test_defaults() {
        let bar = RetroProgressBar::default();
        assert_eq!(bar.value(), 0.);
        assert!(bar.show_label);
        assert_eq!(bar.variant, ProgressVariant::Primary);
        assert_eq!(&*bar.label(), "0%");

        assert!(!RetroProgressBar::new(10.).show_label(false).show_label);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    const VARIANTS: [ProgressVariant; 4] = [
        ProgressVariant::Primary,
        ProgressVariant::Secondary,
        ProgressVariant::Success,
        ProgressVariant::Danger,
    ];
    const VALUES: [f32; 5] = [-20., 0., 42.5, 100., 150.];

    fn bars() -> impl Iterator<Item = RetroProgressBar> {
        VARIANTS.into_iter().flat_map(|variant| {
            VALUES
                .into_iter()
                .map(move |value| RetroProgressBar::new(value).variant(variant))
        })
    }

    struct ProgressTestView;

    impl gpui::Render for ProgressTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .flex()
                .flex_col()
                .children(bars())
                .child(RetroProgressBar::new(f32::NAN).show_label(false))
        }
    }

    #[gpui::test]
    fn test_every_variant_renders(cx: &mut TestAppContext) {
        for (bar, value) in bars().zip(VALUES.into_iter().cycle()) {
            assert_eq!(bar.value(), value);
        }

        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ProgressTestView)
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }
}
