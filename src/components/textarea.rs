use std::sync::Arc;

use gpui::{
    App, ElementId, Entity, IntoElement, ParentElement, RenderOnce, SharedString, Styled, rems,
};
use gpui_primitives::input::{Input as PrimitiveInput, InputState};

use super::input::{
    DEFAULT_PLACEHOLDER, InputKind, OnTextChange, field_frame, text_change_handler,
};
use crate::utils::{RgbaExt, disabled_transition, ink};

pub const DEFAULT_ROWS: usize = 4;

/// Height of one row of text, in rems.
const ROW_HEIGHT: f32 = 1.875;

#[derive(IntoElement)]
pub struct RetroTextarea {
    id: ElementId,
    state: Entity<InputState>,
    placeholder: SharedString,
    rows: usize,
    disabled: bool,
    on_change: Option<OnTextChange>,
}

impl RetroTextarea {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        Self {
            id: id.into(),
            state,
            placeholder: DEFAULT_PLACEHOLDER.into(),
            rows: DEFAULT_ROWS,
            disabled: false,
            on_change: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Number of rows the textarea is tall when empty. Clamped to at least one.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&SharedString) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    pub fn read_text(&self, cx: &App) -> SharedString {
        self.state.read(cx).value()
    }

    fn min_height(&self) -> f32 {
        self.rows as f32 * ROW_HEIGHT
    }
}

impl RenderOnce for RetroTextarea {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let min_height = rems(self.min_height());
        let disabled_transition = disabled_transition(self.id.clone(), window, cx, self.disabled);

        field_frame()
            .min_h(min_height)
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                PrimitiveInput::new(self.id, self.state)
                    .multiline()
                    .w_full()
                    .min_h(min_height)
                    .placeholder(self.placeholder)
                    .placeholder_text_color(ink().alpha(0.5))
                    .disabled(self.disabled)
                    .map_text(text_change_handler(InputKind::Text, self.on_change)),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext, div};

    #[gpui::test]
    fn test_textarea_defaults(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let state = cx.new(|cx| InputState::new(cx));
            let textarea = RetroTextarea::new("textarea", state);

            assert_eq!(textarea.rows, DEFAULT_ROWS);
            assert_eq!(&*textarea.placeholder, DEFAULT_PLACEHOLDER);
            assert!(!textarea.disabled);
        });
    }

    #[gpui::test]
    fn test_rows_set_min_height(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let state = cx.new(|cx| InputState::new(cx));
            let short = RetroTextarea::new("short", state.clone()).rows(2);
            let tall = RetroTextarea::new("tall", state.clone()).rows(8);
            let empty = RetroTextarea::new("empty", state).rows(0);

            assert!(short.min_height() < tall.min_height());
            assert_eq!(empty.rows, 1);
        });
    }

    #[gpui::test]
    fn test_textarea_renders(cx: &mut TestAppContext) {
        struct TextareaTestView {
            state: Entity<InputState>,
        }

        impl gpui::Render for TextareaTestView {
            fn render(
                &mut self,
                _window: &mut gpui::Window,
                _cx: &mut gpui::Context<Self>,
            ) -> impl IntoElement {
                div().child(RetroTextarea::new("textarea", self.state.clone()).rows(6))
            }
        }

        let window = cx.update(|cx| {
            crate::init(cx);
            cx.open_window(Default::default(), |_window, cx| {
                let state = cx.new(|cx| InputState::new(cx).initial_value("line one\nline two"));
                cx.new(|_cx| TextareaTestView { state })
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }
}
