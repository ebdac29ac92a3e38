use std::sync::Arc;

use gpui::{
    App, Div, ElementId, Entity, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, div, prelude::FluentBuilder, rems,
};
use gpui_primitives::input::{Input as PrimitiveInput, InputState};

use crate::utils::{RgbaExt, disabled_transition, hard_shadow, ink, rgb_a};

pub type OnTextChange = Arc<dyn Fn(&SharedString) + Send + Sync + 'static>;

pub const DEFAULT_PLACEHOLDER: &str = "Enter text...";

/// Character shown in place of every character of a password.
pub const MASK_CHAR: char = '•';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
}

impl InputKind {
    pub fn is_masked(&self) -> bool {
        matches!(self, InputKind::Password)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, InputKind::Number)
    }

    /// The value stored for `text` typed into an input of this kind.
    pub fn sanitize(&self, text: SharedString) -> SharedString {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E');

        if !self.is_numeric() || text.chars().all(allowed) {
            return text;
        }

        text.chars().filter(|c| allowed(*c)).collect::<String>().into()
    }

    /// What a stored character looks like on screen.
    pub fn display_char(&self, c: char) -> char {
        if self.is_masked() { MASK_CHAR } else { c }
    }
}

/// Frame shared by single and multi line text fields.
pub(crate) fn field_frame() -> Div {
    div()
        .w_full()
        .py(rems(1.))
        .px(rems(1.5))
        .bg(rgb_a(0xFFFFFF, 0.3))
        .border_4()
        .border_color(ink())
        .rounded(rems(0.5))
        .shadow(vec![hard_shadow(6., 2.)])
        .text_size(rems(1.25))
        .font_weight(FontWeight::BOLD)
        .text_color(ink())
}

pub(crate) fn text_change_handler(
    kind: InputKind,
    on_change: Option<OnTextChange>,
) -> impl Fn(SharedString) -> SharedString + Send + Sync + 'static {
    move |text| {
        let text = kind.sanitize(text);
        if let Some(on_change) = &on_change {
            (on_change)(&text);
        }
        text
    }
}

#[derive(IntoElement)]
pub struct RetroInput {
    id: ElementId,
    state: Entity<InputState>,
    kind: InputKind,
    placeholder: SharedString,
    disabled: bool,
    on_change: Option<OnTextChange>,
}

impl RetroInput {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        Self {
            id: id.into(),
            state,
            kind: InputKind::default(),
            placeholder: DEFAULT_PLACEHOLDER.into(),
            disabled: false,
            on_change: None,
        }
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the full text after every edit.
    pub fn on_change(mut self, on_change: impl Fn(&SharedString) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    pub fn read_text(&self, cx: &App) -> SharedString {
        self.state.read(cx).value()
    }
}

impl RenderOnce for RetroInput {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let kind = self.kind;
        let disabled_transition = disabled_transition(self.id.clone(), window, cx, self.disabled);

        field_frame()
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                PrimitiveInput::new(self.id, self.state)
                    .w_full()
                    .placeholder(self.placeholder)
                    .placeholder_text_color(ink().alpha(0.5))
                    .disabled(self.disabled)
                    .map_text(text_change_handler(kind, self.on_change))
                    .when(kind.is_masked(), |this| {
                        this.transform_text(move |c| kind.display_char(c))
                    }),
            )
    }
}
