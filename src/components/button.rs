#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{rc::Rc, time::Duration};

use enum_assoc::Assoc;
use gpui::{
    AnyElement, App, CursorStyle, ElementId, FontWeight, InteractiveElement, IntoElement,
    MouseButton, ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement,
    Styled, Window, div, prelude::FluentBuilder, px, rems,
};
use smallvec::SmallVec;

use crate::{
    ElementIdExt, conditional_transition,
    primitives::{Activate, PRESSABLE_KEY_CONTEXT, PointerEvent, PressPhase, PressState},
    utils::{disabled_transition, hard_shadow, ink, rgb_a},
};

pub type OnActivate = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn background(&self) -> Rgba)]
#[func(pub fn text_color(&self) -> Rgba)]
pub enum ButtonVariant {
    #[default]
    #[assoc(background = rgb_a(0xFFDC00, 0.3))]
    #[assoc(text_color = rgb_a(0xDC2626, 1.))]
    Primary,
    #[assoc(background = rgb_a(0x3B82F6, 0.3))]
    #[assoc(text_color = rgb_a(0xFFFFFF, 1.))]
    Secondary,
    #[assoc(background = rgb_a(0x22C55E, 0.3))]
    #[assoc(text_color = rgb_a(0xFEF08A, 1.))]
    Success,
    #[assoc(background = rgb_a(0xEF4444, 0.3))]
    #[assoc(text_color = rgb_a(0xFBBF24, 1.))]
    Danger,
}

/// Padding (vertical, horizontal) and text size, in rems.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[func(pub fn padding(&self) -> (f32, f32))]
#[func(pub fn text_size(&self) -> f32)]
pub enum ButtonSize {
    #[assoc(padding = (0.75, 1.5))]
    #[assoc(text_size = 1.125)]
    Sm,
    #[default]
    #[assoc(padding = (1.5, 2.5))]
    #[assoc(text_size = 1.875)]
    Md,
    #[assoc(padding = (2., 4.))]
    #[assoc(text_size = 2.25)]
    Lg,
}

#[derive(IntoElement)]
pub struct RetroButton {
    id: ElementId,
    text: Option<SharedString>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<OnActivate>,
    children: SmallVec<[AnyElement; 2]>,
}

impl RetroButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_click: None,
            children: SmallVec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called once per completed press, or when activated from the keyboard.
    pub fn on_click(mut self, on_click: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn get_text(&self) -> Option<&SharedString> {
        self.text.as_ref()
    }
}

impl ParentElement for RetroButton {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

fn fire(on_click: Option<&OnActivate>, window: &mut Window, cx: &mut App) {
    if let Some(on_click) = on_click {
        (on_click)(window, cx)
    }
}

impl RenderOnce for RetroButton {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let (vertical_padding, horizontal_padding) = self.size.padding();
        let text_size = rems(self.size.text_size());
        let is_disabled = self.disabled;

        let press_state = window.use_keyed_state(self.id.state_id("press"), cx, |_window, _cx| {
            PressState::default()
        });

        if is_disabled && press_state.read(cx).phase() != PressPhase::Idle {
            press_state.update(cx, |this, _cx| *this = PressState::default());
        }
        let phase = press_state.read(cx).phase();

        let focus_handle = window
            .use_keyed_state(self.id.state_id("focus_handle"), cx, |_window, cx| {
                cx.focus_handle().tab_stop(true)
            })
            .read(cx)
            .clone();

        if is_disabled && focus_handle.is_focused(window) {
            window.blur();
        }

        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        // Pressed buttons sink into their shadow, hovered ones lift slightly.
        let offset_transition = conditional_transition!(
            self.id.state_id("transition:offset"),
            window,
            cx,
            Duration::from_millis(150),
            {
                phase == PressPhase::Pressed => px(8.),
                phase == PressPhase::Hovered => px(-2.),
                _ => px(0.)
            }
        );

        let shadow = match phase {
            PressPhase::Pressed => hard_shadow(4., 2.),
            PressPhase::Hovered => hard_shadow(10., 4.),
            PressPhase::Idle => hard_shadow(8., 4.),
        };

        div()
            .id(self.id.clone())
            .key_context(PRESSABLE_KEY_CONTEXT)
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .relative()
            .flex()
            .items_center()
            .justify_center()
            .gap(rems(0.5))
            .py(rems(vertical_padding))
            .px(rems(horizontal_padding))
            .bg(self.variant.background())
            .border(px(5.))
            .border_color(ink())
            .rounded(rems(0.5))
            .shadow(vec![shadow])
            .text_color(self.variant.text_color())
            .text_size(text_size)
            .font_family("Impact")
            .font_weight(FontWeight::BLACK)
            .opacity(*disabled_transition.evaluate(window, cx))
            .map(|this| {
                let offset = *offset_transition.evaluate(window, cx);
                this.left(offset).top(offset)
            })
            .when_some(self.text, |this, text| {
                this.child(SharedString::from(text.to_uppercase()))
            })
            .children(self.children)
            .when(!is_disabled, |this| {
                let press_state_on_hover = press_state.clone();
                let press_state_on_mouse_down = press_state.clone();
                let press_state_on_mouse_up = press_state.clone();
                let press_state_on_mouse_up_out = press_state.clone();
                let press_state_on_action = press_state.clone();
                let on_click_for_mouse_up = self.on_click.clone();
                let on_click_for_action = self.on_click;

                this.track_focus(&focus_handle)
                    .on_hover(move |hovered, _window, cx| {
                        let event = if *hovered {
                            PointerEvent::Enter
                        } else {
                            PointerEvent::Leave
                        };
                        press_state_on_hover.update(cx, |this, _cx| this.handle(event, is_disabled));
                        cx.notify(press_state_on_hover.entity_id());
                    })
                    .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                        // Prevents focus ring from appearing when clicked.
                        window.prevent_default();

                        press_state_on_mouse_down
                            .update(cx, |this, _cx| this.handle(PointerEvent::Down, is_disabled));
                        cx.notify(press_state_on_mouse_down.entity_id());
                    })
                    .on_mouse_up(MouseButton::Left, move |_event, window, cx| {
                        let activated = press_state_on_mouse_up
                            .update(cx, |this, _cx| this.handle(PointerEvent::Up, is_disabled));
                        cx.notify(press_state_on_mouse_up.entity_id());

                        if activated {
                            fire(on_click_for_mouse_up.as_ref(), window, cx);
                        }
                    })
                    .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                        // Mouse went down on the button, left its bounds, then was released.
                        press_state_on_mouse_up_out
                            .update(cx, |this, _cx| this.handle(PointerEvent::Leave, is_disabled));
                        cx.notify(press_state_on_mouse_up_out.entity_id());
                    })
                    .on_action(move |_: &Activate, window, cx| {
                        if press_state_on_action.read(cx).activate(is_disabled) {
                            fire(on_click_for_action.as_ref(), window, cx);
                        }
                    })
            })
    }
}
