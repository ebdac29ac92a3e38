use std::{rc::Rc, time::Duration};

use gpui::{
    App, CursorStyle, ElementId, FontWeight, InteractiveElement, IntoElement, MouseButton,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, rems,
};

use crate::{
    ElementIdExt,
    primitives::{Activate, PRESSABLE_KEY_CONTEXT, PointerEvent, PressState, toggled_value},
    utils::{checked_transition, disabled_transition, hard_shadow, ink, remap, rgb_a},
};

pub type OnToggle = Rc<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

const TRACK_WIDTH: f32 = 5.;
const TRACK_HEIGHT: f32 = 2.5;
const KNOB_SIZE: f32 = 2.;
const KNOB_INSET: f32 = 0.125;

#[derive(IntoElement)]
pub struct RetroToggle {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<OnToggle>,
}

impl RetroToggle {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Receives the value the toggle should switch to. The toggle itself
    /// keeps displaying `checked` until the caller passes the new value back.
    pub fn on_change(mut self, on_change: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }
}

fn emit(
    on_change: Option<&OnToggle>,
    checked: bool,
    disabled: bool,
    window: &mut Window,
    cx: &mut App,
) {
    let Some(new_value) = toggled_value(checked, disabled) else {
        return;
    };

    if let Some(on_change) = on_change {
        (on_change)(&new_value, window, cx);
    }
}

impl RenderOnce for RetroToggle {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let is_checked = self.checked;
        let is_disabled = self.disabled;

        let press_state = window.use_keyed_state(self.id.state_id("press"), cx, |_window, _cx| {
            PressState::default()
        });
        if is_disabled && *press_state.read(cx) != PressState::default() {
            press_state.update(cx, |this, _cx| *this = PressState::default());
        }

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
        let checked_transition = checked_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(200),
            is_checked,
        );

        let checked_delta = *checked_transition.evaluate(window, cx);
        let knob_offset = remap(
            checked_delta,
            0.,
            1.,
            KNOB_INSET,
            TRACK_WIDTH - KNOB_SIZE - KNOB_INSET * 2.,
        );

        // Only the track reacts to the pointer; the label is plain text.
        let track = div()
            .id(self.id.clone())
            .key_context(PRESSABLE_KEY_CONTEXT)
            .relative()
            .flex_none()
            .w(rems(TRACK_WIDTH))
            .h(rems(TRACK_HEIGHT))
            .rounded_full()
            .border_4()
            .border_color(ink())
            .shadow(vec![hard_shadow(4., 1.)])
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .bg(if is_checked {
                rgb_a(0x22C55E, 0.4)
            } else {
                rgb_a(0xC8C8C8, 0.4)
            })
            .child(
                div()
                    .absolute()
                    .top(rems(KNOB_INSET))
                    .left(rems(knob_offset))
                    .size(rems(KNOB_SIZE))
                    .rounded_full()
                    .bg(rgb_a(0xFFFFFF, 1.))
                    .border_2()
                    .border_color(ink()),
            )
            .when(!is_disabled, |this| {
                let press_state_on_hover = press_state.clone();
                let press_state_on_mouse_down = press_state.clone();
                let press_state_on_mouse_up = press_state.clone();
                let press_state_on_mouse_up_out = press_state.clone();
                let press_state_on_action = press_state.clone();
                let on_change_for_mouse_up = self.on_change.clone();
                let on_change_for_action = self.on_change;

                this.track_focus(&focus_handle)
                    .on_hover(move |hovered, _window, cx| {
                        let event = if *hovered {
                            PointerEvent::Enter
                        } else {
                            PointerEvent::Leave
                        };
                        press_state_on_hover
                            .update(cx, |this, _cx| this.handle(event, is_disabled));
                        cx.notify(press_state_on_hover.entity_id());
                    })
                    .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                        window.prevent_default();
                        press_state_on_mouse_down
                            .update(cx, |this, _cx| this.handle(PointerEvent::Down, is_disabled));
                    })
                    .on_mouse_up(MouseButton::Left, move |_event, window, cx| {
                        let activated = press_state_on_mouse_up
                            .update(cx, |this, _cx| this.handle(PointerEvent::Up, is_disabled));

                        if activated {
                            emit(
                                on_change_for_mouse_up.as_ref(),
                                is_checked,
                                is_disabled,
                                window,
                                cx,
                            );
                        }
                    })
                    .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                        press_state_on_mouse_up_out
                            .update(cx, |this, _cx| this.handle(PointerEvent::Leave, is_disabled));
                    })
                    .on_action(move |_: &Activate, window, cx| {
                        if press_state_on_action.read(cx).activate(is_disabled) {
                            emit(
                                on_change_for_action.as_ref(),
                                is_checked,
                                is_disabled,
                                window,
                                cx,
                            );
                        }
                    })
            });

        div()
            .flex()
            .items_center()
            .gap(rems(1.))
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(track)
            .when_some(self.label, |this, label| {
                this.child(
                    div()
                        .text_size(rems(1.25))
                        .font_weight(FontWeight::BOLD)
                        .child(label),
                )
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use gpui::{
        AppContext, Modifiers, Pixels, Point, TestAppContext, VisualTestContext, point, px,
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn on_track() -> Point<Pixels> {
        point(px(20.), px(20.))
    }

    // The label starts right of the 5rem track and its 1rem gap.
    fn on_label() -> Point<Pixels> {
        point(px(130.), px(20.))
    }

    fn outside() -> Point<Pixels> {
        point(px(300.), px(300.))
    }

    struct ToggleClickView {
        checked: bool,
        disabled: bool,
        reports: Rc<RefCell<Vec<bool>>>,
    }

    impl gpui::Render for ToggleClickView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            let reports = self.reports.clone();

            div().size_full().child(
                RetroToggle::new("toggle")
                    .checked(self.checked)
                    .disabled(self.disabled)
                    .label("Turbo mode")
                    .on_change(move |checked, _window, _cx| reports.borrow_mut().push(*checked)),
            )
        }
    }

    fn open_toggle(
        cx: &mut TestAppContext,
        checked: bool,
        disabled: bool,
    ) -> (VisualTestContext, Rc<RefCell<Vec<bool>>>) {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let reports_in_view = reports.clone();

        let window = cx.update(|cx| {
            crate::init(cx);
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ToggleClickView {
                    checked,
                    disabled,
                    reports: reports_in_view,
                })
            })
            .unwrap()
        });

        (VisualTestContext::from_window(window.into(), cx), reports)
    }

    fn click(cx: &mut VisualTestContext, position: Point<Pixels>) {
        cx.simulate_mouse_move(position, None, Modifiers::default());
        cx.simulate_mouse_down(position, MouseButton::Left, Modifiers::default());
        cx.simulate_mouse_up(position, MouseButton::Left, Modifiers::default());
    }

    #[gpui::test]
    fn test_toggle_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let toggle = RetroToggle::new("test-toggle");
            assert!(!toggle.checked, "Toggle should start unchecked");
            assert!(!toggle.disabled, "Toggle should start enabled");
            assert!(toggle.label.is_none());
        });
    }

    #[gpui::test]
    fn test_toggle_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let toggle = RetroToggle::new("test-toggle")
                .checked(true)
                .label("Turbo mode")
                .disabled(true)
                .on_change(|_checked, _window, _cx| {});

            assert!(toggle.checked);
            assert!(toggle.disabled);
            assert_eq!(toggle.label.as_deref(), Some("Turbo mode"));
            assert!(toggle.on_change.is_some());
        });
    }

    #[gpui::test]
    fn test_emit_reports_new_value(cx: &mut TestAppContext) {
        let window = cx.add_empty_window();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_handler = seen.clone();
        let on_change: OnToggle = Rc::new(move |checked: &bool, _window: &mut Window, _cx: &mut App| {
            seen_in_handler.borrow_mut().push(*checked);
        });

        window.update(|window, cx| {
            emit(Some(&on_change), false, false, window, cx);
            emit(Some(&on_change), true, false, window, cx);
            emit(None, true, false, window, cx);
            emit(Some(&on_change), false, true, window, cx);
            emit(Some(&on_change), true, true, window, cx);
        });

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[gpui::test]
    fn test_toggle_renders(cx: &mut TestAppContext) {
        struct ToggleTestView;

        impl gpui::Render for ToggleTestView {
            fn render(
                &mut self,
                _window: &mut gpui::Window,
                _cx: &mut gpui::Context<Self>,
            ) -> impl IntoElement {
                div()
                    .child(RetroToggle::new("off").label("Off"))
                    .child(RetroToggle::new("on").checked(true))
                    .child(RetroToggle::new("disabled").disabled(true))
            }
        }

        let window = cx.update(|cx| {
            crate::init(cx);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ToggleTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    #[gpui::test]
    fn test_click_reports_inverted_value(cx: &mut TestAppContext) {
        let (mut vcx, reports) = open_toggle(cx, false, false);
        click(&mut vcx, on_track());
        assert_eq!(*reports.borrow(), vec![true]);

        let (mut vcx, reports) = open_toggle(cx, true, false);
        click(&mut vcx, on_track());
        assert_eq!(*reports.borrow(), vec![false]);
    }

    #[gpui::test]
    fn test_toggle_stays_controlled(cx: &mut TestAppContext) {
        // The view never passes the reported value back, so every click
        // reports the same change.
        let (mut vcx, reports) = open_toggle(cx, false, false);
        click(&mut vcx, on_track());
        click(&mut vcx, on_track());
        assert_eq!(*reports.borrow(), vec![true, true]);
    }

    #[gpui::test]
    fn test_label_click_does_not_toggle(cx: &mut TestAppContext) {
        let (mut vcx, reports) = open_toggle(cx, false, false);
        click(&mut vcx, on_label());
        assert!(reports.borrow().is_empty());
    }

    #[gpui::test]
    fn test_release_outside_does_not_toggle(cx: &mut TestAppContext) {
        let (mut vcx, reports) = open_toggle(cx, false, false);

        vcx.simulate_mouse_move(on_track(), None, Modifiers::default());
        vcx.simulate_mouse_down(on_track(), MouseButton::Left, Modifiers::default());
        vcx.simulate_mouse_move(outside(), MouseButton::Left, Modifiers::default());
        vcx.simulate_mouse_up(outside(), MouseButton::Left, Modifiers::default());

        assert!(reports.borrow().is_empty());
    }

    #[gpui::test]
    fn test_keyboard_activation_reports_inverted_value(cx: &mut TestAppContext) {
        let (mut vcx, reports) = open_toggle(cx, true, false);

        vcx.update(|window, cx| {
            window.focus_next(cx);
            window.dispatch_action(Box::new(Activate), cx);
        });
        assert_eq!(*reports.borrow(), vec![false]);

        vcx.simulate_keystrokes("space");
        assert_eq!(*reports.borrow(), vec![false, false]);
    }

    #[gpui::test]
    fn test_disabled_toggle_never_reports(cx: &mut TestAppContext) {
        let (mut vcx, reports) = open_toggle(cx, false, true);
        let mut rng = StdRng::seed_from_u64(0x70661E);
        let positions = [on_track(), on_label(), outside()];

        for _ in 0..64 {
            let position = positions[rng.random_range(0..positions.len())];
            match rng.random_range(0..5) {
                0 => vcx.simulate_mouse_move(position, None, Modifiers::default()),
                1 => vcx.simulate_mouse_down(position, MouseButton::Left, Modifiers::default()),
                2 => vcx.simulate_mouse_up(position, MouseButton::Left, Modifiers::default()),
                3 => vcx.update(|window, cx| {
                    window.focus_next(cx);
                    window.dispatch_action(Box::new(Activate), cx);
                }),
                _ => vcx.simulate_keystrokes("enter"),
            }
        }

        assert!(reports.borrow().is_empty());
    }
}
