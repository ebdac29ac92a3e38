use gpui::{App, KeyBinding, actions};

actions!(retro_pressable, [Activate]);

/// Key context that pressable widgets register their [`Activate`] handler in.
pub const PRESSABLE_KEY_CONTEXT: &str = "RetroPressable";

pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("enter", Activate, Some(PRESSABLE_KEY_CONTEXT)),
        KeyBinding::new("space", Activate, Some(PRESSABLE_KEY_CONTEXT)),
    ]);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Down,
    /// The pointer was released over the widget.
    Up,
    /// The pointer left the widget, or was released outside of it.
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PressPhase {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// Pointer interaction state of a single pressable widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PressState {
    hovered: bool,
    pressed: bool,
}

impl PressState {
    pub fn phase(&self) -> PressPhase {
        if self.pressed {
            PressPhase::Pressed
        } else if self.hovered {
            PressPhase::Hovered
        } else {
            PressPhase::Idle
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Applies a pointer event and returns whether it completed a press.
    ///
    /// A disabled widget stays idle and never activates.
    pub fn handle(&mut self, event: PointerEvent, disabled: bool) -> bool {
        if disabled {
            *self = PressState::default();
            return false;
        }

        let before = self.phase();

        let activated = match event {
            PointerEvent::Enter => {
                self.hovered = true;
                false
            }
            PointerEvent::Down => {
                self.pressed = true;
                false
            }
            PointerEvent::Up => {
                let activated = self.pressed;
                *self = PressState::default();
                activated
            }
            PointerEvent::Leave => {
                *self = PressState::default();
                false
            }
        };

        tracing::trace!(?event, ?before, after = ?self.phase(), activated, "press transition");

        activated
    }

    /// Keyboard activation; completes a press without touching pointer state.
    pub fn activate(&self, disabled: bool) -> bool {
        !disabled
    }
}

/// The value a toggle reports when activated, or `None` if it ignores the activation.
pub fn toggled_value(checked: bool, disabled: bool) -> Option<bool> {
    (!disabled).then_some(!checked)
}
