use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::Transition;

use crate::ElementIdExt;

/// Opacity of a disabled widget.
pub const DISABLED_OPACITY: f32 = 0.6;

/// Declares a keyed transition whose goal is picked from the first matching branch.
///
/// ```ignore
/// conditional_transition!(id, window, cx, Duration::from_millis(150), {
///     is_pressed => 4.,
///     _ => 0.
/// })
/// ```
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {{
        use gpui_transitions::WindowUseTransition;

        let value = $crate::transition_goal!(@condition [ $($rest)+ ]);

        let transition = $window
            .use_keyed_transition($id, $cx, $duration, |_window, _cx| value)
            .with_easing(gpui::ease_out_quint());

        let value = value.into();

        if transition.read_goal($cx) != &value {
            transition.update($cx, |this, _cx| *this = value);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! transition_goal {
    (@branch_list [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` must be the last branch.");
    }};

    (@condition [ { $cond:expr => $value:expr, $($rest:tt)+ } ]) => {{
        if $cond { $value } else { $crate::transition_goal!(@branch_list [ $($rest)+ ]) }
    }};

    (@branch_list [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::transition_goal!(@branch_list [ $($rest)+ ]) }
    }};

    (@branch_list [ _ => $value:expr ]) => {{
        $value
    }};

    (@branch_list [ $cond:expr => $value:expr ]) => {{
        compile_error!("The last branch must be `_ => value`.");
    }};

    (@condition [ $($rest:tt)+ ]) => {{
        $($rest)+
    }};
}

pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    let base_id: ElementId = base_id.into();

    conditional_transition!(
        base_id.state_id("transition:disabled"),
        window,
        cx,
        Duration::from_millis(150),
        {
            is_disabled => DISABLED_OPACITY,
            _ => 1.
        }
    )
    .with_easing(ease_out_quint())
}

/// Animates between `0.` (unchecked) and `1.` (checked).
pub fn checked_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    is_checked: bool,
) -> Transition<f32> {
    let base_id: ElementId = base_id.into();

    conditional_transition!(
        base_id.state_id("transition:checked"),
        window,
        cx,
        duration,
        {
            is_checked => 1.,
            _ => 0.
        }
    )
}

/// Maps `value` from the `from` range onto the `to` range.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}
