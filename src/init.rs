use gpui::App;

use crate::primitives;

/// Registers the key bindings used by the widgets. Call once at startup.
pub fn init(cx: &mut App) {
    primitives::init(cx);
    gpui_primitives::input::init(cx);

    tracing::debug!("retro widgets initialised");
}
