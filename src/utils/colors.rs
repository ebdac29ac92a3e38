use gpui::{BoxShadow, Rgba, point, px};

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

/// The solid, unblurred drop shadow every retro surface casts.
pub fn hard_shadow(offset: f32, spread: f32) -> BoxShadow {
    BoxShadow {
        color: rgb_a(0x000000, 1.).into(),
        offset: point(px(offset), px(offset)),
        blur_radius: px(0.),
        spread_radius: px(spread),
    }
}

/// Outline color shared by all widgets.
pub fn ink() -> Rgba {
    rgb_a(0x000000, 1.)
}
