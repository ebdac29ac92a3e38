use std::{fs, path::Path};

use gpui::SharedString;
use serde::{Deserialize, Serialize};

use super::{Theme, ThemeColors, ThemeEffects, ThemeError, ThemeFonts, ThemeShadows};

/// A partial theme.
///
/// Groups and fields left as `None` fall back to the theme being refined.
/// Names that don't belong to the theme shape are ignored when deserializing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ThemeRefinement {
    pub colors: Option<ThemeColorsRefinement>,
    pub effects: Option<ThemeEffectsRefinement>,
    pub fonts: Option<ThemeFontsRefinement>,
    pub shadows: Option<ThemeShadowsRefinement>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeColorsRefinement {
    pub primary: Option<SharedString>,
    pub secondary: Option<SharedString>,
    pub success: Option<SharedString>,
    pub danger: Option<SharedString>,
    pub text: Option<SharedString>,
    pub text_shadow: Option<SharedString>,
    pub border: Option<SharedString>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeEffectsRefinement {
    pub backdrop_blur: Option<SharedString>,
    pub glassmorphism_opacity: Option<f32>,
    pub border_width: Option<SharedString>,
    pub border_radius: Option<SharedString>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ThemeFontsRefinement {
    pub heading: Option<SharedString>,
    pub body: Option<SharedString>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeShadowsRefinement {
    pub button: Option<SharedString>,
    pub button_pressed: Option<SharedString>,
    pub card: Option<SharedString>,
}

macro_rules! refine_fields {
    ($base:expr, $refinement:expr, [ $($field:ident),+ ]) => {
        $(
            if let Some(value) = &$refinement.$field {
                $base.$field = value.clone();
            }
        )+
    };
}

impl ThemeRefinement {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<ThemeRefinement, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<ThemeRefinement, ThemeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("loaded theme overrides from {}", path.display());
        Self::from_json(contents)
    }

    pub fn is_empty(&self) -> bool {
        self == &ThemeRefinement::default()
    }

    pub fn colors(mut self, colors: ThemeColorsRefinement) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn effects(mut self, effects: ThemeEffectsRefinement) -> Self {
        self.effects = Some(effects);
        self
    }

    pub fn fonts(mut self, fonts: ThemeFontsRefinement) -> Self {
        self.fonts = Some(fonts);
        self
    }

    pub fn shadows(mut self, shadows: ThemeShadowsRefinement) -> Self {
        self.shadows = Some(shadows);
        self
    }
}

impl Theme {
    /// Returns a copy of this theme with every field present in `refinement` overwritten.
    ///
    /// Merging is per field within each group: a group that is only partially
    /// refined keeps the remaining fields of `self`.
    pub fn refined(&self, refinement: &ThemeRefinement) -> Theme {
        let mut theme = self.clone();
        theme.refine(refinement);
        theme
    }

    pub fn refine(&mut self, refinement: &ThemeRefinement) {
        if let Some(colors) = &refinement.colors {
            self.colors.refine(colors);
        }
        if let Some(effects) = &refinement.effects {
            self.effects.refine(effects);
        }
        if let Some(fonts) = &refinement.fonts {
            self.fonts.refine(fonts);
        }
        if let Some(shadows) = &refinement.shadows {
            self.shadows.refine(shadows);
        }
    }
}

impl ThemeColors {
    fn refine(&mut self, refinement: &ThemeColorsRefinement) {
        refine_fields!(
            self,
            refinement,
            [primary, secondary, success, danger, text, text_shadow, border]
        );
    }
}

impl ThemeEffects {
    fn refine(&mut self, refinement: &ThemeEffectsRefinement) {
        refine_fields!(self, refinement, [backdrop_blur, border_width, border_radius]);

        if let Some(opacity) = refinement.glassmorphism_opacity {
            let clamped = if opacity.is_nan() {
                self.glassmorphism_opacity
            } else {
                opacity.clamp(0., 1.)
            };

            if clamped != opacity {
                tracing::warn!(
                    "glassmorphism opacity {} is outside of 0..=1, using {}",
                    opacity,
                    clamped
                );
            }

            self.glassmorphism_opacity = clamped;
        }
    }
}

impl ThemeFonts {
    fn refine(&mut self, refinement: &ThemeFontsRefinement) {
        refine_fields!(self, refinement, [heading, body]);
    }
}

impl ThemeShadows {
    fn refine(&mut self, refinement: &ThemeShadowsRefinement) {
        refine_fields!(self, refinement, [button, button_pressed, card]);
    }
}
