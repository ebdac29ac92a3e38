use std::{fs, path::Path, sync::LazyLock};

use gpui::SharedString;
use serde::{Deserialize, Serialize};

use super::ThemeError;

static DEFAULT_THEME: LazyLock<Theme> = LazyLock::new(Theme::retro);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub colors: ThemeColors,
    pub effects: ThemeEffects,
    pub fonts: ThemeFonts,
    pub shadows: ThemeShadows,
}

impl Theme {
    /// The process-wide default theme.
    ///
    /// Built on first access and never mutated afterwards.
    pub fn default_theme() -> &'static Theme {
        &DEFAULT_THEME
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("loaded theme from {}", path.display());
        Self::from_json(contents)
    }

    fn retro() -> Theme {
        Theme {
            colors: ThemeColors {
                primary: "rgba(255, 220, 0, 0.3)".into(),
                secondary: "rgba(59, 130, 246, 0.3)".into(),
                success: "rgba(34, 197, 94, 0.3)".into(),
                danger: "rgba(239, 68, 68, 0.3)".into(),
                text: "#000".into(),
                text_shadow: "rgba(255, 255, 255, 0.8)".into(),
                border: "#000".into(),
            },
            effects: ThemeEffects {
                backdrop_blur: "16px".into(),
                glassmorphism_opacity: 0.25,
                border_width: "4px".into(),
                border_radius: "0.5rem".into(),
            },
            fonts: ThemeFonts {
                heading: "Impact, Arial Black, sans-serif".into(),
                body: "Arial Black, sans-serif".into(),
            },
            shadows: ThemeShadows {
                button: "8px 8px 0px 4px #000, inset 0 8px 24px rgba(255,255,255,0.3)".into(),
                button_pressed: "4px 4px 0px 2px #000, inset 0 8px 24px rgba(255,255,255,0.2)"
                    .into(),
                card: "8px 8px 0px 2px #000, inset 0 6px 24px rgba(255,255,255,0.2)".into(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::default_theme().clone()
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: SharedString,
    pub secondary: SharedString,
    pub success: SharedString,
    pub danger: SharedString,
    pub text: SharedString,
    pub text_shadow: SharedString,
    pub border: SharedString,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEffects {
    pub backdrop_blur: SharedString,
    /// Overlay opacity, always within `0.0..=1.0`.
    pub glassmorphism_opacity: f32,
    pub border_width: SharedString,
    pub border_radius: SharedString,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeFonts {
    pub heading: SharedString,
    pub body: SharedString,
}

impl ThemeFonts {
    /// The first family of the heading font stack.
    pub fn heading_family(&self) -> SharedString {
        first_family(&self.heading)
    }

    /// The first family of the body font stack.
    pub fn body_family(&self) -> SharedString {
        first_family(&self.body)
    }
}

fn first_family(stack: &SharedString) -> SharedString {
    stack
        .split(',')
        .map(str::trim)
        .find(|family| !family.is_empty())
        .map(|family| SharedString::from(family.to_string()))
        .unwrap_or_else(|| stack.clone())
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeShadows {
    pub button: SharedString,
    pub button_pressed: SharedString,
    pub card: SharedString,
}
