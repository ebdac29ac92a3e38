use gpui::SharedString;
use indexmap::IndexMap;

use super::Theme;

/// Flat, ordered mapping of namespaced variable names to theme values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeVariables(IndexMap<SharedString, SharedString>);

impl ThemeVariables {
    pub fn get(&self, name: &str) -> Option<&SharedString> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SharedString, &SharedString)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &'static str, value: impl Into<SharedString>) {
        self.0.insert(SharedString::new_static(name), value.into());
    }
}

impl IntoIterator for ThemeVariables {
    type Item = (SharedString, SharedString);
    type IntoIter = indexmap::map::IntoIter<SharedString, SharedString>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Flattens `theme` into `--retro-*` variables for a styling layer.
pub fn export_theme_variables(theme: &Theme) -> ThemeVariables {
    let mut variables = ThemeVariables(IndexMap::with_capacity(16));

    let colors = &theme.colors;
    variables.insert("--retro-color-primary", colors.primary.clone());
    variables.insert("--retro-color-secondary", colors.secondary.clone());
    variables.insert("--retro-color-success", colors.success.clone());
    variables.insert("--retro-color-danger", colors.danger.clone());
    variables.insert("--retro-color-text", colors.text.clone());
    variables.insert("--retro-color-text-shadow", colors.text_shadow.clone());
    variables.insert("--retro-color-border", colors.border.clone());

    let effects = &theme.effects;
    variables.insert("--retro-backdrop-blur", effects.backdrop_blur.clone());
    variables.insert(
        "--retro-glassmorphism-opacity",
        effects.glassmorphism_opacity.to_string(),
    );
    variables.insert("--retro-border-width", effects.border_width.clone());
    variables.insert("--retro-border-radius", effects.border_radius.clone());

    variables.insert("--retro-font-heading", theme.fonts.heading.clone());
    variables.insert("--retro-font-body", theme.fonts.body.clone());

    let shadows = &theme.shadows;
    variables.insert("--retro-shadow-button", shadows.button.clone());
    variables.insert("--retro-shadow-button-pressed", shadows.button_pressed.clone());
    variables.insert("--retro-shadow-card", shadows.card.clone());

    variables
}
