use std::sync::Arc;

use gpui::{AnyElement, IntoElement, ParentElement, RenderOnce, Styled, div};
use smallvec::SmallVec;

use super::{Theme, ThemeRefinement, ThemeVariables, export_theme_variables};

/// A handle to the theme published for a subtree.
///
/// Scopes are passed down the render chain explicitly. The root scope has no
/// provider above it and reads as [`Theme::default_theme`].
#[derive(Clone, Debug, Default)]
pub struct ThemeScope {
    theme: Option<Arc<Theme>>,
}

impl ThemeScope {
    pub fn root() -> Self {
        Self { theme: None }
    }

    /// Publishes `refinement` merged onto the default theme for a child scope.
    ///
    /// The enclosing scope's theme does not participate in the merge: nested
    /// providers always start over from the default.
    pub fn provide(&self, refinement: &ThemeRefinement) -> ThemeScope {
        let theme = Theme::default_theme().refined(refinement);

        tracing::debug!(
            overridden = !refinement.is_empty(),
            "publishing theme for a new scope"
        );

        ThemeScope {
            theme: Some(Arc::new(theme)),
        }
    }

    /// The nearest published theme, or the default when nothing was provided.
    pub fn theme(&self) -> &Theme {
        match &self.theme {
            Some(theme) => theme,
            None => Theme::default_theme(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.theme.is_none()
    }

    pub fn variables(&self) -> ThemeVariables {
        export_theme_variables(self.theme())
    }
}

/// Establishes a theme for the elements built beneath it.
///
/// ```ignore
/// ThemeProvider::new(overrides).child_with(|scope| {
///     RetroCard::new().title(scope.theme().fonts.heading_family())
/// })
/// ```
#[derive(IntoElement)]
pub struct ThemeProvider {
    scope: ThemeScope,
    children: SmallVec<[AnyElement; 2]>,
}

impl ThemeProvider {
    pub fn new(refinement: ThemeRefinement) -> Self {
        Self::nested(&ThemeScope::root(), refinement)
    }

    /// A provider placed inside `parent`'s subtree.
    ///
    /// This does not compose with `parent`: `refinement` is merged onto the
    /// default theme again, so fields `parent` overrode revert to their
    /// defaults unless `refinement` sets them too.
    pub fn nested(parent: &ThemeScope, refinement: ThemeRefinement) -> Self {
        Self {
            scope: parent.provide(&refinement),
            children: SmallVec::new(),
        }
    }

    pub fn scope(&self) -> &ThemeScope {
        &self.scope
    }

    pub fn theme(&self) -> &Theme {
        self.scope.theme()
    }

    /// Builds a child with access to this provider's scope.
    pub fn child_with<E: IntoElement>(mut self, build: impl FnOnce(&ThemeScope) -> E) -> Self {
        let child = build(&self.scope).into_any_element();
        self.children.push(child);
        self
    }
}

impl ParentElement for ThemeProvider {
    fn extend(&mut self, elements: impl IntoIterator<Item = gpui::AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for ThemeProvider {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div().size_full().children(self.children)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use super::*;
    use crate::theme::ThemeColorsRefinement;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    fn danger_override() -> ThemeRefinement {
        ThemeRefinement::default().colors(ThemeColorsRefinement {
            danger: Some("#F00".into()),
            ..Default::default()
        })
    }

    #[gpui::test]
    fn test_provider_passes_scope_to_children(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let mut seen = None;

            let _provider = ThemeProvider::new(danger_override()).child_with(|scope| {
                seen = Some(scope.theme().clone());
                div()
            });

            let theme = seen.expect("child should have been built");
            assert_eq!(&*theme.colors.danger, "#F00");
            assert_eq!(theme.colors.primary, Theme::default_theme().colors.primary);
        });
    }

    #[gpui::test]
    fn test_provider_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ProviderTestView)
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct ProviderTestView;

    impl gpui::Render for ProviderTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            ThemeProvider::new(danger_override()).child_with(|scope| {
                div().child(scope.theme().colors.danger.clone())
            })
        }
    }
}
