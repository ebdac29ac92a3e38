use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    /// Id of a piece of keyed state owned by the widget with this id.
    fn state_id(&self, name: &str) -> ElementId {
        self.with_suffix(format!("state:{name}"))
    }
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}
