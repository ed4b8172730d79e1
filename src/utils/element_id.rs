use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    /// Derives a child id, used to key per-element state.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    /// Derives one id per list item, e.g. `feed/like:3`.
    fn with_index(&self, name: &str, index: usize) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }

    fn with_index(&self, name: &str, index: usize) -> ElementId {
        self.with_suffix(format!("{name}:{index}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_ids_are_distinct() {
        let base = ElementId::from("feed");

        assert_eq!(base.with_index("like", 1), base.with_index("like", 1));
        assert_ne!(base.with_index("like", 1), base.with_index("like", 2));
        assert_ne!(base.with_index("like", 1), base.with_suffix("like"));
    }
}
