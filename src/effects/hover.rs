//! Hover lift on the social buttons.

use super::surface::{StyleChange, StyleSurface};
use crate::page::PageLayout;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

const HOVER_TRANSFORM: &str = "translateY(-3px) scale(1.1)";
const REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Hover transforms for the social buttons found on the page.
///
/// Only buttons registered by [`HoverEffects::init`] react; pointer events
/// on anything else are ignored.
pub struct HoverEffects {
    surface: Arc<dyn StyleSurface>,
    buttons: RwLock<HashSet<String>>,
}

impl HoverEffects {
    pub fn new(surface: Arc<dyn StyleSurface>) -> Self {
        Self {
            surface,
            buttons: RwLock::new(HashSet::new()),
        }
    }

    /// Register the page's social buttons. Returns how many were found.
    pub fn init(&self, layout: &dyn PageLayout) -> usize {
        let found = layout.social_buttons();
        let count = found.len();

        if let Ok(mut buttons) = self.buttons.write() {
            buttons.extend(found);
        }

        count
    }

    /// Pointer entered `target`. Returns whether a button reacted.
    pub fn enter(&self, target: &str) -> bool {
        self.transform(target, HOVER_TRANSFORM)
    }

    /// Pointer left `target`. Returns whether a button reacted.
    pub fn leave(&self, target: &str) -> bool {
        self.transform(target, REST_TRANSFORM)
    }

    fn transform(&self, target: &str, value: &str) -> bool {
        let registered = self
            .buttons
            .read()
            .map(|buttons| buttons.contains(target))
            .unwrap_or(false);

        if registered {
            self.surface
                .apply(StyleChange::set_style(target, "transform", value));
        }

        registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::RecordingSurface;
    use crate::page::HtmlPage;

    #[tokio::test]
    async fn test_hover_enter_and_leave() {
        let page = HtmlPage::parse(r#"<a id="fb" class="ecard-social-btn"></a>"#);
        let surface = RecordingSurface::new();
        let hover = HoverEffects::new(Arc::new(surface.clone()));

        assert_eq!(hover.init(&page), 1);
        assert!(hover.enter("#fb"));
        assert!(hover.leave("#fb"));

        let changes: Vec<StyleChange> =
            surface.changes().into_iter().map(|c| c.change).collect();
        assert_eq!(
            changes,
            vec![
                StyleChange::set_style("#fb", "transform", "translateY(-3px) scale(1.1)"),
                StyleChange::set_style("#fb", "transform", "translateY(0) scale(1)"),
            ]
        );
    }

    #[tokio::test]
    async fn test_unregistered_target_is_ignored() {
        let surface = RecordingSurface::new();
        let hover = HoverEffects::new(Arc::new(surface.clone()));

        assert!(!hover.enter("#nothing"));
        assert!(surface.changes().is_empty());
    }
}
