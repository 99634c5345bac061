//! Dark mode.
//!
//! The stored preference is the only state: the current theme is read from
//! the store, and a toggle writes the flipped value back before any visual
//! step runs.

use crate::effects::{Deferred, StyleChange, StyleSurface};
use crate::error::{PageError, PageResult};
use crate::metrics::Metrics;
use crate::models::{Theme, DARK_MODE_KEY};
use crate::page::PageLayout;
use crate::preferences::PreferenceStore;
use std::sync::Arc;
use std::time::Duration;

/// Style target of the page body.
pub const BODY: &str = "body";

/// Style target of the theme toggle button.
pub const THEME_TOGGLE: &str = "#darkModeToggle";

/// Style target of the toggle button's icon.
pub const THEME_TOGGLE_ICON: &str = "#darkModeToggle i";

const BACKGROUND: &str = ".ecard-bg-pattern";
const DARK_MODE_CLASS: &str = "dark-mode";
const ICON_TRANSITION: &str = "transform 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

const SWITCH_DELAY: Duration = Duration::from_millis(100);
const ICON_SWAP_DELAY: Duration = Duration::from_millis(150);
const FADE_BACK_DELAY: Duration = Duration::from_millis(100);
const PRESS_DURATION: Duration = Duration::from_millis(150);

/// Persists and plays the theme switch.
#[derive(Clone)]
pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    layout: Arc<dyn PageLayout>,
    surface: Arc<dyn StyleSurface>,
    deferred: Deferred,
    metrics: Metrics,
}

impl ThemeController {
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        layout: Arc<dyn PageLayout>,
        surface: Arc<dyn StyleSurface>,
        deferred: Deferred,
        metrics: Metrics,
    ) -> Self {
        Self {
            store,
            layout,
            surface,
            deferred,
            metrics,
        }
    }

    /// The stored theme. Unreadable storage counts as light.
    pub fn current(&self) -> Theme {
        match self.store.get(DARK_MODE_KEY) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::Light
            }
        }
    }

    /// Apply the stored theme at page load.
    ///
    /// Fails when the toggle button or its icon is missing; the caller logs
    /// and skips the feature.
    pub fn init(&self) -> PageResult<Theme> {
        if !self.layout.has_theme_toggle() || !self.layout.has_theme_toggle_icon() {
            return Err(PageError::MissingElement(THEME_TOGGLE_ICON.to_string()));
        }

        let theme = self.current();
        if theme.is_dark() {
            self.surface
                .apply(StyleChange::add_class(BODY, DARK_MODE_CLASS));
            self.apply_icon(theme);
        }

        self.surface.apply(StyleChange::set_style(
            THEME_TOGGLE_ICON,
            "transition",
            ICON_TRANSITION,
        ));

        tracing::debug!(theme = ?theme, "Theme initialized");
        Ok(theme)
    }

    /// Switch theme, persist it, and play the transition.
    ///
    /// Returns the new theme, or `None` when the toggle does nothing: the
    /// page lacks the toggle control, its icon or the background layer, or
    /// the new value could not be saved.
    pub fn toggle(&self) -> Option<Theme> {
        if !self.layout.has_theme_toggle() || !self.layout.has_theme_toggle_icon() {
            tracing::debug!("Theme toggle ignored: toggle control missing");
            return None;
        }
        if !self.layout.has_background_pattern() {
            tracing::debug!("Theme toggle ignored: background pattern missing");
            return None;
        }

        let theme = self.current().toggled();
        if let Err(e) = self.store.set(DARK_MODE_KEY, theme.stored_value()) {
            tracing::error!("Failed to save theme preference: {}", e);
            return None;
        }
        self.metrics.record_theme_toggle();

        self.play_transition(theme);
        Some(theme)
    }

    fn apply_icon(&self, theme: Theme) {
        self.surface.apply(StyleChange::remove_class(
            THEME_TOGGLE_ICON,
            theme.toggled().icon_class(),
        ));
        self.surface
            .apply(StyleChange::add_class(THEME_TOGGLE_ICON, theme.icon_class()));
    }

    fn play_transition(&self, theme: Theme) {
        self.surface
            .apply(StyleChange::set_style(BACKGROUND, "opacity", "0.7"));

        let this = self.clone();
        self.deferred.after(SWITCH_DELAY, move || {
            let body_change = if theme.is_dark() {
                StyleChange::add_class(BODY, DARK_MODE_CLASS)
            } else {
                StyleChange::remove_class(BODY, DARK_MODE_CLASS)
            };
            this.surface.apply(body_change);
            this.surface.apply(StyleChange::set_style(
                THEME_TOGGLE_ICON,
                "transform",
                "rotate(180deg)",
            ));

            let icon = this.clone();
            this.deferred.after(ICON_SWAP_DELAY, move || {
                icon.apply_icon(theme);
                icon.surface.apply(StyleChange::set_style(
                    THEME_TOGGLE_ICON,
                    "transform",
                    "rotate(0deg)",
                ));
            });

            let surface = this.surface.clone();
            this.deferred.after(FADE_BACK_DELAY, move || {
                surface.apply(StyleChange::set_style(BACKGROUND, "opacity", "1"));
            });
        });

        self.surface
            .apply(StyleChange::set_style(THEME_TOGGLE, "transform", "scale(0.9)"));
        let surface = self.surface.clone();
        self.deferred.after(PRESS_DURATION, move || {
            surface.apply(StyleChange::set_style(THEME_TOGGLE, "transform", ""));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::RecordingSurface;
    use crate::page::HtmlPage;
    use crate::preferences::MemoryPreferenceStore;

    const PAGE: &str = r#"<div class="ecard-bg-pattern"></div>
        <button id="darkModeToggle"><i class="fas fa-moon"></i></button>"#;

    fn controller(
        html: &str,
        store: Arc<MemoryPreferenceStore>,
        surface: &RecordingSurface,
        deferred: &Deferred,
    ) -> ThemeController {
        ThemeController::new(
            store,
            Arc::new(HtmlPage::parse(html)),
            Arc::new(surface.clone()),
            deferred.clone(),
            Metrics::new(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_init_applies_stored_dark_mode() {
        let surface = RecordingSurface::new();
        let deferred = Deferred::new();
        let store = Arc::new(MemoryPreferenceStore::with_value(DARK_MODE_KEY, "true"));
        let theme = controller(PAGE, store, &surface, &deferred);

        assert_eq!(theme.init().unwrap(), Theme::Dark);

        let changes: Vec<StyleChange> =
            surface.changes().into_iter().map(|c| c.change).collect();
        assert!(changes.contains(&StyleChange::add_class(BODY, "dark-mode")));
        assert!(changes.contains(&StyleChange::add_class(THEME_TOGGLE_ICON, "fa-sun")));
        assert!(changes.contains(&StyleChange::set_style(
            THEME_TOGGLE_ICON,
            "transition",
            ICON_TRANSITION
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn test_init_without_toggle_fails() {
        let surface = RecordingSurface::new();
        let deferred = Deferred::new();
        let store = Arc::new(MemoryPreferenceStore::new());
        let theme = controller(
            r#"<button id="darkModeToggle"></button>"#,
            store,
            &surface,
            &deferred,
        );

        assert!(matches!(theme.init(), Err(PageError::MissingElement(_))));
        assert!(surface.changes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_sequence() {
        let surface = RecordingSurface::new();
        let deferred = Deferred::new();
        let store = Arc::new(MemoryPreferenceStore::new());
        let theme = controller(PAGE, store.clone(), &surface, &deferred);

        assert_eq!(theme.toggle(), Some(Theme::Dark));
        assert_eq!(
            store.get(DARK_MODE_KEY).unwrap().as_deref(),
            Some("true")
        );

        deferred.settle().await;

        let body = surface.changes_for(BODY);
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].change, StyleChange::add_class(BODY, "dark-mode"));
        assert_eq!(body[0].at, Duration::from_millis(100));

        let background = surface.changes_for(BACKGROUND);
        assert_eq!(background.len(), 2);
        assert_eq!(background[1].at, Duration::from_millis(200));

        let icon_swap = surface
            .changes_for(THEME_TOGGLE_ICON)
            .into_iter()
            .find(|c| c.change == StyleChange::add_class(THEME_TOGGLE_ICON, "fa-sun"))
            .unwrap();
        assert_eq!(icon_swap.at, Duration::from_millis(250));

        let button = surface.changes_for(THEME_TOGGLE);
        assert_eq!(button.last().unwrap().at, Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_without_background_is_noop() {
        let surface = RecordingSurface::new();
        let deferred = Deferred::new();
        let store = Arc::new(MemoryPreferenceStore::new());
        let theme = controller(
            r#"<button id="darkModeToggle"><i></i></button>"#,
            store.clone(),
            &surface,
            &deferred,
        );

        assert_eq!(theme.toggle(), None);
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);
        assert!(surface.changes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_without_toggle_control_is_noop() {
        let surface = RecordingSurface::new();
        let deferred = Deferred::new();
        let store = Arc::new(MemoryPreferenceStore::new());
        let theme = controller(
            r#"<div class="ecard-bg-pattern"></div>"#,
            store.clone(),
            &surface,
            &deferred,
        );

        assert_eq!(theme.toggle(), None);
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);
        assert!(surface.changes().is_empty());
        assert_eq!(deferred.pending(), 0);
    }
}
