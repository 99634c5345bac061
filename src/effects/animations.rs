//! Entrance animations.

use super::deferred::Deferred;
use super::surface::{StyleChange, StyleSurface};
use crate::page::PageLayout;
use std::sync::Arc;
use std::time::Duration;

/// Class that starts an element's entrance animation.
pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Schedule the entrance animation of every animated element after its own
/// delay. Returns the number of elements scheduled.
pub fn schedule_entrance(
    layout: &dyn PageLayout,
    surface: Arc<dyn StyleSurface>,
    deferred: &Deferred,
) -> usize {
    let elements = layout.animated_elements();
    let count = elements.len();

    for element in elements {
        let surface = surface.clone();
        deferred.after(Duration::from_millis(element.delay_ms), move || {
            surface.apply(StyleChange::add_class(element.target, ANIMATE_IN_CLASS));
        });
    }

    tracing::debug!(count, "Scheduled entrance animations");
    count
}
