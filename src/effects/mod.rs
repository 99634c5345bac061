//! Cosmetic page effects.
//!
//! Every visual change is a [`StyleChange`] applied to a [`StyleSurface`].
//! Delayed steps run on fire-and-forget tasks tracked by [`Deferred`] so a
//! headless caller can wait for the page to settle.

pub mod animations;
pub mod deferred;
pub mod hover;
pub mod surface;

pub use animations::{schedule_entrance, ANIMATE_IN_CLASS};
pub use deferred::Deferred;
pub use hover::HoverEffects;
pub use surface::{LogSurface, RecordedChange, RecordingSurface, StyleChange, StyleSurface};
