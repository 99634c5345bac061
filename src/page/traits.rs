/// Reads the semantic contact fields of the card page.
///
/// Each method returns the raw text content (or link target for URI fields)
/// of one page element, or `None` when the element is absent. Trimming and
/// label handling belong to the extractor, not the reader.
pub trait PageFieldReader: Send + Sync {
    /// Display name.
    fn name(&self) -> Option<String>;

    /// Composite "title at organization" line.
    fn role(&self) -> Option<String>;

    /// Second composite "title at organization" line.
    fn department(&self) -> Option<String>;

    /// Office phone, possibly prefixed with its label.
    fn office_phone(&self) -> Option<String>;

    /// Personal phone, possibly prefixed with its label.
    fn personal_phone(&self) -> Option<String>;

    fn email(&self) -> Option<String>;

    fn secondary_email(&self) -> Option<String>;

    /// Link target of the website element.
    fn website(&self) -> Option<String>;

    fn address(&self) -> Option<String>;

    /// Link target of the LinkedIn element.
    fn linkedin(&self) -> Option<String>;

    /// Link target of the Facebook element.
    fn facebook(&self) -> Option<String>;
}

/// An element that fades in after page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedElement {
    /// Style target addressing the element
    pub target: String,

    /// Delay before the entrance animation, in milliseconds
    pub delay_ms: u64,
}

/// Structure the cosmetic behaviors rely on.
pub trait PageLayout: Send + Sync {
    /// Whether the theme toggle control exists.
    fn has_theme_toggle(&self) -> bool;

    /// Whether the theme toggle control has its icon child.
    fn has_theme_toggle_icon(&self) -> bool;

    /// Whether the decorative background layer exists.
    fn has_background_pattern(&self) -> bool;

    /// Elements with an entrance animation, in document order.
    fn animated_elements(&self) -> Vec<AnimatedElement>;

    /// Style targets of the social buttons, in document order.
    fn social_buttons(&self) -> Vec<String>;
}
