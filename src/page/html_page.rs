use super::traits::{AnimatedElement, PageFieldReader, PageLayout};
use crate::error::{PageError, PageResult};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::path::Path;

/// Element ids of the contact fields on the card page.
pub mod field_ids {
    pub const NAME: &str = "ecard-name";
    pub const ROLE: &str = "ecard-role";
    pub const DEPARTMENT: &str = "ecard-department";
    pub const OFFICE_PHONE: &str = "ecard-office-phone";
    pub const PERSONAL_PHONE: &str = "ecard-personal-phone";
    pub const EMAIL: &str = "ecard-email";
    pub const SECONDARY_EMAIL: &str = "ecard-secondary-email";
    pub const WEBSITE: &str = "ecard-website";
    pub const ADDRESS: &str = "ecard-address";
    pub const LINKEDIN: &str = "ecard-linkedin";
    pub const FACEBOOK: &str = "ecard-facebook";

    pub const ALL: [&str; 11] = [
        NAME,
        ROLE,
        DEPARTMENT,
        OFFICE_PHONE,
        PERSONAL_PHONE,
        EMAIL,
        SECONDARY_EMAIL,
        WEBSITE,
        ADDRESS,
        LINKEDIN,
        FACEBOOK,
    ];
}

static SELECTORS: Lazy<Selectors> = Lazy::new(Selectors::default);

struct Selectors {
    theme_toggle: Selector,
    theme_toggle_icon: Selector,
    background_pattern: Selector,
    animated: Selector,
    social_button: Selector,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: Selector::parse("#darkModeToggle").expect("valid selector"),
            theme_toggle_icon: Selector::parse("#darkModeToggle i").expect("valid selector"),
            background_pattern: Selector::parse(".ecard-bg-pattern").expect("valid selector"),
            animated: Selector::parse(".animate-element").expect("valid selector"),
            social_button: Selector::parse(".ecard-social-btn").expect("valid selector"),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FieldElement {
    text: String,
    href: Option<String>,
}

/// A card page parsed from HTML.
///
/// The document is read once at construction into an owned snapshot, so the
/// page can be shared across tasks. Lookups by id take the first element in
/// document order, the way `getElementById` does.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    fields: HashMap<&'static str, FieldElement>,
    has_theme_toggle: bool,
    has_theme_toggle_icon: bool,
    has_background_pattern: bool,
    animated: Vec<AnimatedElement>,
    social_buttons: Vec<String>,
}

impl HtmlPage {
    /// Parse a card page from its HTML source.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let mut fields = HashMap::new();
        for id in field_ids::ALL {
            if let Some(element) = find_by_id(&document, id) {
                fields.insert(
                    id,
                    FieldElement {
                        text: element.text().collect::<String>(),
                        href: element.value().attr("href").map(str::to_owned),
                    },
                );
            }
        }

        let animated = document
            .select(&SELECTORS.animated)
            .enumerate()
            .map(|(index, element)| AnimatedElement {
                target: style_target(&element, "animate-element", index),
                delay_ms: parse_delay(element.value().attr("data-delay")),
            })
            .collect();

        let social_buttons = document
            .select(&SELECTORS.social_button)
            .enumerate()
            .map(|(index, element)| style_target(&element, "ecard-social-btn", index))
            .collect();

        Self {
            fields,
            has_theme_toggle: document.select(&SELECTORS.theme_toggle).next().is_some(),
            has_theme_toggle_icon: document
                .select(&SELECTORS.theme_toggle_icon)
                .next()
                .is_some(),
            has_background_pattern: document
                .select(&SELECTORS.background_pattern)
                .next()
                .is_some(),
            animated,
            social_buttons,
        }
    }

    /// Read and parse a card page from disk.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path).map_err(|source| PageError::Read {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = html.len(), "Loaded card page");

        Ok(Self::parse(&html))
    }

    fn text(&self, id: &str) -> Option<String> {
        self.fields.get(id).map(|field| field.text.clone())
    }

    /// Link target of a field; an element without `href` reads as empty.
    fn href(&self, id: &str) -> Option<String> {
        self.fields
            .get(id)
            .map(|field| field.href.clone().unwrap_or_default())
    }
}

fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().id() == Some(id))
}

fn style_target(element: &ElementRef<'_>, class: &str, index: usize) -> String {
    match element.value().id() {
        Some(id) => format!("#{}", id),
        None => format!(".{}[{}]", class, index),
    }
}

/// Longest delay a browser timer honors; anything longer fires at once.
const MAX_TIMER_DELAY_MS: u64 = i32::MAX as u64;

/// Leading integer of a `data-delay` attribute; anything unusable is 0.
fn parse_delay(value: Option<&str>) -> u64 {
    let value = match value {
        Some(value) => value.trim(),
        None => return 0,
    };

    if value.starts_with('-') {
        return 0;
    }

    let digits: String = value
        .trim_start_matches('+')
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<u64>() {
        Ok(delay) if delay <= MAX_TIMER_DELAY_MS => delay,
        _ => 0,
    }
}

impl PageFieldReader for HtmlPage {
    fn name(&self) -> Option<String> {
        self.text(field_ids::NAME)
    }

    fn role(&self) -> Option<String> {
        self.text(field_ids::ROLE)
    }

    fn department(&self) -> Option<String> {
        self.text(field_ids::DEPARTMENT)
    }

    fn office_phone(&self) -> Option<String> {
        self.text(field_ids::OFFICE_PHONE)
    }

    fn personal_phone(&self) -> Option<String> {
        self.text(field_ids::PERSONAL_PHONE)
    }

    fn email(&self) -> Option<String> {
        self.text(field_ids::EMAIL)
    }

    fn secondary_email(&self) -> Option<String> {
        self.text(field_ids::SECONDARY_EMAIL)
    }

    fn website(&self) -> Option<String> {
        self.href(field_ids::WEBSITE)
    }

    fn address(&self) -> Option<String> {
        self.text(field_ids::ADDRESS)
    }

    fn linkedin(&self) -> Option<String> {
        self.href(field_ids::LINKEDIN)
    }

    fn facebook(&self) -> Option<String> {
        self.href(field_ids::FACEBOOK)
    }
}

impl PageLayout for HtmlPage {
    fn has_theme_toggle(&self) -> bool {
        self.has_theme_toggle
    }

    fn has_theme_toggle_icon(&self) -> bool {
        self.has_theme_toggle_icon
    }

    fn has_background_pattern(&self) -> bool {
        self.has_background_pattern
    }

    fn animated_elements(&self) -> Vec<AnimatedElement> {
        self.animated.clone()
    }

    fn social_buttons(&self) -> Vec<String> {
        self.social_buttons.clone()
    }
}
