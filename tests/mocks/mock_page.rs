use ecard::page::{AnimatedElement, PageFieldReader, PageLayout};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock card page for testing.
///
/// Holds field values by name and a configurable layout, and tracks how
/// often each field is read.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPage {
    fields: Arc<Mutex<HashMap<String, String>>>,
    theme_toggle: bool,
    background_pattern: bool,
    animated: Vec<AnimatedElement>,
    social_buttons: Vec<String>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockPage {
    /// Create an empty page with a theme toggle and background pattern.
    pub fn new() -> Self {
        Self {
            fields: Arc::new(Mutex::new(HashMap::new())),
            theme_toggle: true,
            background_pattern: true,
            animated: Vec::new(),
            social_buttons: Vec::new(),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The John Smith card used across tests.
    pub fn john_smith() -> Self {
        Self::new()
            .with_field("name", "John Smith")
            .with_field("role", "Sales Director at ABC Corp")
            .with_field("department", "Regional Lead at ABC West")
            .with_field("office_phone", "Office: +1 (555) 010-0000")
            .with_field("personal_phone", "Personal: +1 (555) 010-0199")
            .with_field("email", "john@abc.example")
            .with_field("website", "https://abc.example")
            .with_field("address", "1 Main St, Springfield")
            .with_field("linkedin", "https://linkedin.com/in/jsmith")
            .with_field("facebook", "")
    }

    /// Set a field by its reader method name.
    pub fn with_field(self, field: &str, value: &str) -> Self {
        self.fields
            .lock()
            .unwrap()
            .insert(field.to_string(), value.to_string());
        self
    }

    pub fn without_theme_toggle(mut self) -> Self {
        self.theme_toggle = false;
        self
    }

    pub fn without_background_pattern(mut self) -> Self {
        self.background_pattern = false;
        self
    }

    pub fn with_animated(mut self, target: &str, delay_ms: u64) -> Self {
        self.animated.push(AnimatedElement {
            target: target.to_string(),
            delay_ms,
        });
        self
    }

    pub fn with_social_button(mut self, target: &str) -> Self {
        self.social_buttons.push(target.to_string());
        self
    }

    /// Get the number of times a field was read.
    pub fn get_call_count(&self, field: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(field).unwrap_or(&0)
    }

    fn read(&self, field: &str) -> Option<String> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(field.to_string()).or_insert(0) += 1;
        self.fields.lock().unwrap().get(field).cloned()
    }
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFieldReader for MockPage {
    fn name(&self) -> Option<String> {
        self.read("name")
    }

    fn role(&self) -> Option<String> {
        self.read("role")
    }

    fn department(&self) -> Option<String> {
        self.read("department")
    }

    fn office_phone(&self) -> Option<String> {
        self.read("office_phone")
    }

    fn personal_phone(&self) -> Option<String> {
        self.read("personal_phone")
    }

    fn email(&self) -> Option<String> {
        self.read("email")
    }

    fn secondary_email(&self) -> Option<String> {
        self.read("secondary_email")
    }

    fn website(&self) -> Option<String> {
        self.read("website")
    }

    fn address(&self) -> Option<String> {
        self.read("address")
    }

    fn linkedin(&self) -> Option<String> {
        self.read("linkedin")
    }

    fn facebook(&self) -> Option<String> {
        self.read("facebook")
    }
}

impl PageLayout for MockPage {
    fn has_theme_toggle(&self) -> bool {
        self.theme_toggle
    }

    fn has_theme_toggle_icon(&self) -> bool {
        self.theme_toggle
    }

    fn has_background_pattern(&self) -> bool {
        self.background_pattern
    }

    fn animated_elements(&self) -> Vec<AnimatedElement> {
        self.animated.clone()
    }

    fn social_buttons(&self) -> Vec<String> {
        self.social_buttons.clone()
    }
}
