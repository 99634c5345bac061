use ecard::models::NotificationKind;
use ecard::Notifier;
use std::sync::{Arc, Mutex};

/// Notifier that only records what it was asked to show.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    shown: Arc<Mutex<Vec<(String, NotificationKind)>>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<(String, NotificationKind)> {
        self.shown.lock().unwrap().clone()
    }

    pub fn count_of(&self, kind: NotificationKind) -> usize {
        self.shown().iter().filter(|(_, k)| *k == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, kind: NotificationKind) -> u64 {
        let mut shown = self.shown.lock().unwrap();
        shown.push((message.to_string(), kind));
        shown.len() as u64
    }
}
