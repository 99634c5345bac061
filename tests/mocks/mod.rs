#![allow(unused_imports)]

mod mock_page;
mod mock_page_host;
mod recording_notifier;

pub use mock_page::MockPage;
pub use mock_page_host::{HostCall, MockPageHost};
pub use recording_notifier::RecordingNotifier;
