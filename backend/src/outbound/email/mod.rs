//! Transactional email adapters for contact notifications.

mod resend;

pub use resend::{RESEND_API_URL, ResendConfig, ResendNotifier};
