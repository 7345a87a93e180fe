// Export components
pub mod outlook;
pub mod reminder;

pub use outlook::OutlookClient;
pub use reminder::{parse_subject, ReminderOutput};
