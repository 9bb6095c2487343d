//! SMS gateway clients
//!
//! Production delivery goes through the Cloopen (容联云) template-SMS
//! REST API; development and tests use the console-logging mock.

pub mod cloopen;
pub mod mock_sms;
pub mod provider;

#[cfg(test)]
mod tests;

pub use cloopen::{CloopenConfig, CloopenSmsService};
pub use mock_sms::MockSmsService;
pub use provider::SmsProvider;
