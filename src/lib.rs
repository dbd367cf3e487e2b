pub mod config;
pub mod error;
pub mod purely_hr;

pub use config::Config;
pub use error::IntegrationError;
pub use purely_hr::{TimeOffRequest, TimeOffRequestsParser, XmlInput, parse};
