pub mod export;
pub mod fields;
pub mod input;
mod macros;
pub mod models;
pub mod parser;

pub use export::{load_export, load_export_file};
pub use fields::{Field, TimeOffStatus};
pub use input::XmlInput;
pub use models::{TimeOffRequest, TimeOffTime};
pub use parser::{TimeOffRequestsParser, parse};
