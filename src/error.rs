use thiserror::Error;

use crate::purely_hr::fields::Field;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    #[error("Invalid date in {field}: {value:?}")]
    InvalidDate { field: Field, value: String },

    #[error("Invalid time in {field}: {value:?}")]
    InvalidTime { field: Field, value: String },

    #[error("Export exceeds the {limit} byte limit")]
    InputTooLarge { limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntegrationError {
    pub fn invalid_xml(message: impl Into<String>) -> Self {
        IntegrationError::InvalidXml(message.into())
    }

    pub fn is_invalid_xml(&self) -> bool {
        matches!(self, IntegrationError::InvalidXml(_))
    }
}

impl From<roxmltree::Error> for IntegrationError {
    fn from(error: roxmltree::Error) -> Self {
        log::warn!("XML parse error: {}", error);
        IntegrationError::InvalidXml(error.to_string())
    }
}
