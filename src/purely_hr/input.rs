use std::borrow::Cow;

/// XML text as it arrives from the vendor, resolved to UTF-8 once before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlInput {
    /// Bytes with no declared encoding (HTTP bodies, files read as binary).
    /// Reinterpreted as UTF-8 without transcoding; invalid sequences become U+FFFD.
    RawBytes(Vec<u8>),
    /// Text that has already been decoded.
    DecodedText(String),
}

impl XmlInput {
    pub fn as_utf8(&self) -> Cow<'_, str> {
        match self {
            XmlInput::RawBytes(bytes) => String::from_utf8_lossy(bytes),
            XmlInput::DecodedText(text) => Cow::Borrowed(text.as_str()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            XmlInput::RawBytes(bytes) => bytes.len(),
            XmlInput::DecodedText(text) => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for XmlInput {
    fn from(text: &str) -> Self {
        XmlInput::DecodedText(text.to_string())
    }
}

impl From<String> for XmlInput {
    fn from(text: String) -> Self {
        XmlInput::DecodedText(text)
    }
}

impl From<Vec<u8>> for XmlInput {
    fn from(bytes: Vec<u8>) -> Self {
        XmlInput::RawBytes(bytes)
    }
}

impl From<&[u8]> for XmlInput {
    fn from(bytes: &[u8]) -> Self {
        XmlInput::RawBytes(bytes.to_vec())
    }
}
