use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::input::XmlInput;
use crate::error::IntegrationError;

/// Read an export file as raw bytes, refusing anything over `limit` bytes.
pub fn load_export_file(
    path: impl AsRef<Path>,
    limit: usize,
) -> Result<XmlInput, IntegrationError> {
    let path = path.as_ref();
    log::debug!("Loading time off export from {}", path.display());

    let file = File::open(path)?;
    load_export(file, limit)
}

/// Read an export from any reader (stdin, an HTTP body) as raw bytes.
pub fn load_export(reader: impl Read, limit: usize) -> Result<XmlInput, IntegrationError> {
    let mut bytes = Vec::new();
    // One byte past the limit is enough to tell it was exceeded
    reader.take(limit as u64 + 1).read_to_end(&mut bytes)?;

    if bytes.len() > limit {
        log::warn!("Time off export exceeds the {} byte limit", limit);
        return Err(IntegrationError::InputTooLarge { limit });
    }

    Ok(XmlInput::RawBytes(bytes))
}
