//! zip-backed archive reader
//!
//! ODT documents (and the other OpenDocument siblings) are ZIP containers;
//! the importer only ever needs "give me the text of this named entry".
//! The `zip` crate does the container handling.

use crate::capability::{ArchiveReader, CapabilityHandle, CapabilitySource};
use crate::error::ConvertError;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// Source that provides the zip-crate archive reader.
pub struct ZipArchiveSource;

impl CapabilitySource for ZipArchiveSource {
    fn name(&self) -> &str {
        "zip"
    }

    fn load(&self) -> Result<CapabilityHandle, ConvertError> {
        Ok(CapabilityHandle::ArchiveReader(Box::new(ZipReader)))
    }
}

/// Archive reader over in-memory ZIP bytes.
pub struct ZipReader;

impl ArchiveReader for ZipReader {
    fn read_entry(&self, archive: &[u8], entry: &str) -> Result<Option<String>, ConvertError> {
        let mut archive = ZipArchive::new(Cursor::new(archive))
            .map_err(|e| ConvertError::ArchiveError(e.to_string()))?;
        let mut file = match archive.by_name(entry) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(ConvertError::ArchiveError(e.to_string())),
        };
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|e| ConvertError::ArchiveError(e.to_string()))?;
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }
}
