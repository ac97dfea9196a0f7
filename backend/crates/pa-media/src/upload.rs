use crate::{MediaError, Result};

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// A profile image upload spooled to disk.
///
/// The backing temporary file is deleted when the value is dropped, so
/// every exit path of a request cleans up after itself.
#[derive(Debug)]
pub struct UploadedImage {
    file: NamedTempFile,
    file_name: Option<String>,
    content_type: Option<String>,
    size: u64,
}

impl UploadedImage {
    pub fn from_bytes(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: &[u8],
    ) -> Result<Self> {
        let mut file = NamedTempFile::new()
            .map_err(|e| MediaError::io(std::env::temp_dir(), e))?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| MediaError::io(file.path(), e))?;

        Ok(Self {
            file,
            file_name,
            content_type,
            size: bytes.len() as u64,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Up to `limit` leading bytes, used for format sniffing
    pub fn head(&self, limit: usize) -> Result<Vec<u8>> {
        let mut head = Vec::with_capacity(limit);
        File::open(self.path())
            .and_then(|f| f.take(limit as u64).read_to_end(&mut head))
            .map_err(|e| MediaError::io(self.path(), e))?;
        Ok(head)
    }
}
