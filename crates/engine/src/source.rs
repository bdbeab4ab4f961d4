use crate::error::{Result, ScanError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a source file fully and decode it as UTF-8.
///
/// The file handle is scoped to this call and closed before decoding.
///
/// # Errors
///
/// Returns [`ScanError::NotFound`] if the path does not exist,
/// [`ScanError::Decode`] if the bytes are not valid UTF-8, and
/// [`ScanError::FileRead`] for any other I/O failure.
pub fn load(path: &Path) -> Result<String> {
    let bytes = {
        let file = File::open(path).map_err(|e| ScanError::from_io(path.to_path_buf(), e))?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| ScanError::from_io(path.to_path_buf(), e))?;
        buf
    };
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
