//! Document input at the transport boundary.

use std::fs;
use std::path::Path;

use crate::errors::InputError;

/// Read a UTF-8 document from disk.
///
/// Fails on I/O or encoding errors; no partial document is produced.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, InputError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_utf8_file() {
        let mut path = std::env::temp_dir();
        path.push("lexiscan_test_read_document.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all("I am running.".as_bytes()).unwrap();

        let document = read_document(&path).unwrap();
        assert_eq!(document, "I am running.");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_document("/nonexistent/lexiscan-doc.txt").unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let mut path = std::env::temp_dir();
        path.push("lexiscan_test_invalid_utf8.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xff, 0xfe, 0x80]).unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, InputError::Utf8(_)));
        let _ = fs::remove_file(&path);
    }
}
