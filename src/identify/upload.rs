//! Client-side checks before an image is sent for identification.

use std::path::Path;

use crate::core::IdentifyError;

/// Extensions the endpoint accepts.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Largest upload the endpoint accepts (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Name given to frames captured from a camera.
pub const CAPTURE_FILE_NAME: &str = "capture.jpg";

/// Does `file_name` have an accepted image extension?
#[must_use]
pub fn allowed_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// Validate an upload by name and size.
pub fn check_upload(file_name: &str, size: u64) -> Result<(), IdentifyError> {
    if !allowed_file(file_name) {
        return Err(IdentifyError::UnsupportedFileType(file_name.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(IdentifyError::TooLarge {
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_file() {
        assert!(allowed_file("leaf.PNG"));
        assert!(allowed_file("a.b.jpeg"));
        assert!(allowed_file(CAPTURE_FILE_NAME));
        assert!(!allowed_file("leaf.webp"));
        assert!(!allowed_file("jpg"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn test_check_upload() {
        assert!(check_upload("leaf.gif", MAX_UPLOAD_BYTES).is_ok());
        assert!(matches!(
            check_upload("leaf.gif", MAX_UPLOAD_BYTES + 1),
            Err(IdentifyError::TooLarge { .. })
        ));
        assert!(matches!(
            check_upload("notes.txt", 10),
            Err(IdentifyError::UnsupportedFileType(name)) if name == "notes.txt"
        ));
    }
}
