//! Plant identification results.
//!
//! Types for the upload endpoint's JSON responses and the checks a
//! client runs before uploading. Transport is left to the host.

pub mod result;
pub mod upload;

pub use result::{parse_response, IdentificationResult, DEFAULT_FAILURE, NO_INFORMATION};
pub use upload::{allowed_file, check_upload, ALLOWED_EXTENSIONS, CAPTURE_FILE_NAME, MAX_UPLOAD_BYTES};
