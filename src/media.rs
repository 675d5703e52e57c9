//! Media loading: file bytes to data URIs, remote URL vetting.
//!
//! Uploaded files never leave the session: bytes are sniffed for an image
//! type and embedded as a base64 data URI. Remote sources are accepted only
//! when they use a scheme the host surface can actually fetch.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// An uploaded file: its name and raw bytes.
#[derive(Debug, Clone)]
pub struct FileData {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileData {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Sniff an image MIME type from magic bytes. Unknown content falls back to
/// the generic binary type; the data URI still renders if the surface can
/// decode it.
pub fn detect_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, ..] => "image/png",
        [0xff, 0xd8, 0xff, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Encode bytes as a `data:` URI with a sniffed MIME type.
pub fn data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", detect_mime(bytes), STANDARD.encode(bytes))
}

/// Whether a remote image source uses an acceptable scheme.
///
/// `http(s)` and inline `data:` URIs pass; everything else (ftp, file,
/// relative paths) is refused.
pub fn accepts_remote(url: &str) -> bool {
    url.starts_with("http") || url.starts_with("data:")
}

/// Read an uploaded file into a data URI.
///
/// Async to model the host's file reader: completion is an event, not a
/// return value, and two overlapping reads resolve in completion order
/// (last write wins on the target).
pub async fn read_as_data_uri(file: &FileData) -> String {
    tokio::task::yield_now().await;
    data_uri(&file.bytes)
}
