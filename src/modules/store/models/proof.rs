// Proof-of-purchase upload
//
// The file handle the host hands over when the employee picks a proof.
// Only jpg, jpeg, png and gif images are accepted as proof assets.

/// Media types accepted for proof uploads
pub const ALLOWED_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Infer a media type from a file name's extension
pub fn media_type_for_extension(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit('.').next()?.to_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// A file selected as proof of purchase
#[derive(Debug, Clone, PartialEq)]
pub struct ProofFile {
    pub file_name: String,
    pub media_type: String,
    pub content: Vec<u8>,
}

impl ProofFile {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            content,
        }
    }

    /// Build from a name and bytes alone, inferring the media type from
    /// the file extension. Unknown extensions produce a type that proof
    /// validation refuses.
    pub fn from_bytes(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let media_type = media_type_for_extension(&file_name)
            .unwrap_or("application/octet-stream")
            .to_string();
        Self {
            file_name,
            media_type,
            content,
        }
    }

    /// Whether the media type is an accepted proof format
    pub fn has_allowed_media_type(&self) -> bool {
        ALLOWED_MEDIA_TYPES.contains(&self.media_type.as_str())
    }
}
