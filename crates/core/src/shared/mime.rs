use std::path::Path;

/// Fallback when the extension is unrecognized or absent.
pub const DEFAULT_MIME_TYPE: &str = "audio/ogg";

const SUPPORTED_EXTENSIONS: &[(&str, &str)] = &[
    ("ogg", "audio/ogg"),
    ("opus", "audio/ogg"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("m4a", "audio/mp4"),
];

/// Infer the audio MIME type from a file's extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_lowercase(),
        None => return DEFAULT_MIME_TYPE,
    };
    SUPPORTED_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME_TYPE)
}
