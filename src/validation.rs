//! Input checks for the authoring panel's form fields.
//!
//! Message content itself is accepted unconditionally — any text, any number
//! of buttons, any file size string renders fine. Only the handful of inputs
//! below can actually put the studio in a bad place.

/// Validates a day-divider label before it reaches the transcript.
pub fn validate_divider_label(label: &str) -> Result<(), String> {
    if label.trim().is_empty() {
        return Err("Day divider label cannot be empty".to_string());
    }
    Ok(())
}

/// Validates a path typed into one of the image loaders.
pub fn validate_image_path(path: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err("Image path cannot be empty".to_string());
    }

    let supported = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];
    let extension = std::path::Path::new(path.trim())
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension {
        Some(ext) if supported.contains(&ext.as_str()) => Ok(()),
        Some(ext) => Err(format!("Unsupported image format: .{}", ext)),
        None => Err("Image path has no file extension".to_string()),
    }
}

/// Sanitizes a single-line field (header name, last-seen line, divider
/// label) by dropping control characters that would break the layout.
pub fn sanitize_single_line(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '\r' && c != '\n' && c != '\0')
        .collect()
}
