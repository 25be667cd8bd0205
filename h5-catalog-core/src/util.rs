/// Extensions (lowercase, without the dot) accepted as thumbnails.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Lowercased extension of a file name, if it has one.
///
/// Mirrors `Path::extension`: a leading dot does not start an extension,
/// so `.png` has none.
pub fn extension_lower(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check whether a file name has one of the [`IMAGE_EXTENSIONS`] (case-insensitive).
pub fn is_image_name(file_name: &str) -> bool {
    extension_lower(file_name)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Case-insensitive substring test against a list of lowercase keywords.
pub fn name_contains_any(file_name: &str, keywords: &[&str]) -> bool {
    let lower = file_name.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Join segments into an absolute public URL path (`/a/b/c`).
///
/// Empty segments and stray slashes at segment edges are dropped.
pub fn public_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for seg in segments {
        let seg = seg.as_ref().trim_matches('/');
        if seg.is_empty() {
            continue;
        }
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
