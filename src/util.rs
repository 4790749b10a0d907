//! Small string helpers shared across the engine.

/// Join the non-empty class names with single spaces, in order.
pub fn class_names<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut out = String::new();
    for class in classes.into_iter().flatten() {
        let class = class.trim();
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Strip every character that is not safe in a CSS class name
/// (anything outside `[a-zA-Z0-9_-]`).
pub fn sanitize_class_name(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Site tag for a source file path: the file stem, e.g. `outline_button`
/// for `src/components/outline_button.rs`.
pub fn tag_from_path(path: &str) -> Option<&str> {
    let file = path.rsplit(['/', '\\']).next()?;
    let stem = match file.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file,
    };
    (!stem.is_empty()).then_some(stem)
}
