//! Small helpers shared by the CSS value parsers and printers.

/// Extract the custom property name from `var(--name)`.
pub(crate) fn parse_var(s: &str) -> Option<&str> {
    let name = s
        .strip_prefix("var")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?
        .trim()
        .strip_prefix("--")?;
    if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == ',') {
        return None;
    }
    Some(name)
}

/// Format a pixel length. Zero prints without a unit, as shadows are written.
pub(crate) fn bare_px(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}
