//! HTML escaping for untrusted text.

/// Escape the five HTML-significant characters.
///
/// `&` is replaced first so the entities produced by the later replacements
/// are not escaped a second time.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape `text`, then turn every newline into a `<br>` tag.
#[must_use]
pub fn escape_multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}
