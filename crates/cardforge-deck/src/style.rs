//! Shared card styling.

/// Default dark-theme CSS applied to every deck model.
///
/// Individual deck families append their own rules after this block.
pub const DEFAULT_CSS: &str = "\
.card {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background-color: #1a1a1a;
    color: #ffffff;
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
    font-size: 16px;
    line-height: 1.5;
}
.question {
    font-size: 1.2em;
    margin-bottom: 20px;
}
.answer {
    font-size: 1.1em;
    color: #4CAF50;
}
img {
    max-width: 100%;
    height: auto;
    border-radius: 8px;
    margin: 10px 0;
}
.nightMode {
    background-color: #1a1a1a;
    color: #ffffff;
}
";

/// Returns the default CSS with deck-specific rules appended.
pub fn css_with_extras(extra: &str) -> String {
    if extra.is_empty() {
        DEFAULT_CSS.to_string()
    } else {
        format!("{}\n{}", DEFAULT_CSS, extra)
    }
}
