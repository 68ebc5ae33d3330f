use dioxus::prelude::*;
use tracing::{debug, warn};

// Keeps the page alive while the messaging app opens in its own tab or window.
const OPEN_TARGET: &str = "_blank";

/// Script that opens `url` as a new browsing context.
///
/// # Errors
/// Returns the JSON error if `url` cannot be encoded as a string literal.
pub(crate) fn open_script(url: &str) -> Result<String, serde_json::Error> {
    // JSON string literals are valid JavaScript string literals.
    let target = serde_json::to_string(url)?;
    Ok(format!("window.open({target}, \"{OPEN_TARGET}\", \"noopener\"); return null;"))
}

/// Opens `url` as a new browsing context (tab, window, or the system handler on desktop).
pub(crate) fn open_in_new_context(url: &str) {
    let script = match open_script(url) {
        Ok(script) => script,
        Err(e) => {
            warn!("Cannot encode link for navigation: {e}");
            return;
        },
    };

    spawn(async move {
        match document::eval(&script).await {
            Ok(_) => debug!("Deep link opened"),
            Err(e) => warn!("Failed to open deep link: {e}"),
        }
    });
}

/// Reports `window.scrollY` on every scroll event; read with `recv::<f64>()`.
pub(crate) const SCROLL_REPORTER: &str = r"
const report = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', report, { passive: true });
report();
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_opens_the_link_in_a_new_context() {
        let script = open_script("https://wa.me/556392154511?text=Ol%C3%A1").unwrap();
        assert_eq!(
            script,
            "window.open(\"https://wa.me/556392154511?text=Ol%C3%A1\", \"_blank\", \"noopener\"); return null;"
        );
    }

    #[test]
    fn quotes_and_backslashes_cannot_break_out_of_the_literal() {
        let script = open_script("https://x.test/\"); alert(1); (\"\\").unwrap();
        assert!(script.starts_with(r#"window.open("https://x.test/\"); alert(1); (\"\\", "_blank""#));
        assert_eq!(script.matches("window.open(").count(), 1);
    }
}
