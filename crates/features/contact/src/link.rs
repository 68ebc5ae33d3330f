use crate::error::ContactError;
use mfx_domain::config::MessagingConfig;
use url::Url;

/// Query parameter carrying the pre-filled message.
pub const TEXT_PARAM: &str = "text";

/// Builds `<base_url>/<recipient>?text=<percent-encoded text>`.
///
/// The text is percent-encoded as a whole (spaces become `%20`, line breaks `%0A`), so the
/// messaging app receives it verbatim.
///
/// # Errors
/// Returns [`ContactError::Endpoint`] if the base URL does not parse, is not `http(s)`, or the
/// recipient is not a non-empty string of digits.
pub fn build_deep_link(messaging: &MessagingConfig, text: &str) -> Result<String, ContactError> {
    let recipient = messaging.recipient.trim();
    if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
        return Err(ContactError::Endpoint {
            message: format!("recipient must be digits only, got '{recipient}'"),
        });
    }

    let mut url = Url::parse(messaging.base_url.trim()).map_err(|e| ContactError::Endpoint {
        message: format!("cannot parse base url '{}': {e}", messaging.base_url),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ContactError::Endpoint {
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    url.path_segments_mut()
        .map_err(|()| ContactError::Endpoint {
            message: format!("base url '{}' cannot carry a path", messaging.base_url),
        })?
        .pop_if_empty()
        .push(recipient);

    url.set_query(Some(&format!("{TEXT_PARAM}={}", urlencoding::encode(text))));

    Ok(url.into())
}
