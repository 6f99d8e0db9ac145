use crate::errors::ParseError;
use url::Url;

/// Ensures the requested URL carries a scheme, defaulting to https.
pub fn normalize_url(raw: &str) -> Result<String, ParseError> {
    let normalized = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    Url::parse(&normalized).map_err(|err| ParseError::InvalidUrl(raw.to_string(), err))?;

    Ok(normalized)
}
