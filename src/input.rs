use url::Url;

use crate::{clipboard, error::FirelinkError};

// Resolve the long link to shorten: an explicit flag value is used
// verbatim; otherwise the clipboard is read and its contents trimmed.
pub fn long_link(flag: Option<&str>) -> Result<String, FirelinkError> {
    let link = match flag {
        Some(link) => link.to_string(),
        None => clipboard::read()?.trim().to_string(),
    };
    validate(&link)?;
    Ok(link)
}

// A long link must be an absolute URI with both a scheme and a host.
fn validate(link: &str) -> Result<(), FirelinkError> {
    let parsed = Url::parse(link)?;
    if !parsed.has_host() {
        return Err(FirelinkError::Validation(url::ParseError::EmptyHost));
    }
    Ok(())
}
