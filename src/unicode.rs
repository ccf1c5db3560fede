use idna::uts46::{AsciiDenyList, Hyphens, Uts46};
use url::Url;

use crate::error::FirelinkError;

// Convert the host of a link from its ASCII-compatible (IDNA) form to
// Unicode for display.
//
// The host is substituted back into the original string textually, not by
// reconstructing the URI, so the path and query are preserved byte for
// byte.  Decoding runs with registration-grade strictness: STD3 character
// rules and hyphen placement checks.
pub fn host_to_unicode(link: &str) -> Result<String, FirelinkError> {
    let parsed = Url::parse(link).map_err(|_| FirelinkError::Encoding(link.to_string()))?;
    let Some(host) = parsed.host_str() else {
        return Err(FirelinkError::Encoding(link.to_string()));
    };

    let (unicode, result) =
        Uts46::new().to_unicode(host.as_bytes(), AsciiDenyList::STD3, Hyphens::Check);
    if result.is_err() {
        return Err(FirelinkError::Encoding(host.to_string()));
    }

    Ok(link.replace(host, &unicode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_host_unchanged() {
        let link = "https://abc.page.link/xyz";
        let result = host_to_unicode(link).expect("converted");
        assert_eq!(result, link);
    }

    #[test]
    fn test_idna_host_decoded() {
        let result = host_to_unicode("https://xn--bcher-kva.example/path").expect("converted");
        assert_eq!(result, "https://bücher.example/path");
    }

    #[test]
    fn test_path_and_query_preserved() {
        let result =
            host_to_unicode("https://xn--mnchen-3ya.example/a/b?q=xn--test&x=%20y").expect("converted");
        assert_eq!(result, "https://münchen.example/a/b?q=xn--test&x=%20y");
    }

    #[test]
    fn test_round_trip() {
        // Encoding a Unicode label then decoding it returns the original
        let ascii = Uts46::new()
            .to_ascii(
                "bücher.example".as_bytes(),
                AsciiDenyList::STD3,
                Hyphens::Check,
                idna::uts46::DnsLength::Verify,
            )
            .expect("encoded");
        let link = format!("https://{}/path", ascii);
        let decoded = host_to_unicode(&link).expect("converted");
        assert_eq!(decoded, "https://bücher.example/path");
    }

    #[test]
    fn test_misplaced_hyphen_rejected() {
        assert!(matches!(
            host_to_unicode("https://-foo.example.com/"),
            Err(FirelinkError::Encoding(_))
        ));
    }

    #[test]
    fn test_std3_violation_rejected() {
        assert!(matches!(
            host_to_unicode("https://foo_bar.example.com/"),
            Err(FirelinkError::Encoding(_))
        ));
    }
}
