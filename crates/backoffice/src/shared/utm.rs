use contracts::shared::utm::UtmParams;
use thiserror::Error;
use url::Url;

/// Ошибки построения ссылки с UTM-метками
#[derive(Debug, Error)]
pub enum UtmError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Appends UTM parameters to a link.
///
/// A link without a scheme gets `https://`. Without any non-empty parameter the
/// normalized link is returned as is. UTM keys already present in the link are
/// replaced, other query parameters are kept.
pub fn build_tracked_url(base_url: &str, params: &UtmParams) -> Result<String, UtmError> {
    let normalized = normalize_scheme(base_url.trim());
    let mut url = Url::parse(&normalized).map_err(|source| UtmError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;

    let pairs = params.pairs();
    if pairs.is_empty() {
        return Ok(normalized);
    }

    let overridden = |key: &str| pairs.iter().any(|(name, _)| *name == key);
    if url.query_pairs().any(|(key, _)| overridden(&*key)) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !overridden(&**key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    url.query_pairs_mut().extend_pairs(pairs);
    Ok(url.to_string())
}

/// Same as [`build_tracked_url`], but a broken link is logged and dropped
pub fn tracked_link_or_omit(base_url: &str, params: &UtmParams) -> Option<String> {
    match build_tracked_url(base_url, params) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Link omitted: {}", e);
            None
        }
    }
}

fn normalize_scheme(url: &str) -> String {
    if has_scheme(url) {
        url.to_string()
    } else {
        // protocol-relative "//host/path"
        format!("https://{}", url.strip_prefix("//").unwrap_or(url))
    }
}

/// `scheme://` with an RFC 3986 scheme name
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_is_added() {
        let params = UtmParams::new().source("email");
        assert_eq!(
            build_tracked_url("example.com/offer", &params).unwrap(),
            "https://example.com/offer?utm_source=email"
        );
    }

    #[test]
    fn test_no_params_no_question_mark() {
        assert_eq!(
            build_tracked_url("https://x.com", &UtmParams::new()).unwrap(),
            "https://x.com"
        );
        let blank = UtmParams::new().source("").medium("  ");
        assert_eq!(
            build_tracked_url("shop.example.com/cart", &blank).unwrap(),
            "https://shop.example.com/cart"
        );
    }

    #[test]
    fn test_invalid_url() {
        let params = UtmParams::new().source("email");
        let err = build_tracked_url("not a url", &params).unwrap_err();
        assert!(matches!(err, UtmError::InvalidUrl { ref url, .. } if url == "not a url"));
        assert_eq!(tracked_link_or_omit("not a url", &params), None);
    }

    #[test]
    fn test_all_params_in_order_and_encoded() {
        let params = UtmParams::new()
            .content("hero banner")
            .term("mugs")
            .campaign("birthday-2024")
            .medium("email")
            .source("newsletter");
        assert_eq!(
            build_tracked_url("http://shop.example.com/promo", &params).unwrap(),
            "http://shop.example.com/promo?utm_source=newsletter&utm_medium=email\
             &utm_campaign=birthday-2024&utm_term=mugs&utm_content=hero+banner"
        );
    }

    #[test]
    fn test_existing_query_is_kept() {
        let params = UtmParams::new().source("email").medium("");
        assert_eq!(
            build_tracked_url("https://shop.example.com/cart?id=42#summary", &params).unwrap(),
            "https://shop.example.com/cart?id=42&utm_source=email#summary"
        );
    }

    #[test]
    fn test_protocol_relative_link() {
        assert_eq!(
            build_tracked_url("//cdn.example.com/a", &UtmParams::new()).unwrap(),
            "https://cdn.example.com/a"
        );
        assert_eq!(
            build_tracked_url("//cdn.example.com/a", &UtmParams::new().source("email")).unwrap(),
            "https://cdn.example.com/a?utm_source=email"
        );
    }

    #[test]
    fn test_existing_utm_keys_are_replaced() {
        let params = UtmParams::new().source("email").campaign("spring");
        assert_eq!(
            build_tracked_url("example.com/offer?utm_source=old&id=7&utm_medium=sms", &params)
                .unwrap(),
            "https://example.com/offer?id=7&utm_medium=sms&utm_source=email&utm_campaign=spring"
        );
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://x.com"));
        assert!(has_scheme("svn+ssh://host/repo"));
        assert!(!has_scheme("example.com/offer"));
        assert!(!has_scheme("localhost:8080/path"));
        assert!(!has_scheme("1http://x.com"));
    }
}
