//! Query string lookup.

use axum::http::Uri;
use url::form_urlencoded;

/// Returns the first value of `name` in the query string of `uri`.
///
/// Values are decoded with `application/x-www-form-urlencoded` rules.
/// A parameter that is missing, has no `=`, or carries an empty value
/// yields `None`.
pub fn query_param(uri: &Uri, name: &str) -> Option<String> {
    let query = uri.query()?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_present_value() {
        assert_eq!(
            query_param(&uri("/path?token=abc123"), "token"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_missing_query_or_param() {
        assert_eq!(query_param(&uri("/path"), "token"), None);
        assert_eq!(query_param(&uri("/path?other=1"), "token"), None);
    }

    #[test]
    fn test_empty_value_is_absent() {
        assert_eq!(query_param(&uri("/?token="), "token"), None);
        assert_eq!(query_param(&uri("/?token"), "token"), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            query_param(&uri("/?lang=en-US&lang=fr-FR"), "lang"),
            Some("en-US".to_string())
        );
    }

    #[test]
    fn test_decoding() {
        assert_eq!(
            query_param(&uri("/?q=a%20b+c%2Bd"), "q"),
            Some("a b c+d".to_string())
        );
    }

    #[test]
    fn test_name_is_exact() {
        // Query names are case-sensitive, unlike header names.
        assert_eq!(query_param(&uri("/?Token=abc"), "token"), None);
    }
}
