//! Parsing of the service's error payloads.

use serde::Deserialize;

/// Error body returned by the service alongside a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extract the human-readable `detail` string from an error body.
///
/// Returns `None` for non-JSON bodies, a missing field, a non-string
/// `detail` (for example a list of field errors) or a blank string.
pub fn parse_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_string() {
        assert_eq!(
            parse_detail(br#"{"detail":"quota exceeded"}"#),
            Some("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_parse_detail_missing_or_unusable() {
        assert_eq!(parse_detail(b""), None);
        assert_eq!(parse_detail(b"<html>502 Bad Gateway</html>"), None);
        assert_eq!(parse_detail(br#"{"error":"nope"}"#), None);
        assert_eq!(parse_detail(br#"{"detail":"   "}"#), None);
        assert_eq!(parse_detail(br#"{"detail":null}"#), None);
        assert_eq!(
            parse_detail(br#"{"detail":[{"loc":["body","file"],"msg":"field required"}]}"#),
            None
        );
    }
}
