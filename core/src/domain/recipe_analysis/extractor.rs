use serde_json::Value;
use tracing::debug;

use super::entities::GenerationError;

const SNIPPET_CHARS: usize = 500;

/// Decodes the JSON object embedded in raw generation output.
///
/// Two attempts only: a strict parse of the `{ ... }` slice, then a second
/// parse after collapsing every whitespace run to a single space. That covers
/// prose or markdown fences around the object and raw newlines inside string
/// literals. Anything else is a [`GenerationError::Decode`].
pub fn extract_json_object(raw: &str) -> Result<Value, GenerationError> {
    let content = json_slice(raw.trim());

    let first_error = match serde_json::from_str::<Value>(content) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    debug!("strict decode failed ({first_error}), retrying with collapsed whitespace");

    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    serde_json::from_str::<Value>(&collapsed).map_err(|_| GenerationError::Decode {
        message: first_error.to_string(),
        snippet: snippet(content),
    })
}

fn json_slice(content: &str) -> &str {
    if content.starts_with('{') {
        return content;
    }

    if let Some(start) = content.find('{')
        && let Some(end) = content.rfind('}')
        && end > start
    {
        return &content[start..=end];
    }

    content
}

fn snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_CHARS) {
        Some((idx, _)) => format!("{}...", &content[..idx]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_plain_object() {
        let value = extract_json_object(r#"{"recipes": []}"#).unwrap();
        assert_eq!(value, json!({ "recipes": [] }));
    }

    #[test]
    fn strips_surrounding_prose() {
        let raw = r#"noise {"recipes":[{"name":"Soup"}]} trailing"#;
        let value = extract_json_object(raw).unwrap();
        assert_eq!(value["recipes"][0]["name"], "Soup");
    }

    #[test]
    fn strips_markdown_fences() {
        let raw = "Here you go:\n```json\n{\"recipes\": [1, 2]}\n```\nEnjoy!";
        let value = extract_json_object(raw).unwrap();
        assert_eq!(value["recipes"], json!([1, 2]));
    }

    #[test]
    fn repairs_raw_newlines_inside_strings() {
        let raw = "{\"recipes\": [{\"name\": \"Slow\n\tCooked Beans\"}]}";
        let value = extract_json_object(raw).unwrap();
        assert_eq!(value["recipes"][0]["name"], "Slow Cooked Beans");
    }

    #[test]
    fn reports_decode_error_with_snippet() {
        let raw = format!("{{\"recipes\": [{}", "x".repeat(600));
        let err = extract_json_object(&raw).unwrap_err();

        match err {
            GenerationError::Decode { message, snippet } => {
                assert!(!message.is_empty());
                assert!(snippet.ends_with("..."));
                assert_eq!(snippet.chars().count(), SNIPPET_CHARS + 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn text_without_braces_fails() {
        assert!(matches!(
            extract_json_object("Sorry, I cannot help with that."),
            Err(GenerationError::Decode { .. })
        ));
    }

    #[test]
    fn is_idempotent() {
        let good = r#"prefix {"recipes": []} suffix"#;
        assert_eq!(extract_json_object(good), extract_json_object(good));

        let bad = "{ not json";
        assert_eq!(extract_json_object(bad), extract_json_object(bad));
    }
}
