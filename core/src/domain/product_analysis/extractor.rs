use std::sync::LazyLock;

use regex::Regex;

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("fenced json pattern is valid")
});

/// Best-effort location of a JSON object inside free-form model output.
///
/// Prefers the content of a ```json fenced block, then the span from the
/// first `{` to the last `}`, and otherwise returns the input unchanged.
/// The result is not guaranteed to parse.
pub fn extract_json(text: &str) -> &str {
    if let Some(inner) = FENCED_JSON
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|inner| !inner.is_empty())
    {
        return inner;
    }

    if let (Some(first), Some(last)) = (text.find('{'), text.rfind('}'))
        && last > first
    {
        return &text[first..=last];
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_fenced_block() {
        let text = "Here is the analysis:\n```json\n{\"productName\": \"Nutella\"}\n```\nEnjoy!";
        assert_eq!(extract_json(text), "{\"productName\": \"Nutella\"}");
    }

    #[test]
    fn test_fenced_block_wins_over_surrounding_braces() {
        let text = "{ignored} ```json {\"a\": 1} ``` {also ignored}";
        assert_eq!(extract_json(text), "{\"a\": 1}");
    }

    #[test]
    fn test_extracts_brace_span() {
        let text = "Sure! {\"score\": 40, \"nested\": {\"x\": 1}} Hope this helps.";
        assert_eq!(
            extract_json(text),
            "{\"score\": 40, \"nested\": {\"x\": 1}}"
        );
    }

    #[test]
    fn test_returns_input_without_braces() {
        let text = "I could not find this product.";
        assert_eq!(extract_json(text), text);
    }

    #[test]
    fn test_returns_input_when_braces_are_reversed() {
        let text = "} nothing here {";
        assert_eq!(extract_json(text), text);
    }

    #[test]
    fn test_is_idempotent_on_clean_json() {
        let json = r#"{"productName":"Oats","score":90}"#;
        assert_eq!(extract_json(json), json);
        assert_eq!(extract_json(extract_json(json)), json);
    }

    #[test]
    fn test_empty_fence_falls_back_to_braces() {
        let text = "```json\n```\n{\"a\": 1}";
        assert_eq!(extract_json(text), "{\"a\": 1}");
    }
}
