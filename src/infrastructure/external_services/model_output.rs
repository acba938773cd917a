use serde::de::DeserializeOwned;

/// Strips a Markdown code fence from a model reply. Handles a leading
/// ```` ```json ```` or bare ```` ``` ```` fence, a fence embedded after
/// prose, and a missing closing fence.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else if let Some(start) = trimmed.find("```json") {
        &trimmed[start + "```json".len()..]
    } else if let Some(start) = trimmed.find("```") {
        &trimmed[start + 3..]
    } else {
        trimmed
    };

    let body = match body.find("```") {
        Some(end) => &body[..end],
        None => body,
    };

    body.trim()
}

/// Deserializes a JSON object out of a model reply. Tries the fence-stripped
/// text first; if that fails and the text still contains a brace pair, retries
/// on the outermost `{...}` span. Models sometimes wrap the object in prose.
pub fn extract_json<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    let candidate = strip_code_fences(raw);

    match serde_json::from_str(candidate) {
        Ok(value) => Ok(value),
        Err(err) => {
            if let (Some(start), Some(end)) = (candidate.find('{'), candidate.rfind('}')) {
                if start < end {
                    return serde_json::from_str(&candidate[start..=end]);
                }
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        tone: String,
        confidence: f64,
    }

    #[test]
    fn test_strip_plain_text() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_bare_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fence_after_prose() {
        let raw = "Here is the JSON you asked for:\n```json\n{\"a\": 1}\n```\nLet me know!";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_unclosed_fence() {
        let raw = "```json\n{\"a\": 1}";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_plain_object() {
        let parsed: Payload =
            extract_json("{\"tone\": \"positive\", \"confidence\": 0.9}").unwrap();
        assert_eq!(
            parsed,
            Payload {
                tone: "positive".to_string(),
                confidence: 0.9
            }
        );
    }

    #[test]
    fn test_extract_fenced_object() {
        let raw = "```json\n{\"tone\": \"negative\", \"confidence\": 0.4}\n```";
        let parsed: Payload = extract_json(raw).unwrap();
        assert_eq!(parsed.tone, "negative");
    }

    #[test]
    fn test_extract_object_from_prose() {
        let raw = "The sentiment is {\"tone\": \"neutral\", \"confidence\": 0.5} overall.";
        let parsed: Payload = extract_json(raw).unwrap();
        assert_eq!(parsed.tone, "neutral");
        assert_eq!(parsed.confidence, 0.5);
    }

    #[test]
    fn test_extract_rejects_malformed() {
        let result: Result<Payload, _> = extract_json("not json at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_rejects_truncated_object() {
        let result: Result<Payload, _> = extract_json("{\"tone\": \"positive\",");
        assert!(result.is_err());
    }
}
