//! Best-effort parsing of LLM replies. The model is not guaranteed to
//! emit strict JSON: replies may be wrapped in code fences, carry prose
//! around the payload, or end with the TERMINATE sentinel.

use regex::Regex;

/// Sentinel the composing prompts ask the model to end every reply with.
pub const TERMINATE: &str = "TERMINATE";

/// Removes the termination sentinel and surrounding whitespace.
pub fn strip_terminate(text: &str) -> String {
    text.replace(TERMINATE, "").trim().to_string()
}

/// Strips a leading ```/```json fence and a trailing ``` fence if present.
pub fn strip_code_fences(text: &str) -> String {
    let opening = Regex::new(r"^```(?:json)?\s*").expect("static regex");
    let closing = Regex::new(r"\s*```$").expect("static regex");
    let trimmed = text.trim();
    let without_open = opening.replace(trimmed, "");
    closing.replace(&without_open, "").to_string()
}

/// Extracts the first JSON array from free-form model text. Tries the
/// whole (fence-stripped) reply first, then the outermost `[...]` span.
pub fn extract_json_array(text: &str) -> Option<serde_json::Value> {
    let cleaned = strip_code_fences(text);

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&cleaned) {
        if value.is_array() {
            return Some(value);
        }
    }

    let array_span = Regex::new(r"(?s)\[.*\]").expect("static regex");
    let candidate = array_span.find(&cleaned)?;
    serde_json::from_str::<serde_json::Value>(candidate.as_str())
        .ok()
        .filter(|v| v.is_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_terminate() {
        assert_eq!(strip_terminate("The answer. TERMINATE"), "The answer.");
        assert_eq!(strip_terminate("No sentinel here"), "No sentinel here");
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("[1]"), "[1]");
    }

    #[test]
    fn test_extract_array_from_clean_json() {
        let value = extract_json_array("[{\"name\": \"A v. B\"}]").unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_extract_array_from_prose() {
        let reply = "Here are the cases:\n[{\"name\": \"A v. B\", \"year\": \"1999\"}]\nTERMINATE";
        let value = extract_json_array(reply).unwrap();
        assert_eq!(value[0]["year"], "1999");
    }

    #[test]
    fn test_extract_array_from_fenced_reply() {
        let reply = "```json\n[{\"statement\": \"x\", \"supported\": true}]\n```";
        let value = extract_json_array(reply).unwrap();
        assert_eq!(value[0]["supported"], true);
    }

    #[test]
    fn test_extract_returns_none_for_garbage() {
        assert!(extract_json_array("no json at all").is_none());
        assert!(extract_json_array("{\"an\": \"object\"}").is_none());
    }
}
