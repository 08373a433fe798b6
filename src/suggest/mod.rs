//! Suggestion Adapter
//!
//! Turns a free-text description plus the current price fields into candidate
//! field values via an external text-generation service. Purely advisory: the
//! adapter reads labels, never mutates the working copy or the store.

mod gemini;

use async_trait::async_trait;
use regex::Regex;
use serde_json::json;

use crate::domain::{DomainError, DomainResult, Field};

pub use gemini::GeminiProvider;

/// One round of suggestions. `fields` is None when the service replied but no
/// structured field list could be parsed out of the answer; callers show the
/// raw text (or a "no suggestions" notice) in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub fields: Option<Vec<Field>>,
}

/// Text-generation backend seam. Implementations normalize every transport or
/// service failure into a single suggestion error so callers only ever see
/// "could not get suggestions, try again".
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, price_fields: &[Field], details: &str) -> DomainResult<Suggestion>;
}

/// Build the structured prompt: field interface, current data, the operator's
/// details, and the JSON-answer instruction.
pub(crate) fn build_prompt(price_fields: &[Field], details: &str) -> DomainResult<String> {
    if details.trim().is_empty() {
        return Err(DomainError::InvalidInput("please enter a prompt".to_string()));
    }
    let data = serde_json::to_string(price_fields)
        .map_err(|e| DomainError::Suggestion(format!("failed to encode fields: {}", e)))?;
    Ok(format!(
        "You are a helpful assistant that provides responses in JSON format matching the following interface:\n\
         interface FieldType {{\n  id: number;\n  label: string;\n  value?: number | string;\n  unit?: string;\n}}\n\n\
         I have a list of electrical work items with id, label, value (optional), and unit (optional) in JSON format.\n\
         data :{data}\n\n\
         find value according to these details\n{details}\n\n\
         change value according to these details\n\n\
         Give me a data in JSON format."
    ))
}

/// Pull a candidate field list out of a service reply. Strips Markdown code
/// fences first; anything that still fails to parse yields None.
pub(crate) fn parse_candidates(raw: &str) -> Option<Vec<Field>> {
    let fence = Regex::new(r"(?i)```(?:json)?").ok()?;
    let cleaned = fence.replace_all(raw, "");
    serde_json::from_str(cleaned.trim()).ok()
}

/// The request body shape shared by generateContent-style services
pub(crate) fn generate_content_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    #[test]
    fn test_prompt_includes_serialized_fields_and_details() {
        let fields = vec![Field::new(1, "Lighting Point").with_value(FieldValue::Number(0.0))];
        let prompt = build_prompt(&fields, "lighting is 10 rupees").unwrap();
        assert!(prompt.contains("\"Lighting Point\""));
        assert!(prompt.contains("lighting is 10 rupees"));
        assert!(prompt.contains("JSON format"));
    }

    #[test]
    fn test_blank_details_are_rejected_locally() {
        let result = build_prompt(&[], "   ");
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_candidates_strips_code_fences() {
        let raw = "```json\n[{\"id\":1,\"label\":\"Lighting Point\",\"value\":10}]\n```";
        let fields = parse_candidates(raw).expect("should parse");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value, Some(FieldValue::Number(10.0)));
    }

    #[test]
    fn test_parse_candidates_handles_plain_json() {
        let raw = "[{\"id\":2,\"label\":\"Fan Point\",\"value\":\"35\",\"unit\":\"pt\"}]";
        let fields = parse_candidates(raw).expect("should parse");
        assert_eq!(fields[0].unit.as_deref(), Some("pt"));
    }

    #[test]
    fn test_unparseable_reply_yields_no_candidates() {
        assert!(parse_candidates("sorry, I cannot help with that").is_none());
        assert!(parse_candidates("").is_none());
    }
}
