//! Interpretation of endpoint response bodies

use serde_json::Value;

use super::error::SubmitError;

/// JSON pointer to the generated text in a pricing response
const PRICING_TEXT_POINTER: &str = "/data/output/message/content/0/text";

/// Result of a successful pricing submission
#[derive(Debug, Clone, PartialEq)]
pub enum PricingOutcome {
    /// Text extracted from the nested model output
    Text(String),
    /// Whole response body, when no nested text is present
    Raw(Value),
}

impl std::fmt::Display for PricingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingOutcome::Text(text) => {
                write!(f, "Data successfully processed. Response:\n\n{}", text)
            }
            PricingOutcome::Raw(body) => {
                write!(f, "Data successfully processed. Raw response: {}", body)
            }
        }
    }
}

/// Decode a response body; non-JSON bodies are kept as a JSON string
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Interpret a pricing response body.
///
/// The endpoint signals success with `"success": true`; anything else is a
/// rejection carrying the body's `message`.
pub fn interpret_pricing(body: Value) -> Result<PricingOutcome, SubmitError> {
    if body.get("success").and_then(Value::as_bool) != Some(true) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("Unknown error");
        return Err(SubmitError::Rejected(message.to_string()));
    }

    match extract_text(&body) {
        Some(text) => Ok(PricingOutcome::Text(text.to_string())),
        None => Ok(PricingOutcome::Raw(body)),
    }
}

/// Nested model output text, if present and non-empty
pub fn extract_text(body: &Value) -> Option<&str> {
    body.pointer(PRICING_TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Interpret a provisioning response body: any non-empty payload is success
pub fn interpret_provision(body: Value) -> Result<Value, SubmitError> {
    if is_present(&body) {
        Ok(body)
    } else {
        Err(SubmitError::Rejected("Unknown error".to_string()))
    }
}

fn is_present(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}
