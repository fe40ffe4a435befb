//! Instruction composition for the proxy gateway.
//!
//! The external interpreter accepts natural language, not structured JSON,
//! so payload data is appended to the instruction text by plain ordered
//! string concatenation. This exact format is the wire contract with the
//! interpreter; do not replace it with a structured payload.

use serde_json::Value;

/// Render a JSON payload value as the text fragment appended to an
/// instruction. Strings are used verbatim; everything else is serialized
/// compactly.
fn payload_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compose the instruction string sent to the external interpreter.
///
/// - no payload: the instruction text unchanged;
/// - `data` only: `<instructions> data: <data>`;
/// - `data` + `old_data`: `<instructions> old Data: <old> new data: <new>`.
///
/// `old_data` without `data` leaves the new-data fragment empty rather
/// than rendering a placeholder token. Deliberate: the interpreter reads
/// natural language, and a trailing blank says "no new data" more
/// plainly than a literal `undefined` would.
pub fn compose_instruction(
    instructions: &str,
    data: Option<&Value>,
    old_data: Option<&Value>,
) -> String {
    match (data, old_data) {
        (None, None) => instructions.to_string(),
        (Some(data), None) => {
            format!("{instructions} data: {}", payload_text(data))
        }
        // The interpreter expects old-then-new ordering whenever prior
        // data is supplied, even if the new data is absent.
        (new, Some(old)) => {
            let new_text = new.map(payload_text).unwrap_or_default();
            format!(
                "{instructions} old Data: {} new data: {new_text}",
                payload_text(old)
            )
        }
    }
}
