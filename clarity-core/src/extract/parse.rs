use crate::error::{ClarityError, ClarityResult};
use crate::plan::Plan;
use serde_json::Value;

/// Parse a model reply into a [`Plan`].
///
/// The reply must be exactly one JSON object with a `summary` string and a `tasks`
/// array. Anything else is a `MalformedResponse` carrying the reply verbatim.
pub fn parse_plan(raw: &str) -> ClarityResult<Plan> {
    let malformed = |reason: String| ClarityError::MalformedResponse {
        raw: raw.to_string(),
        reason,
    };

    let value: Value = serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(malformed("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
}
