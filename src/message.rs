//! JSON snapshots embedded in failure messages

use serde::Serialize;

const NULL_JSON: &str = "null";

/// Serialize `value` to compact JSON for a failure message
///
/// Returns the literal `null` when there is no value or when serialization
/// fails; formatting a message never produces an error.
pub fn to_json<S: Serialize + ?Sized>(value: Option<&S>) -> String {
    let Some(value) = value else {
        return NULL_JSON.to_string();
    };

    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(error = %e, "failed to serialize instance for message");
            NULL_JSON.to_string()
        }
    }
}
