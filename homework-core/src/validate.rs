//! Response validation
//!
//! The review API is untrusted, so the decoded payload is checked against the
//! expected structure before anything reads from it:
//!
//! ```text
//! { "homeworks": [ <record>, ... ], "current_date": <int> }
//! ```
//!
//! Only the top-level shape is enforced here. Records are checked one at a
//! time by [`crate::parse`].

use serde_json::Value;

use crate::error::ResponseError;

/// Checks the payload shape and returns the homework list unchanged
pub fn check_response(response: &Value) -> Result<&[Value], ResponseError> {
    let object = response
        .as_object()
        .ok_or(ResponseError::NotAnObject(kind_of(response)))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingHomeworks)?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ResponseError::HomeworksNotAList(kind_of(homeworks)))
}

/// JSON type name used in error messages
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
