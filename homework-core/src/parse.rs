//! Status parsing
//!
//! Turns a single homework record into the notification sent to the chat.

use serde_json::Value;

use crate::domain::homework::HomeworkStatus;
use crate::error::StatusError;
use crate::validate::kind_of;

/// Builds the notification text for one homework record
///
/// The output format is relied on by existing chat readers and must stay
/// byte-for-byte stable:
///
/// ```text
/// Изменился статус проверки работы "<name>". <verdict>
/// ```
pub fn parse_status(homework: &Value) -> Result<String, StatusError> {
    let name = required_str(homework, "homework_name")?;

    let status = match homework.get("status") {
        None | Some(Value::Null) => return Err(StatusError::MissingField("status")),
        Some(Value::String(key)) => key.parse::<HomeworkStatus>()?,
        Some(other) => return Err(StatusError::UnknownStatus(other.to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn required_str<'a>(homework: &'a Value, field: &'static str) -> Result<&'a str, StatusError> {
    match homework.get(field) {
        None | Some(Value::Null) => Err(StatusError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(StatusError::InvalidField {
            field,
            found: kind_of(other),
        }),
    }
}
