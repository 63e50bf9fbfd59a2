use std::borrow::Cow;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationError};

use super::error::AppError;

/// Runs the derived validators and reports the first failing field,
/// walking `fields` in declaration order.
pub fn validate_in_order<T: Validate>(value: &T, fields: &[&'static str]) -> Result<(), AppError> {
    let errors = match value.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();
    for field in fields {
        if let Some(first) = field_errors.get(*field).and_then(|errs| errs.first()) {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid.", field));
            return Err(AppError::Validation(message));
        }
    }

    Err(AppError::Validation(errors.to_string()))
}

/// Body fields read as strings no matter what JSON type was sent:
/// `null`, arrays and objects become empty, scalars keep their text.
pub fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Empty values are left to the `length` check.
pub fn validate_object_id(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || ObjectId::parse_str(value).is_ok() {
        return Ok(());
    }

    let mut error = ValidationError::new("object_id");
    error.message = Some(Cow::from("recipe_id is not a valid identifier."));
    Err(error)
}

pub fn parse_object_id(value: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value)
        .map_err(|_| AppError::Validation("recipe_id is not a valid identifier.".to_string()))
}
