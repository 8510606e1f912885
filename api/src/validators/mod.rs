use crate::utils::dates;
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::*;

pub const MAX_LENGTH: u64 = 64;

pub fn append_validation_error(
    validation_errors: Result<(), ValidationErrors>,
    field: &'static str,
    validation_error: Result<(), ValidationError>,
) -> Result<(), ValidationErrors> {
    if let Err(validation_error) = validation_error {
        let mut validation_errors = match validation_errors {
            Ok(_) => ValidationErrors::new(),
            Err(validation_errors) => validation_errors,
        };
        validation_errors.add(field, validation_error);
        Err(validation_errors)
    } else {
        validation_errors
    }
}

pub fn create_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::from(message));
    validation_error
}

pub fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(create_validation_error("required", message));
    }
    Ok(())
}

pub fn required_list<T>(values: &[T], message: &'static str) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(create_validation_error("required", message));
    }
    Ok(())
}

pub fn max_length(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if !validate_length(value, None, Some(MAX_LENGTH), None) {
        let mut validation_error = create_validation_error("length", message);
        validation_error.add_param(Cow::from("max"), &MAX_LENGTH);
        return Err(validation_error);
    }
    Ok(())
}

/// Absent values pass.
pub fn optional_range(value: Option<i64>, min: i64, max: i64, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(value) if value < min || value > max => {
            let mut validation_error = create_validation_error("range", message);
            validation_error.add_param(Cow::from("min"), &min);
            validation_error.add_param(Cow::from("max"), &max);
            validation_error.add_param(Cow::from("value"), &value);
            Err(validation_error)
        }
        _ => Ok(()),
    }
}

/// Empty values pass; `required` reports those.
pub fn alphanumeric(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(create_validation_error(
            "alphanumeric",
            "Only half-width letters and digits are allowed",
        ));
    }
    Ok(())
}

pub fn optional_date(value: &Option<String>, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            if dates::parse_date(value).is_err() {
                let mut validation_error = create_validation_error("date", message);
                validation_error.add_param(Cow::from("value"), value);
                return Err(validation_error);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Renders errors as `{field: {param, msg}}`, one entry per field, which the admin screens
/// display next to each input.
pub fn validation_errors_to_json(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();
    let mut field_errors: Vec<(&str, &Vec<ValidationError>)> = errors.field_errors().into_iter().collect();
    field_errors.sort_by(|a, b| a.0.cmp(b.0));
    for (field, errors) in field_errors {
        if let Some(error) = errors.first() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            fields.insert(field.to_string(), json!({"param": field, "msg": message}));
        }
    }
    Value::Object(fields)
}
