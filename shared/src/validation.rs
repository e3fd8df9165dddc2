//! Input validation at the edges
//!
//! The calculators accept any numbers; callers run these checks before a
//! profile or measurement is stored. Profiles combine the `validator` derive
//! ranges on [`UserProfile`] with finiteness checks the derive cannot
//! express.

use crate::profile::UserProfile;
use validator::Validate;

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate a logged measurement value
pub fn validate_measurement_value(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Measurement must be a valid number".to_string());
    }
    if value <= 0.0 {
        return Err("Measurement must be positive".to_string());
    }
    Ok(())
}

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Gender",
        "age" => "Age",
        "height_cm" => "Height",
        "current_weight_kg" => "Current Weight",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "value" => "Measurement",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Validate every numeric profile field, reporting all failures
pub fn validate_profile(profile: &UserProfile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_height_cm(profile.height_cm) {
        errors.push(ValidationError::new("height_cm", &msg));
    }
    if let Err(msg) = validate_weight(profile.current_weight_kg) {
        errors.push(ValidationError::new("current_weight_kg", &msg));
    }

    if let Err(derived) = profile.validate() {
        let mut fields: Vec<_> = derived.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, field_errors) in fields {
            if errors.iter().any(|e| e.field == field) {
                continue;
            }
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                errors.push(ValidationError::new(&field, &message));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
