use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::PlanError;
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Stored profile plus whatever the calculator still needs before a plan can
/// be generated
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub updated_at: NaiveDateTime,
    /// Fields that must be filled in before plans can be generated
    pub missing_fields: Vec<String>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let missing_fields = match profile.to_biometrics() {
            Err(PlanError::MissingProfileField(fields)) => fields,
            _ => Vec::new(),
        };

        Self {
            user_id: profile.user_id,
            full_name: profile.full_name,
            age: profile.age,
            gender: profile.gender,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            activity_level: profile.activity_level,
            goal: profile.goal,
            updated_at: profile.updated_at,
            missing_fields,
        }
    }
}

/// Partial profile update. Absent fields keep their stored value; an explicit
/// `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileRequest {
    #[validate(length(max = 255, message = "Full name must be at most 255 characters"))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub full_name: Option<Option<String>>,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,

    #[validate(custom(function = "validate_gender"))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub gender: Option<Option<String>>,

    #[validate(range(
        exclusive_min = 0.0,
        max = 300.0,
        message = "Height must be greater than 0 and at most 300 cm"
    ))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub height_cm: Option<Option<f64>>,

    #[validate(range(
        exclusive_min = 0.0,
        max = 500.0,
        message = "Weight must be greater than 0 and at most 500 kg"
    ))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub weight_kg: Option<Option<f64>>,

    #[validate(custom(function = "validate_activity_level"))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub activity_level: Option<Option<String>>,

    #[validate(custom(function = "validate_goal"))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub goal: Option<Option<String>>,
}

impl UpsertProfileRequest {
    /// Rewrites enum fields to their canonical token so stored profiles never
    /// carry aliases such as `masculino` or `Moderate`.
    pub fn canonicalize(mut self) -> Result<Self, PlanError> {
        self.gender = canonical::<Gender>(self.gender)?;
        self.activity_level = canonical::<ActivityLevel>(self.activity_level)?;
        self.goal = canonical::<Goal>(self.goal)?;
        Ok(self)
    }
}

fn canonical<T>(value: Option<Option<String>>) -> Result<Option<Option<String>>, PlanError>
where
    T: std::str::FromStr<Err = PlanError> + std::fmt::Display,
{
    match value {
        Some(Some(raw)) => Ok(Some(Some(raw.parse::<T>()?.to_string()))),
        other => Ok(other),
    }
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    gender
        .parse::<Gender>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_gender"))
}

fn validate_activity_level(level: &str) -> Result<(), validator::ValidationError> {
    level
        .parse::<ActivityLevel>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_activity_level"))
}

fn validate_goal(goal: &str) -> Result<(), validator::ValidationError> {
    goal.parse::<Goal>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_goal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpsertProfileRequest::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let request = UpsertProfileRequest {
            age: Some(Some(0)),
            weight_kg: Some(Some(0.0)),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("weight_kg"));
    }

    #[test]
    fn test_unknown_enum_tokens_are_rejected() {
        let request = UpsertProfileRequest {
            gender: Some(Some("robot".to_string())),
            goal: Some(Some("bulk".to_string())),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("gender"));
        assert!(fields.contains_key("goal"));
        assert!(!fields.contains_key("activity_level"));
    }

    #[test]
    fn test_canonicalize_normalizes_aliases() {
        let request = UpsertProfileRequest {
            gender: Some(Some("Feminino".to_string())),
            activity_level: Some(Some("MODERADO".to_string())),
            goal: Some(Some("gain muscle".to_string())),
            ..Default::default()
        }
        .canonicalize()
        .unwrap();

        assert_eq!(request.gender, Some(Some("female".to_string())));
        assert_eq!(request.activity_level, Some(Some("moderate".to_string())));
        assert_eq!(request.goal, Some(Some("gain_muscle".to_string())));
    }

    #[test]
    fn test_null_is_kept_apart_from_absent() {
        let request: UpsertProfileRequest =
            serde_json::from_str(r#"{"goal": null, "age": 31}"#).unwrap();
        assert_eq!(request.goal, Some(None));
        assert_eq!(request.age, Some(Some(31)));
        assert_eq!(request.gender, None);
        assert!(request.validate().is_ok());

        let request = request.canonicalize().unwrap();
        assert_eq!(request.goal, Some(None));
    }

    #[test]
    fn test_response_lists_missing_fields() {
        let profile = UserProfile {
            profile_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: Some("Ana".to_string()),
            age: Some(30),
            gender: Some("female".to_string()),
            height_cm: None,
            weight_kg: Some(60.0),
            activity_level: None,
            goal: Some("maintain".to_string()),
            updated_at: chrono::Utc::now().naive_utc(),
        };

        let response = ProfileResponse::from(profile);
        assert_eq!(response.missing_fields, ["height_cm", "activity_level"]);
    }
}
