use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::biometrics::{BiometricProfile, ProfileParts};
use crate::error::PlanError;

/// Stored biometric profile. Every biometric column is nullable because users
/// fill the profile in over several requests.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserProfile {
    pub profile_id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UserProfile {
    pub fn parts(&self) -> ProfileParts<'_> {
        ProfileParts {
            gender: self.gender.as_deref(),
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age: self.age,
            activity_level: self.activity_level.as_deref(),
            goal: self.goal.as_deref(),
        }
    }

    pub fn to_biometrics(&self) -> Result<BiometricProfile, PlanError> {
        BiometricProfile::from_parts(self.parts())
    }
}
