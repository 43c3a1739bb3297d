use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    fn parse_str(s: &str) -> Result<Self, PlanError> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "masculino" => Ok(Self::Male),
            "female" | "f" | "feminino" => Ok(Self::Female),
            "" => Err(PlanError::invalid("Gender must be provided")),
            _ => Err(PlanError::InvalidInput(format!(
                "Invalid gender: '{}'. Choose from male, female",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
        }
    }

    pub fn all() -> &'static [ActivityLevel] {
        &[Self::Sedentary, Self::Light, Self::Moderate, Self::Intense]
    }

    /// TDEE multiplier applied to the basal metabolic rate
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Intense => 1.725,
        }
    }

    fn parse_str(s: &str) -> Result<Self, PlanError> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "sedentario" | "sedentário" => Ok(Self::Sedentary),
            "light" | "leve" => Ok(Self::Light),
            "moderate" | "moderado" => Ok(Self::Moderate),
            "intense" | "intenso" => Ok(Self::Intense),
            "" => Err(PlanError::invalid("Activity level must be provided")),
            _ => Err(PlanError::InvalidInput(format!(
                "Invalid activity level: '{}'. Choose from {}",
                s,
                Self::all()
                    .iter()
                    .map(|a| a.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainMuscle,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::Maintain => "maintain",
            Self::GainMuscle => "gain_muscle",
        }
    }

    pub fn all() -> &'static [Goal] {
        &[Self::LoseWeight, Self::Maintain, Self::GainMuscle]
    }

    fn parse_str(s: &str) -> Result<Self, PlanError> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "lose_weight" | "emagrecer" => Ok(Self::LoseWeight),
            "maintain" | "manter" => Ok(Self::Maintain),
            "gain_muscle" | "ganhar_massa" => Ok(Self::GainMuscle),
            "" => Err(PlanError::invalid("Goal must be provided")),
            _ => Err(PlanError::InvalidInput(format!(
                "Invalid goal: '{}'. Choose from {}",
                s,
                Self::all()
                    .iter()
                    .map(|g| g.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

macro_rules! impl_str_conversions {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<&str> for $ty {
                type Error = PlanError;

                fn try_from(value: &str) -> Result<Self, Self::Error> {
                    Self::parse_str(value)
                }
            }

            impl std::str::FromStr for $ty {
                type Err = PlanError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse_str(s)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

impl_str_conversions!(Gender, ActivityLevel, Goal);

/// Validated biometric inputs for the plan calculator.
///
/// Build it from raw input with [`BiometricProfile::from_parts`], which rejects
/// incomplete or non-positive data. The calculator functions still check
/// their own numeric inputs, so a hand-built value cannot bypass validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct BiometricProfile {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// Raw, possibly incomplete profile fields as stored or submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileParts<'a> {
    pub gender: Option<&'a str>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<i32>,
    pub activity_level: Option<&'a str>,
    pub goal: Option<&'a str>,
}

/// Blank strings count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl BiometricProfile {
    /// Checks presence of every field first (reporting all absent ones
    /// together), then parses enums and validates numeric ranges.
    pub fn from_parts(parts: ProfileParts<'_>) -> Result<Self, PlanError> {
        let mut missing = Vec::new();
        if present(parts.gender).is_none() {
            missing.push("gender");
        }
        if parts.weight_kg.is_none() {
            missing.push("weight_kg");
        }
        if parts.height_cm.is_none() {
            missing.push("height_cm");
        }
        if parts.age.is_none() {
            missing.push("age");
        }
        if present(parts.activity_level).is_none() {
            missing.push("activity_level");
        }
        if present(parts.goal).is_none() {
            missing.push("goal");
        }

        let (
            Some(gender),
            Some(weight_kg),
            Some(height_cm),
            Some(age),
            Some(activity_level),
            Some(goal),
        ) = (
            present(parts.gender),
            parts.weight_kg,
            parts.height_cm,
            parts.age,
            present(parts.activity_level),
            present(parts.goal),
        )
        else {
            return Err(PlanError::MissingProfileField(
                missing.into_iter().map(String::from).collect(),
            ));
        };

        if !(weight_kg > 0.0 && weight_kg.is_finite()) {
            return Err(PlanError::invalid("Weight must be a positive value"));
        }
        if !(height_cm > 0.0 && height_cm.is_finite()) {
            return Err(PlanError::invalid("Height must be a positive value"));
        }
        let age = u32::try_from(age)
            .ok()
            .filter(|a| *a > 0)
            .ok_or_else(|| PlanError::invalid("Age must be a positive value"))?;

        Ok(Self {
            gender: gender.parse()?,
            weight_kg,
            height_cm,
            age,
            activity_level: activity_level.parse()?,
            goal: goal.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn complete_parts() -> ProfileParts<'static> {
        ProfileParts {
            gender: Some("male"),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            age: Some(25),
            activity_level: Some("moderate"),
            goal: Some("maintain"),
        }
    }

    #[test]
    fn test_enum_parsing_is_case_insensitive() {
        assert_eq!(Gender::from_str("MALE").unwrap(), Gender::Male);
        assert_eq!(Gender::try_from("Feminino").unwrap(), Gender::Female);
        assert_eq!("Intenso".parse::<ActivityLevel>().unwrap(), ActivityLevel::Intense);
        assert_eq!("emagrecer".parse::<Goal>().unwrap(), Goal::LoseWeight);
        assert_eq!("Gain-Muscle".parse::<Goal>().unwrap(), Goal::GainMuscle);
        assert_eq!("ganhar_massa".parse::<Goal>().unwrap(), Goal::GainMuscle);
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        assert!(matches!(
            Gender::from_str("other"),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(matches!(
            ActivityLevel::from_str("extreme"),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(matches!(Goal::from_str(""), Err(PlanError::InvalidInput(_))));
        assert!(matches!(Goal::from_str("bulk"), Err(PlanError::InvalidInput(_))));
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Light.multiplier(), 1.375);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::Intense.multiplier(), 1.725);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for goal in Goal::all() {
            assert_eq!(goal.to_string().parse::<Goal>().unwrap(), *goal);
        }
        for level in ActivityLevel::all() {
            assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), *level);
        }
    }

    #[test]
    fn test_complete_profile_builds() {
        let profile = BiometricProfile::from_parts(complete_parts()).unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.age, 25);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Maintain);
    }

    #[test]
    fn test_all_missing_fields_reported_at_once() {
        let parts = ProfileParts {
            gender: Some("  "),
            weight_kg: Some(70.0),
            height_cm: None,
            age: None,
            activity_level: Some("light"),
            goal: None,
        };

        let err = BiometricProfile::from_parts(parts).unwrap_err();
        assert_eq!(
            err,
            PlanError::MissingProfileField(vec![
                "gender".to_string(),
                "height_cm".to_string(),
                "age".to_string(),
                "goal".to_string(),
            ])
        );
    }

    #[test]
    fn test_non_positive_values_are_invalid() {
        let mut parts = complete_parts();
        parts.weight_kg = Some(0.0);
        assert!(matches!(
            BiometricProfile::from_parts(parts),
            Err(PlanError::InvalidInput(_))
        ));

        let mut parts = complete_parts();
        parts.height_cm = Some(f64::NAN);
        assert!(matches!(
            BiometricProfile::from_parts(parts),
            Err(PlanError::InvalidInput(_))
        ));

        let mut parts = complete_parts();
        parts.age = Some(-3);
        assert!(matches!(
            BiometricProfile::from_parts(parts),
            Err(PlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unrecognized_goal_in_profile_is_invalid() {
        let mut parts = complete_parts();
        parts.goal = Some("get_shredded");
        assert!(matches!(
            BiometricProfile::from_parts(parts),
            Err(PlanError::InvalidInput(_))
        ));
    }
}
