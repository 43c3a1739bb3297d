pub mod biometrics;
pub mod diet_plan;
pub mod preferences;
pub mod profile;
pub mod workout_plan;

pub use biometrics::{ActivityLevel, BiometricProfile, Gender, Goal, ProfileParts};
pub use diet_plan::{DietPlan, DietPlanMeal};
pub use preferences::UserPreference;
pub use profile::UserProfile;
pub use workout_plan::{WorkoutExercise, WorkoutPlan, WorkoutPlanDay};
