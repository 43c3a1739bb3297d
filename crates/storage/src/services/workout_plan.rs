use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ActivityLevel, Goal};

/// Training theme assigned to a scheduled day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum WorkoutFocus {
    ChestAndTriceps,
    BackAndBiceps,
    LegsAndShoulders,
    FullBody,
    ActiveRestCardio,
    StrengthA,
    StrengthB,
    StrengthC,
    CardioAndCore,
    ActiveRest,
}

/// Exercise set a focus maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseBlock {
    Chest,
    Back,
    Legs,
    Conditioning,
}

const STRENGTH_POOL: [WorkoutFocus; 5] = [
    WorkoutFocus::ChestAndTriceps,
    WorkoutFocus::BackAndBiceps,
    WorkoutFocus::LegsAndShoulders,
    WorkoutFocus::FullBody,
    WorkoutFocus::ActiveRestCardio,
];

const GENERAL_POOL: [WorkoutFocus; 5] = [
    WorkoutFocus::StrengthA,
    WorkoutFocus::StrengthB,
    WorkoutFocus::StrengthC,
    WorkoutFocus::CardioAndCore,
    WorkoutFocus::ActiveRest,
];

impl WorkoutFocus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChestAndTriceps => "Chest & Triceps",
            Self::BackAndBiceps => "Back & Biceps",
            Self::LegsAndShoulders => "Legs & Shoulders",
            Self::FullBody => "Full Body",
            Self::ActiveRestCardio => "Active Rest/Cardio",
            Self::StrengthA => "Strength Training A",
            Self::StrengthB => "Strength Training B",
            Self::StrengthC => "Strength Training C",
            Self::CardioAndCore => "Cardio & Core",
            Self::ActiveRest => "Active Rest",
        }
    }

    /// Candidate pool for a goal: muscle gain trains by muscle group, every
    /// other goal uses the general rotation.
    pub fn pool_for_goal(goal: Goal) -> &'static [WorkoutFocus] {
        match goal {
            Goal::GainMuscle => &STRENGTH_POOL,
            Goal::LoseWeight | Goal::Maintain => &GENERAL_POOL,
        }
    }

    pub fn exercise_block(&self) -> ExerciseBlock {
        match self {
            Self::ChestAndTriceps => ExerciseBlock::Chest,
            Self::BackAndBiceps => ExerciseBlock::Back,
            Self::LegsAndShoulders => ExerciseBlock::Legs,
            Self::FullBody
            | Self::ActiveRestCardio
            | Self::StrengthA
            | Self::StrengthB
            | Self::StrengthC
            | Self::CardioAndCore
            | Self::ActiveRest => ExerciseBlock::Conditioning,
        }
    }
}

impl std::fmt::Display for WorkoutFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseTemplate {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: String,
}

impl ExerciseTemplate {
    fn new(exercise_name: &str, sets: i32, reps: &str) -> Self {
        Self {
            exercise_name: exercise_name.to_string(),
            sets,
            reps: reps.to_string(),
        }
    }
}

impl ExerciseBlock {
    pub fn exercises(&self) -> Vec<ExerciseTemplate> {
        match self {
            Self::Chest => vec![
                ExerciseTemplate::new("Flat Bench Press", 3, "8-12"),
                ExerciseTemplate::new("Incline Dumbbell Fly", 3, "10-15"),
                ExerciseTemplate::new("Push-ups", 3, "To failure"),
            ],
            Self::Back => vec![
                ExerciseTemplate::new("Pull-ups (or Lat Pulldown)", 3, "6-10"),
                ExerciseTemplate::new("Bent-over Row", 3, "8-12"),
                ExerciseTemplate::new("Back Extension", 3, "12-15"),
            ],
            Self::Legs => vec![
                ExerciseTemplate::new("Barbell Back Squat", 4, "8-12"),
                ExerciseTemplate::new("Leg Press", 3, "10-15"),
                ExerciseTemplate::new("Leg Extension", 3, "12-15"),
                ExerciseTemplate::new("Leg Curl", 3, "12-15"),
            ],
            Self::Conditioning => vec![
                ExerciseTemplate::new("Easy Treadmill Run", 1, "20-30 min"),
                ExerciseTemplate::new("Plank", 3, "30-60 sec"),
                ExerciseTemplate::new("Stationary Bike", 1, "15-20 min"),
            ],
        }
    }
}

/// Weekly training layout. Any request other than five days is treated as four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingSchedule {
    FourDays,
    FiveDays,
}

impl TrainingSchedule {
    pub fn from_requested(days_per_week: i32) -> Self {
        match days_per_week {
            5 => Self::FiveDays,
            _ => Self::FourDays,
        }
    }

    pub fn days_per_week(&self) -> usize {
        self.days_of_week().len()
    }

    /// ISO weekdays (1 = Monday) that carry a session
    pub fn days_of_week(&self) -> &'static [i32] {
        match self {
            Self::FourDays => &[1, 2, 4, 5],
            Self::FiveDays => &[1, 2, 3, 5, 6],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDayTemplate {
    pub day_of_week: i32,
    pub focus: String,
    pub exercises: Vec<ExerciseTemplate>,
}

/// Draws one focus per scheduled day, without replacement, from the goal's
/// pool. `_activity_level` is accepted for parity with the diet generator and
/// does not influence the draw.
pub fn generate_sample_workout_plan<R: Rng + ?Sized>(
    rng: &mut R,
    _activity_level: ActivityLevel,
    goal: Goal,
    days_per_week: i32,
) -> Vec<WorkoutDayTemplate> {
    let schedule = TrainingSchedule::from_requested(days_per_week);
    let pool = WorkoutFocus::pool_for_goal(goal);

    pool.choose_multiple(rng, schedule.days_per_week())
        .zip(schedule.days_of_week())
        .map(|(focus, day_of_week)| WorkoutDayTemplate {
            day_of_week: *day_of_week,
            focus: focus.label().to_string(),
            exercises: focus.exercise_block().exercises(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn labels(pool: &[WorkoutFocus]) -> HashSet<&'static str> {
        pool.iter().map(|f| f.label()).collect()
    }

    #[test]
    fn test_four_day_schedule() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let days =
                generate_sample_workout_plan(&mut rng, ActivityLevel::Light, Goal::Maintain, 4);
            let schedule: Vec<i32> = days.iter().map(|d| d.day_of_week).collect();
            assert_eq!(schedule, [1, 2, 4, 5]);
        }
    }

    #[test]
    fn test_five_day_schedule() {
        let mut rng = StdRng::seed_from_u64(11);
        let days =
            generate_sample_workout_plan(&mut rng, ActivityLevel::Intense, Goal::GainMuscle, 5);
        let schedule: Vec<i32> = days.iter().map(|d| d.day_of_week).collect();
        assert_eq!(schedule, [1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_unsupported_day_counts_fall_back_to_four() {
        let mut rng = StdRng::seed_from_u64(3);
        for requested in [0, 1, 3, 6, 7, -2] {
            let days =
                generate_sample_workout_plan(&mut rng, ActivityLevel::Moderate, Goal::Maintain, requested);
            assert_eq!(days.len(), 4);
            assert_eq!(days.last().unwrap().day_of_week, 5);
        }
    }

    #[test]
    fn test_focus_drawn_without_replacement_from_goal_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let strength = labels(&STRENGTH_POOL);
        let general = labels(&GENERAL_POOL);

        for _ in 0..50 {
            let gain =
                generate_sample_workout_plan(&mut rng, ActivityLevel::Light, Goal::GainMuscle, 5);
            let drawn: HashSet<&str> = gain.iter().map(|d| d.focus.as_str()).collect();
            assert_eq!(drawn.len(), 5);
            assert!(drawn.iter().all(|f| strength.contains(f)));

            let lose =
                generate_sample_workout_plan(&mut rng, ActivityLevel::Light, Goal::LoseWeight, 4);
            let drawn: HashSet<&str> = lose.iter().map(|d| d.focus.as_str()).collect();
            assert_eq!(drawn.len(), 4);
            assert!(drawn.iter().all(|f| general.contains(f)));
        }
    }

    #[test]
    fn test_exercises_match_focus_block() {
        let mut rng = StdRng::seed_from_u64(5);
        let days =
            generate_sample_workout_plan(&mut rng, ActivityLevel::Moderate, Goal::GainMuscle, 5);

        for day in &days {
            let focus = STRENGTH_POOL
                .iter()
                .find(|f| f.label() == day.focus)
                .unwrap();
            assert_eq!(day.exercises, focus.exercise_block().exercises());
        }
    }

    #[test]
    fn test_block_sizes() {
        assert_eq!(ExerciseBlock::Chest.exercises().len(), 3);
        assert_eq!(ExerciseBlock::Back.exercises().len(), 3);
        assert_eq!(ExerciseBlock::Legs.exercises().len(), 4);
        assert_eq!(ExerciseBlock::Conditioning.exercises().len(), 3);
        assert_eq!(ExerciseBlock::Legs.exercises()[0].sets, 4);
    }

    #[test]
    fn test_general_pool_only_gets_conditioning() {
        for focus in GENERAL_POOL {
            assert_eq!(focus.exercise_block(), ExerciseBlock::Conditioning);
        }
    }

    #[test]
    fn test_same_seed_same_plan() {
        let first = generate_sample_workout_plan(
            &mut StdRng::seed_from_u64(99),
            ActivityLevel::Sedentary,
            Goal::GainMuscle,
            4,
        );
        let second = generate_sample_workout_plan(
            &mut StdRng::seed_from_u64(99),
            ActivityLevel::Sedentary,
            Goal::GainMuscle,
            4,
        );
        assert_eq!(first, second);
    }
}
