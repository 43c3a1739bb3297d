//! Canned food and training suggestions driven by a user's free-text
//! preferences.
//!
//! Input text is first classified into closed categories; the suggestion rules
//! only ever look at those categories.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::UserPreference;

/// Upper bound on suggestions returned per request
pub const MAX_SUGGESTIONS: usize = 2;

pub const FOOD_PREFERENCES_MISSING: &str =
    "Please fill in your food preferences first to receive personalised suggestions.";
pub const WORKOUT_PREFERENCES_MISSING: &str =
    "Please fill in your workout preferences first to receive personalised suggestions.";

const FOOD_FALLBACK: [&str; 2] = [
    "For more personalised suggestions, describe your food preferences in detail!",
    "Try adding a new colourful vegetable to your plate every day for extra nutrients.",
];

const WORKOUT_FALLBACK: [&str; 2] = [
    "For more personalised training suggestions, tell us your favourite workout types and times.",
    "Remember that rest and recovery matter as much as training to avoid injuries and keep progressing.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodItem {
    Chicken,
    Fish,
    Rice,
}

impl FoodItem {
    pub fn classify(entry: &str) -> Option<Self> {
        match entry.trim().to_lowercase().as_str() {
            "chicken" | "frango" => Some(Self::Chicken),
            "fish" | "peixe" => Some(Self::Fish),
            "rice" | "arroz" => Some(Self::Rice),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryRestriction {
    Vegetarian,
    GlutenFree,
}

impl DietaryRestriction {
    /// Restrictions are free prose ("vegan, no nuts"), so this scans for
    /// keywords rather than splitting on commas.
    pub fn classify(text: &str) -> HashSet<Self> {
        let text = text.to_lowercase();
        let mut found = HashSet::new();

        if ["vegetarian", "vegetariano", "vegan"]
            .iter()
            .any(|k| text.contains(k))
        {
            found.insert(Self::Vegetarian);
        }
        if ["gluten-free", "gluten free", "sem glúten", "sem gluten"]
            .iter()
            .any(|k| text.contains(k))
        {
            found.insert(Self::GlutenFree);
        }

        found
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutStyle {
    Strength,
    Cardio,
    MindBody,
}

impl WorkoutStyle {
    pub fn classify(entry: &str) -> Option<Self> {
        match entry.trim().to_lowercase().as_str() {
            "strength" | "força" | "forca" => Some(Self::Strength),
            "cardio" => Some(Self::Cardio),
            "yoga" | "pilates" => Some(Self::MindBody),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainingTime {
    Morning,
}

impl TrainingTime {
    pub fn classify(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "morning" | "manhã" | "manha" => Some(Self::Morning),
            _ => None,
        }
    }
}

fn classify_list<T, F>(field: Option<&str>, classify: F) -> HashSet<T>
where
    T: Eq + std::hash::Hash,
    F: Fn(&str) -> Option<T>,
{
    field
        .map(|value| value.split(',').filter_map(&classify).collect())
        .unwrap_or_default()
}

/// Categorised view of the food-related preference fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodProfile {
    pub liked: HashSet<FoodItem>,
    pub disliked: HashSet<FoodItem>,
    pub restrictions: HashSet<DietaryRestriction>,
}

impl FoodProfile {
    pub fn classify(
        liked_foods: Option<&str>,
        disliked_foods: Option<&str>,
        dietary_restrictions: Option<&str>,
    ) -> Self {
        Self {
            liked: classify_list(liked_foods, FoodItem::classify),
            disliked: classify_list(disliked_foods, FoodItem::classify),
            restrictions: dietary_restrictions
                .map(DietaryRestriction::classify)
                .unwrap_or_default(),
        }
    }

    pub fn from_preferences(prefs: &UserPreference) -> Self {
        Self::classify(
            prefs.liked_foods.as_deref(),
            prefs.disliked_foods.as_deref(),
            prefs.dietary_restrictions.as_deref(),
        )
    }

    /// Every rule that fires, in rule order. Protein and restriction rules are
    /// each an exclusive pair; the rest are independent.
    pub fn candidates(&self) -> Vec<&'static str> {
        let mut out = Vec::new();

        if self.liked.contains(&FoodItem::Chicken) && !self.disliked.contains(&FoodItem::Fish) {
            out.push(
                "Great that you like chicken! For variety, try grilled salmon or baked cod as lean protein sources.",
            );
        } else if self.disliked.contains(&FoodItem::Chicken) {
            out.push(
                "If you don't like chicken, turkey, grilled tofu or lentils work well for your protein meals.",
            );
        }

        if self.liked.contains(&FoodItem::Rice) {
            out.push(
                "Rice is a good carbohydrate source. Try rotating in quinoa, sweet potato or wholegrain pasta.",
            );
        }

        if self.restrictions.contains(&DietaryRestriction::Vegetarian) {
            out.push(
                "For your vegetarian/vegan diet, explore recipes with chickpeas, black beans, edamame and plenty of colourful vegetables.",
            );
        } else if self.restrictions.contains(&DietaryRestriction::GlutenFree) {
            out.push(
                "For gluten-free options, beyond rice and potatoes consider tapioca or breads made from gluten-free flours.",
            );
        }

        out
    }
}

/// Categorised view of the training-related preference fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutProfile {
    pub styles: HashSet<WorkoutStyle>,
    pub time: Option<TrainingTime>,
}

impl WorkoutProfile {
    pub fn classify(preferred_workout_types: Option<&str>, workout_time: Option<&str>) -> Self {
        Self {
            styles: classify_list(preferred_workout_types, WorkoutStyle::classify),
            time: workout_time.and_then(TrainingTime::classify),
        }
    }

    pub fn from_preferences(prefs: &UserPreference) -> Self {
        Self::classify(
            prefs.preferred_workout_types.as_deref(),
            prefs.workout_time_preference.as_deref(),
        )
    }

    pub fn candidates(&self) -> Vec<&'static str> {
        let mut out = Vec::new();

        if self.styles.contains(&WorkoutStyle::Strength) {
            out.push(
                "For your strength training, vary the exercises for each muscle group every 4-6 weeks to keep progressing.",
            );
            out.push(
                "Consider compound lifts such as squats, deadlifts and bench press, which work several muscle groups at once.",
            );
        }
        if self.styles.contains(&WorkoutStyle::Cardio) {
            out.push(
                "To vary your cardio, alternate running, cycling, the elliptical or swimming. HIIT is also a great option for burning calories.",
            );
        }
        if self.styles.contains(&WorkoutStyle::MindBody) {
            out.push(
                "Excellent choice! Yoga and Pilates build flexibility, core strength and mental well-being. Try a new pose or sequence this week.",
            );
        }
        if self.time == Some(TrainingTime::Morning) {
            out.push(
                "Morning training is a great way to start the day with energy! Don't skip a proper warm-up.",
            );
        }

        out
    }
}

/// Uniform sample of at most [`MAX_SUGGESTIONS`] entries without replacement;
/// falls back to the generic pair when no rule fired.
fn pick<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: Vec<&'static str>,
    fallback: &[&'static str],
) -> Vec<String> {
    let pool: &[&'static str] = if candidates.is_empty() {
        fallback
    } else {
        &candidates
    };

    pool.choose_multiple(rng, MAX_SUGGESTIONS.min(pool.len()))
        .map(|s| s.to_string())
        .collect()
}

pub fn generate_food_suggestions<R: Rng + ?Sized>(
    rng: &mut R,
    preferences: Option<&UserPreference>,
) -> Vec<String> {
    match preferences {
        Some(prefs) => pick(
            rng,
            FoodProfile::from_preferences(prefs).candidates(),
            &FOOD_FALLBACK,
        ),
        None => vec![FOOD_PREFERENCES_MISSING.to_string()],
    }
}

pub fn generate_workout_suggestions<R: Rng + ?Sized>(
    rng: &mut R,
    preferences: Option<&UserPreference>,
) -> Vec<String> {
    match preferences {
        Some(prefs) => pick(
            rng,
            WorkoutProfile::from_preferences(prefs).candidates(),
            &WORKOUT_FALLBACK,
        ),
        None => vec![WORKOUT_PREFERENCES_MISSING.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uuid::Uuid;

    fn preferences() -> UserPreference {
        UserPreference {
            preference_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            liked_foods: None,
            disliked_foods: None,
            dietary_restrictions: None,
            allergies: None,
            preferred_workout_types: None,
            workout_frequency_preference: None,
            workout_time_preference: None,
            fitness_level_self_assessed: None,
            specific_goals_text: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_food_items_classified_after_trimming() {
        let profile = FoodProfile::classify(Some("Arroz, frango ,pizza"), None, None);
        assert_eq!(
            profile.liked,
            HashSet::from([FoodItem::Rice, FoodItem::Chicken])
        );
        assert!(profile.disliked.is_empty());
    }

    #[test]
    fn test_restrictions_scan_free_text() {
        assert_eq!(
            DietaryRestriction::classify("Strict VEGAN, no nuts"),
            HashSet::from([DietaryRestriction::Vegetarian])
        );
        assert_eq!(
            DietaryRestriction::classify("sem glúten"),
            HashSet::from([DietaryRestriction::GlutenFree])
        );
        assert!(DietaryRestriction::classify("lactose intolerant").is_empty());
    }

    #[test]
    fn test_chicken_rules_are_exclusive() {
        let likes = FoodProfile::classify(Some("chicken"), Some("chicken"), None);
        let candidates = likes.candidates();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].starts_with("Great that you like chicken"));

        // Liking chicken but disliking fish skips the fish idea; the dislike
        // branch only fires when chicken itself is disliked.
        let no_fish = FoodProfile::classify(Some("chicken"), Some("fish"), None);
        assert!(no_fish.candidates().is_empty());

        let dislikes = FoodProfile::classify(None, Some("frango"), None);
        assert!(dislikes.candidates()[0].starts_with("If you don't like chicken"));
    }

    #[test]
    fn test_vegetarian_wins_over_gluten_free() {
        let profile = FoodProfile::classify(None, None, Some("vegetarian, gluten-free"));
        let candidates = profile.candidates();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].contains("vegetarian/vegan"));
    }

    #[test]
    fn test_independent_food_rules_accumulate() {
        let profile = FoodProfile::classify(Some("chicken,rice"), None, Some("gluten free"));
        assert_eq!(profile.candidates().len(), 3);
    }

    #[test]
    fn test_workout_rules() {
        let profile = WorkoutProfile::classify(Some("Força, yoga"), Some("manhã"));
        assert_eq!(profile.candidates().len(), 4);

        let cardio = WorkoutProfile::classify(Some("cardio"), Some("evening"));
        assert_eq!(cardio.candidates().len(), 1);
        assert_eq!(cardio.time, None);
    }

    #[test]
    fn test_missing_preferences_give_fixed_message() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_food_suggestions(&mut rng, None),
            vec![FOOD_PREFERENCES_MISSING.to_string()]
        );
        assert_eq!(
            generate_workout_suggestions(&mut rng, None),
            vec![WORKOUT_PREFERENCES_MISSING.to_string()]
        );
    }

    #[test]
    fn test_empty_preferences_use_fallback_pair() {
        let mut rng = StdRng::seed_from_u64(2);
        let prefs = preferences();

        let food = generate_food_suggestions(&mut rng, Some(&prefs));
        assert_eq!(food.len(), 2);
        assert!(food.iter().all(|s| FOOD_FALLBACK.contains(&s.as_str())));

        let workout = generate_workout_suggestions(&mut rng, Some(&prefs));
        assert_eq!(workout.len(), 2);
        assert!(workout.iter().all(|s| WORKOUT_FALLBACK.contains(&s.as_str())));
    }

    #[test]
    fn test_sample_is_bounded_and_drawn_from_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut prefs = preferences();
        prefs.preferred_workout_types = Some("strength,cardio,pilates".to_string());
        prefs.workout_time_preference = Some("Morning".to_string());
        let candidates = WorkoutProfile::from_preferences(&prefs).candidates();

        for _ in 0..25 {
            let picked = generate_workout_suggestions(&mut rng, Some(&prefs));
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|s| candidates.contains(&s.as_str())));
        }
    }

    #[test]
    fn test_single_candidate_returned_alone() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut prefs = preferences();
        prefs.liked_foods = Some("rice".to_string());

        let picked = generate_food_suggestions(&mut rng, Some(&prefs));
        assert_eq!(picked.len(), 1);
        assert!(picked[0].starts_with("Rice is a good carbohydrate source"));
    }
}
