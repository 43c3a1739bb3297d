use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{DietPlan, DietPlanMeal, WorkoutExercise, WorkoutPlan, WorkoutPlanDay};
use crate::services::plan_generation::{DietPlanDraft, GeneratedPlan, WorkoutPlanDraft};

const DIET_PLAN_COLUMNS: &str = "diet_plan_id, user_id, start_date, end_date, daily_calories, \
     daily_protein_g, daily_carbs_g, daily_fat_g, is_active, created_at";

const WORKOUT_PLAN_COLUMNS: &str =
    "workout_plan_id, user_id, start_date, end_date, days_per_week, description, is_active, created_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredPlanIds {
    pub diet_plan_id: Uuid,
    pub workout_plan_id: Uuid,
}

/// Active workout plan with its days and their ordered exercises
#[derive(Debug, Clone)]
pub struct WorkoutPlanWithDays {
    pub plan: WorkoutPlan,
    pub days: Vec<(WorkoutPlanDay, Vec<WorkoutExercise>)>,
}

pub struct PlanRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlanRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Deactivates the user's current plans and inserts the new ones as a
    /// single unit. On any failure the transaction is dropped uncommitted and
    /// the previous plans stay active.
    pub async fn replace_active_plans(
        &self,
        user_id: Uuid,
        plan: &GeneratedPlan,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<StoredPlanIds> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE diet_plans SET is_active = false WHERE user_id = $1 AND is_active")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE workout_plans SET is_active = false WHERE user_id = $1 AND is_active")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let diet_plan_id =
            insert_diet_plan(&mut tx, user_id, &plan.diet_plan, start_date, end_date).await?;
        let workout_plan_id =
            insert_workout_plan(&mut tx, user_id, &plan.workout_plan, start_date, end_date)
                .await?;

        tx.commit().await?;

        Ok(StoredPlanIds {
            diet_plan_id,
            workout_plan_id,
        })
    }

    pub async fn find_active_diet_plan(&self, user_id: Uuid) -> Result<DietPlan> {
        let query = format!(
            "SELECT {DIET_PLAN_COLUMNS} FROM diet_plans WHERE user_id = $1 AND is_active LIMIT 1"
        );

        sqlx::query_as::<_, DietPlan>(&query)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn list_diet_plan_meals(&self, diet_plan_id: Uuid) -> Result<Vec<DietPlanMeal>> {
        let meals = sqlx::query_as::<_, DietPlanMeal>(
            r#"
            SELECT meal_id, diet_plan_id, day_of_week, meal_name, description,
                   calories, protein_g, carbs_g, fat_g, suggested_time
            FROM diet_plan_meals
            WHERE diet_plan_id = $1
            ORDER BY day_of_week, suggested_time
            "#,
        )
        .bind(diet_plan_id)
        .fetch_all(self.pool)
        .await?;

        Ok(meals)
    }

    pub async fn find_active_workout_plan(&self, user_id: Uuid) -> Result<WorkoutPlanWithDays> {
        let query = format!(
            "SELECT {WORKOUT_PLAN_COLUMNS} FROM workout_plans WHERE user_id = $1 AND is_active LIMIT 1"
        );

        let plan = sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        let days = sqlx::query_as::<_, WorkoutPlanDay>(
            r#"
            SELECT day_id, workout_plan_id, day_of_week, focus
            FROM workout_plan_days
            WHERE workout_plan_id = $1
            ORDER BY day_of_week
            "#,
        )
        .bind(plan.workout_plan_id)
        .fetch_all(self.pool)
        .await?;

        let exercises = sqlx::query_as::<_, WorkoutExercise>(
            r#"
            SELECT e.exercise_id, e.day_id, e.position, e.exercise_name, e.sets, e.reps
            FROM workout_exercises e
            JOIN workout_plan_days d ON d.day_id = e.day_id
            WHERE d.workout_plan_id = $1
            ORDER BY d.day_of_week, e.position
            "#,
        )
        .bind(plan.workout_plan_id)
        .fetch_all(self.pool)
        .await?;

        let days = days
            .into_iter()
            .map(|day| {
                let day_exercises = exercises
                    .iter()
                    .filter(|e| e.day_id == day.day_id)
                    .cloned()
                    .collect();
                (day, day_exercises)
            })
            .collect();

        Ok(WorkoutPlanWithDays { plan, days })
    }
}

async fn insert_diet_plan(
    conn: &mut PgConnection,
    user_id: Uuid,
    draft: &DietPlanDraft,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Uuid> {
    let diet_plan_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO diet_plans (user_id, start_date, end_date, daily_calories,
                                daily_protein_g, daily_carbs_g, daily_fat_g, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, true)
        RETURNING diet_plan_id
        "#,
    )
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .bind(draft.budget.target_calories)
    .bind(draft.budget.protein_g)
    .bind(draft.budget.carbs_g)
    .bind(draft.budget.fat_g)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        StorageError::from(e)
            .with_constraint_message("An active diet plan already exists for this user")
    })?;

    for (day_of_week, meal) in draft.weekly_meals() {
        sqlx::query(
            r#"
            INSERT INTO diet_plan_meals (diet_plan_id, day_of_week, meal_name, description,
                                         calories, protein_g, carbs_g, fat_g, suggested_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(diet_plan_id)
        .bind(day_of_week)
        .bind(&meal.meal_name)
        .bind(&meal.description)
        .bind(meal.calories)
        .bind(meal.protein_g)
        .bind(meal.carbs_g)
        .bind(meal.fat_g)
        .bind(&meal.suggested_time)
        .execute(&mut *conn)
        .await?;
    }

    Ok(diet_plan_id)
}

async fn insert_workout_plan(
    conn: &mut PgConnection,
    user_id: Uuid,
    draft: &WorkoutPlanDraft,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Uuid> {
    let workout_plan_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO workout_plans (user_id, start_date, end_date, days_per_week, description, is_active)
        VALUES ($1, $2, $3, $4, $5, true)
        RETURNING workout_plan_id
        "#,
    )
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .bind(draft.days_per_week)
    .bind(&draft.description)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        StorageError::from(e)
            .with_constraint_message("An active workout plan already exists for this user")
    })?;

    for day in &draft.days {
        let day_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO workout_plan_days (workout_plan_id, day_of_week, focus)
            VALUES ($1, $2, $3)
            RETURNING day_id
            "#,
        )
        .bind(workout_plan_id)
        .bind(day.day_of_week)
        .bind(&day.focus)
        .fetch_one(&mut *conn)
        .await?;

        for (position, exercise) in day.exercises.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO workout_exercises (day_id, position, exercise_name, sets, reps)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(day_id)
            .bind(position as i32)
            .bind(&exercise.exercise_name)
            .bind(exercise.sets)
            .bind(&exercise.reps)
            .execute(&mut *conn)
            .await?;
        }
    }

    Ok(workout_plan_id)
}
