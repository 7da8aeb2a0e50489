//! Aggregate statistics handler.

use axum::{Json, extract::State};
use serde::Serialize;

use campus_core::UserRole;

use crate::{
    db::{CourseRepository, EnrollmentRepository, UserRepository},
    error::AppError,
    state::AppState,
};

/// Dashboard counters.
///
/// Revenue is deliberately absent: computing it would need a join over
/// purchases that this endpoint must never pay for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub courses_count: i64,
    pub students_count: i64,
    pub enrollments_count: i64,
}

/// Return total courses, USER-role users, and total enrollments (public
/// read). Three cheap counts, no joins.
///
/// # Errors
///
/// Returns 500 on store failure.
#[tracing::instrument(skip_all)]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let pool = state.pool();

    let course_repo = CourseRepository::new(pool);
    let user_repo = UserRepository::new(pool);
    let enrollment_repo = EnrollmentRepository::new(pool);

    let (courses_count, students_count, enrollments_count) = tokio::try_join!(
        course_repo.count(),
        user_repo.count_by_role(UserRole::User),
        enrollment_repo.count(),
    )?;

    Ok(Json(StatsResponse {
        courses_count,
        students_count,
        enrollments_count,
    }))
}
