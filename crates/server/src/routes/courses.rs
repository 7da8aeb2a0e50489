//! Course read handlers (authoring workflow).

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use campus_core::{CategoryId, CourseId};

use crate::{db::CourseRepository, error::AppError, models::Course, state::AppState};

/// Full editable course representation for the authoring UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: CourseId,
    pub owner_auth_id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<Decimal>,
    pub is_published: bool,
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            owner_auth_id: course.owner_auth_id,
            title: course.title,
            description: course.description,
            image_url: course.image_url,
            price: course.price,
            is_published: course.is_published,
            category_id: course.category_id,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Fetch a course for editing.
///
/// The caller's page layout enforces the admin guard; an absent course is a
/// distinct 404 so the workflow can render its own "not found" state.
///
/// # Errors
///
/// Returns 404 for an unknown course, 500 on store failure.
#[tracing::instrument(skip_all, fields(course = %id))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = CourseRepository::new(state.pool())
        .get_by_id(CourseId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {id}")))?;

    Ok(Json(course.into()))
}
