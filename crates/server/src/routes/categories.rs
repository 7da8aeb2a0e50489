//! Category handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use campus_core::CategoryId;

use crate::{db::CategoryRepository, error::AppError, models::Category, state::AppState};

/// Default icon for new categories.
const DEFAULT_ICON: &str = "Layout";
/// Default display color for new categories.
const DEFAULT_COLOR: &str = "#000000";

/// Category representation returned to clients.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            icon: category.icon,
            color: category.color,
        }
    }
}

/// Request body for category creation.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Validated category input with defaults applied.
///
/// Runs before any store access, so a rejected request never writes a row.
fn validate_input(body: CreateCategoryRequest) -> Result<(String, String, String), AppError> {
    let name = body
        .name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("name is required".to_owned()))?;

    let icon = body.icon.unwrap_or_else(|| DEFAULT_ICON.to_owned());
    let color = body.color.unwrap_or_else(|| DEFAULT_COLOR.to_owned());

    Ok((name, icon, color))
}

/// List all categories, sorted by name (public read).
///
/// # Errors
///
/// Returns 500 on store failure.
#[tracing::instrument(skip_all)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = CategoryRepository::new(state.pool()).list_all().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Create a category, applying icon/color defaults.
///
/// # Errors
///
/// Returns 400 for a missing or empty name, 409 for a duplicate name,
/// 500 on store failure.
#[tracing::instrument(skip_all)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let (name, icon, color) = validate_input(body)?;

    let category = CategoryRepository::new(state.pool())
        .create(&name, &icon, &color)
        .await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, icon: Option<&str>, color: Option<&str>) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.map(str::to_owned),
            icon: icon.map(str::to_owned),
            color: color.map(str::to_owned),
        }
    }

    #[test]
    fn test_validate_missing_name_rejected() {
        assert!(validate_input(request(None, None, None)).is_err());
    }

    #[test]
    fn test_validate_empty_name_rejected() {
        assert!(validate_input(request(Some(""), None, None)).is_err());
        assert!(validate_input(request(Some("   "), None, None)).is_err());
    }

    #[test]
    fn test_validate_applies_defaults() {
        let (name, icon, color) = validate_input(request(Some("Math"), None, None)).unwrap();
        assert_eq!(name, "Math");
        assert_eq!(icon, "Layout");
        assert_eq!(color, "#000000");
    }

    #[test]
    fn test_validate_keeps_explicit_values() {
        let (name, icon, color) =
            validate_input(request(Some(" Music "), Some("Mic"), Some("#ff8800"))).unwrap();
        assert_eq!(name, "Music");
        assert_eq!(icon, "Mic");
        assert_eq!(color, "#ff8800");
    }
}
