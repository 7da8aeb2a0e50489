//! HTTP route handlers for the administrative API.
//!
//! # Route Structure
//!
//! ```text
//! # Directory (authenticated)
//! GET   /api/users              - Full user listing, newest first
//! GET   /api/users/directory    - Restricted fields: {id, email}
//! GET   /api/admins             - Up to 5 most recent ADMIN users
//!
//! # Directory (admin-only)
//! PATCH /api/users/{id}         - Update a user's role
//!
//! # Categories (public)
//! GET   /api/categories         - All categories, name ascending
//! POST  /api/categories         - Create a category
//!
//! # Statistics (public)
//! GET   /api/stats              - {coursesCount, studentsCount, enrollmentsCount}
//!
//! # Courses (guard enforced by the calling workflow)
//! GET   /api/courses/{id}       - Full editable course, 404 when absent
//!
//! # Documents (public)
//! POST  /api/documents/parse    - Extract text from an uploaded document
//! ```

pub mod categories;
pub mod courses;
pub mod documents;
pub mod stats;
pub mod users;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(users::list_users))
        .route("/api/users/directory", get(users::directory))
        .route("/api/users/{id}", patch(users::update_role))
        .route("/api/admins", get(users::list_admins))
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/api/stats", get(stats::get_stats))
        .route("/api/courses/{id}", get(courses::get_course))
        .route("/api/documents/parse", post(documents::parse_document))
}
