//! Shared newtype wrappers.

pub mod email;
pub mod id;
pub mod role;

pub use email::{Email, EmailError};
pub use id::{CategoryId, CourseId, EnrollmentId, UserId};
pub use role::UserRole;
