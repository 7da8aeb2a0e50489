//! Domain types for the administrative API.

pub mod category;
pub mod course;
pub mod user;

pub use category::Category;
pub use course::Course;
pub use user::{AuthIdentity, User};
