//! Request guards for the administrative API.

pub mod auth;

pub use auth::{RequireAdmin, RequireAuth};
