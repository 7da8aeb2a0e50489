//! External collaborators behind narrow interfaces.

pub mod extract;
pub mod identity;

pub use extract::{HttpTextExtractor, TextExtractor};
pub use identity::{HttpIdentityProvider, IdentityProvider};
