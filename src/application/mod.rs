pub mod error;
pub mod registry;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use registry::GenerationRegistry;
pub use services::{IdentifierSuggestionService, suggest, suggest_json};
