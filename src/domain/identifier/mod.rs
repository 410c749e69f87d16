pub mod config;
pub mod normalizer;
pub mod repository;
pub mod services;
pub mod suffix;
pub mod value_objects;

pub use config::{DisposableMode, GenerationConfig, GenerationConfigBuilder, GenerationOptions};
pub use normalizer::{Normalizer, normalize};
pub use repository::TakenIdentifierLookup;
pub use services::IdentifierResolver;
pub use suffix::increment;
pub use value_objects::{EntityType, SuggestInput, TargetField};
