// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_identifier;

pub use error::map_sqlx;
pub use memory::InMemoryTakenIdentifierLookup;
pub use postgres_identifier::PostgresTakenIdentifierLookup;
