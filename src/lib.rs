//! Suggests short, URL-safe identifiers from free-form text and checks them
//! against identifiers that are already stored.
//!
//! ```no_run
//! # async fn demo() -> suggest_id::domain::errors::DomainResult<()> {
//! use suggest_id::application::suggest;
//! use suggest_id::domain::identifier::GenerationConfig;
//! use suggest_id::infrastructure::repositories::InMemoryTakenIdentifierLookup;
//!
//! let config = GenerationConfig::builder()
//!     .target_field("url")
//!     .disposable_words(["school"])
//!     .suffix_template("-0000")
//!     .build()?;
//! let lookup = InMemoryTakenIdentifierLookup::new();
//! assert_eq!(suggest("My new school title", &config, &lookup).await?, "mynewtitle");
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
