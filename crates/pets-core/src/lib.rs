//! Core library for recording pets.
//!
//! This crate is the data layer behind the pets application: a single SQLite
//! table of pet records, addressed through URI-like identifiers and served by
//! four operations (query, insert, update, delete).
//!
//! # Layers
//!
//! - [`contract`]: table, column, and identifier constants plus the gender
//!   validity rule
//! - [`db`]: the storage adapter that opens the database and manages the
//!   schema version
//! - [`uri`]: parsing identifiers into [`PetUri::Collection`] or
//!   [`PetUri::Item`]
//! - [`provider`]: [`PetProvider`], the record access component
//! - [`notify`]: change notification after successful writes
//! - [`service`]: [`PetService`], an async facade for callers on a tokio
//!   runtime
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use pets_core::{contract::CONTENT_URI, ChangeBroadcaster, Database, PetProvider, PetValues};
//!
//! # fn example() -> Result<(), pets_core::PetError> {
//! let broadcaster = ChangeBroadcaster::new();
//! let mut changes = broadcaster.subscribe(pets_core::PetUri::Collection, true);
//! let mut provider = PetProvider::new(Database::open_in_memory()?, broadcaster.clone());
//!
//! let values = PetValues::new().name("Toto").breed("Terrier").gender(1).weight(7);
//! let uri = provider.insert(CONTENT_URI, values)?.expect("row stored");
//!
//! let pets = provider.query(&uri.to_string(), None, None, None)?.to_pets()?;
//! assert_eq!(pets[0].name, "Toto");
//! assert!(changes.try_next().is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod contract;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod provider;
pub mod service;
pub mod uri;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Pets, UpdateResult};
pub use error::{PetError, Result};
pub use models::{Field, Filter, Gender, Pet, PetValues, ResultSet};
pub use notify::{ChangeBroadcaster, ChangeNotifier, ChangeSubscription, NoopNotifier};
pub use provider::PetProvider;
pub use service::{PetService, PetServiceBuilder};
pub use uri::PetUri;
