//! Display formatting for pets and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes are formatted through the newtype
//! wrappers in [`collections`] and [`results`]. All output is markdown so the
//! CLI can render it richly or print it as plain text.
//!
//! ```rust
//! use pets_core::{
//!     display::{CreateResult, Pets},
//!     models::{Gender, Pet},
//! };
//!
//! let pet = Pet {
//!     id: 1,
//!     name: "Toto".to_string(),
//!     breed: "Terrier".to_string(),
//!     gender: Gender::Male,
//!     weight: 7,
//! };
//!
//! let created = format!("{}", CreateResult::new(pet.clone()));
//! assert!(created.starts_with("Created pet with ID: 1"));
//!
//! let listed = format!("{}", Pets(vec![pet]));
//! assert!(listed.contains("Toto"));
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::Pets;
pub use results::{CreateResult, DeleteResult, UpdateResult};
