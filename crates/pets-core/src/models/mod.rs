//! Data models for pet records.
//!
//! - [`Pet`]: a stored row, as read back from the store
//! - [`PetValues`]: a partial record used as an insert/update payload, with
//!   per-field presence tracking through [`Field`]
//! - [`Filter`]: a parameterized predicate restricting which rows an
//!   operation touches
//! - [`ResultSet`]: materialized query output
//!
//! Display implementations for these models live in
//! [`crate::display::models`].

pub mod filter;
pub mod gender;
pub mod pet;
pub mod result_set;
pub mod values;


pub use filter::Filter;
pub use gender::Gender;
pub use pet::Pet;
pub use result_set::ResultSet;
pub use values::{Field, PetValues};
