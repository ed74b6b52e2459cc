//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod flavor_repo;

pub use flavor_repo::FlavorRepo;
