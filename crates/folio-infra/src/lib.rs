//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`.
//! Currently a single in-memory post store, seeded with sample posts.

pub mod store;

pub use store::InMemoryPostRepository;
