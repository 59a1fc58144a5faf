//! # Folio Core
//!
//! The domain layer of the Folio blog service.
//! Holds the post model, the repository port, and the query, mutation and
//! export services built on top of it. No HTTP or storage code lives here.

pub mod domain;
pub mod error;
pub mod feed;
pub mod listing;
pub mod ports;
pub mod seo;
pub mod services;

pub use error::{DomainError, RepoError};
pub use services::{BlogService, ImportMode, ImportSummary};
