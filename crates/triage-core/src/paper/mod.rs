//! Paper domain module.
//!
//! This module contains the paper record model and the repository interface
//! the review session reads records from.
//!
//! # Module Structure
//!
//! - `model`: Immutable paper record (`PaperRecord`)
//! - `repository`: Repository trait for loading accepted papers
//!
//! # Usage
//!
//! ```ignore
//! use triage_core::paper::{PaperRecord, PaperRepository};
//! ```

mod model;
mod repository;

// Re-export public API
pub use model::PaperRecord;
pub use repository::PaperRepository;

#[cfg(test)]
pub(crate) use model::sample;
