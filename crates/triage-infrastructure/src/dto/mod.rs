//! Data Transfer Objects (DTOs) for external data.
//!
//! These DTOs mirror the on-disk shape of the paper metadata stream and are
//! private to the infrastructure layer; the rest of the workspace only sees
//! [`PaperRecord`](triage_core::paper::PaperRecord).

mod paper;

pub use paper::{PaperMetadataDto, SubmissionContentDto};
