//! # anitrack-core
//!
//! Canonical anime records, error types and the failure taxonomy shared by
//! the anitrack content aggregator.

pub mod error;
pub mod types;

pub use error::{Error, FailureKind, HttpError, Result};
pub use types::*;
