//! Core domain logic for the breed inquiry service
//!
//! This crate contains the search filter, the parameterized statement builder,
//! the configuration model, and the error type shared by every other crate.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::BreedInquiryError;
