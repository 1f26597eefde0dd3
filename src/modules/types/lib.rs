//! Type definitions for the breed inquiry service
//!
//! This crate contains the wire types shared across the workspace: the breed
//! record, request/response envelopes, and the SQL connector types.

pub mod breed;
pub mod connector;
pub mod runtime;

pub use breed::Breed;
pub use connector::Connector;
