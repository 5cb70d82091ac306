//! Core types for the spgraph workspace.
//!
//! This crate defines the shared values passed between the Graph client and
//! its callers: credentials, the bearer token, drive and entry models, and
//! the error type every operation returns.

pub mod credentials;
pub mod error;
pub mod model;
pub mod token;

pub use credentials::Credentials;
pub use error::{GraphError, Result};
pub use model::{Drive, DriveEntry, EntryFilter, EntryKind};
pub use token::GraphToken;
