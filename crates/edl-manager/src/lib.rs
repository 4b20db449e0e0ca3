//! Decision manager: the one entry point callers use.
//!
//! Composes a [`DecisionStore`](edl_core::store::DecisionStore) with the ADR
//! renderer. Creating a decision is a two-step protocol (insert, then write
//! the document) and the two steps are not atomic together; see
//! [`Error::DocumentNotWritten`].

mod config;
mod manager;

pub mod error;

pub use config::ManagerConfig;
pub use error::{Error, Result};
pub use manager::DecisionManager;
