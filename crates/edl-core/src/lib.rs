//! Core types and trait definitions for the engineering decision logger.
//!
//! This crate is deliberately free of database, filesystem and rendering
//! dependencies. Every other crate in the workspace depends on it.

pub mod decision;
pub mod error;
pub mod store;

pub use decision::{Decision, DecisionDraft, NewDecision, ProsCons};
pub use error::{Error, Result};
