//! finnexus: configuration and first-run setup for the FinancialNexus
//! agentic AI stack (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod env;
pub mod setup;
