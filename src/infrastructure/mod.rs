//! Infrastructure layer
//!
//! Concrete implementations of the domain ports: configuration loading
//! and PostgreSQL-backed repositories.

pub mod config;
pub mod persistence;
