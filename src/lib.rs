//! Taproom: a beer catalog and account service.
//!
//! The domain layer holds the business rules (identity uniqueness,
//! ownership-gated mutations, the in-memory beer query pipeline); the
//! application layer wraps them in use cases; adapters translate HTTP to
//! use-case calls; infrastructure provides configuration and the
//! PostgreSQL repositories behind the domain ports.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
