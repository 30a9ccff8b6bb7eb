//! Adapters layer
//!
//! Thin translations between the outside world and the application layer.
//! The HTTP adapter maps transport concerns (routing, status codes,
//! requester resolution) onto use cases; no business rules live here.

pub mod http;
