//! HTTP server module for the scenic-seat backend.
//!
//! Axum-based REST surface over the pure engine. The HTTP layer owns
//! request parsing, JSON serialization, CORS/compression/tracing
//! middleware, and the mapping of engine errors onto the frozen error
//! payload; all business logic lives in [`crate::services`].

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub use router::create_router;
