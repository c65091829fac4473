//! # Scenic Seat Backend
//!
//! Solar-geodesic window-seat recommendation engine.
//!
//! This crate answers one question: for a given flight (origin, destination,
//! local departure time) and a traveler interested in the sunrise or the
//! sunset, which side of the cabin — LEFT, RIGHT, or EITHER — offers the
//! better view? The engine combines the flight's initial great-circle
//! bearing with the sun's azimuth at departure, classifies the signed
//! relative angle into a side/confidence recommendation, derives the civil
//! dawn/sunrise/sunset/civil dusk phase times for the departure date, and
//! reports how stable the recommendation is across a ±3-hour departure
//! window. The REST API is exposed via Axum for the frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for the frozen wire contract
//! - [`models`]: Validated domain types (geographic points, flight requests)
//! - [`services`]: The engine itself — geodesy, solar position, phase
//!   times, decision policy, stability, and the orchestrator
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Concurrency
//!
//! Every engine function is pure, synchronous, and request-scoped: no shared
//! mutable state, no I/O, no caches. The engine may be called from any
//! number of threads without coordination; the HTTP layer owns timeouts.

pub mod api;
pub mod error;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
