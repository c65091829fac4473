//! Service layer: the solar-geodesic decision engine.
//!
//! Each module is a set of pure functions with no shared state. The
//! dependency order is leaf-first: [`geodesy`] and [`solar`] have no
//! internal dependencies, [`phases`] builds on [`solar`], [`decision`]
//! combines [`geodesy`] and [`solar`], [`stability`] resamples
//! [`decision`], and [`recommend`] orchestrates the whole pipeline.

pub mod decision;
pub mod geodesy;
pub mod phases;
pub mod recommend;
pub mod solar;
pub mod stability;

pub use recommend::recommend;
