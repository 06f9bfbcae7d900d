//! Selection and distance engine for a map-based explorer of Austrian
//! locations
//!
//! The crate is an in-process state machine: a renderer draws the map and
//! lists from the state held here and forwards user gestures back in as
//! [`Msg`] values. It keeps the region filter, the highlighted entity, the
//! active view and the distance endpoints consistent, and computes
//! great-circle distances with walking/running estimates.

pub mod config;
pub mod core;
pub mod distance;
pub mod domain;
pub mod error;
pub mod geo;
pub mod region;
pub mod repository;
pub mod session;

pub use crate::core::engine::Explorer;
pub use crate::session::messages::Msg;
