//! Core engine module
//!
//! This module contains:
//! - The explorer aggregate owning state, fixtures and the region index
//! - Gesture dispatch into the selection operations

pub mod engine;
