//! Explorer session module
//!
//! This module contains:
//! - Session selection state and its mutation operations
//! - Message types for renderer gestures

pub mod messages;
pub mod state;
