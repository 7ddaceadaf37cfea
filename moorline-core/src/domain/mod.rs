//! Core domain types
//!
//! This module contains the domain structures shared between the control
//! plane client and the provider engine: the composite pipeline identity and
//! the observed-state snapshot that reads produce.

pub mod pipeline;
