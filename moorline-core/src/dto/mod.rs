//! Data transfer objects for control plane communication
//!
//! This module contains the payload types exchanged with the control plane
//! API: desired-state submissions going up, and lookup / config / upload
//! responses coming back.

pub mod pipeline;
