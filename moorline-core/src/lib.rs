//! Moorline Core
//!
//! Core types and abstractions for the Moorline pipeline manager.
//!
//! This crate contains:
//! - Domain types: pipeline identity and observed pipeline state
//! - DTOs: payloads exchanged with the control plane
//! - Config handling: format tags, JSON/YAML conversion, canonicalization

pub mod config;
pub mod domain;
pub mod dto;
