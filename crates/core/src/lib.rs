//! Core types and traits for clarify
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
pub mod env_config;
mod error;
mod turn;
mod validate;

pub use error::*;
pub use turn::*;
pub use validate::*;
