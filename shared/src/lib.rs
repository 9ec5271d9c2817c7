//! Shared types and models for the Crop Insurance Calculator
//!
//! This crate contains the premium and claim calculation core shared between
//! the backend, the browser form (via WASM), and other components of the system.

pub mod calculator;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use calculator::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
