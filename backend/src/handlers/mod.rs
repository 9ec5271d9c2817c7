//! HTTP handlers for the Crop Insurance Calculator

mod health;
mod policy;

pub use health::*;
pub use policy::*;
