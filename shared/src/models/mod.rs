//! Domain models for the Crop Insurance Calculator

mod claim;
mod crop;
mod policy;

pub use claim::*;
pub use crop::*;
pub use policy::*;
