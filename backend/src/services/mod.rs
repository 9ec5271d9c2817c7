//! Business logic services for the Crop Insurance Calculator

pub mod policy;

pub use policy::PolicyService;
