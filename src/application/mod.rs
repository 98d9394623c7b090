// Application layer - the controller that front ends drive.
// Validation and accounting live in the domain; this layer wires them
// together and produces view models for the dashboard and history screens.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
