//! Backend communication services.
//!
//! # Services
//!
//! - [`upload`] - document upload to the Study Assistant backend

pub mod upload;

pub use upload::*;
