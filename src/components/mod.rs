//! UI Components for the Study Assistant frontend.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - document upload form with drag & drop
//! - [`ResultPanel`] - success/error message after an upload attempt
//! - [`ProgressBar`] - indeterminate activity indicator

mod header;
mod hero;
mod upload;
mod result;
mod progress;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use result::*;
pub use progress::*;
pub use footer::*;
