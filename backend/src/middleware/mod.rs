//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route.

pub mod trace;

pub use trace::Trace;
