//! Infrastructure layer implementing the domain's repository interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - Storage backends for the book catalog

pub mod persistence;
