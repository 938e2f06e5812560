//! NodeNote launcher - create and open NodeNote graphs from the terminal.
//!
//! This crate lists the graphs known to the host, newest first, and drives a
//! modal form that picks a base directory and asks the host to create a new
//! graph there.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing config storage and the host adapter.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "nodenote";
