//! Core library modules for gplan.
//!
//! - **Models**: [`project::Project`] and [`task::Task`] value objects
//! - **Infrastructure**: configuration, data directory, error types, messaging
//! - **Presentation**: table rendering in [`view`]

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod project;
pub mod task;
pub mod version;
pub mod view;
