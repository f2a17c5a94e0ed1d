//! Stateful collaborators around the pure planning core.
//!
//! This crate provides:
//! - [`ShotPlanStore`]: owns generated shot plans, command history and
//!   notifications, with an explicit hydrate/flush persistence lifecycle
//! - [`SimulationDataService`]: lazily materializes camera paths,
//!   compositions and scene simulations per shot plan over a JSON
//!   [`DocumentStore`]
//! - Store configuration and error types

pub mod config;
pub mod document_store;
pub mod error;
pub mod notifications;
pub mod simulation_data;
pub mod store;

pub use config::StoreConfig;
pub use document_store::DocumentStore;
pub use error::{StoreError, StoreResult};
pub use notifications::{Notification, NotificationLevel};
pub use simulation_data::SimulationDataService;
pub use store::ShotPlanStore;
