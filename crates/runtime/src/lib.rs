//! Async orchestration of humanized game interactions.
//!
//! This crate drives the decisions made by `interaction-core` through an input
//! device, a delay scheduler and an optional camera. Consumers build an
//! [`Interactor`] and hand it [`interaction_core::Target`]s; every interaction
//! resolves to an [`InteractionOutcome`].
//!
//! Modules are organized by responsibility:
//! - [`interactor`] hosts the orchestrator and builder
//! - [`api`] exposes the collaborator traits and result types
//! - [`pointer`] serializes access to the shared input device
//! - [`scheduler`] provides the tokio-backed humanized delay scheduler
//! - [`config`] loads interactor configuration from the environment
//! - [`testing`] provides scripted collaborators for tests and dry runs
pub mod api;
pub mod config;
pub mod interactor;
pub mod pointer;
pub mod scheduler;
pub mod testing;

mod interaction;

pub use api::{
    CameraController, DelayProfile, DelayScheduler, DeviceError, DeviceOperation, Dismissal,
    InputDevice, InteractionError, InteractionOutcome, Result,
};
pub use config::InteractorConfig;
pub use interactor::{Interactor, InteractorBuilder};
pub use pointer::{PointerLease, SharedPointer};
pub use scheduler::{DelaySpec, ProfileDelayScheduler};
