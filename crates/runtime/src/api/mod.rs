//! Public runtime API surface.
//!
//! Collaborator contracts the pipeline drives (device, delays, camera) and the
//! types it reports back with.

pub mod camera;
pub mod delay;
pub mod device;
pub mod errors;
pub mod outcome;

pub use camera::CameraController;
pub use delay::{DelayProfile, DelayScheduler};
pub use device::InputDevice;
pub use errors::{DeviceError, DeviceOperation, Dismissal, InteractionError, Result};
pub use outcome::InteractionOutcome;
