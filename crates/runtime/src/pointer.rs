//! Serialized access to the single pointer device.
//!
//! A physical pointer can only follow one path at a time. [`SharedPointer`]
//! wraps the device in a fair async mutex; an interaction holds the lease for
//! its whole duration so overlapping interactions queue instead of
//! interleaving their moves and clicks.
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::api::InputDevice;

/// Cloneable handle to one input device. Clones share the same lock.
#[derive(Clone)]
pub struct SharedPointer {
    device: Arc<Mutex<Box<dyn InputDevice>>>,
}

impl SharedPointer {
    pub fn new(device: impl InputDevice + 'static) -> Self {
        Self::from_boxed(Box::new(device))
    }

    pub fn from_boxed(device: Box<dyn InputDevice>) -> Self {
        Self {
            device: Arc::new(Mutex::new(device)),
        }
    }

    /// Waits for exclusive use of the device.
    pub async fn acquire(&self) -> PointerLease<'_> {
        PointerLease {
            guard: self.device.lock().await,
        }
    }

    /// Exclusive use of the device if nobody else holds it.
    pub fn try_acquire(&self) -> Option<PointerLease<'_>> {
        self.device.try_lock().ok().map(|guard| PointerLease { guard })
    }
}

/// Exclusive use of the pointer until dropped.
pub struct PointerLease<'a> {
    guard: MutexGuard<'a, Box<dyn InputDevice>>,
}

impl PointerLease<'_> {
    pub fn device(&self) -> &dyn InputDevice {
        &**self.guard
    }
}
