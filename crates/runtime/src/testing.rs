//! Scripted collaborators for tests and dry runs.
//!
//! [`FakeScene`] is a shared, mutable game-state accessor. [`RecordingDevice`]
//! records every pointer call and, when attached to a scene, opens the scene's
//! menu on a secondary click and closes it on the next click or dismiss key,
//! the way a real client reacts. [`InstantScheduler`] never sleeps and
//! [`ScriptedCamera`] reveals pre-arranged projections.
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use interaction_core::{
    CanvasPoint, EntityId, Hitbox, MenuEntry, MenuGeometry, MenuOracle, MenuWidget,
    ProjectionOracle, SceneBase, SceneCell, SceneOracle, Viewport, WorldPosition,
};

use crate::api::{
    CameraController, DelayProfile, DelayScheduler, DeviceError, DeviceOperation, InputDevice,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct SceneState {
    viewport: Option<Viewport>,
    projections: HashMap<WorldPosition, CanvasPoint>,
    base: Option<SceneBase>,
    stacks: HashMap<WorldPosition, Vec<EntityId>>,
    widget: Option<MenuWidget>,
    entries: Vec<MenuEntry>,
    geometry: MenuGeometry,
    menu_open: bool,
}

/// In-memory game state. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct FakeScene {
    state: Arc<Mutex<SceneState>>,
}

impl FakeScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(self, viewport: Viewport) -> Self {
        lock(&self.state).viewport = Some(viewport);
        self
    }

    pub fn with_projection(self, position: WorldPosition, point: CanvasPoint) -> Self {
        self.set_projection(position, point);
        self
    }

    pub fn with_scene_base(self, base: SceneBase) -> Self {
        lock(&self.state).base = Some(base);
        self
    }

    /// Entities on the tile at `position`, front-most first.
    pub fn with_stack(self, position: WorldPosition, stack: Vec<EntityId>) -> Self {
        lock(&self.state).stacks.insert(position, stack);
        self
    }

    /// Raw entries in storage (bottom-to-top) order.
    pub fn with_menu(self, geometry: MenuGeometry, entries: Vec<MenuEntry>) -> Self {
        {
            let mut state = lock(&self.state);
            state.geometry = geometry;
            state.entries = entries;
        }
        self
    }

    pub fn with_widget(self, widget: MenuWidget) -> Self {
        lock(&self.state).widget = Some(widget);
        self
    }

    pub fn set_projection(&self, position: WorldPosition, point: CanvasPoint) {
        lock(&self.state).projections.insert(position, point);
    }

    pub fn open_menu(&self) {
        lock(&self.state).menu_open = true;
    }

    pub fn close_menu(&self) {
        lock(&self.state).menu_open = false;
    }
}

impl ProjectionOracle for FakeScene {
    fn project(&self, position: WorldPosition) -> Option<CanvasPoint> {
        lock(&self.state).projections.get(&position).copied()
    }

    fn viewport(&self) -> Option<Viewport> {
        lock(&self.state).viewport
    }
}

impl SceneOracle for FakeScene {
    fn scene_base(&self) -> Option<SceneBase> {
        lock(&self.state).base
    }

    fn ground_stack(&self, cell: SceneCell) -> Option<Vec<EntityId>> {
        let state = lock(&self.state);
        let base = state.base?;
        let position = WorldPosition::new(base.base_x + cell.x, base.base_y + cell.y, cell.plane);
        state.stacks.get(&position).cloned()
    }
}

impl MenuOracle for FakeScene {
    fn menu_widget(&self) -> Option<MenuWidget> {
        let state = lock(&self.state);
        if state.menu_open {
            state.widget.clone()
        } else {
            None
        }
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        lock(&self.state).entries.clone()
    }

    fn menu_geometry(&self) -> MenuGeometry {
        lock(&self.state).geometry
    }

    fn is_menu_open(&self) -> bool {
        lock(&self.state).menu_open
    }
}

/// One call received by a [`RecordingDevice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCall {
    MoveTo(CanvasPoint),
    Click,
    RightClick(Hitbox),
    DismissKey,
}

impl DeviceCall {
    pub fn operation(&self) -> DeviceOperation {
        match self {
            DeviceCall::MoveTo(_) => DeviceOperation::Move,
            DeviceCall::Click => DeviceOperation::Click,
            DeviceCall::RightClick(_) => DeviceOperation::RightClick,
            DeviceCall::DismissKey => DeviceOperation::DismissKey,
        }
    }
}

impl fmt::Display for DeviceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceCall::MoveTo(point) => write!(f, "move to {}", point),
            DeviceCall::Click => write!(f, "click"),
            DeviceCall::RightClick(hitbox) => write!(f, "right click {}", hitbox),
            DeviceCall::DismissKey => write!(f, "dismiss key"),
        }
    }
}

/// Input device that records calls instead of driving hardware.
///
/// Clones share the call log. Calls of any operation passed to
/// [`RecordingDevice::failing_on`] fault and are not recorded; a
/// [`RecordingDevice::disconnected`] device faults on every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingDevice {
    calls: Arc<Mutex<Vec<DeviceCall>>>,
    scene: Option<FakeScene>,
    fail_on: HashSet<DeviceOperation>,
    disconnected: bool,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// A device whose clicks open and close `scene`'s menu.
    pub fn attached_to(scene: &FakeScene) -> Self {
        Self {
            scene: Some(scene.clone()),
            ..Self::default()
        }
    }

    /// Faults every call of `operation`. Chain to fail several operations.
    pub fn failing_on(mut self, operation: DeviceOperation) -> Self {
        self.fail_on.insert(operation);
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.disconnected = true;
        self
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        lock(&self.calls).clone()
    }

    async fn record(&self, call: DeviceCall) -> Result<(), DeviceError> {
        // Yield so concurrent callers get a chance to interleave.
        tokio::task::yield_now().await;

        if self.disconnected {
            return Err(DeviceError::Disconnected);
        }
        let operation = call.operation();
        if self.fail_on.contains(&operation) {
            return Err(DeviceError::fault(operation, "injected fault"));
        }
        lock(&self.calls).push(call);

        if let Some(scene) = &self.scene {
            match call {
                DeviceCall::RightClick(_) => scene.open_menu(),
                DeviceCall::Click | DeviceCall::DismissKey => scene.close_menu(),
                DeviceCall::MoveTo(_) => {}
            }
        }
        Ok(())
    }
}

#[async_trait]
impl InputDevice for RecordingDevice {
    async fn move_to(&self, point: CanvasPoint) -> Result<(), DeviceError> {
        self.record(DeviceCall::MoveTo(point)).await
    }

    async fn click(&self) -> Result<(), DeviceError> {
        self.record(DeviceCall::Click).await
    }

    async fn right_click(&self, hitbox: Hitbox) -> Result<(), DeviceError> {
        self.record(DeviceCall::RightClick(hitbox)).await
    }

    async fn press_dismiss_key(&self) -> Result<(), DeviceError> {
        self.record(DeviceCall::DismissKey).await
    }
}

/// Scheduler that records requested profiles and returns immediately.
#[derive(Debug, Clone, Default)]
pub struct InstantScheduler {
    sleeps: Arc<Mutex<Vec<DelayProfile>>>,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<DelayProfile> {
        lock(&self.sleeps).clone()
    }
}

#[async_trait]
impl DelayScheduler for InstantScheduler {
    async fn sleep(&self, profile: DelayProfile) {
        lock(&self.sleeps).push(profile);
        tokio::task::yield_now().await;
    }
}

/// Camera that makes pre-arranged tiles visible when asked.
#[derive(Debug, Clone)]
pub struct ScriptedCamera {
    scene: FakeScene,
    reveals: Arc<Mutex<HashMap<WorldPosition, CanvasPoint>>>,
    requests: Arc<Mutex<Vec<WorldPosition>>>,
}

impl ScriptedCamera {
    pub fn new(scene: &FakeScene) -> Self {
        Self {
            scene: scene.clone(),
            reveals: Arc::default(),
            requests: Arc::default(),
        }
    }

    /// After `ensure_visible(position)`, `position` projects to `point`.
    pub fn revealing(self, position: WorldPosition, point: CanvasPoint) -> Self {
        lock(&self.reveals).insert(position, point);
        self
    }

    pub fn requests(&self) -> Vec<WorldPosition> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl CameraController for ScriptedCamera {
    async fn ensure_visible(&self, position: WorldPosition) {
        lock(&self.requests).push(position);
        let revealed = lock(&self.reveals).get(&position).copied();
        if let Some(point) = revealed {
            self.scene.set_projection(position, point);
        }
    }
}
